use std::process::ExitCode;
use webcat::app;

#[tokio::main]
async fn main() -> ExitCode {
    ExitCode::from(app::run(std::env::args_os()).await)
}
