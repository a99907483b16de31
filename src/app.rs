//! Process boundary: turns arguments into an invocation, runs it, and maps
//! the outcome to a process exit status. Nothing below this module touches the
//! process exit code or prints error messages.

use crate::adapters::{HttpFetcher, LocalStorage, StdoutConsole};
use crate::config::CliConfig;
use crate::core::dispatcher::Dispatcher;
use crate::core::pipeline::CatPipeline;
use crate::core::{Delivery, Invocation, Pipeline};
use crate::utils::logger;
use crate::utils::validation::Validate;
use clap::Parser;
use std::ffi::OsString;

pub const SUCCESS: u8 = 0;

/// Parses `args` (program name first) and runs them. This is the binary's
/// only entry point.
pub async fn run<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliConfig::try_parse_from(args) {
        Ok(config) => {
            logger::init_cli_logger();
            execute(&config).await
        }
        Err(e) => {
            // Usage goes to stderr.
            let _ = e.print();
            e.exit_code() as u8
        }
    }
}

pub async fn execute(config: &CliConfig) -> u8 {
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::debug!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        return e.exit_code();
    }

    let pipeline = CatPipeline::new(
        LocalStorage::new(),
        HttpFetcher::new(),
        StdoutConsole::stdout(),
    );
    let dispatcher = Dispatcher::new(pipeline);

    dispatch(&dispatcher, &Invocation::from_config(config)).await
}

pub async fn dispatch<P: Pipeline>(dispatcher: &Dispatcher<P>, invocation: &Invocation) -> u8 {
    match dispatcher.run(invocation).await {
        Ok(Delivery::Printed { bytes }) => {
            tracing::info!("Printed {} bytes from {}", bytes, invocation.target);
            SUCCESS
        }
        Ok(Delivery::Written { path, bytes }) => {
            tracing::info!(
                "Wrote {} bytes from {} to {}",
                bytes,
                invocation.target,
                path.display()
            );
            SUCCESS
        }
        Err(e) => {
            tracing::debug!(
                "Invocation failed (Category: {:?}): {:?}",
                e.category(),
                e
            );
            tracing::info!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}
