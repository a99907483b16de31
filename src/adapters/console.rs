use crate::core::Console;
use crate::utils::error::{CatError, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

const STDOUT_NAME: &str = "<stdout>";

pub struct WriterConsole<W> {
    writer: Mutex<W>,
}

pub type StdoutConsole = WriterConsole<tokio::io::Stdout>;

impl<W> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl StdoutConsole {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> Console for WriterConsole<W> {
    async fn print(&self, text: &str) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await.map_err(stdout_error)?;
        writer.write_all(b"\n").await.map_err(stdout_error)?;
        writer.flush().await.map_err(stdout_error)
    }
}

fn stdout_error(source: std::io::Error) -> CatError {
    CatError::WriteError {
        path: STDOUT_NAME.to_string(),
        source,
    }
}
