use crate::core::Storage;
use crate::utils::error::{CatError, Result};
use std::path::Path;

/// Filesystem access relative to the working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tracing::debug!("Reading file: {}", path.display());
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatError::ReadError {
                path: path.display().to_string(),
                source,
            })
    }

    // Creates or truncates; missing parent directories are an error.
    async fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        tracing::debug!("Writing {} bytes to: {}", contents.len(), path.display());
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| CatError::WriteError {
                path: path.display().to_string(),
                source,
            })
    }
}
