use crate::domain::model::{Content, Delivery, Destination, Target};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_to_string(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_string(
        &self,
        path: &Path,
        contents: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Standard output. `print` appends the trailing newline.
pub trait Console: Send + Sync {
    fn print(&self, text: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn target(&self) -> &str;
    fn output_path(&self) -> Option<&Path>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn retrieve(&self, target: &Target) -> Result<Content>;
    async fn emit(&self, content: Content, destination: &Destination) -> Result<Delivery>;
}
