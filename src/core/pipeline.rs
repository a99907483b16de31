use crate::core::{Console, Content, Delivery, Destination, Fetcher, Pipeline, Storage, Target};
use crate::utils::error::Result;

/// Reads from the filesystem or the network and writes to stdout or a file.
pub struct CatPipeline<S: Storage, F: Fetcher, C: Console> {
    storage: S,
    fetcher: F,
    console: C,
}

impl<S: Storage, F: Fetcher, C: Console> CatPipeline<S, F, C> {
    pub fn new(storage: S, fetcher: F, console: C) -> Self {
        Self {
            storage,
            fetcher,
            console,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: Fetcher, C: Console> Pipeline for CatPipeline<S, F, C> {
    async fn retrieve(&self, target: &Target) -> Result<Content> {
        let text = match target {
            Target::Local(path) => self.storage.read_to_string(path).await?,
            Target::Remote(url) => self.fetcher.fetch(url).await?,
        };

        tracing::debug!("Retrieved {} bytes from {}", text.len(), target);
        Ok(Content::new(target.clone(), text))
    }

    async fn emit(&self, content: Content, destination: &Destination) -> Result<Delivery> {
        let bytes = content.len();

        match destination {
            Destination::Stdout => {
                self.console.print(&content.text).await?;
                Ok(Delivery::Printed { bytes })
            }
            Destination::File(path) => {
                self.storage.write_string(path, &content.text).await?;
                Ok(Delivery::Written {
                    path: path.clone(),
                    bytes,
                })
            }
        }
    }
}
