use crate::core::{Delivery, Invocation, Pipeline};
use crate::utils::error::Result;

/// Runs one invocation: classify the target, retrieve it, emit it.
/// Stops at the first failure.
pub struct Dispatcher<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Dispatcher<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, invocation: &Invocation) -> Result<Delivery> {
        let target = invocation.classify();
        let destination = invocation.destination();
        tracing::debug!(
            "Dispatching {} target {} to {:?}",
            if target.is_remote() { "remote" } else { "local" },
            target,
            destination
        );

        let content = self.pipeline.retrieve(&target).await?;
        tracing::debug!("Retrieved {} bytes", content.len());

        let delivery = self.pipeline.emit(content, &destination).await?;
        tracing::debug!("Delivered: {:?}", delivery);

        Ok(delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Content, Destination, Target};
    use crate::utils::error::CatError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Records every call so the tests can check the order of stages.
    #[derive(Clone, Default)]
    struct RecordingPipeline {
        calls: Arc<Mutex<Vec<String>>>,
        fail_retrieve: bool,
        fail_emit: bool,
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        async fn retrieve(&self, target: &Target) -> Result<Content> {
            self.calls.lock().await.push(format!("retrieve {}", target));
            if self.fail_retrieve {
                return Err(CatError::ReadError {
                    path: target.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                });
            }
            Ok(Content::new(target.clone(), "payload".to_string()))
        }

        async fn emit(&self, content: Content, destination: &Destination) -> Result<Delivery> {
            self.calls.lock().await.push(format!("emit {:?}", destination));
            if self.fail_emit {
                return Err(CatError::WriteError {
                    path: "out.txt".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok(match destination {
                Destination::Stdout => Delivery::Printed {
                    bytes: content.len(),
                },
                Destination::File(path) => Delivery::Written {
                    path: path.clone(),
                    bytes: content.len(),
                },
            })
        }
    }

    #[tokio::test]
    async fn test_run_file_to_stdout() {
        let pipeline = RecordingPipeline::default();
        let dispatcher = Dispatcher::new(pipeline.clone());

        let delivery = dispatcher
            .run(&Invocation::new("./hello.txt", None))
            .await
            .unwrap();

        assert_eq!(delivery, Delivery::Printed { bytes: 7 });
        assert_eq!(
            *pipeline.calls.lock().await,
            vec!["retrieve ./hello.txt".to_string(), "emit Stdout".to_string()]
        );
    }

    #[tokio::test]
    async fn test_run_url_to_file() {
        let pipeline = RecordingPipeline::default();
        let dispatcher = Dispatcher::new(pipeline.clone());
        let invocation = Invocation::new("https://example.com", Some(PathBuf::from("out.html")));

        let delivery = dispatcher.run(&invocation).await.unwrap();

        assert_eq!(
            delivery,
            Delivery::Written {
                path: PathBuf::from("out.html"),
                bytes: 7
            }
        );
        assert_eq!(pipeline.calls.lock().await[0], "retrieve https://example.com");
    }

    #[tokio::test]
    async fn test_run_stops_after_failed_retrieval() {
        let pipeline = RecordingPipeline {
            fail_retrieve: true,
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(pipeline.clone());

        let err = dispatcher
            .run(&Invocation::new("missing.txt", Some(PathBuf::from("out.txt"))))
            .await
            .unwrap_err();

        assert!(matches!(err, CatError::ReadError { .. }));
        assert_eq!(pipeline.calls.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_run_reports_failed_emit() {
        let pipeline = RecordingPipeline {
            fail_emit: true,
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(pipeline.clone());

        let err = dispatcher
            .run(&Invocation::new("hello.txt", Some(PathBuf::from("out.txt"))))
            .await
            .unwrap_err();

        assert!(matches!(err, CatError::WriteError { .. }));
        assert_eq!(pipeline.calls.lock().await.len(), 2);
    }
}
