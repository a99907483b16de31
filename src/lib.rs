pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpFetcher, LocalStorage, StdoutConsole, WriterConsole};
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{dispatcher::Dispatcher, pipeline::CatPipeline};
pub use crate::domain::model::{Content, Delivery, Destination, Invocation, Target};
pub use crate::utils::error::{CatError, Result};
