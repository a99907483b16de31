pub mod dispatcher;
pub mod pipeline;

pub use crate::domain::model::{Content, Delivery, Destination, Invocation, Target};
pub use crate::domain::ports::{ConfigProvider, Console, Fetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
