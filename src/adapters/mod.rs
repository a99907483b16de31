// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod http;
pub mod storage;

pub use console::{StdoutConsole, WriterConsole};
pub use http::HttpFetcher;
pub use storage::LocalStorage;
