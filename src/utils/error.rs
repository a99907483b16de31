use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("Error reading {path}:\n  {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error fetching {url}:\n  {message}")]
    FetchError { url: String, message: String },

    #[error("Couldn't write to {path}:\n  {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Output,
    Configuration,
}

impl CatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatError::ReadError { .. } => ErrorCategory::Input,
            CatError::FetchError { .. } => ErrorCategory::Network,
            CatError::WriteError { .. } => ErrorCategory::Output,
            CatError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit status for this failure. Usage problems share clap's code.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatError::ReadError { .. } => {
                "Check that the file exists, is readable and contains UTF-8 text"
            }
            CatError::FetchError { .. } => {
                "Check the URL and your network connection; the server must answer with a 2xx status"
            }
            CatError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            CatError::InvalidConfigValueError { .. } => "Run with --help to see the expected usage",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatError>;
