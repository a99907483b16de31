use std::fmt;
use std::path::{Path, PathBuf};

const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];

/// What the user asked for: one target, and optionally a file to copy it into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: String,
    pub output_path: Option<PathBuf>,
}

impl Invocation {
    pub fn new(target: impl Into<String>, output_path: Option<PathBuf>) -> Self {
        Self {
            target: target.into(),
            output_path,
        }
    }

    pub fn from_config<C: crate::domain::ports::ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.target(), config.output_path().map(Path::to_path_buf))
    }

    pub fn classify(&self) -> Target {
        Target::classify(&self.target)
    }

    pub fn destination(&self) -> Destination {
        match &self.output_path {
            Some(path) => Destination::File(path.clone()),
            None => Destination::Stdout,
        }
    }
}

/// Where content is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local(PathBuf),
    Remote(String),
}

impl Target {
    /// Literal, case-sensitive prefix test. Anything that does not start with
    /// `http://` or `https://` is a local path, and anything that does is
    /// remote even if it is not a well-formed URL.
    pub fn classify(raw: &str) -> Self {
        if REMOTE_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
            Target::Remote(raw.to_string())
        } else {
            Target::Local(PathBuf::from(raw))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Target::Remote(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Local(path) => write!(f, "{}", path.display()),
            Target::Remote(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub origin: Target,
    pub text: String,
}

impl Content {
    pub fn new(origin: Target, text: String) -> Self {
        Self { origin, text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Outcome of the emit step. Byte counts exclude the newline added on print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Printed { bytes: usize },
    Written { path: PathBuf, bytes: usize },
}
