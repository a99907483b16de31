use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

/// `--out` is only an option in first position. Once the target is seen the
/// rest of the line is swallowed, and any leading `-` text is a file name.
#[derive(Debug, Clone, Parser)]
#[command(name = "webcat")]
#[command(about = "Print a local file or a URL, or copy it into a file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Write the content to this file instead of standard output
    #[arg(long = "out", value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub out: Option<PathBuf>,

    /// File path, or a URL starting with http:// or https://
    #[arg(
        value_name = "TARGET",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub operands: Vec<String>,
}

impl CliConfig {
    pub fn new(target: impl Into<String>, out: Option<PathBuf>) -> Self {
        Self {
            out,
            operands: vec![target.into()],
        }
    }
}

impl ConfigProvider for CliConfig {
    fn target(&self) -> &str {
        self.operands.first().map(String::as_str).unwrap_or_default()
    }

    fn output_path(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("target", self.target())?;

        if let Some(out) = &self.out {
            validate_path("out", &out.to_string_lossy())?;
        }

        Ok(())
    }
}
