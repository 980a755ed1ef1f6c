//! Printer output modes

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the host wants the printer's result delivered: a downloadable file,
/// or an inline link in wiki or HTML markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    File,
    Wiki,
    Html,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown output mode: {0}")]
pub struct OutputModeError(pub String);

impl FromStr for OutputMode {
    type Err = OutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "wiki" => Ok(Self::Wiki),
            "html" => Ok(Self::Html),
            other => Err(OutputModeError(other.to_string())),
        }
    }
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Wiki => "wiki",
            Self::Html => "html",
        }
    }
}
