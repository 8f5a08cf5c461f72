use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidResourceUrl(String),
    InvalidHex(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidResourceUrl(url) => {
                write!(f, "resource url has no id segment: {url}")
            }
            ModelError::InvalidHex(raw) => write!(f, "invalid hex color: {raw}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
