use std::fmt::{self, Display};

/// Errors produced by record constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidSlug(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidSlug(slug) => {
                write!(f, "invalid record slug: {slug:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
