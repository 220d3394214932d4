use std::path::PathBuf;

use folio_model::{Collection, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content collection {collection} not found at {}", .path.display())]
    MissingCollection {
        collection: Collection,
        path: PathBuf,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid record {}: {source}", .path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}
