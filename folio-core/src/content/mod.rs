//! Content collections for the showcase shelves.
//!
//! Each collection is a directory of record files under a content root, one
//! record per `*.toml` or `*.json` file. Front matter keys sit at the top level
//! of the file and the body, if any, under `body`.

pub mod error;
pub mod loader;

pub use error::ContentError;
pub use loader::{ContentLibrary, ContentLoader, RECORD_EXTENSIONS};
