//! Content records shared across the Folio showcase crates.
//!
//! Records are produced by the content loader in `folio-core` and consumed by
//! the showcase shelves as opaque carousel items.
#![allow(missing_docs)]

pub mod activity;
pub mod collection;
pub mod error;
pub mod post;

pub use activity::ActivityIcon;
pub use collection::Collection;
pub use error::{ModelError, Result as ModelResult};
pub use post::{PostMetadata, PostRecord, TeamMember};
