//! Configuration for the Folio showcase.
//!
//! A single [`ShowcaseConfig`] describes where content lives, the momentum
//! tuning shared by every carousel, and the responsive layout of each home
//! page shelf. It is read from TOML or JSON, either from a file or inline, and
//! validated before use so the engine never sees an invalid layout.

pub mod loader;
pub mod models;

pub use loader::{
    ConfigSource, ENV_CONFIG_JSON, ENV_CONFIG_PATH, ENV_CONTENT_ROOT,
};
pub use models::{ShelfConfig, ShelvesConfig, ShowcaseConfig};
