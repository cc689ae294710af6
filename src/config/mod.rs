//! Configuration module
//!
//! This module contains components for reading, merging and accessing the
//! configuration groups.

pub mod group;
pub mod loader;
pub mod merge;

pub use group::{Group, validate};
pub use loader::{
    DEFAULT_SECTION, IntoSources, USE_DEFAULTS, expand_path, normalize_path, read, read_source,
    resolve_path,
};
pub use merge::{merge, merge_mappings};
