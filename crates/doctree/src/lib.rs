//! Filesystem-backed documentation tree and document resolution.
//!
//! The tree is rebuilt from the filesystem on every call; nothing is cached
//! or watched. Both entry points are read-only.

pub mod builder;
mod error;
pub mod resolver;

pub use builder::{build_tree, MAX_TREE_DEPTH};
pub use error::{DoctreeError, Result};
pub use resolver::{resolve, ResolvedDoc, INDEX_FILE};
