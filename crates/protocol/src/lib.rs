//! Wire types shared by the documentation server and its clients.
//!
//! The tree endpoint serializes a `Vec<TreeNode>`; the sibling order and the
//! field names (`type`, `name`, `path`, `children`) are part of the contract
//! and are pinned by the tests below.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// File extension of navigable documents.
pub const DOC_EXTENSION: &str = "md";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }
}

/// One filesystem entry of the documentation tree.
///
/// `path` is relative to the documentation root, forward-slash separated,
/// with no leading slash, and is unique across the whole tree. Only
/// directory nodes carry `children`; an empty directory has `Some(vec![])`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::File,
            name: name.into(),
            path: path.into(),
            children: None,
        }
    }

    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Directory,
            name: name.into(),
            path: path.into(),
            children: Some(children),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Whether this node names a navigable document.
    pub fn is_markdown(&self) -> bool {
        std::path::Path::new(&self.name)
            .extension()
            .is_some_and(|ext| ext == DOC_EXTENSION)
    }
}

/// Sibling order within one directory: directories before files, then by
/// name (case-aware lexicographic).
pub fn sibling_cmp(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Directory, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Directory) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

/// JSON error body returned by the tree endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
}
