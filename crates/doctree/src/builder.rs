//! Recursive directory walk producing the navigation tree.

use std::fs;
use std::path::Path;

use docshelf_protocol::{sibling_cmp, TreeNode};

use crate::error::{DoctreeError, Result};

/// Upper bound on directory nesting. Real documentation sets are a handful
/// of levels deep; hitting this means a pathological or cyclic layout.
pub const MAX_TREE_DEPTH: usize = 64;

/// Build the ordered tree describing the contents of `root`.
///
/// Paths in the result are always relative to `root`, so clients can use
/// them directly as routing keys. Siblings are sorted directories-first,
/// then by name. Fails without partial results if `root` (or any directory
/// below it) cannot be listed.
pub fn build_tree(root: &Path) -> Result<Vec<TreeNode>> {
    walk(root, root, 0)
}

fn walk(root: &Path, dir: &Path, depth: usize) -> Result<Vec<TreeNode>> {
    if depth > MAX_TREE_DEPTH {
        return Err(DoctreeError::DepthExceeded(MAX_TREE_DEPTH));
    }

    let mut nodes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = relative_path(root, &path);

        // Follows symlinks; anything that does not stat as a directory
        // (including broken links and special files) is recorded as a file.
        let is_dir = match fs::metadata(&path) {
            Ok(meta) => meta.is_dir(),
            Err(err) => {
                log::debug!("stat failed for {}, treating as file: {err}", path.display());
                false
            }
        };
        if is_dir {
            let children = walk(root, &path, depth + 1)?;
            nodes.push(TreeNode::directory(name, rel, children));
        } else {
            nodes.push(TreeNode::file(name, rel));
        }
    }

    nodes.sort_by(sibling_cmp);
    Ok(nodes)
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
