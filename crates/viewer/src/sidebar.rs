//! Collapsible navigation sidebar state.

use std::collections::HashMap;

use docshelf_protocol::{NodeKind, TreeNode};

/// One visible row of the sidebar, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub kind: RowKind,
    pub label: String,
    pub path: String,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Directory { expanded: bool },
    Document { href: String },
}

/// The fetched tree plus per-directory expansion state.
///
/// Directories default to expanded; toggling one never touches siblings or
/// ancestors. The map is owned here and passed down to the embedding — it
/// is ephemeral UI state, never persisted.
#[derive(Debug, Default)]
pub struct SidebarTree {
    tree: Vec<TreeNode>,
    expanded: HashMap<String, bool>,
}

impl SidebarTree {
    pub fn new(tree: Vec<TreeNode>) -> Self {
        Self {
            tree,
            expanded: HashMap::new(),
        }
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        // Absent means expanded, as in the original sidebar.
        self.expanded.get(path).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, path: &str) {
        let next = !self.is_expanded(path);
        self.expanded.insert(path.to_string(), next);
    }

    /// Flatten the tree into the rows currently visible.
    ///
    /// Collapsed directories contribute their own row but none of their
    /// descendants. Files only appear when they are Markdown documents;
    /// other files stay in the tree but out of navigation. Document rows
    /// link to `/docs/<path>` and drop the `.md` suffix from their label.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        self.flatten(&self.tree, 0, &mut rows);
        rows
    }

    fn flatten(&self, nodes: &[TreeNode], depth: usize, rows: &mut Vec<NavRow>) {
        for node in nodes {
            match node.kind {
                NodeKind::Directory => {
                    let expanded = self.is_expanded(&node.path);
                    rows.push(NavRow {
                        kind: RowKind::Directory { expanded },
                        label: node.name.clone(),
                        path: node.path.clone(),
                        depth,
                    });
                    if expanded {
                        if let Some(children) = node.children.as_deref() {
                            self.flatten(children, depth + 1, rows);
                        }
                    }
                }
                NodeKind::File => {
                    if !node.is_markdown() {
                        continue;
                    }
                    rows.push(NavRow {
                        kind: RowKind::Document {
                            href: format!("/docs/{}", node.path),
                        },
                        label: display_name(&node.name),
                        path: node.path.clone(),
                        depth,
                    });
                }
            }
        }
    }
}

fn display_name(name: &str) -> String {
    name.strip_suffix(".md").unwrap_or(name).to_string()
}
