//! Composition root for an embedding: client + sidebar + loader.

use docshelf_protocol::{NodeKind, TreeNode};

use crate::client::{ClientError, DocClient};
use crate::loader::{ContentLoader, FetchOutcome, LoadState};
use crate::render::render_markdown;
use crate::sidebar::SidebarTree;

/// Where the application currently points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Document(String),
    NotFound,
}

/// First navigable document of the tree, in display order (pre-order,
/// directories first). `None` for a tree with no Markdown files.
pub fn first_document(tree: &[TreeNode]) -> Option<&str> {
    for node in tree {
        match node.kind {
            NodeKind::File if node.is_markdown() => return Some(&node.path),
            NodeKind::Directory => {
                if let Some(found) = node
                    .children
                    .as_deref()
                    .and_then(|children| first_document(children))
                {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

/// Route chosen when nothing is explicitly selected yet.
pub fn initial_route(tree: &[TreeNode]) -> Route {
    match first_document(tree) {
        Some(path) => Route::Document(path.to_string()),
        None => Route::NotFound,
    }
}

/// Drives one browsing session: fetches the tree once at startup, then
/// fetches documents as the route changes and hands the text to the
/// rendering pipeline.
pub struct App {
    client: DocClient,
    sidebar: SidebarTree,
    loader: ContentLoader,
}

impl App {
    pub fn new(client: DocClient) -> Self {
        Self {
            client,
            sidebar: SidebarTree::default(),
            loader: ContentLoader::new(),
        }
    }

    /// Fetch the navigation tree and reset the sidebar around it.
    pub async fn load_tree(&mut self) -> Result<(), ClientError> {
        let tree = self.client.fetch_tree().await?;
        self.sidebar = SidebarTree::new(tree);
        Ok(())
    }

    pub fn sidebar(&self) -> &SidebarTree {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SidebarTree {
        &mut self.sidebar
    }

    pub fn loader(&self) -> &ContentLoader {
        &self.loader
    }

    /// The route to open when the session starts without a selection.
    pub fn initial_route(&self) -> Route {
        initial_route(self.sidebar.tree())
    }

    /// Navigate to a document: fresh fetch, loading state while pending,
    /// error state (with the HTTP status in the message) on failure. A
    /// failed fetch never tears the session down — the sidebar stays
    /// usable.
    pub async fn navigate(&mut self, path: &str) {
        let ticket = self.loader.begin(path);
        let outcome = match self.client.fetch_document(path).await {
            Ok(text) => FetchOutcome::Text(text),
            Err(err) => FetchOutcome::Error(format!("Failed to load document: {err}")),
        };
        self.loader.complete(ticket, outcome);
    }

    /// HTML for the content area, once a document is loaded.
    pub fn rendered_html(&self) -> Option<String> {
        match self.loader.state() {
            LoadState::Loaded { text, .. } => Some(render_markdown(text)),
            _ => None,
        }
    }
}
