//! Client-side core of the documentation browser.
//!
//! Everything here is UI-framework agnostic: the sidebar is a list of rows
//! derived from the fetched tree plus per-directory expansion state, the
//! content area is a small state machine fed by fetch completions, and
//! rendering is a thin wrapper over the markdown pipeline. An embedding
//! (web view, TUI, CLI) owns the event loop and draws from these states.

pub mod app;
pub mod client;
pub mod loader;
pub mod render;
pub mod sidebar;

pub use app::{first_document, initial_route, App, Route};
pub use client::{ClientError, DocClient};
pub use loader::{ContentLoader, FetchOutcome, FetchTicket, LoadState};
pub use render::render_markdown;
pub use sidebar::{NavRow, RowKind, SidebarTree};
