use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::io::ErrorKind;
use std::sync::Arc;
use tower_http::services::ServeDir;

use docshelf_doctree::{build_tree, resolve, DoctreeError};
use docshelf_protocol::ErrorEnvelope;

use crate::shell;
use crate::state::AppState;

/// Assemble the full route table.
pub fn router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/docs", get(tree_handler))
        .route("/docs/*path", get(document_handler));

    if let Some(assets) = state.assets_dir.clone() {
        router = router.nest_service("/assets", ServeDir::new(assets));
    }

    router.fallback(get(app_shell_handler)).with_state(state)
}

/// `GET /docs` — walk the docs directory and return the JSON tree.
/// The tree is rebuilt per request and dropped after serialization.
async fn tree_handler(State(state): State<Arc<AppState>>) -> Response {
    match build_tree(&state.docs_dir) {
        Ok(tree) => Json(tree).into_response(),
        Err(err) => {
            log::error!(
                "failed to scan docs directory {}: {err}",
                state.docs_dir.display()
            );
            let envelope = ErrorEnvelope {
                code: "scan_failed".to_string(),
                message: "Failed to scan documentation directory".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

/// `GET /docs/*path` — resolve a logical path and return the raw bytes.
async fn document_handler(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> Response {
    match resolve(&state.docs_dir, &path) {
        Ok(doc) => {
            let content_type = if doc.is_markdown() {
                "text/markdown; charset=utf-8"
            } else {
                "text/plain; charset=utf-8"
            };
            ([(header::CONTENT_TYPE, content_type)], doc.bytes).into_response()
        }
        // The resolved on-disk path is never part of a response body.
        Err(DoctreeError::NotFound) => {
            (StatusCode::NOT_FOUND, "Document not found").into_response()
        }
        Err(DoctreeError::PathOutsideRoot(logical)) => {
            log::warn!("rejected path traversal attempt: {logical:?}");
            (StatusCode::BAD_REQUEST, "Invalid document path").into_response()
        }
        Err(err) => {
            log::error!("failed to read document {path:?}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read document",
            )
                .into_response()
        }
    }
}

/// Fallback for every other GET: serve the client entry document so the
/// client-side router can handle deep links.
async fn app_shell_handler(State(state): State<Arc<AppState>>) -> Response {
    if let Some(assets) = &state.assets_dir {
        let index = assets.join("index.html");
        match tokio::fs::read(&index).await {
            Ok(bytes) => return Html(bytes).into_response(),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("failed to read {}: {err}", index.display()),
        }
    }
    Html(shell::APP_SHELL).into_response()
}
