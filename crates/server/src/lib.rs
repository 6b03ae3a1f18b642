//! HTTP surface for the documentation browser.
//!
//! Three routes make up the contract: `GET /docs` returns the JSON tree,
//! `GET /docs/*path` returns raw document bytes, and every other GET serves
//! the client application's entry document so deep links work. Handlers
//! share only immutable configuration; every request walks or reads the
//! filesystem afresh.

mod routes;
mod shell;
mod state;

pub use routes::router;
pub use state::{AppState, ServerConfig};

use std::sync::Arc;

/// Bind and run the server until the listener fails.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(
        config.docs_dir.clone(),
        config.assets_dir.clone(),
    ));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    let addr = listener.local_addr()?;
    log::info!("Serving documentation on http://{addr}");
    log::info!("Tree endpoint: http://{addr}/docs");

    axum::serve(listener, app).await
}
