use std::path::PathBuf;

/// Server configuration resolved by the caller (flags/env).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, e.g. `127.0.0.1:8080`.
    pub bind: String,
    /// Directory containing the Markdown documentation.
    pub docs_dir: PathBuf,
    /// Optional directory with the client application's static assets.
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            docs_dir: PathBuf::from("./docs"),
            assets_dir: None,
        }
    }
}

/// State shared across handlers. Holds configuration only; requests never
/// touch shared mutable data.
#[derive(Debug)]
pub struct AppState {
    pub docs_dir: PathBuf,
    pub assets_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(docs_dir: PathBuf, assets_dir: Option<PathBuf>) -> Self {
        Self {
            docs_dir,
            assets_dir,
        }
    }
}
