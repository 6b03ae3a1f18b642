//! HTTP client for the documentation server.

use docshelf_protocol::TreeNode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },
}

/// Thin typed wrapper over the two server endpoints.
pub struct DocClient {
    base: String,
    http: reqwest::Client,
}

impl DocClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET /docs` — fetch the full navigation tree.
    pub async fn fetch_tree(&self) -> Result<Vec<TreeNode>, ClientError> {
        let response = self.http.get(format!("{}/docs", self.base)).send().await?;
        check_status(response.status())?;
        Ok(response.json().await?)
    }

    /// `GET /docs/<path>` — fetch one document's raw text.
    pub async fn fetch_document(&self, path: &str) -> Result<String, ClientError> {
        let logical = path.trim_start_matches('/');
        let response = self
            .http
            .get(format!("{}/docs/{logical}", self.base))
            .send()
            .await?;
        check_status(response.status())?;
        Ok(response.text().await?)
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), ClientError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
        })
    }
}
