use thiserror::Error;

pub type Result<T> = std::result::Result<T, DoctreeError>;

#[derive(Error, Debug)]
pub enum DoctreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document not found")]
    NotFound,

    #[error("path escapes document root: {0}")]
    PathOutsideRoot(String),

    #[error("directory tree exceeds maximum depth of {0}")]
    DepthExceeded(usize),
}
