use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("pattern error: {0}")]
    Pattern(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, StubError>;
