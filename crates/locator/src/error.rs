use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LocatorError>;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid start path: {0}")]
    InvalidPath(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Invalid exclude glob: {0}")]
    Exclude(#[from] globset::Error),

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid marker: {0}")]
    InvalidMarker(String),

    #[error("{0}")]
    Other(String),
}
