use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("configurations field in {path} should be an array")]
    InvalidContainer { path: PathBuf },

    #[error("malformed launch file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LaunchError {
    pub fn invalid_container(path: impl Into<PathBuf>) -> Self {
        Self::InvalidContainer { path: path.into() }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}
