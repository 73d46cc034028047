//! Session error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Path of the file the failed operation touched
    pub fn path(&self) -> &std::path::Path {
        match self {
            SessionError::Io { path, .. } => path,
        }
    }
}
