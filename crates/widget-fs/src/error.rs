//! Error types for widget-fs

use std::path::PathBuf;

use crate::WidgetFileType;

/// Result type for widget-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in widget-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} resource: {message}")]
    InvalidResource {
        kind: WidgetFileType,
        message: String,
    },

    #[error("Failed to serialize widget configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(kind: WidgetFileType, message: impl Into<String>) -> Self {
        Self::InvalidResource {
            kind,
            message: message.into(),
        }
    }
}
