//! Error types for widget-schema

/// Result type for widget-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a widget schema.
///
/// Generation itself never fails; only turning raw text into a schema can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid widget schema: {source}")]
    InvalidSchema {
        #[source]
        source: serde_json::Error,
    },
}
