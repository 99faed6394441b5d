//! Error types for widget-api

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any transport, status or decoding failure. Details are logged at
    /// debug level only.
    #[error("Request failed")]
    RequestFailed,

    #[error("Missing credentials: {}", .fields.join(", "))]
    MissingCredentials { fields: Vec<&'static str> },
}
