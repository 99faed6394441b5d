//! Remote collaborators of Widget Builder.
//!
//! - [`auth`] — API credentials and the credential check
//! - [`client`] — the [`WidgetApi`] trait and its HTTP implementation
//! - [`types`] — request and response bodies

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{AuthConfig, check_credentials};
pub use client::{PREVIEW_ENDPOINT, PUBLISH_ENDPOINT, WidgetApi, WidgetClient, publish_target};
pub use error::{Error, Result};
pub use types::{PublishWidgetRequest, PublishWidgetResponse, WidgetPreviewRenderRequest};
