//! Widget template API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::{Envelope, PreviewHtml};
use crate::{
    AuthConfig, Error, PublishWidgetRequest, PublishWidgetResponse, Result,
    WidgetPreviewRenderRequest,
};

pub const PREVIEW_ENDPOINT: &str = "/content/widget-templates/preview";
pub const PUBLISH_ENDPOINT: &str = "/content/widget-templates";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations against the remote widget template service.
#[async_trait]
pub trait WidgetApi: Send + Sync {
    /// Render a widget server-side and return its HTML.
    async fn preview(&self, request: &WidgetPreviewRenderRequest) -> Result<String>;

    /// Create a widget template, or update the one identified by `uuid`.
    async fn publish(
        &self,
        request: &PublishWidgetRequest,
        uuid: Option<&str>,
    ) -> Result<PublishWidgetResponse>;
}

/// Method and URL for a publish call.
///
/// Without a uuid the template is created with `POST`; with one it is
/// updated in place with `PUT`.
pub fn publish_target(api_path: &str, uuid: Option<&str>) -> (Method, String) {
    let base = format!("{}{}", api_path.trim_end_matches('/'), PUBLISH_ENDPOINT);
    match uuid {
        Some(uuid) => (Method::PUT, format!("{base}/{uuid}")),
        None => (Method::POST, base),
    }
}

/// HTTP implementation of [`WidgetApi`].
pub struct WidgetClient {
    http: reqwest::Client,
    auth: AuthConfig,
}

impl WidgetClient {
    pub fn new(auth: AuthConfig) -> Result<Self> {
        let missing = auth.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingCredentials { fields: missing });
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(request_failed)?;

        Ok(Self { http, auth })
    }

    async fn send<B, T>(&self, method: Method, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, url, "Sending widget API request");

        let response = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Auth-Client", &self.auth.auth_id)
            .header("X-Auth-Token", &self.auth.auth_token)
            .json(body)
            .send()
            .await
            .map_err(request_failed)?
            .error_for_status()
            .map_err(request_failed)?;

        response.json::<T>().await.map_err(request_failed)
    }
}

#[async_trait]
impl WidgetApi for WidgetClient {
    async fn preview(&self, request: &WidgetPreviewRenderRequest) -> Result<String> {
        let url = format!("{}{}", self.auth.api_path.trim_end_matches('/'), PREVIEW_ENDPOINT);
        let envelope: Envelope<PreviewHtml> = self.send(Method::POST, &url, request).await?;
        Ok(envelope.data.html)
    }

    async fn publish(
        &self,
        request: &PublishWidgetRequest,
        uuid: Option<&str>,
    ) -> Result<PublishWidgetResponse> {
        let (method, url) = publish_target(&self.auth.api_path, uuid);
        let envelope: Envelope<PublishWidgetResponse> = self.send(method, &url, request).await?;
        tracing::info!(uuid = %envelope.data.uuid, "Published widget template");
        Ok(envelope.data)
    }
}

fn request_failed(e: reqwest::Error) -> Error {
    tracing::debug!(error = %e, status = ?e.status(), "Widget API request failed");
    Error::RequestFailed
}
