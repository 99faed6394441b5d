//! Request and response bodies of the widget template API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use widget_schema::WidgetConfiguration;

/// Body of a preview render request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetPreviewRenderRequest {
    pub widget_configuration: WidgetConfiguration,
    pub widget_template: String,
    pub placement_uuid: String,
    pub widget_uuid: String,
    pub storefront_api_query: String,
    pub storefront_api_query_params: Value,
    pub channel_id: u64,
}

/// Body of a publish (create or update) request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishWidgetRequest {
    pub name: String,
    pub schema: Value,
    pub template: String,
    pub storefront_api_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_translations: Option<Value>,
    pub channel_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishWidgetResponse {
    pub uuid: String,
}

/// The API wraps every payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewHtml {
    pub html: String,
}
