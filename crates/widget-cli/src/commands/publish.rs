//! Publish command

use std::path::Path;

use serde_json::Value;
use widget_api::{PublishWidgetRequest, WidgetApi};
use widget_fs::{WidgetDir, WidgetFileType};

use crate::error::{CliError, Result};

/// Assemble a publish request from the widget directory.
///
/// Requires a `widget.yaml` with a non-empty name.
pub fn build_publish_request(dir: &WidgetDir, channel_id: u64) -> Result<PublishWidgetRequest> {
    let meta = dir
        .load_meta()?
        .filter(|meta| !meta.name.trim().is_empty())
        .ok_or_else(|| CliError::user("A widget.yaml with a name is required to publish"))?;

    // Parse the schema first so a malformed one is rejected locally.
    dir.load_schema()?;

    let translations = match dir.load_json(WidgetFileType::Translation)? {
        Value::Object(map) if map.is_empty() => None,
        other => Some(other),
    };

    Ok(PublishWidgetRequest {
        name: meta.name,
        schema: dir.load_json(WidgetFileType::Schema)?,
        template: dir.load(WidgetFileType::Template)?.data,
        storefront_api_query: dir.load(WidgetFileType::Query)?.data,
        schema_translations: translations,
        channel_id,
    })
}

/// Publish the widget and print the template uuid.
pub async fn run_publish(
    api: &dyn WidgetApi,
    path: &Path,
    uuid: Option<&str>,
    channel_id: u64,
) -> Result<String> {
    let request = build_publish_request(&WidgetDir::new(path), channel_id)?;
    let response = api.publish(&request, uuid).await?;
    println!("{}", response.uuid);
    Ok(response.uuid)
}
