//! Preview render command

use std::path::Path;

use widget_api::{WidgetApi, WidgetPreviewRenderRequest};
use widget_fs::{WidgetDir, WidgetFileType};
use widget_schema::generate_widget_configuration;

use crate::error::Result;

/// Identifiers the preview is rendered for.
#[derive(Debug, Clone, Default)]
pub struct PreviewTarget {
    pub placement_uuid: String,
    pub widget_uuid: String,
    pub channel_id: u64,
}

/// Assemble a preview request from the widget directory.
///
/// An absent or empty `config.json` is replaced by the schema defaults.
pub fn build_preview_request(
    dir: &WidgetDir,
    target: &PreviewTarget,
) -> Result<WidgetPreviewRenderRequest> {
    let mut configuration = dir.load_configuration()?;
    if configuration.is_empty() {
        tracing::debug!("No stored configuration, previewing schema defaults");
        configuration = generate_widget_configuration(&dir.load_schema()?);
    }

    Ok(WidgetPreviewRenderRequest {
        widget_configuration: configuration,
        widget_template: dir.load(WidgetFileType::Template)?.data,
        placement_uuid: target.placement_uuid.clone(),
        widget_uuid: target.widget_uuid.clone(),
        storefront_api_query: dir.load(WidgetFileType::Query)?.data,
        storefront_api_query_params: dir.load_json(WidgetFileType::QueryParams)?,
        channel_id: target.channel_id,
    })
}

/// Render the widget remotely and print the returned HTML.
pub async fn run_preview(api: &dyn WidgetApi, path: &Path, target: &PreviewTarget) -> Result<()> {
    let request = build_preview_request(&WidgetDir::new(path), target)?;
    let html = api.preview(&request).await?;
    println!("{html}");
    Ok(())
}
