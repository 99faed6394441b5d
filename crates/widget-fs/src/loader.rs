//! Loader for the resource files of a widget directory
//!
//! ```text
//! my-widget/
//!   widget.html
//!   schema.json
//!   config.json
//!   widget.yaml
//!   query.graphql
//!   queryParams.json
//!   queryParamsBuilder.json
//!   schema_translations.json
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use widget_schema::{SchemaElement, WidgetConfiguration, parse_schema};

use crate::{Error, Result, WidgetFileType, io};

/// Raw contents of one widget resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLoaderResponse {
    pub kind: WidgetFileType,
    pub data: String,
}

/// Contents of `widget.yaml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct WidgetMeta {
    /// Display name used when publishing
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A widget directory on disk.
#[derive(Debug, Clone)]
pub struct WidgetDir {
    root: PathBuf,
}

impl WidgetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a resource inside this directory.
    pub fn path(&self, kind: WidgetFileType) -> PathBuf {
        self.root.join(kind)
    }

    /// Load the raw text of a resource.
    ///
    /// Absent optional resources yield their fallback payload. A required
    /// resource that is absent or empty, and any other read failure, is an
    /// [`Error::InvalidResource`] naming the resource.
    pub fn load(&self, kind: WidgetFileType) -> Result<FileLoaderResponse> {
        let path = self.path(kind);

        let data = match io::read_text(&path) {
            Ok(data) => data,
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                match kind.fallback() {
                    Some(fallback) => {
                        tracing::debug!(resource = %kind, "Resource not found, using default");
                        fallback.to_string()
                    }
                    None => return Err(Error::invalid(kind, "file not found")),
                }
            }
            Err(e) => return Err(Error::invalid(kind, e.to_string())),
        };

        if kind.is_required() && data.trim().is_empty() {
            return Err(Error::invalid(kind, "file is empty"));
        }

        Ok(FileLoaderResponse { kind, data })
    }

    /// Load a resource and parse it as JSON.
    pub fn load_json(&self, kind: WidgetFileType) -> Result<Value> {
        let response = self.load(kind)?;
        serde_json::from_str(&response.data).map_err(|e| Error::invalid(kind, e.to_string()))
    }

    /// Load and parse `schema.json`.
    pub fn load_schema(&self) -> Result<Vec<SchemaElement>> {
        let response = self.load(WidgetFileType::Schema)?;
        parse_schema(&response.data).map_err(|e| Error::invalid(WidgetFileType::Schema, e.to_string()))
    }

    /// Load `config.json` as a configuration map.
    pub fn load_configuration(&self) -> Result<WidgetConfiguration> {
        match self.load_json(WidgetFileType::Configuration)? {
            Value::Object(configuration) => Ok(configuration),
            other => Err(Error::invalid(
                WidgetFileType::Configuration,
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Load and parse `widget.yaml`.
    ///
    /// Returns `None` when the file is absent or empty.
    pub fn load_meta(&self) -> Result<Option<WidgetMeta>> {
        let response = self.load(WidgetFileType::Meta)?;
        if response.data.trim().is_empty() {
            return Ok(None);
        }
        serde_yaml::from_str(&response.data)
            .map(Some)
            .map_err(|e| Error::invalid(WidgetFileType::Meta, e.to_string()))
    }

    /// Write `config.json` atomically, pretty-printed.
    pub fn write_configuration(&self, configuration: &WidgetConfiguration) -> Result<PathBuf> {
        let path = self.path(WidgetFileType::Configuration);
        let mut content = serde_json::to_string_pretty(configuration)?;
        content.push('\n');
        io::write_atomic(&path, content.as_bytes())?;
        tracing::info!(path = %path.display(), keys = configuration.len(), "Wrote widget configuration");
        Ok(path)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
