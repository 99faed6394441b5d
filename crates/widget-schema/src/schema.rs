//! Widget schema definition - loaded from a widget's `schema.json`
//!
//! The schema is a list of elements. Each element is a tab of labelled
//! sections, a repeatable array block, or a group of hidden settings.
//!
//! # Example JSON
//!
//! ```json
//! [
//!   {
//!     "type": "tab",
//!     "label": "Content",
//!     "sections": [
//!       {
//!         "label": "Heading",
//!         "settings": [
//!           { "type": "input", "id": "heading", "default": "Welcome" }
//!         ]
//!       }
//!     ]
//!   },
//!   {
//!     "type": "array",
//!     "id": "slides",
//!     "label": "Slides",
//!     "entryLabel": "Slide",
//!     "defaultCount": 3,
//!     "schema": [{ "type": "tab", "label": "Slide", "sections": [] }]
//!   },
//!   {
//!     "type": "hidden",
//!     "settings": [{ "id": "version", "default": 2 }]
//!   }
//! ]
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Error, Result};

/// Parse the contents of a `schema.json` file.
pub fn parse_schema(content: &str) -> Result<Vec<SchemaElement>> {
    serde_json::from_str(content).map_err(|source| Error::InvalidSchema { source })
}

/// One node of the widget's configuration tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaElement {
    /// A tab of labelled sections shown in the page builder
    Tab(TabSchemaElement),
    /// A repeatable block such as a carousel slide
    Array(ArraySchemaElement),
    /// Settings that are configured but never shown to the user
    Hidden(HiddenSchemaElement),
}

impl SchemaElement {
    /// The `type` discriminant as written in the schema.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tab(_) => "tab",
            Self::Array(_) => "array",
            Self::Hidden(_) => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TabSchemaElement {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub sections: Vec<SchemaSection>,
}

/// A repeatable block of settings.
///
/// The inner `schema` holds tabs and nested arrays. A hidden group inside an
/// array is accepted and resolved like a tab.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchemaElement {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub entry_label: String,
    /// Number of entries generated by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_count: Option<i64>,
    /// Thumbnail descriptor used by the page builder, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Value>,
    #[serde(default)]
    pub schema: Vec<SchemaElement>,
}

impl ArraySchemaElement {
    /// How many template copies the default configuration holds.
    ///
    /// Unset, zero and negative counts all produce a single entry.
    pub fn entry_count(&self) -> usize {
        self.default_count
            .and_then(|count| usize::try_from(count).ok())
            .filter(|count| *count > 0)
            .unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct HiddenSchemaElement {
    #[serde(default)]
    pub settings: Vec<Setting>,
}

/// A labelled group of settings inside a tab.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SchemaSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub settings: Vec<Setting>,
}

/// A single configurable field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Editor type (e.g. `input`, `select`, `color`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub setting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_meta: Option<SettingTypeMeta>,
    /// Visibility rule for editors; ignored when resolving defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<SettingCondition>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SettingCondition {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

/// Structured metadata attached to a setting's type.
///
/// Every field is independent; a setting may carry any combination.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingTypeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_settings: Option<Vec<ConditionalSettingsValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Controls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_ex_patterns: Option<Vec<RegExPattern>>,
}

/// A set of nested settings shown when the parent setting equals `condition`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ConditionalSettingsValue {
    #[serde(default)]
    pub condition: Value,
    #[serde(default)]
    pub settings: Vec<Setting>,
}

/// One named entry of a control group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ControlDescriptor {
    /// Nested settings whose defaults are flattened into the group
    Settings { settings: Vec<Setting> },
    /// A direct value stored under the control's own name
    Default {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
}

/// Named control descriptors, kept in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Controls(pub Vec<(String, ControlDescriptor)>);

impl Controls {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlDescriptor)> {
        self.0.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }
}

impl<'de> Deserialize<'de> for Controls {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ControlsVisitor;

        impl<'de> Visitor<'de> for ControlsVisitor {
            type Value = Controls;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of control names to control descriptors")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, descriptor)) = access.next_entry()? {
                    entries.push((name, descriptor));
                }
                Ok(Controls(entries))
            }
        }

        deserializer.deserialize_map(ControlsVisitor)
    }
}

impl Serialize for Controls {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, descriptor) in &self.0 {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}

/// A regular expression that derives a named part from a setting's value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegExPattern {
    pub config_key: String,
    /// Capture group to extract; the whole match when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_index: Option<usize>,
    pub pattern: String,
}
