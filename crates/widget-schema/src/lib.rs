//! Widget schema model and default configuration generation.
//!
//! A widget's `schema.json` describes its configurable settings as a tree of
//! tabs, repeatable array blocks and hidden settings. This crate parses that
//! tree and resolves it into the default [`WidgetConfiguration`] that seeds a
//! new widget instance.
//!
//! # Example
//!
//! ```
//! use widget_schema::{generate_widget_configuration, parse_schema};
//!
//! let schema = parse_schema(r#"[
//!     {"type": "hidden", "settings": [{"id": "title", "default": "Hello"}]}
//! ]"#).unwrap();
//!
//! let configuration = generate_widget_configuration(&schema);
//! assert_eq!(configuration["title"], "Hello");
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod pattern;
pub mod schema;

pub use config::{WidgetConfiguration, merge_configuration};
pub use defaults::{
    build_settings_defaults, generate_widget_configuration, parse_array_schema_defaults,
    parse_tab_schema_defaults,
};
pub use error::{Error, Result};
pub use pattern::extract_pattern_part;
pub use schema::{
    ArraySchemaElement, ConditionalSettingsValue, ControlDescriptor, Controls,
    HiddenSchemaElement, RegExPattern, SchemaElement, SchemaSection, Setting, SettingCondition,
    SettingTypeMeta, TabSchemaElement, parse_schema,
};
