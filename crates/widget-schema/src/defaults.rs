//! Default configuration generation
//!
//! Walks a widget schema and resolves every setting to its default value.
//! Each resolver returns a fresh [`WidgetConfiguration`]; callers combine
//! them with [`merge_configuration`] so that later elements win on key
//! collisions.

use serde_json::{Map, Value, json};

use crate::config::{WidgetConfiguration, merge_configuration};
use crate::pattern::extract_pattern_part;
use crate::schema::{
    ArraySchemaElement, ConditionalSettingsValue, ControlDescriptor, Controls, RegExPattern,
    SchemaElement, SchemaSection, Setting,
};

/// Generate the default configuration for a whole widget schema.
///
/// Elements are resolved in order and merged left to right.
pub fn generate_widget_configuration(schema: &[SchemaElement]) -> WidgetConfiguration {
    let mut configuration = WidgetConfiguration::new();

    for element in schema {
        let defaults = match element {
            SchemaElement::Tab(tab) => parse_tab_schema_defaults(&tab.sections),
            SchemaElement::Array(array) => parse_array_schema_defaults(array),
            SchemaElement::Hidden(hidden) => build_settings_defaults(&hidden.settings),
        };
        tracing::trace!(kind = element.kind(), keys = defaults.len(), "Resolved schema element");
        merge_configuration(&mut configuration, defaults);
    }

    tracing::debug!(
        elements = schema.len(),
        keys = configuration.len(),
        "Generated widget configuration"
    );
    configuration
}

/// Resolve the settings of every section of a tab.
pub fn parse_tab_schema_defaults(sections: &[SchemaSection]) -> WidgetConfiguration {
    let mut configuration = WidgetConfiguration::new();
    for section in sections {
        merge_configuration(&mut configuration, build_settings_defaults(&section.settings));
    }
    configuration
}

/// Resolve a repeatable block.
///
/// The block's tabs and hidden groups form one entry template which is
/// copied [`ArraySchemaElement::entry_count`] times under the block id.
/// Nested blocks are resolved on their own and land next to it, not inside
/// the entries.
pub fn parse_array_schema_defaults(element: &ArraySchemaElement) -> WidgetConfiguration {
    let mut template = WidgetConfiguration::new();
    for child in &element.schema {
        match child {
            SchemaElement::Tab(tab) => {
                merge_configuration(&mut template, parse_tab_schema_defaults(&tab.sections));
            }
            SchemaElement::Hidden(hidden) => {
                merge_configuration(&mut template, build_settings_defaults(&hidden.settings));
            }
            SchemaElement::Array(_) => {}
        }
    }

    // Value::clone is deep, so entries share nothing.
    let entries = (0..element.entry_count())
        .map(|_| Value::Object(template.clone()))
        .collect();

    let mut configuration = WidgetConfiguration::new();
    configuration.insert(element.id.clone(), Value::Array(entries));

    for child in &element.schema {
        if let SchemaElement::Array(nested) = child {
            merge_configuration(&mut configuration, parse_array_schema_defaults(nested));
        }
    }

    configuration
}

/// Resolve a flat list of settings.
///
/// For each setting, in order:
/// 1. conditional settings contribute their nested `id -> default` pairs,
/// 2. controls become one object stored under the setting id,
/// 3. regex patterns become `{value, parts}` under the setting id,
/// 4. a truthy plain `default` is stored under the setting id.
///
/// Step 4 runs after step 2, so a plain default replaces the control
/// object stored for the same id. A pattern-derived entry already carries
/// the default as its `value` and is left in place.
pub fn build_settings_defaults(settings: &[Setting]) -> WidgetConfiguration {
    let mut configuration = WidgetConfiguration::new();

    for setting in settings {
        let mut derived_from_patterns = false;

        if let Some(type_meta) = &setting.type_meta {
            if let Some(branches) = &type_meta.conditional_settings {
                merge_configuration(&mut configuration, conditional_defaults(branches));
            }

            if let Some(controls) = &type_meta.controls {
                configuration.insert(setting.id.clone(), Value::Object(control_defaults(controls)));
            }

            if let Some(patterns) = &type_meta.reg_ex_patterns {
                configuration.insert(
                    setting.id.clone(),
                    pattern_defaults(setting.default.as_ref(), patterns),
                );
                derived_from_patterns = true;
            }
        }

        if derived_from_patterns {
            continue;
        }

        if let Some(default) = setting.default.as_ref().filter(|value| is_truthy(value)) {
            configuration.insert(setting.id.clone(), default.clone());
        }
    }

    configuration
}

/// Flatten every branch's nested settings, ignoring the conditions.
fn conditional_defaults(branches: &[ConditionalSettingsValue]) -> WidgetConfiguration {
    let mut configuration = WidgetConfiguration::new();
    for setting in branches.iter().flat_map(|branch| &branch.settings) {
        configuration.insert(setting.id.clone(), default_or_null(setting));
    }
    configuration
}

fn control_defaults(controls: &Controls) -> Map<String, Value> {
    let mut group = Map::new();
    for (name, descriptor) in controls.iter() {
        match descriptor {
            ControlDescriptor::Settings { settings } => {
                for setting in settings {
                    group.insert(setting.id.clone(), default_or_null(setting));
                }
            }
            ControlDescriptor::Default { default } => {
                group.insert(name.to_string(), default.clone().unwrap_or(Value::Null));
            }
        }
    }
    group
}

fn pattern_defaults(default: Option<&Value>, patterns: &[RegExPattern]) -> Value {
    let text = match default {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let mut parts = Map::new();
    for pattern in patterns {
        let part = extract_pattern_part(&pattern.pattern, &text, pattern.match_index.unwrap_or(0));
        parts.insert(pattern.config_key.clone(), part.map_or(Value::Null, Value::String));
    }

    json!({
        "value": default.cloned().unwrap_or_else(|| Value::String(String::new())),
        "parts": parts,
    })
}

fn default_or_null(setting: &Setting) -> Value {
    setting.default.clone().unwrap_or(Value::Null)
}

/// Whether a plain default counts as set: `null`, `false`, zero and the
/// empty string do not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn settings(value: Value) -> Vec<Setting> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_settings_without_defaults_are_empty() {
        let result = build_settings_defaults(&settings(json!([
            {"id": "a", "type": "input"},
            {"id": "b", "type": "color", "label": "B"}
        ])));

        assert!(result.is_empty());
    }

    #[test]
    fn test_plain_default() {
        let result = build_settings_defaults(&settings(json!([{"id": "x", "default": "hello"}])));
        assert_eq!(Value::Object(result), json!({"x": "hello"}));
    }

    #[rstest]
    #[case(json!(false))]
    #[case(json!(0))]
    #[case(json!(0.0))]
    #[case(json!(""))]
    #[case(json!(null))]
    fn test_falsy_plain_default_is_skipped(#[case] default: Value) {
        let result = build_settings_defaults(&settings(json!([{"id": "x", "default": default}])));
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(json!(true))]
    #[case(json!(12))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn test_truthy_plain_default_is_kept(#[case] default: Value) {
        let result =
            build_settings_defaults(&settings(json!([{"id": "x", "default": default.clone()}])));
        assert_eq!(result["x"], default);
    }

    #[test]
    fn test_conditional_settings_flatten_all_branches() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "layout",
            "typeMeta": {
                "conditionalSettings": [
                    {"condition": "grid", "settings": [
                        {"id": "columns", "default": 3},
                        {"id": "gap", "default": "small"}
                    ]},
                    {"condition": "list", "settings": [
                        {"id": "gap", "default": "large"},
                        {"id": "divider"}
                    ]}
                ]
            }
        }])));

        assert_eq!(
            Value::Object(result),
            json!({"columns": 3, "gap": "large", "divider": null})
        );
    }

    #[test]
    fn test_conditional_settings_resolve_one_level_only() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "outer",
            "typeMeta": {
                "conditionalSettings": [{"condition": true, "settings": [{
                    "id": "inner",
                    "default": "on",
                    "typeMeta": {"conditionalSettings": [
                        {"condition": "on", "settings": [{"id": "deep", "default": 1}]}
                    ]}
                }]}]
            }
        }])));

        assert_eq!(Value::Object(result), json!({"inner": "on"}));
    }

    #[test]
    fn test_controls_nest_under_setting_id() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "box",
            "typeMeta": {
                "controls": {
                    "padding": {"settings": [
                        {"id": "paddingTop", "default": "4px"},
                        {"id": "paddingBottom", "default": "8px"}
                    ]},
                    "visibility": {"default": "show"}
                }
            }
        }])));

        assert_eq!(
            Value::Object(result),
            json!({"box": {"paddingTop": "4px", "paddingBottom": "8px", "visibility": "show"}})
        );
    }

    #[test]
    fn test_plain_default_overwrites_controls() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "box",
            "default": "plain",
            "typeMeta": {
                "controls": {"padding": {"settings": [{"id": "paddingTop", "default": "4px"}]}}
            }
        }])));

        assert_eq!(Value::Object(result), json!({"box": "plain"}));
    }

    #[test]
    fn test_regex_patterns_extract_parts() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "x",
            "default": "Copyright 2021",
            "typeMeta": {"regExPatterns": [
                {"configKey": "year", "pattern": "(\\d{4})", "matchIndex": 1}
            ]}
        }])));

        assert_eq!(
            Value::Object(result),
            json!({"x": {"value": "Copyright 2021", "parts": {"year": "2021"}}})
        );
    }

    #[test]
    fn test_regex_pattern_without_match_is_null() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "x",
            "default": "All rights reserved",
            "typeMeta": {"regExPatterns": [
                {"configKey": "year", "pattern": "(\\d{4})", "matchIndex": 1}
            ]}
        }])));

        assert_eq!(result["x"]["parts"]["year"], Value::Null);
        assert_eq!(result["x"]["value"], "All rights reserved");
    }

    #[test]
    fn test_regex_patterns_without_plain_default() {
        let result = build_settings_defaults(&settings(json!([{
            "id": "x",
            "typeMeta": {"regExPatterns": [
                {"configKey": "year", "pattern": "(\\d{4})", "matchIndex": 1}
            ]}
        }])));

        assert_eq!(
            Value::Object(result),
            json!({"x": {"value": "", "parts": {"year": null}}})
        );
    }

    #[test]
    fn test_pattern_defaults_value_and_parts() {
        let patterns: Vec<RegExPattern> = serde_json::from_value(json!([
            {"configKey": "year", "pattern": "(\\d{4})", "matchIndex": 1},
            {"configKey": "whole", "pattern": "Copy\\w+"},
            {"configKey": "missing", "pattern": "(\\d{6})", "matchIndex": 1}
        ]))
        .unwrap();

        let value = pattern_defaults(Some(&json!("Copyright 2021")), &patterns);

        assert_eq!(
            value,
            json!({
                "value": "Copyright 2021",
                "parts": {"year": "2021", "whole": "Copyright", "missing": null}
            })
        );
    }

    #[test]
    fn test_later_settings_overwrite_earlier_ones() {
        let result = build_settings_defaults(&settings(json!([
            {"id": "title", "default": "first"},
            {"id": "title", "default": "second"}
        ])));

        assert_eq!(result["title"], "second");
    }

    #[test]
    fn test_tab_sections_merge_in_order() {
        let sections: Vec<SchemaSection> = serde_json::from_value(json!([
            {"label": "One", "settings": [{"id": "a", "default": 1}, {"id": "b", "default": 1}]},
            {"settings": [{"id": "b", "default": 2}]}
        ]))
        .unwrap();

        let result = parse_tab_schema_defaults(&sections);
        assert_eq!(Value::Object(result), json!({"a": 1, "b": 2}));
    }

    fn array(value: Value) -> ArraySchemaElement {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_array_replicates_template() {
        let element = array(json!({
            "id": "slides",
            "label": "Slides",
            "entryLabel": "Slide",
            "defaultCount": 3,
            "schema": [
                {"type": "tab", "label": "Slide", "sections": [
                    {"settings": [{"id": "heading", "default": "Slide heading"}]}
                ]},
                {"type": "hidden", "settings": [{"id": "style", "default": {"color": "red"}}]}
            ]
        }));

        let result = parse_array_schema_defaults(&element);
        let entry = json!({"heading": "Slide heading", "style": {"color": "red"}});
        assert_eq!(
            Value::Object(result),
            json!({"slides": [entry.clone(), entry.clone(), entry]})
        );
    }

    #[test]
    fn test_array_entries_are_independent() {
        let element = array(json!({
            "id": "slides",
            "defaultCount": 3,
            "schema": [{"type": "hidden", "settings": [
                {"id": "style", "default": {"color": "red"}}
            ]}]
        }));

        let mut result = parse_array_schema_defaults(&element);
        result["slides"][0]["style"]["color"] = json!("blue");

        assert_eq!(result["slides"][0]["style"]["color"], "blue");
        assert_eq!(result["slides"][1]["style"]["color"], "red");
        assert_eq!(result["slides"][2]["style"]["color"], "red");
    }

    #[rstest]
    #[case(json!(null), 1)]
    #[case(json!(0), 1)]
    #[case(json!(-3), 1)]
    #[case(json!(2), 2)]
    fn test_array_entry_count(#[case] default_count: Value, #[case] expected: usize) {
        let element = array(json!({"id": "items", "defaultCount": default_count, "schema": []}));

        let result = parse_array_schema_defaults(&element);
        assert_eq!(result["items"].as_array().unwrap().len(), expected);
    }

    #[test]
    fn test_nested_array_is_sibling_of_entries() {
        let element = array(json!({
            "id": "columns",
            "defaultCount": 2,
            "schema": [
                {"type": "tab", "sections": [{"settings": [{"id": "width", "default": "50%"}]}]},
                {"type": "array", "id": "links", "schema": [
                    {"type": "tab", "sections": [{"settings": [{"id": "url", "default": "/"}]}]}
                ]}
            ]
        }));

        let result = parse_array_schema_defaults(&element);
        assert_eq!(
            Value::Object(result),
            json!({
                "columns": [{"width": "50%"}, {"width": "50%"}],
                "links": [{"url": "/"}]
            })
        );
    }

    #[test]
    fn test_generate_merges_elements_left_to_right() {
        let schema: Vec<SchemaElement> = serde_json::from_value(json!([
            {"type": "tab", "label": "Content", "sections": [
                {"settings": [{"id": "title", "default": "From tab"}, {"id": "slides", "default": "tab"}]}
            ]},
            {"type": "array", "id": "slides", "schema": [
                {"type": "tab", "sections": [{"settings": [{"id": "image", "default": "a.png"}]}]}
            ]},
            {"type": "hidden", "settings": [{"id": "title", "default": "From hidden"}]}
        ]))
        .unwrap();

        let result = generate_widget_configuration(&schema);
        assert_eq!(
            Value::Object(result),
            json!({"title": "From hidden", "slides": [{"image": "a.png"}]})
        );
    }

    #[test]
    fn test_generate_empty_schema() {
        assert!(generate_widget_configuration(&[]).is_empty());
    }
}
