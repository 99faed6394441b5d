//! End-to-end tests over the widget fixtures in `test-fixtures/widgets/`
//!
//! Each test copies a fixture into a temporary directory, then runs the
//! load -> generate -> write flow against the copy.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;
use widget_api::PublishWidgetRequest;
use widget_fs::{WidgetDir, WidgetFileType};
use widget_schema::generate_widget_configuration;

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/widgets")
        .join(name)
}

/// Copy a fixture widget into a fresh temporary directory.
fn copy_fixture(name: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    for entry in fs::read_dir(fixture_dir(name)).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), temp.path().join(entry.file_name())).unwrap();
    }
    temp
}

fn expected_config(name: &str) -> Value {
    let content = fs::read_to_string(fixture_dir(name).join("expected_config.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_carousel_generates_expected_config() {
    let temp = copy_fixture("carousel");
    let dir = WidgetDir::new(temp.path());

    let configuration = generate_widget_configuration(&dir.load_schema().unwrap());

    assert_eq!(Value::Object(configuration), expected_config("carousel"));
}

#[test]
fn test_carousel_config_written_and_reloaded() {
    let temp = copy_fixture("carousel");
    let dir = WidgetDir::new(temp.path());

    let configuration = generate_widget_configuration(&dir.load_schema().unwrap());
    dir.write_configuration(&configuration).unwrap();

    let reloaded = dir.load_configuration().unwrap();
    assert_eq!(reloaded, configuration);

    // Key order follows the schema.
    let keys: Vec<_> = reloaded.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "autoplay",
            "autoplaySpeed",
            "arrowColor",
            "arrowSize",
            "arrowStyle",
            "slides",
            "productUrl",
            "layoutVersion"
        ]
    );
}

#[test]
fn test_carousel_resources_all_load() {
    let temp = copy_fixture("carousel");
    let dir = WidgetDir::new(temp.path());

    for kind in WidgetFileType::ALL {
        let response = dir
            .load(kind)
            .unwrap_or_else(|e| panic!("{kind} should load: {e}"));
        assert_eq!(response.kind, kind);
    }

    assert_eq!(dir.load_meta().unwrap().unwrap().name, "Carousel");
    assert_eq!(
        dir.load_json(WidgetFileType::QueryParams).unwrap()["productId"],
        123
    );
}

#[test]
fn test_carousel_publish_body() {
    let temp = copy_fixture("carousel");
    let dir = WidgetDir::new(temp.path());

    let request = PublishWidgetRequest {
        name: dir.load_meta().unwrap().unwrap().name,
        schema: dir.load_json(WidgetFileType::Schema).unwrap(),
        template: dir.load(WidgetFileType::Template).unwrap().data,
        storefront_api_query: dir.load(WidgetFileType::Query).unwrap().data,
        schema_translations: Some(dir.load_json(WidgetFileType::Translation).unwrap()),
        channel_id: 1,
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["name"], "Carousel");
    assert_eq!(body["schema"][1]["defaultCount"], 2);
    assert!(body["template"].as_str().unwrap().contains("{{#each slides}}"));
    assert_eq!(body["schema_translations"]["i18n.Slides"]["default"], "Slides");
}
