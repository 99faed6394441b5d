//! [`TestWidget`] builder for widget directory test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Minimal schema with one tab, one array block and one hidden group.
pub const SAMPLE_SCHEMA: &str = r#"[
  {
    "type": "tab",
    "label": "Content",
    "sections": [
      { "label": "Heading", "settings": [{ "type": "input", "id": "heading", "default": "Welcome" }] }
    ]
  },
  {
    "type": "array",
    "id": "cards",
    "label": "Cards",
    "entryLabel": "Card",
    "defaultCount": 2,
    "schema": [
      { "type": "tab", "label": "Card", "sections": [{ "settings": [{ "id": "caption", "default": "Card caption" }] }] }
    ]
  },
  { "type": "hidden", "settings": [{ "id": "schemaVersion", "default": 1 }] }
]"#;

pub const SAMPLE_TEMPLATE: &str = "<h1>{{heading}}</h1>\n";

/// A temporary widget directory with helpers for writing resource files.
///
/// # Example
///
/// ```rust,no_run
/// use widget_test_utils::widget::TestWidget;
///
/// let widget = TestWidget::new().with_sample_resources();
/// widget.assert_file_exists("schema.json");
/// ```
pub struct TestWidget {
    temp_dir: TempDir,
}

impl Default for TestWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWidget {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` inside the widget directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        path
    }

    /// Write the sample schema and template plus a widget.yaml.
    pub fn with_sample_resources(self) -> Self {
        self.write("schema.json", SAMPLE_SCHEMA);
        self.write("widget.html", SAMPLE_TEMPLATE);
        self.write("widget.yaml", "name: Sample widget\nversion: 1.0.0\n");
        self
    }

    /// Parse the JSON file `name`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or is not valid JSON.
    pub fn read_json(&self, name: &str) -> Value {
        let path = self.root().join(name);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Invalid JSON in {}: {e}", path.display()))
    }

    /// Assert that `name` exists in the widget directory.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.root().join(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist in the widget directory.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.root().join(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
