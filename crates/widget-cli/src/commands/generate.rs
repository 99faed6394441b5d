//! Default configuration generation command

use std::path::Path;

use colored::Colorize;
use widget_fs::WidgetDir;
use widget_schema::generate_widget_configuration;

use crate::error::Result;

/// Generate `config.json` from the defaults in `schema.json`.
///
/// With `print` the configuration goes to stdout and nothing is written.
pub fn run_generate_config(path: &Path, print: bool) -> Result<()> {
    let dir = WidgetDir::new(path);
    let schema = dir.load_schema()?;
    let configuration = generate_widget_configuration(&schema);

    if print {
        println!("{}", serde_json::to_string_pretty(&configuration)?);
        return Ok(());
    }

    let written = dir.write_configuration(&configuration)?;
    println!(
        "{} Wrote {} settings to {}",
        "OK".green().bold(),
        configuration.len(),
        written.display()
    );
    Ok(())
}
