//! Widget resource validation command

use std::path::Path;

use colored::Colorize;
use widget_fs::{WidgetDir, WidgetFileType};

use crate::error::{CliError, Result};

/// Load and parse every resource of the widget, reporting each one.
///
/// Fails if any resource is invalid.
pub fn run_validate(path: &Path) -> Result<()> {
    let dir = WidgetDir::new(path);
    let mut failures = 0;

    for kind in WidgetFileType::ALL {
        match check_resource(&dir, kind) {
            Ok(()) => println!("  {} {}", "ok".green(), kind),
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "error".red().bold(), kind, e);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::user(format!(
            "{failures} widget resource(s) failed validation"
        )));
    }
    Ok(())
}

fn check_resource(dir: &WidgetDir, kind: WidgetFileType) -> widget_fs::Result<()> {
    match kind {
        WidgetFileType::Schema => dir.load_schema().map(drop),
        WidgetFileType::Configuration => dir.load_configuration().map(drop),
        WidgetFileType::Meta => dir.load_meta().map(drop),
        WidgetFileType::QueryParams
        | WidgetFileType::QueryParamsBuilder
        | WidgetFileType::Translation => dir.load_json(kind).map(drop),
        WidgetFileType::Template | WidgetFileType::Query => dir.load(kind).map(drop),
    }
}
