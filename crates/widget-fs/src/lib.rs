//! Widget directory access for Widget Builder
//!
//! Loads the fixed set of resource files that make up a widget and writes
//! generated configuration back atomically.

pub mod constants;
pub mod error;
pub mod io;
pub mod loader;

pub use constants::WidgetFileType;
pub use error::{Error, Result};
pub use loader::{FileLoaderResponse, WidgetDir, WidgetMeta};
