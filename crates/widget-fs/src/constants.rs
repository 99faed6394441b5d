//! The fixed resource files of a widget directory.

use std::path::Path;

/// Every file a widget directory may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetFileType {
    /// `widget.html` - Handlebars template markup
    Template,
    /// `config.json` - the widget's configuration values
    Configuration,
    /// `schema.json` - the settings schema
    Schema,
    /// `widget.yaml` - name and other metadata
    Meta,
    /// `query.graphql` - storefront API query
    Query,
    /// `queryParams.json` - variables for the query
    QueryParams,
    /// `queryParamsBuilder.json` - page builder description of the variables
    QueryParamsBuilder,
    /// `schema_translations.json` - translated schema labels
    Translation,
}

impl WidgetFileType {
    pub const ALL: [WidgetFileType; 8] = [
        Self::Template,
        Self::Configuration,
        Self::Schema,
        Self::Meta,
        Self::Query,
        Self::QueryParams,
        Self::QueryParamsBuilder,
        Self::Translation,
    ];

    /// File name inside the widget directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Template => "widget.html",
            Self::Configuration => "config.json",
            Self::Schema => "schema.json",
            Self::Meta => "widget.yaml",
            Self::Query => "query.graphql",
            Self::QueryParams => "queryParams.json",
            Self::QueryParamsBuilder => "queryParamsBuilder.json",
            Self::Translation => "schema_translations.json",
        }
    }

    /// Payload substituted when an optional file is absent.
    ///
    /// `None` marks a required resource.
    pub fn fallback(&self) -> Option<&'static str> {
        match self {
            Self::Configuration | Self::QueryParams | Self::Translation => Some("{}"),
            Self::Meta | Self::Query => Some(""),
            Self::Template | Self::Schema | Self::QueryParamsBuilder => None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.fallback().is_none()
    }
}

impl AsRef<Path> for WidgetFileType {
    fn as_ref(&self) -> &Path {
        Path::new(self.file_name())
    }
}

impl std::fmt::Display for WidgetFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
