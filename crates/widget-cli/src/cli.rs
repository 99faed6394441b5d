//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use widget_api::AuthConfig;

/// Widget Builder - Develop, preview and publish storefront widgets
#[derive(Parser, Debug)]
#[command(name = "widget-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate config.json from the widget's schema defaults
    ///
    /// Examples:
    ///   widget-builder generate-config              # Current directory
    ///   widget-builder generate-config my-widget    # Another widget
    ///   widget-builder generate-config --print      # Print, do not write
    GenerateConfig {
        /// Widget directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Print the configuration instead of writing config.json
        #[arg(long)]
        print: bool,
    },

    /// Check that every widget resource loads and parses
    Validate {
        /// Widget directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Check that API credentials are set
    CheckAuth {
        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Render the widget through the preview API and print its HTML
    Preview {
        /// Widget directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Placement the preview is rendered for
        #[arg(long, default_value = "")]
        placement_uuid: String,

        /// Widget instance the preview is rendered for
        #[arg(long, default_value = "")]
        widget_uuid: String,

        #[command(flatten)]
        auth: AuthArgs,
    },

    /// Publish the widget template
    ///
    /// Creates a new template unless --uuid names an existing one.
    Publish {
        /// Widget directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Update the template with this uuid instead of creating one
        #[arg(long)]
        uuid: Option<String>,

        #[command(flatten)]
        auth: AuthArgs,
    },
}

/// Credentials for the widget template API.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AuthArgs {
    /// API base path
    #[arg(long, env = "WIDGET_BUILDER_API_PATH", default_value = "", hide_env_values = true)]
    pub api_path: String,

    /// API client id
    #[arg(long, env = "WIDGET_BUILDER_AUTH_ID", default_value = "", hide_env_values = true)]
    pub auth_id: String,

    /// API access token
    #[arg(long, env = "WIDGET_BUILDER_AUTH_TOKEN", default_value = "", hide_env_values = true)]
    pub auth_token: String,

    /// Storefront channel
    #[arg(long, env = "WIDGET_BUILDER_CHANNEL_ID", default_value_t = 1)]
    pub channel_id: u64,
}

impl AuthArgs {
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(&self.api_path, &self.auth_id, &self.auth_token)
    }
}
