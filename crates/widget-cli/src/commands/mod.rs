//! Command implementations for widget-cli

pub mod auth;
pub mod generate;
pub mod preview;
pub mod publish;
pub mod validate;

pub use auth::run_check_auth;
pub use generate::run_generate_config;
pub use preview::run_preview;
pub use publish::run_publish;
pub use validate::run_validate;
