//! Credential check command

use colored::Colorize;
use widget_api::{AuthConfig, check_credentials};

use crate::error::{CliError, Result};

pub fn run_check_auth(auth: &AuthConfig) -> Result<()> {
    if !check_credentials(auth) {
        return Err(CliError::user(format!(
            "Credentials incomplete: {}",
            auth.missing_fields().join(", ")
        )));
    }

    println!("{} Credentials are set", "OK".green().bold());
    Ok(())
}
