//! API credentials

/// Credentials and base path for the widget template API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL, e.g. `https://api.example.com/stores/abc/v3`
    pub api_path: String,
    /// Sent as `X-Auth-Client`
    pub auth_id: String,
    /// Sent as `X-Auth-Token`
    pub auth_token: String,
}

impl AuthConfig {
    pub fn new(
        api_path: impl Into<String>,
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            api_path: api_path.into(),
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Names of the fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api_path", &self.api_path),
            ("auth_id", &self.auth_id),
            ("auth_token", &self.auth_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Check that every credential is set.
///
/// Logs one error per empty field and returns `false` if any is empty.
pub fn check_credentials(auth: &AuthConfig) -> bool {
    let missing = auth.missing_fields();
    for field in &missing {
        tracing::error!(field = *field, "Missing credential");
    }
    missing.is_empty()
}
