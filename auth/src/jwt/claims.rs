use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed payload carried by access and refresh tokens.
///
/// `sub` is the only authoritative field: it holds the stringified user id.
/// `name` is informational and only present on access tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (stringified user id)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Display name of the subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Claims {
    /// Create claims valid for `lifetime` starting at `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Identifier of the principal
    /// * `issuer` - Token issuer
    /// * `audience` - Intended audience
    /// * `issued_at` - Issue instant
    /// * `lifetime` - Validity window, must be positive for `exp > iat` to hold
    pub fn new(
        subject: impl ToString,
        issuer: impl ToString,
        audience: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let expires_at = issued_at + lifetime;

        Self {
            sub: subject.to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
