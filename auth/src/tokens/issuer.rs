use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Serialize;

use super::errors::TokenError;
use super::identity::Identity;
use crate::jwt::Claims;
use crate::jwt::ClaimsCodec;
use crate::jwt::JwtError;

/// Longest accepted token lifetime. Keeps `iat + lifetime` and the cookie
/// expiry representable.
pub const MAX_TOKEN_LIFETIME_DAYS: i64 = 365;

/// Issuer, audience and lifetimes shared by every issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    issuer: String,
    audience: String,
    access_token_lifetime: Duration,
    refresh_token_lifetime: Duration,
}

impl TokenSettings {
    /// Validate and build token settings.
    ///
    /// # Errors
    /// * `InvalidLifetime` - A lifetime is not positive, the access token
    ///   would not be shorter-lived than the refresh token, or the refresh
    ///   token outlives [`MAX_TOKEN_LIFETIME_DAYS`]
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        access_token_lifetime: Duration,
        refresh_token_lifetime: Duration,
    ) -> Result<Self, TokenError> {
        if access_token_lifetime <= Duration::zero() {
            return Err(TokenError::InvalidLifetime(
                "access token lifetime must be positive".to_string(),
            ));
        }
        if refresh_token_lifetime <= access_token_lifetime {
            return Err(TokenError::InvalidLifetime(format!(
                "refresh token lifetime ({}s) must exceed access token lifetime ({}s)",
                refresh_token_lifetime.num_seconds(),
                access_token_lifetime.num_seconds()
            )));
        }
        if refresh_token_lifetime > Duration::days(MAX_TOKEN_LIFETIME_DAYS) {
            return Err(TokenError::InvalidLifetime(format!(
                "refresh token lifetime ({}s) exceeds {} days",
                refresh_token_lifetime.num_seconds(),
                MAX_TOKEN_LIFETIME_DAYS
            )));
        }

        Ok(Self {
            issuer: issuer.into(),
            audience: audience.into(),
            access_token_lifetime,
            refresh_token_lifetime,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn access_token_lifetime(&self) -> Duration {
        self.access_token_lifetime
    }

    pub fn refresh_token_lifetime(&self) -> Duration {
        self.refresh_token_lifetime
    }
}

/// Access and refresh token issued together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Builds signed token pairs for authenticated identities.
///
/// Holds no mutable state: the codec keys and settings are fixed at
/// construction, so one issuer can be shared across requests.
pub struct TokenIssuer {
    codec: ClaimsCodec,
    settings: TokenSettings,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`.
    pub fn new(secret: &[u8], settings: TokenSettings) -> Self {
        Self {
            codec: ClaimsCodec::new(secret, settings.issuer(), settings.audience()),
            settings,
        }
    }

    pub fn settings(&self) -> &TokenSettings {
        &self.settings
    }

    /// Issue an access/refresh pair for `identity`, valid from now.
    ///
    /// # Errors
    /// * `Signing` - Claims could not be signed
    pub fn generate_token_pair(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        self.generate_token_pair_at(identity, Utc::now())
    }

    /// Issue a pair as if it were `issued_at`.
    pub fn generate_token_pair_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let access_claims = Claims::new(
            identity.id,
            self.settings.issuer(),
            self.settings.audience(),
            issued_at,
            self.settings.access_token_lifetime(),
        )
        .with_name(identity.full_name());

        let refresh_claims = Claims::new(
            identity.id,
            self.settings.issuer(),
            self.settings.audience(),
            issued_at,
            self.settings.refresh_token_lifetime(),
        );

        Ok(TokenPair {
            access_token: self.codec.sign(&access_claims)?,
            refresh_token: self.codec.sign(&refresh_claims)?,
        })
    }

    /// Verify a token signed by this issuer.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.codec.verify(token)
    }
}
