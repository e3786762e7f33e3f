use thiserror::Error;

use crate::jwt::JwtError;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid token lifetimes: {0}")]
    InvalidLifetime(String),

    #[error("Token signing failed: {0}")]
    Signing(#[from] JwtError),
}
