use thiserror::Error;

/// Error type for signing and verifying tokens.
///
/// The verification variants are kept apart so callers can log them
/// differently; at the HTTP boundary they all mean "unauthorized".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token claim rejected: {0}")]
    ClaimRejected(String),
}
