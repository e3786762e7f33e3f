use std::fmt;

use auth::TokenPair;
use cookie::Cookie;

/// Email and password submitted at login. Never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a successful login or refresh: the pair for the body and the
/// refresh cookie for the `Set-Cookie` header.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub tokens: TokenPair,
    pub refresh_cookie: Cookie<'static>,
}
