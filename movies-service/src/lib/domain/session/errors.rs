use thiserror::Error;

/// Failures of the login and refresh flows.
///
/// Display strings are the only text that reaches clients, so they stay
/// generic; details go to the logs where the error is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Unknown email, wrong password or unverifiable hash.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Refresh requested without the refresh cookie.
    #[error("unauthorized")]
    MissingRefreshToken,

    /// Refresh token expired, tampered or otherwise unverifiable.
    #[error("unauthorized")]
    InvalidRefreshToken,

    /// Token subject does not resolve to a stored user.
    #[error("unknown user")]
    UnknownUser,

    /// Tokens could not be issued on refresh.
    #[error("error generating tokens")]
    RefreshIssuance,

    /// Tokens could not be issued on login.
    #[error("error generating tokens")]
    LoginIssuance,

    /// User store failed during login.
    #[error("internal server error")]
    UserStore,
}
