use std::sync::Arc;

use auth::RefreshCookieManager;
use auth::TokenIssuer;
use cookie::Cookie;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Credentials;
use crate::domain::session::models::IssuedSession;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Login, refresh and logout over a user store.
///
/// Stateless apart from the immutable signing keys: no session table, a
/// refresh token stays valid until its own expiry.
pub struct SessionService {
    users: Arc<dyn UserServicePort>,
    issuer: TokenIssuer,
    cookies: RefreshCookieManager,
}

impl SessionService {
    pub fn new(
        users: Arc<dyn UserServicePort>,
        issuer: TokenIssuer,
        cookies: RefreshCookieManager,
    ) -> Self {
        Self {
            users,
            issuer,
            cookies,
        }
    }

    /// Name of the cookie carrying the refresh token.
    pub fn refresh_cookie_name(&self) -> &str {
        self.cookies.name()
    }

    /// Verify credentials and issue a fresh session.
    ///
    /// Unknown email and wrong password fail identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such user, or the password does not verify
    /// * `UserStore` - The store failed while looking the user up
    /// * `LoginIssuance` - Tokens could not be signed
    pub async fn login(&self, credentials: Credentials) -> Result<IssuedSession, SessionError> {
        let user = self.find_user_by_email(credentials.email).await?;

        match self.users.verify_password(&user, &credentials.password).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
                return Err(SessionError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Login rejected: password verification failed");
                return Err(SessionError::InvalidCredentials);
            }
        }

        let session = self.issue(&user).map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Failed to issue tokens on login");
            SessionError::LoginIssuance
        })?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(session)
    }

    /// Exchange a refresh token for a new session (rotation).
    ///
    /// The user is looked up again from the token subject; nothing else in
    /// the token is trusted.
    ///
    /// # Errors
    /// * `MissingRefreshToken` - No refresh cookie on the request
    /// * `InvalidRefreshToken` - Token is expired, tampered or malformed
    /// * `UnknownUser` - Subject is not a valid id or the user is gone
    /// * `RefreshIssuance` - Tokens could not be signed
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<IssuedSession, SessionError> {
        let refresh_token = refresh_token.ok_or_else(|| {
            tracing::warn!("Refresh rejected: no refresh cookie");
            SessionError::MissingRefreshToken
        })?;

        let claims = self.issuer.verify(refresh_token).map_err(|e| {
            tracing::warn!(error = %e, "Refresh rejected: token verification failed");
            SessionError::InvalidRefreshToken
        })?;

        let user_id = UserId::from_subject(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Refresh rejected: unusable subject");
            SessionError::UnknownUser
        })?;

        let user = self.users.get_user(&user_id).await.map_err(|e| {
            tracing::warn!(user_id = %user_id, error = %e, "Refresh rejected: user lookup failed");
            SessionError::UnknownUser
        })?;

        let session = self.issue(&user).map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Failed to issue tokens on refresh");
            SessionError::RefreshIssuance
        })?;

        tracing::debug!(user_id = %user.id, "Session refreshed");
        Ok(session)
    }

    /// Cookie that clears the refresh cookie in the browser.
    pub fn logout(&self) -> Cookie<'static> {
        self.cookies.build_expired_cookie()
    }

    async fn find_user_by_email(&self, email: String) -> Result<User, SessionError> {
        let email = EmailAddress::new(email).map_err(|e| {
            tracing::warn!(error = %e, "Login rejected: malformed email");
            SessionError::InvalidCredentials
        })?;

        self.users
            .get_user_by_email(&email)
            .await
            .map_err(|e| match e {
                UserError::NotFoundByEmail(_) => {
                    tracing::warn!("Login rejected: unknown email");
                    SessionError::InvalidCredentials
                }
                other => {
                    tracing::error!(error = %other, "User lookup failed during login");
                    SessionError::UserStore
                }
            })
    }

    fn issue(&self, user: &User) -> Result<IssuedSession, auth::TokenError> {
        let tokens = self.issuer.generate_token_pair(&user.identity())?;
        let refresh_cookie = self.cookies.build_refresh_cookie(&tokens.refresh_token);

        Ok(IssuedSession {
            tokens,
            refresh_cookie,
        })
    }
}
