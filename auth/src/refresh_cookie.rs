//! Refresh cookie construction.

use cookie::Cookie;
use cookie::SameSite;
use time::OffsetDateTime;

/// Where the refresh cookie is scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    /// Restricts the cookie to the refresh endpoint.
    pub path: String,
    pub domain: String,
    /// Must be true outside local development.
    pub secure: bool,
}

/// Builds the cookie carrying the refresh token, and its clearing twin.
///
/// Both cookies are `HttpOnly` and `SameSite=Strict`, share name, path and
/// domain, so a browser replaces one with the other.
pub struct RefreshCookieManager {
    settings: CookieSettings,
    max_age: time::Duration,
}

impl RefreshCookieManager {
    /// # Arguments
    /// * `settings` - Cookie scope
    /// * `refresh_token_lifetime` - Lifetime of the refresh token, used as `Max-Age`
    pub fn new(settings: CookieSettings, refresh_token_lifetime: chrono::Duration) -> Self {
        Self {
            settings,
            max_age: time::Duration::seconds(refresh_token_lifetime.num_seconds()),
        }
    }

    /// Configured cookie name, for looking the cookie up on requests.
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    /// Cookie carrying `refresh_token`, living as long as the token does.
    ///
    /// `Expires` is omitted when it would fall outside the representable
    /// range; `Max-Age` still bounds the cookie.
    pub fn build_refresh_cookie(&self, refresh_token: &str) -> Cookie<'static> {
        self.build(
            refresh_token.to_string(),
            self.max_age,
            OffsetDateTime::now_utc().checked_add(self.max_age),
        )
    }

    /// Empty cookie that makes the browser drop the refresh cookie.
    pub fn build_expired_cookie(&self) -> Cookie<'static> {
        self.build(
            String::new(),
            time::Duration::ZERO,
            Some(OffsetDateTime::UNIX_EPOCH),
        )
    }

    fn build(
        &self,
        value: String,
        max_age: time::Duration,
        expires: Option<OffsetDateTime>,
    ) -> Cookie<'static> {
        Cookie::build((self.settings.name.clone(), value))
            .path(self.settings.path.clone())
            .domain(self.settings.domain.clone())
            .max_age(max_age)
            .expires(expires)
            .http_only(true)
            .secure(self.settings.secure)
            .same_site(SameSite::Strict)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(secure: bool) -> RefreshCookieManager {
        RefreshCookieManager::new(
            CookieSettings {
                name: "refresh_token".to_string(),
                path: "/refresh".to_string(),
                domain: "localhost".to_string(),
                secure,
            },
            chrono::Duration::hours(24),
        )
    }

    #[test]
    fn test_build_refresh_cookie() {
        let cookie = manager(true).build_refresh_cookie("token-value");

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/refresh"));
        assert_eq!(cookie.domain(), Some("localhost"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));

        let expires = cookie.expires_datetime().expect("expires is set");
        assert!(expires > OffsetDateTime::now_utc() + time::Duration::hours(23));
    }

    #[test]
    fn test_insecure_cookie_for_development() {
        let cookie = manager(false).build_refresh_cookie("token-value");
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_build_expired_cookie() {
        let manager = manager(true);
        let cookie = manager.build_expired_cookie();

        assert_eq!(cookie.name(), manager.name());
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/refresh"));
        assert_eq!(cookie.domain(), Some("localhost"));
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_set_cookie_header_attributes() {
        let header = manager(true).build_refresh_cookie("abc").to_string();

        assert!(header.starts_with("refresh_token=abc"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Secure"));
        assert!(header.contains("SameSite=Strict"));
        assert!(header.contains("Path=/refresh"));
        assert!(header.contains("Max-Age=86400"));
    }

    #[test]
    fn test_oversized_lifetime_does_not_panic() {
        let manager = RefreshCookieManager::new(
            CookieSettings {
                name: "refresh_token".to_string(),
                path: "/refresh".to_string(),
                domain: "localhost".to_string(),
                secure: true,
            },
            chrono::Duration::hours(1_000_000_000_000),
        );

        let cookie = manager.build_refresh_cookie("abc");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.expires_datetime(), None);
        assert!(cookie.to_string().contains("Max-Age="));
    }
}
