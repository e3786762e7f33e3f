//! Token issuance and refresh primitives
//!
//! Provides the building blocks of a stateless login/refresh pipeline:
//! - Signing and verifying claim sets (HS256 JWT)
//! - Issuing short-lived access tokens paired with long-lived refresh tokens
//! - Building the HttpOnly cookie that carries the refresh token
//! - Password hashing (Argon2id)
//!
//! Services own the orchestration (which user store to consult, how to write
//! responses) and compose these pieces.
//!
//! # Examples
//!
//! ## Token pairs
//! ```
//! use auth::{Identity, TokenIssuer, TokenSettings};
//! use chrono::Duration;
//!
//! let settings = TokenSettings::new(
//!     "movies",
//!     "movies-web",
//!     Duration::minutes(15),
//!     Duration::hours(24),
//! )
//! .unwrap();
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", settings);
//!
//! let pair = issuer
//!     .generate_token_pair(&Identity::new(7, "Ada", "Lovelace"))
//!     .unwrap();
//! let claims = issuer.verify(&pair.refresh_token).unwrap();
//! assert_eq!(claims.sub, "7");
//! ```
//!
//! ## Refresh cookie
//! ```
//! use auth::{CookieSettings, RefreshCookieManager};
//! use chrono::Duration;
//!
//! let cookies = RefreshCookieManager::new(
//!     CookieSettings {
//!         name: "refresh_token".to_string(),
//!         path: "/refresh".to_string(),
//!         domain: "localhost".to_string(),
//!         secure: true,
//!     },
//!     Duration::hours(24),
//! );
//! let cookie = cookies.build_refresh_cookie("token");
//! assert_eq!(cookie.http_only(), Some(true));
//! ```

pub mod jwt;
pub mod password;
pub mod refresh_cookie;
pub mod tokens;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::ClaimsCodec;
pub use jwt::JwtError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use refresh_cookie::CookieSettings;
pub use refresh_cookie::RefreshCookieManager;
pub use tokens::Identity;
pub use tokens::TokenError;
pub use tokens::TokenIssuer;
pub use tokens::TokenPair;
pub use tokens::TokenSettings;
