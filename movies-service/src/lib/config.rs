use std::env;

use auth::CookieSettings;
use auth::TokenError;
use auth::TokenSettings;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cookie: CookieConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Origin allowed to call the API with credentials (the frontend).
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_token_minutes: i64,
    pub refresh_token_hours: i64,
}

impl JwtConfig {
    /// Validated token settings for the issuer.
    pub fn token_settings(&self) -> Result<TokenSettings, TokenError> {
        TokenSettings::new(
            self.issuer.clone(),
            self.audience.clone(),
            Duration::minutes(self.access_token_minutes),
            Duration::hours(self.refresh_token_hours),
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    pub domain: String,
    pub secure: bool,
}

impl From<&CookieConfig> for CookieSettings {
    fn from(config: &CookieConfig) -> Self {
        Self {
            name: config.name.clone(),
            path: config.path.clone(),
            domain: config.domain.clone(),
            secure: config.secure,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, COOKIE__DOMAIN, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
