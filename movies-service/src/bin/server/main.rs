use std::sync::Arc;

use auth::RefreshCookieManager;
use auth::TokenIssuer;
use axum::http::HeaderValue;
use movies_service::config::Config;
use movies_service::domain::movie::service::MovieService;
use movies_service::domain::session::service::SessionService;
use movies_service::domain::user::service::UserService;
use movies_service::inbound::http::router::create_router;
use movies_service::outbound::repositories::PostgresMovieRepository;
use movies_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MIN_SECRET_BYTES: usize = 32;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movies-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        allowed_origin = %config.server.allowed_origin,
        jwt_issuer = %config.jwt.issuer,
        jwt_audience = %config.jwt.audience,
        cookie_domain = %config.cookie.domain,
        "Configuration loaded"
    );

    if config.jwt.secret.len() < MIN_SECRET_BYTES {
        tracing::warn!(
            length = config.jwt.secret.len(),
            minimum = MIN_SECRET_BYTES,
            "JWT secret is shorter than recommended"
        );
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_settings = config.jwt.token_settings()?;
    let cookie_manager = RefreshCookieManager::new(
        (&config.cookie).into(),
        token_settings.refresh_token_lifetime(),
    );
    let token_issuer = TokenIssuer::new(config.jwt.secret.as_bytes(), token_settings);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let movie_repository = Arc::new(PostgresMovieRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let movie_service = Arc::new(MovieService::new(movie_repository));
    let session_service = Arc::new(SessionService::new(
        user_service,
        token_issuer,
        cookie_manager,
    ));

    let allowed_origin = HeaderValue::from_str(&config.server.allowed_origin)?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(session_service, movie_service, allowed_origin);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
