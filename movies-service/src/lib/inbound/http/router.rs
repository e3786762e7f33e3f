use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::all_movies::all_movies;
use super::handlers::authenticate::authenticate;
use super::handlers::home::home;
use super::handlers::logout::logout;
use super::handlers::refresh_token::refresh_token;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::session::service::SessionService;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub movie_service: Arc<dyn MovieServicePort>,
}

pub fn create_router(
    session_service: Arc<SessionService>,
    movie_service: Arc<dyn MovieServicePort>,
    allowed_origin: HeaderValue,
) -> Router {
    let state = AppState {
        session_service,
        movie_service,
    };

    // Headers carry the refresh cookie; keep them out of the span.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(home))
        .route("/movies", get(all_movies))
        .route("/authenticate", post(authenticate))
        .route("/refresh", get(refresh_token))
        .route("/logout", get(logout))
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state)
}
