use auth::TokenPair;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<AuthenticateRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<TokenPair>), ApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed login body");
        ApiError::BadRequest("invalid request body".to_string())
    })?;

    let session = state.session_service.login(body.into()).await?;

    Ok((
        jar.add(session.refresh_cookie),
        ApiSuccess::new(StatusCode::ACCEPTED, session.tokens),
    ))
}

#[derive(Clone, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

impl From<AuthenticateRequestBody> for Credentials {
    fn from(body: AuthenticateRequestBody) -> Self {
        Credentials {
            email: body.email,
            password: body.password,
        }
    }
}
