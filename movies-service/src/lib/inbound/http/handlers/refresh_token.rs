use auth::TokenPair;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<TokenPair>), ApiError> {
    let refresh_token = jar
        .get(state.session_service.refresh_cookie_name())
        .map(|cookie| cookie.value().to_string());

    let session = state
        .session_service
        .refresh(refresh_token.as_deref())
        .await?;

    Ok((
        jar.add(session.refresh_cookie),
        ApiSuccess::new(StatusCode::OK, session.tokens),
    ))
}
