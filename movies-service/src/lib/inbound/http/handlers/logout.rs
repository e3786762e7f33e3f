use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::router::AppState;

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (
        StatusCode::ACCEPTED,
        jar.add(state.session_service.logout()),
    )
}
