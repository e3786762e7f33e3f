use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// API version reported by the status payload, independent of the crate version.
pub const API_VERSION: &str = "1.0.0";

pub async fn home() -> ApiSuccess<HomeResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HomeResponseData {
            status: "active".to_string(),
            message: "Go Movies up and running".to_string(),
            version: API_VERSION.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponseData {
    pub status: String,
    pub message: String,
    pub version: String,
}
