use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::movie::models::Movie;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;

pub async fn all_movies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    let movies = state.movie_service.all_movies().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        movies.iter().map(MovieData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieData {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub mpaa_rating: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.0,
            title: movie.title.clone(),
            release_date: movie.release_date,
            runtime: movie.runtime,
            mpaa_rating: movie.mpaa_rating.clone(),
            description: movie.description.clone(),
            image: movie.image.clone(),
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
