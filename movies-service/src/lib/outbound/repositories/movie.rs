use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    release_date: NaiveDate,
    runtime: i32,
    mpaa_rating: String,
    description: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            release_date: row.release_date,
            runtime: row.runtime,
            mpaa_rating: row.mpaa_rating,
            description: row.description,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, release_date, runtime, mpaa_rating, description, image,
                   created_at, updated_at
            FROM movies
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }
}
