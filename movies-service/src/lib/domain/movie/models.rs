use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub release_date: NaiveDate,
    /// Running time in minutes
    pub runtime: i32,
    pub mpaa_rating: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(pub i64);
