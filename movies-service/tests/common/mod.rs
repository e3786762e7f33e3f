use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::CookieSettings;
use auth::PasswordHasher;
use auth::RefreshCookieManager;
use auth::TokenIssuer;
use auth::TokenSettings;
use axum::http::HeaderValue;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use movies_service::domain::movie::errors::MovieError;
use movies_service::domain::movie::models::Movie;
use movies_service::domain::movie::models::MovieId;
use movies_service::domain::movie::ports::MovieRepository;
use movies_service::domain::movie::service::MovieService;
use movies_service::domain::session::service::SessionService;
use movies_service::domain::user::models::EmailAddress;
use movies_service::domain::user::models::User;
use movies_service::domain::user::models::UserId;
use movies_service::domain::user::ports::UserRepository;
use movies_service::domain::user::service::UserService;
use movies_service::inbound::http::router::create_router;
use movies_service::user::errors::UserError;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::seeded())));
        let movie_service = Arc::new(MovieService::new(Arc::new(InMemoryMovieRepository::seeded())));

        let session_service = Arc::new(SessionService::new(
            user_service,
            TokenIssuer::new(TEST_SECRET, token_settings()),
            RefreshCookieManager::new(cookie_settings(), Duration::hours(24)),
        ));

        let router = create_router(
            session_service,
            movie_service,
            HeaderValue::from_static("http://localhost:3000"),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            // No cookie store: the refresh cookie is Secure and scoped to
            // localhost, so tests replay it by hand.
            api_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create reqwest client"),
            token_issuer: TokenIssuer::new(TEST_SECRET, token_settings()),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request carrying the refresh cookie
    pub fn get_with_refresh_cookie(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path)
            .header(reqwest::header::COOKIE, format!("{}={}", REFRESH_COOKIE, token))
    }
}

pub fn token_settings() -> TokenSettings {
    TokenSettings::new(
        "example.com",
        "example.com",
        Duration::minutes(15),
        Duration::hours(24),
    )
    .expect("Invalid token settings")
}

pub fn cookie_settings() -> CookieSettings {
    CookieSettings {
        name: REFRESH_COOKIE.to_string(),
        path: "/refresh".to_string(),
        domain: "localhost".to_string(),
        secure: true,
    }
}

/// Raw `Set-Cookie` values of a response
pub fn set_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().expect("Non-ASCII Set-Cookie").to_string())
        .collect()
}

/// User store seeded with user 7 (`a@b.com` / `correct`)
pub struct InMemoryUserRepository {
    users: HashMap<i64, User>,
}

impl InMemoryUserRepository {
    pub fn seeded() -> Self {
        // Cheap parameters; verification reads them back from the PHC string.
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Invalid argon2 params");

        let user = User {
            id: UserId(7),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new("a@b.com".to_string()).unwrap(),
            password_hash: hasher.hash("correct").expect("Failed to hash password"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        Self {
            users: HashMap::from([(user.id.0, user)]),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }
}

pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
}

impl InMemoryMovieRepository {
    pub fn seeded() -> Self {
        let movie = |id: i64, title: &str, year: i32, runtime: i32, rating: &str| Movie {
            id: MovieId(id),
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            runtime,
            mpaa_rating: rating.to_string(),
            description: format!("{} description", title),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        Self {
            movies: vec![
                movie(1, "Raiders of the Lost Ark", 1981, 115, "PG-13"),
                movie(2, "Highlander", 1986, 116, "R"),
                movie(3, "The Godfather", 1972, 175, "18A"),
            ],
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let mut movies = self.movies.clone();
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(movies)
    }
}
