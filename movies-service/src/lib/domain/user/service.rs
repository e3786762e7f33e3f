use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service backed by `repository`.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn verify_password(&self, user: &User, password: &str) -> Result<bool, UserError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_string();
        let hash = user.password_hash.clone();

        // Argon2 is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || hasher.matches(&password, &hash))
            .await
            .map_err(|e| {
                UserError::Password(auth::PasswordError::VerificationFailed(e.to_string()))
            })?
            .map_err(UserError::from)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn user_with_password(password: &str) -> User {
        let hasher = auth::PasswordHasher::with_params(1024, 1, 1).unwrap();

        User {
            id: UserId(7),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new("a@b.com".to_string()).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();
        let expected_user = user_with_password("correct");

        let returned_user = expected_user.clone();
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(7))
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(&UserId(7)).await.unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(42)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut repository = MockTestUserRepository::new();
        let expected_user = user_with_password("correct");

        let returned_user = expected_user.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "a@b.com")
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("a@b.com".to_string()).unwrap();
        let user = service.get_user_by_email(&email).await.unwrap();
        assert_eq!(user.id, UserId(7));
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("nobody@b.com".to_string()).unwrap();
        let result = service.get_user_by_email(&email).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::NotFoundByEmail(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_database_error() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection refused".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(7)).await;
        assert!(matches!(result.unwrap_err(), UserError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_verify_password() {
        let service = UserService::new(Arc::new(MockTestUserRepository::new()));
        let user = user_with_password("correct");

        assert!(service.verify_password(&user, "correct").await.unwrap());
        assert!(!service.verify_password(&user, "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_password_corrupt_hash() {
        let service = UserService::new(Arc::new(MockTestUserRepository::new()));
        let mut user = user_with_password("correct");
        user.password_hash = "not-a-phc-string".to_string();

        let result = service.verify_password(&user, "correct").await;
        assert!(matches!(result.unwrap_err(), UserError::Password(_)));
    }
}
