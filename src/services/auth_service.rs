//! Authentication service - Registration and credential checks.
//!
//! There are no sessions or tokens: login only confirms that the
//! credentials match a stored user.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{PasswordHasher, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Duplicate emails create separate users.
    async fn register(&self, name: String, email: String, password: String)
        -> AppResult<UserResponse>;

    /// Check credentials and return the matching user
    async fn login(&self, email: String, password: String) -> AppResult<UserResponse>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<UserResponse> {
        let password_hash = self.hasher.hash(&password)?;
        let user = User::new(name, email, password_hash);

        let id = self.users.create(&user).await?;
        tracing::info!(%id, "user registered");

        Ok(UserResponse {
            id,
            name: user.name,
            email: user.email,
        })
    }

    async fn login(&self, email: String, password: String) -> AppResult<UserResponse> {
        let record = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self.hasher.verify(&password, &record.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(UserResponse::from(record))
    }
}
