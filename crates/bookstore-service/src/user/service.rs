//! User operations: registration, login, profile, and author enrolment.

use std::sync::Arc;

use tracing::info;

use bookstore_auth::jwt::{TokenIssuer, TokenPair};
use bookstore_auth::password::{PasswordHasher, PasswordValidator};
use bookstore_auth::CallerIdentity;
use bookstore_core::error::AppError;
use bookstore_core::result::AppResult;
use bookstore_database::store::UserStore;
use bookstore_entity::user::{CreateUser, UpdateUser, User};

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued access and refresh tokens.
    pub tokens: TokenPair,
}

/// Handles account and profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    issuer: Arc<TokenIssuer>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            issuer,
        }
    }

    /// Registers a new reader account.
    pub async fn register(&self, req: RegisterUser) -> AppResult<User> {
        self.validator.validate(&req.password)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                req.email
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: req.name,
                email: req.email,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a token pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "Login with incorrect password");
            return Err(AppError::unauthorized("Incorrect password"));
        }

        let tokens = self.issuer.issue_token_pair(user.id, &user.email)?;

        info!(user_id = user.id, "User logged in");
        Ok(LoginResult { user, tokens })
    }

    /// Gets the caller's own profile.
    pub async fn get_profile(&self, caller: &CallerIdentity) -> AppResult<User> {
        self.get_user(caller.user_id).await
    }

    /// Updates the caller's own profile.
    pub async fn update_profile(
        &self,
        caller: &CallerIdentity,
        update: UpdateUser,
    ) -> AppResult<User> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        self.users
            .update_profile(caller.user_id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Deletes the caller's own account.
    ///
    /// Tokens already issued stay cryptographically valid until they expire,
    /// but the author gate rejects them with `NotFound` from now on.
    pub async fn delete_profile(&self, caller: &CallerIdentity) -> AppResult<()> {
        if !self.users.delete(caller.user_id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = caller.user_id, "User deleted own profile");
        Ok(())
    }

    /// Grants the author capability to the caller.
    pub async fn become_author(&self, caller: &CallerIdentity) -> AppResult<()> {
        if !self.users.set_author(caller.user_id, true).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = caller.user_id, "User became an author");
        Ok(())
    }

    /// Gets any user by ID.
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists all users.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Lists users holding the author capability.
    pub async fn list_authors(&self) -> AppResult<Vec<User>> {
        self.users.list_authors().await
    }
}
