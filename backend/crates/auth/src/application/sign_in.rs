//! Sign In Use Case
//!
//! Authenticates a user and issues a fresh token pair.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::{session_token::TokenPair, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub tokens: TokenPair,
    /// Access token lifetime in seconds
    pub access_expires_in: u64,
    /// Refresh token lifetime in seconds
    pub refresh_expires_in: u64,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    users: Arc<U>,
    issuer: TokenIssuer<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            issuer: TokenIssuer::new(sessions, Arc::clone(&config)),
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed name cannot belong to any user
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .users
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Wrong passwords come back as Mismatch and map to
        // InvalidCredentials; anything else is an internal fault
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;
        let pepper = self.config.pepper().map(<[u8]>::to_vec);
        let password_hash = user.password_hash.clone();
        tokio::task::spawn_blocking(move || password_hash.verify(&password, pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        let tokens = self.issuer.issue_pair(&user.id, None).await?;

        tracing::info!(
            user_id = %user.id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            tokens,
            access_expires_in: self.config.access_token_ttl_secs(),
            refresh_expires_in: self.config.refresh_token_ttl_secs(),
        })
    }
}
