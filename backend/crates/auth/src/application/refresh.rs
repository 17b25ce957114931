//! Refresh Use Case
//!
//! Exchanges a valid refresh token for a new access token. The refresh
//! token itself is kept and its lifetime extended, so a client holds at
//! most one refresh token at a time.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenIssuer;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_token::{TokenKind, TokenPair};
use crate::error::{AuthError, AuthResult};

/// Refresh output
pub struct RefreshOutput {
    pub tokens: TokenPair,
    pub access_expires_in: u64,
    pub refresh_expires_in: u64,
}

/// Refresh use case
pub struct RefreshUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
    issuer: TokenIssuer<S>,
    config: Arc<AuthConfig>,
}

impl<S> RefreshUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            issuer: TokenIssuer::new(Arc::clone(&sessions), Arc::clone(&config)),
            sessions,
            config,
        }
    }

    pub async fn execute(&self, refresh_token: String) -> AuthResult<RefreshOutput> {
        let user_id = self
            .sessions
            .get(&TokenKind::Refresh.key(&refresh_token))
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let tokens = self.issuer.issue_pair(&user_id, Some(refresh_token)).await?;

        tracing::debug!(user_id = %user_id, "Access token refreshed");

        Ok(RefreshOutput {
            tokens,
            access_expires_in: self.config.access_token_ttl_secs(),
            refresh_expires_in: self.config.refresh_token_ttl_secs(),
        })
    }
}
