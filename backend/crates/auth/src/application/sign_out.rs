//! Sign Out Use Case
//!
//! Revokes an access token. Signing out with an already-revoked or
//! expired token succeeds; the end state is the same either way.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_token::TokenKind;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, access_token: &str) -> AuthResult<()> {
        self.sessions
            .delete(&TokenKind::Access.key(access_token))
            .await?;

        tracing::debug!("Access token revoked");

        Ok(())
    }
}
