//! Token Issuance
//!
//! Shared by the sign-in and refresh paths. Tokens are generated at the
//! moment they are bound; a token value is never computed ahead of time
//! and reused across calls.

use std::sync::Arc;

use platform::crypto::generate_token;

use crate::application::config::AuthConfig;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{
    session_token::{TokenKind, TokenPair},
    user_id::UserId,
};
use crate::error::AuthResult;

/// Issues access/refresh token pairs and binds them in the session store
pub struct TokenIssuer<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> TokenIssuer<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }

    /// Issue a token pair for a user
    ///
    /// The access token is always freshly generated. The refresh token
    /// is freshly generated too, unless the caller passes an existing
    /// one to renew (the refresh path keeps the client's refresh token
    /// and only extends its lifetime).
    pub async fn issue_pair(
        &self,
        user_id: &UserId,
        refresh_token: Option<String>,
    ) -> AuthResult<TokenPair> {
        let access_token = generate_token();
        let refresh_token = refresh_token.unwrap_or_else(generate_token);

        self.sessions
            .put(
                &TokenKind::Access.key(&access_token),
                user_id,
                self.config.ttl_for(TokenKind::Access),
            )
            .await?;
        self.sessions
            .put(
                &TokenKind::Refresh.key(&refresh_token),
                user_id,
                self.config.ttl_for(TokenKind::Refresh),
            )
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
