//! Authorization Guard
//!
//! Resolves a bearer access token to the signed-in user. Protected
//! handlers call this explicitly and receive the user as a value; there
//! is no middleware or hidden request state involved.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::session_token::TokenKind;
use crate::error::{AuthError, AuthResult};

/// Authorization use case
pub struct AuthorizeUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    users: Arc<U>,
    sessions: Arc<S>,
}

impl<U, S> AuthorizeUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>) -> Self {
        Self { users, sessions }
    }

    /// Resolve an access token to its user
    ///
    /// Every failure mode is `Unauthorized`: missing token, unknown or
    /// expired token, and a token whose user has since disappeared.
    pub async fn execute(&self, access_token: Option<&str>) -> AuthResult<User> {
        let token = access_token.ok_or(AuthError::Unauthorized)?;

        let user_id = self
            .sessions
            .get(&TokenKind::Access.key(token))
            .await?
            .ok_or(AuthError::Unauthorized)?;

        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}
