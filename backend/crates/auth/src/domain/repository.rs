//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer.

use std::time::Duration;

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Fails with `AuthError::UserNameTaken` when the user name is
    /// already registered. The check rides on the unique constraint,
    /// so concurrent signups cannot both succeed.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Delete a user by name (startup reseed only)
    async fn delete_by_user_name(&self, user_name: &UserName) -> AuthResult<()>;
}

/// Expiring key-value store binding tokens to user IDs
///
/// Keys are namespaced token values (see `TokenKind::key`). A key that
/// has outlived its TTL behaves exactly as if it were never written.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Bind `key` to `user_id` for `ttl`, replacing any prior binding
    async fn put(&self, key: &str, user_id: &UserId, ttl: Duration) -> AuthResult<()>;

    /// Resolve a key to its user ID, if present and not expired
    async fn get(&self, key: &str) -> AuthResult<Option<UserId>>;

    /// Remove a binding; removing an absent key is not an error
    async fn delete(&self, key: &str) -> AuthResult<()>;

    /// Drop expired entries, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
