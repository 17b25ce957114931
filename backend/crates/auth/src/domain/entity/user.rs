//! User Entity
//!
//! An account that can sign in. Credentials live on the entity itself;
//! the password is only ever stored as an Argon2id PHC string.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// User account
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque identifier (primary key)
    pub id: UserId,
    /// Public handle, unique across all users
    pub user_name: UserName,
    /// Argon2id hash in PHC string format
    pub password_hash: HashedPassword,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated ID
    pub fn new(user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            id: UserId::generate(),
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Reconstruct from stored fields
    pub fn from_parts(
        id: UserId,
        user_name: UserName,
        password_hash: HashedPassword,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_name,
            password_hash,
            created_at,
        }
    }
}
