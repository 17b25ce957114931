//! User ID Value Object
//!
//! ユーザーIDは、システム内部でユーザーを一意に識別する**不透明な識別子**。
//! 連番やUUIDではなく、SHA3-256ダイジェストの16進表現（64文字）を採用する。
//! 値から作成順序や件数を推測できないため、外部に露出しても安全。

use platform::crypto::generate_token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex-encoded SHA3-256 digest length
pub const USER_ID_LENGTH: usize = 64;

/// Error returned when a user ID has the wrong shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdError(pub String);

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid user id: {}", self.0)
    }
}

impl std::error::Error for UserIdError {}

/// Opaque user identifier
///
/// # Invariants
/// - Exactly 64 lowercase hex characters
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh identifier from OS entropy
    pub fn generate() -> Self {
        Self(generate_token())
    }

    /// Restore from a stored value (e.g., a database row)
    pub fn from_string(value: impl Into<String>) -> Result<Self, UserIdError> {
        let value = value.into();
        if value.len() != USER_ID_LENGTH
            || !value.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(UserIdError(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserId").field(&self.0).finish()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
