//! Session Token Value Objects
//!
//! Access and refresh tokens are opaque hex strings. They carry no
//! embedded claims; the session store is the single source of truth
//! for validity and the bound user.
//!
//! Store keys are namespaced so the two token classes can never be
//! confused for one another:
//! - `request::<token>` for access tokens
//! - `refresh::<token>` for refresh tokens

use std::fmt;

/// Token class, determining the store namespace and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived token presented on each protected request
    Access,
    /// Longer-lived token exchanged for a fresh pair
    Refresh,
}

impl TokenKind {
    /// Namespace prefix in the session store
    pub fn namespace(&self) -> &'static str {
        match self {
            TokenKind::Access => "request",
            TokenKind::Refresh => "refresh",
        }
    }

    /// Full store key for a token value
    pub fn key(&self, token: &str) -> String {
        format!("{}::{}", self.namespace(), token)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// Access/refresh token pair handed to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
