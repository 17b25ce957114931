//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::value_object::session_token::TokenKind;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Access token TTL (1 hour)
    pub access_token_ttl: Duration,
    /// Refresh token TTL (24 hours)
    pub refresh_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::from_secs(3600), // 1 hour
            refresh_token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// TTL for a given token class
    pub fn ttl_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_token_ttl,
            TokenKind::Refresh => self.refresh_token_ttl,
        }
    }

    /// Access token TTL in whole seconds (for response bodies)
    pub fn access_token_ttl_secs(&self) -> u64 {
        self.access_token_ttl.as_secs()
    }

    /// Refresh token TTL in whole seconds (for response bodies)
    pub fn refresh_token_ttl_secs(&self) -> u64 {
        self.refresh_token_ttl.as_secs()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl_secs(), 3600);
        assert_eq!(config.refresh_token_ttl_secs(), 86400);
    }

    #[test]
    fn test_pepper_accessor() {
        let config = AuthConfig {
            password_pepper: Some(b"orthogonal_secret".to_vec()),
            ..AuthConfig::default()
        };
        assert_eq!(config.pepper(), Some(&b"orthogonal_secret"[..]));

        assert_eq!(AuthConfig::default().pepper(), None);
    }

    #[test]
    fn test_ttl_for_kind() {
        let config = AuthConfig::default();
        assert_eq!(config.ttl_for(TokenKind::Access), config.access_token_ttl);
        assert_eq!(config.ttl_for(TokenKind::Refresh), config.refresh_token_ttl);
    }
}
