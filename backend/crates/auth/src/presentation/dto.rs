//! Request/Response DTOs

use serde::{Deserialize, Serialize};

/// Sign up request body
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// Sign in request body
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Refresh request body
///
/// The refresh token travels in the body, not in a header; the
/// Authorization header is reserved for access tokens.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair response, shared by sign-in and refresh
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub access_expires_in: u64,
    /// Refresh token lifetime in seconds
    pub refresh_expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_wire_format() {
        let resp = TokenResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_expires_in: 3600,
            refresh_expires_in: 86400,
        };
        let json: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["access_token"], "a");
        assert_eq!(json["refresh_token"], "r");
        assert_eq!(json["access_expires_in"], 3600);
        assert_eq!(json["refresh_expires_in"], 86400);
    }

    #[test]
    fn test_refresh_request_parses() {
        let req: RefreshRequest =
            serde_json::from_str(r#"{"refresh_token":"abc"}"#).unwrap();
        assert_eq!(req.refresh_token, "abc");
    }

    #[test]
    fn test_sign_up_request_rejects_missing_field() {
        let result: Result<SignUpRequest, _> =
            serde_json::from_str(r#"{"username":"alice"}"#);
        assert!(result.is_err());
    }
}
