//! HTTP Handlers
//!
//! Protected handlers call the authorization guard themselves and get
//! the user back as a plain value. Nothing is stashed in request
//! extensions or resolved by a middleware layer.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use std::sync::Arc;

use crate::application::authorize::AuthorizeUseCase;
use crate::application::bootstrap::SeedUsersUseCase;
use crate::application::config::AuthConfig;
use crate::application::refresh::RefreshUseCase;
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{RefreshRequest, SignInRequest, SignUpRequest, TokenResponse};

/// Shared state for auth handlers
pub struct AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// Arc fields clone cheaply whether or not U and S do
impl<U, S> Clone for AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            sessions: Arc::clone(&self.sessions),
            config: Arc::clone(&self.config),
        }
    }
}

impl<U, S> AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            users,
            sessions,
            config,
        }
    }

    /// Reseed the default accounts (called once at startup)
    pub async fn seed_users(&self) -> u64 {
        SeedUsersUseCase::new(self.users.clone(), self.config.clone())
            .execute()
            .await
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<&'static str>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.users.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: req.username,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json("User created!"))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        access_token: output.tokens.access_token,
        refresh_token: output.tokens.refresh_token,
        access_expires_in: output.access_expires_in,
        refresh_expires_in: output.refresh_expires_in,
    }))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /refresh
pub async fn refresh<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Json(req): Json<RefreshRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(state.sessions.clone(), state.config.clone());

    let output = use_case.execute(req.refresh_token).await?;

    Ok(Json(TokenResponse {
        access_token: output.tokens.access_token,
        refresh_token: output.tokens.refresh_token,
        access_expires_in: output.access_expires_in,
        refresh_expires_in: output.refresh_expires_in,
    }))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /signout
pub async fn sign_out<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<&'static str>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(AuthError::Unauthorized)?;

    let use_case = SignOutUseCase::new(state.sessions.clone());
    use_case.execute(&token).await?;

    Ok(Json("Logged out!"))
}

// ============================================================================
// Protected Routes
// ============================================================================

/// GET /secret
pub async fn secret<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<&'static str>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let guard = AuthorizeUseCase::new(state.users.clone(), state.sessions.clone());
    let _user = guard.execute(extract_bearer_token(&headers).as_deref()).await?;

    Ok(Json("Secret!"))
}

/// GET /username
pub async fn username<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<String>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let guard = AuthorizeUseCase::new(state.users.clone(), state.sessions.clone());
    let user = guard.execute(extract_bearer_token(&headers).as_deref()).await?;

    Ok(Json(user.user_name.into_inner()))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Pull the bearer token out of the Authorization header
///
/// The token is the last whitespace-separated segment, so both
/// `Bearer <token>` and a bare `<token>` are accepted.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split_whitespace().last())
        .map(|v| v.to_string())
}
