//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{SessionStore, UserRepository};
use crate::infra::memory::InMemorySessionStore;
use crate::infra::sqlite::SqliteUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the default SQLite + in-memory stores
pub fn auth_router(
    state: AuthAppState<SqliteUserRepository, InMemorySessionStore>,
) -> Router {
    auth_router_generic(state)
}

/// Create a generic Auth router for any store implementations
pub fn auth_router_generic<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/signup", post(handlers::sign_up::<U, S>))
        .route("/signin", post(handlers::sign_in::<U, S>))
        .route("/refresh", post(handlers::refresh::<U, S>))
        .route("/signout", post(handlers::sign_out::<U, S>))
        .route("/secret", get(handlers::secret::<U, S>))
        .route("/username", get(handlers::username::<U, S>))
        .with_state(state)
}
