//! Application Layer
//!
//! Use cases orchestrating domain objects and repositories. Every use
//! case receives its dependencies through the constructor; there is no
//! global or ambient state.

pub mod authorize;
pub mod bootstrap;
pub mod config;
pub mod refresh;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod tokens;

// Re-exports
pub use authorize::AuthorizeUseCase;
pub use bootstrap::SeedUsersUseCase;
pub use config::AuthConfig;
pub use refresh::{RefreshOutput, RefreshUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use tokens::TokenIssuer;
