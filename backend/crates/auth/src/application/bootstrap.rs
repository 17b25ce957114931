//! Startup Seeding
//!
//! Recreates the built-in development accounts on every boot. Each seed
//! user is deleted and inserted fresh, so its password hash always
//! matches the configured seed list even after manual edits.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Accounts recreated on every boot
pub const DEFAULT_SEED_USERS: &[(&str, &str)] = &[("username", "password")];

/// Seed users use case
pub struct SeedUsersUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SeedUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { users, config }
    }

    /// Reseed all default accounts, returning how many were created
    ///
    /// A failing seed entry is logged and skipped; boot continues.
    pub async fn execute(&self) -> u64 {
        let mut seeded = 0;
        for &(name, password) in DEFAULT_SEED_USERS {
            match self.seed_one(name, password).await {
                Ok(()) => seeded += 1,
                Err(e) => {
                    tracing::warn!(user_name = %name, error = %e, "Failed to seed user");
                }
            }
        }
        seeded
    }

    async fn seed_one(&self, name: &str, password: &str) -> AuthResult<()> {
        let user_name =
            UserName::new(name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password = ClearTextPassword::new(password.to_string())?;

        self.users.delete_by_user_name(&user_name).await?;

        let pepper = self.config.pepper().map(<[u8]>::to_vec);
        let password_hash =
            tokio::task::spawn_blocking(move || password.hash(pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = User::new(user_name, password_hash);
        self.users.create(&user).await?;

        tracing::info!(user_name = %user.user_name, "Seeded user");

        Ok(())
    }
}
