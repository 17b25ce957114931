//! Sign Up Use Case
//!
//! Creates a new user account. No tokens are issued; the client signs
//! in afterwards.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_name: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { users, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate user name
        let user_name =
            UserName::new(input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Validate password policy
        let password = ClearTextPassword::new(input.password)?;

        // Early duplicate check; the unique constraint still backstops
        // concurrent signups
        if self.users.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Argon2id is deliberately slow, keep it off the async workers
        let pepper = self.config.pepper().map(<[u8]>::to_vec);
        let password_hash =
            tokio::task::spawn_blocking(move || password.hash(pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = User::new(user_name, password_hash);
        self.users.create(&user).await?;

        tracing::info!(
            user_id = %user.id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_name: user.user_name.into_inner(),
        })
    }
}
