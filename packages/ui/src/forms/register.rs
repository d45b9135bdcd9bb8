//! Registration form.

use api::{ApiError, Backend, ErrorKind};

use super::validation::is_valid_password;
use crate::session::{SessionStore, SignUpOutcome};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters long";
pub const ALREADY_REGISTERED: &str =
    "This email is already registered. Please sign in or use a different email address.";
pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const CONFIRM_EMAIL: &str =
    "Account created. Check your inbox and confirm your email address before signing in.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        if !is_valid_password(&self.password) {
            return Err(SHORT_PASSWORD);
        }
        Ok(())
    }

    /// Validate and sign up. Sign-up is never called on invalid input.
    pub async fn submit<B: Backend>(
        &self,
        session: &SessionStore<B>,
    ) -> Result<SignUpOutcome, String> {
        self.validate()?;
        session
            .sign_up(&self.email, &self.password, &self.username)
            .await
            .map_err(|e| sign_up_error_message(&e))
    }
}

pub fn sign_up_error_message(err: &ApiError) -> String {
    match err.kind {
        ErrorKind::UserAlreadyRegistered => ALREADY_REGISTERED.to_string(),
        ErrorKind::Network => {
            tracing::error!("Sign up failed: {}", err);
            UNEXPECTED.to_string()
        }
        _ => err.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::{Op, DEV_EMAIL};
    use api::MemoryBackend;

    fn form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "Legion_99".to_string(),
            email: "legion@vincere.gg".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mismatch_blocks_sign_up() {
        let backend = MemoryBackend::new();
        let session = SessionStore::new(backend.clone());

        let result = form("gladius1", "gladius2").submit(&session).await;
        assert_eq!(result, Err(PASSWORD_MISMATCH.to_string()));
        assert_eq!(backend.calls(Op::SignUp), 0);
    }

    #[tokio::test]
    async fn test_short_password_blocks_sign_up() {
        let backend = MemoryBackend::new();
        let session = SessionStore::new(backend.clone());

        let result = form("abc", "abc").submit(&session).await;
        assert_eq!(result, Err(SHORT_PASSWORD.to_string()));
        assert_eq!(backend.calls(Op::SignUp), 0);
    }

    #[tokio::test]
    async fn test_success_signs_in() {
        let backend = MemoryBackend::new();
        let session = SessionStore::new(backend.clone());

        let result = form("gladius1", "gladius1").submit(&session).await;
        assert_eq!(result, Ok(SignUpOutcome::SignedIn));
        assert_eq!(backend.calls(Op::SignUp), 1);
        assert!(session.is_signed_in());
    }

    #[tokio::test]
    async fn test_already_registered_message() {
        let backend = MemoryBackend::with_dev_account();
        let session = SessionStore::new(backend);

        let mut taken = form("gladius1", "gladius1");
        taken.email = DEV_EMAIL.to_string();
        assert_eq!(taken.submit(&session).await, Err(ALREADY_REGISTERED.to_string()));
    }

    #[test]
    fn test_can_submit_requires_all_fields() {
        let mut f = form("gladius1", "gladius1");
        assert!(f.can_submit());
        f.username.clear();
        assert!(!f.can_submit());
    }
}
