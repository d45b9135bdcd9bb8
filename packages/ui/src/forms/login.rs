//! Login form: sign in, or request a password reset email.

use api::memory::{DEV_EMAIL, DEV_PASSWORD};
use api::{ApiError, Backend, ErrorKind};

use super::validation::{is_valid_email, is_valid_password};
use crate::session::SessionStore;

pub const INVALID_EMAIL: &str = "Por favor, ingresa un correo electrónico válido.";
pub const SHORT_PASSWORD: &str = "La contraseña debe tener al menos 6 caracteres.";
pub const WRONG_CREDENTIALS: &str = "Correo electrónico o contraseña incorrectos.";
pub const EMAIL_NOT_CONFIRMED: &str =
    "Por favor, confirma tu correo electrónico antes de iniciar sesión.";
pub const UNEXPECTED: &str = "Ha ocurrido un error inesperado.";
pub const RESET_SENT: &str =
    "Se han enviado las instrucciones para restablecer la contraseña a tu correo.";

/// Which of the two forms the login page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    ForgotPassword,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// The known test account, for the dev login shortcut.
    pub fn dev_credentials() -> Self {
        Self {
            email: DEV_EMAIL.to_string(),
            password: DEV_PASSWORD.to_string(),
        }
    }

    pub fn can_submit(&self, mode: LoginMode) -> bool {
        match mode {
            LoginMode::SignIn => !self.email.is_empty() && !self.password.is_empty(),
            LoginMode::ForgotPassword => !self.email.is_empty(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_valid_email(&self.email) {
            return Err(INVALID_EMAIL);
        }
        if !is_valid_password(&self.password) {
            return Err(SHORT_PASSWORD);
        }
        Ok(())
    }

    /// Validate and sign in. The error is the message to show.
    pub async fn submit<B: Backend>(&self, session: &SessionStore<B>) -> Result<(), String> {
        self.validate()?;
        session
            .sign_in(&self.email, &self.password)
            .await
            .map(|_| ())
            .map_err(|e| sign_in_error_message(&e))
    }

    /// Only the email matters in forgot-password mode.
    pub async fn request_reset<B: Backend>(&self, session: &SessionStore<B>) -> Result<(), String> {
        if !is_valid_email(&self.email) {
            return Err(INVALID_EMAIL.to_string());
        }
        session.reset_password(&self.email).await.map_err(|e| {
            if e.is(ErrorKind::Network) {
                tracing::error!("Password reset failed: {}", e);
                UNEXPECTED.to_string()
            } else {
                e.message
            }
        })
    }
}

pub fn sign_in_error_message(err: &ApiError) -> String {
    match err.kind {
        ErrorKind::InvalidCredentials => WRONG_CREDENTIALS.to_string(),
        ErrorKind::EmailNotConfirmed => EMAIL_NOT_CONFIRMED.to_string(),
        ErrorKind::Network => {
            tracing::error!("Sign in failed: {}", err);
            UNEXPECTED.to_string()
        }
        _ => err.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::Op;
    use api::MemoryBackend;

    fn store() -> (MemoryBackend, SessionStore<MemoryBackend>) {
        let backend = MemoryBackend::with_dev_account();
        (backend.clone(), SessionStore::new(backend))
    }

    #[test]
    fn test_validation_order() {
        let form = LoginForm {
            email: "user.com".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.validate(), Err(INVALID_EMAIL));

        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(form.validate(), Err(SHORT_PASSWORD));
    }

    #[test]
    fn test_can_submit() {
        let mut form = LoginForm::default();
        assert!(!form.can_submit(LoginMode::SignIn));
        form.email = "a@b.co".to_string();
        assert!(!form.can_submit(LoginMode::SignIn));
        assert!(form.can_submit(LoginMode::ForgotPassword));
    }

    #[test]
    fn test_provider_message_mapping() {
        let err = ApiError::from_provider(None, "Invalid login credentials");
        assert_eq!(sign_in_error_message(&err), WRONG_CREDENTIALS);

        let err = ApiError::from_provider(None, "Email not confirmed");
        assert_eq!(sign_in_error_message(&err), EMAIL_NOT_CONFIRMED);

        let err = ApiError::network("connection refused");
        assert_eq!(sign_in_error_message(&err), UNEXPECTED);

        let err = ApiError::from_provider(None, "Too many requests");
        assert_eq!(sign_in_error_message(&err), "Too many requests");
    }

    #[tokio::test]
    async fn test_dev_credentials_sign_in() {
        let (_, session) = store();
        LoginForm::dev_credentials().submit(&session).await.unwrap();
        assert!(session.is_signed_in());
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_provider() {
        let (backend, session) = store();
        let form = LoginForm {
            email: "user@".to_string(),
            password: "vincere1".to_string(),
        };
        assert_eq!(form.submit(&session).await, Err(INVALID_EMAIL.to_string()));
        assert_eq!(backend.calls(Op::SignIn), 0);
    }

    #[tokio::test]
    async fn test_wrong_password_is_localized() {
        let (_, session) = store();
        let form = LoginForm {
            email: DEV_EMAIL.to_string(),
            password: "not-the-password".to_string(),
        };
        assert_eq!(form.submit(&session).await, Err(WRONG_CREDENTIALS.to_string()));
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_request_reset() {
        let (backend, session) = store();
        let form = LoginForm {
            email: DEV_EMAIL.to_string(),
            password: String::new(),
        };
        form.request_reset(&session).await.unwrap();
        assert_eq!(backend.recovery_requests(), vec![DEV_EMAIL.to_string()]);

        let bad = LoginForm {
            email: "nope".to_string(),
            password: String::new(),
        };
        assert_eq!(bad.request_reset(&session).await, Err(INVALID_EMAIL.to_string()));
        assert_eq!(backend.calls(Op::ResetPassword), 1);
    }
}
