//! # Structured provider errors
//!
//! The hosted provider reports failures as JSON bodies whose shape differs
//! between endpoints (`error_code`/`msg` from auth, `code`/`message` from the
//! REST layer, `error`/`error_description` from older auth builds). Every
//! failure is classified exactly once, here, into an [`ErrorKind`]. Pages
//! branch on the kind and pick their own copy; provider wording never leaks
//! into control flow.

use serde::Deserialize;

/// What went wrong, independent of the provider's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Email/password pair rejected.
    InvalidCredentials,
    /// Account exists but the email address was never confirmed.
    EmailNotConfirmed,
    /// Sign-up for an email that already has an account.
    UserAlreadyRegistered,
    /// The operation needs a signed-in session and there is none.
    NotAuthenticated,
    /// The requested row or object does not exist.
    NotFound,
    /// The request never produced a provider answer.
    Network,
    /// Any other provider-side rejection.
    Provider,
}

/// Error returned by every [`crate::Backend`] operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorKind::NotAuthenticated, "Not authenticated")
    }

    pub fn not_found(what: &str) -> Self {
        Self::new(ErrorKind::NotFound, format!("{what} not found"))
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Classify a provider error from its machine code (if any) and message.
    ///
    /// Codes win over message text; the text matches are kept for provider
    /// builds that only send a message.
    pub fn from_provider(code: Option<&str>, message: &str) -> Self {
        let kind = code
            .and_then(kind_from_code)
            .or_else(|| kind_from_message(message))
            .unwrap_or(ErrorKind::Provider);
        Self::new(kind, message)
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

fn kind_from_code(code: &str) -> Option<ErrorKind> {
    match code {
        "invalid_credentials" => Some(ErrorKind::InvalidCredentials),
        "email_not_confirmed" => Some(ErrorKind::EmailNotConfirmed),
        "user_already_exists" | "email_exists" => Some(ErrorKind::UserAlreadyRegistered),
        "no_authorization" | "bad_jwt" | "session_not_found" => Some(ErrorKind::NotAuthenticated),
        // PostgREST: single-object request matched zero rows
        "PGRST116" => Some(ErrorKind::NotFound),
        _ => None,
    }
}

fn kind_from_message(message: &str) -> Option<ErrorKind> {
    if message == "Invalid login credentials" {
        Some(ErrorKind::InvalidCredentials)
    } else if message.contains("Email not confirmed") {
        Some(ErrorKind::EmailNotConfirmed)
    } else if message == "User already registered" {
        Some(ErrorKind::UserAlreadyRegistered)
    } else {
        None
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::network(e.to_string())
    }
}

/// Union of the error body shapes the provider sends.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderErrorBody {
    /// Build an [`ApiError`] from a raw response body and its HTTP status.
    pub(crate) fn into_error(body: &str, status: u16) -> ApiError {
        let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap_or_default();

        // `code` is a string on REST errors and a number on auth errors
        let code = parsed.error_code.clone().or_else(|| match &parsed.code {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            _ => None,
        });
        let message = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or_else(|| parsed.error.clone())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        let code = code.or(parsed.error);

        let mut err = ApiError::from_provider(code.as_deref(), &message);
        if err.kind == ErrorKind::Provider && (status == 401 || status == 403) {
            err.kind = ErrorKind::NotAuthenticated;
        } else if err.kind == ErrorKind::Provider && status == 404 {
            err.kind = ErrorKind::NotFound;
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_classification() {
        let err = ApiError::from_provider(None, "Invalid login credentials");
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = ApiError::from_provider(None, "Email not confirmed yet");
        assert_eq!(err.kind, ErrorKind::EmailNotConfirmed);

        let err = ApiError::from_provider(None, "User already registered");
        assert_eq!(err.kind, ErrorKind::UserAlreadyRegistered);

        let err = ApiError::from_provider(None, "Database is on fire");
        assert_eq!(err.kind, ErrorKind::Provider);
    }

    #[test]
    fn test_code_wins_over_message() {
        let err = ApiError::from_provider(Some("user_already_exists"), "Something else");
        assert_eq!(err.kind, ErrorKind::UserAlreadyRegistered);
        assert_eq!(err.message, "Something else");
    }

    #[test]
    fn test_auth_error_body() {
        let body =
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
        let err = ProviderErrorBody::into_error(body, 400);
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert_eq!(err.message, "Invalid login credentials");
    }

    #[test]
    fn test_legacy_auth_error_body() {
        // `invalid_grant` covers several failures, so the description decides
        let body = r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#;
        let err = ProviderErrorBody::into_error(body, 400);
        assert_eq!(err.kind, ErrorKind::EmailNotConfirmed);
        assert_eq!(err.message, "Email not confirmed");

        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let err = ProviderErrorBody::into_error(body, 400);
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    }

    #[test]
    fn test_rest_error_body() {
        let body = r#"{
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned"
        }"#;
        let err = ProviderErrorBody::into_error(body, 406);
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_unparseable_body_uses_status() {
        let err = ProviderErrorBody::into_error("<html>", 401);
        assert_eq!(err.kind, ErrorKind::NotAuthenticated);
        assert_eq!(err.message, "Request failed with status 401");

        let err = ProviderErrorBody::into_error("", 500);
        assert_eq!(err.kind, ErrorKind::Provider);
    }
}
