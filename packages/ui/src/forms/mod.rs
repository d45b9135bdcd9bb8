//! Form state and submission logic for the account pages.
//!
//! Each form validates locally and only then calls the
//! [`SessionStore`](crate::SessionStore). Errors come back as the exact copy
//! the page displays, so views just render `Err(msg)`.

pub mod login;
pub mod profile;
pub mod register;
pub mod validation;
pub mod wiki;

pub use login::{LoginForm, LoginMode};
pub use profile::{ProfileDraft, ProfileTab};
pub use register::RegisterForm;
pub use wiki::{article_path, WikiDraft};
