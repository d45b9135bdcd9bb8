//! This crate contains all shared UI for the workspace: the session store,
//! form controllers, catalog content and the components the pages share.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, AppBackend};

pub mod session;
pub use session::{SessionStore, SignUpOutcome};

mod auth;
pub use auth::{sync_auth, use_auth, use_session, AppSession, AuthProvider, AuthState, LogoutButton};

pub mod content;
pub mod forms;
pub mod markdown;

mod navbar;
pub use navbar::{Navbar, UserBadge};

mod notice;
pub use notice::{notify, use_notices, Alert, Notice, NoticeLevel, NoticeProvider, Notices};
