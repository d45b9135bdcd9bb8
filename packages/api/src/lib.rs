//! # API crate: provider client for the Vincere Colors site
//!
//! Everything the front end needs from the hosted backend-as-a-service goes
//! through the [`Backend`] trait defined here. The pages never build requests
//! themselves; they call the session store in the `ui` crate, which calls a
//! `Backend`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait: auth (sign in/up/out, password reset) and data access (profile, avatar, wiki articles) |
//! | [`supabase`] | [`SupabaseBackend`], the HTTP implementation against a Supabase-compatible provider |
//! | [`memory`] | [`MemoryBackend`], an in-process implementation with call counting and failure injection |
//! | [`models`] | Auth session, profile, avatar and wiki article types |
//! | [`error`] | [`ApiError`] and the [`ErrorKind`] classification of provider failures |
//! | [`config`] | [`BackendConfig`], read from `VINCERE_BACKEND_URL` / `VINCERE_BACKEND_ANON_KEY` |

pub mod backend;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod supabase;

pub use backend::Backend;
pub use config::{BackendConfig, ConfigError};
pub use error::{ApiError, ErrorKind};
pub use memory::MemoryBackend;
pub use models::{
    AuthSession, AuthUser, AvatarFile, NewWikiArticle, Profile, ProfileUpdate, SignUp, WikiArticle,
    WikiCategory, DEFAULT_NAME_COLOR,
};
pub use supabase::SupabaseBackend;
