//! The provider interface.
//!
//! [`Backend`] covers both halves of what the hosted service offers: the auth
//! endpoints (sign in, sign up, sign out, password recovery) and the thin data
//! access used by the account pages (profile rows, avatar storage, wiki
//! articles). Implementations live in [`crate::supabase`] (over HTTP) and
//! [`crate::memory`] (in process, for tests and local development).

use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    AuthSession, AvatarFile, NewWikiArticle, Profile, ProfileUpdate, SignUp, WikiArticle,
};

/// Async interface to the hosted auth/database/storage provider.
pub trait Backend: Clone + 'static {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthSession, ApiError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> impl Future<Output = Result<SignUp, ApiError>>;

    fn sign_out(&self, session: &AuthSession) -> impl Future<Output = Result<(), ApiError>>;

    fn reset_password(&self, email: &str) -> impl Future<Output = Result<(), ApiError>>;

    fn get_profile(&self, session: &AuthSession)
        -> impl Future<Output = Result<Profile, ApiError>>;

    fn update_profile(
        &self,
        session: &AuthSession,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<Profile, ApiError>>;

    /// Store the file and return its public URL.
    fn upload_avatar(
        &self,
        session: &AuthSession,
        file: &AvatarFile,
    ) -> impl Future<Output = Result<String, ApiError>>;

    fn create_wiki_article(
        &self,
        session: &AuthSession,
        article: &NewWikiArticle,
    ) -> impl Future<Output = Result<WikiArticle, ApiError>>;

    /// Articles are public; `session` is attached when present.
    fn get_wiki_article(
        &self,
        session: Option<&AuthSession>,
        id: &str,
    ) -> impl Future<Output = Result<WikiArticle, ApiError>>;
}
