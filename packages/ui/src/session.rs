//! # Session store: the client's single owner of "who is signed in"
//!
//! [`SessionStore`] wraps a [`Backend`] and caches the signed-in player's
//! auth session and profile. It is created once by
//! [`AuthProvider`](crate::AuthProvider), handed to pages through context,
//! and is the only thing that writes the cache:
//!
//! - `sign_in` / `sign_up` populate it,
//! - `refresh` / `get_profile` / `update_profile` replace the cached profile,
//! - `sign_out` clears it, even when the provider call fails.
//!
//! The data-access operations (`get_profile`, `update_profile`,
//! `upload_avatar`, `create_wiki_article`) attach the cached access token and
//! fail with [`ErrorKind::NotAuthenticated`] when nobody is signed in.
//!
//! Clones share the same cache, so a store can be moved into spawned tasks.
//! The store never navigates; pages decide where to go next.

use std::sync::{Arc, PoisonError, RwLock};

use api::{
    ApiError, AuthSession, AuthUser, AvatarFile, Backend, ErrorKind, NewWikiArticle, Profile,
    ProfileUpdate, SignUp, WikiArticle,
};

#[derive(Debug, Clone)]
struct Cached {
    auth: AuthSession,
    profile: Profile,
}

/// What happened after a successful sign-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The player is signed in and the cache holds their profile.
    SignedIn,
    /// The provider wants the email confirmed first; still signed out.
    ConfirmationPending,
}

/// Owned, injectable session cache in front of a [`Backend`].
#[derive(Clone)]
pub struct SessionStore<B: Backend> {
    backend: B,
    current: Arc<RwLock<Option<Cached>>>,
}

impl<B: Backend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The cached profile of the signed-in player.
    pub fn current_user(&self) -> Option<Profile> {
        self.read().as_ref().map(|c| c.profile.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().is_some()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, ApiError> {
        let auth = self.backend.sign_in(email, password).await?;
        let profile = self.load_profile(&auth, None).await;
        tracing::info!("Signed in as {}", profile.display_name());
        self.store(auth, profile.clone());
        Ok(profile)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<SignUpOutcome, ApiError> {
        match self.backend.sign_up(email, password, username).await? {
            SignUp::Session(auth) => {
                let profile = self.load_profile(&auth, Some(username)).await;
                tracing::info!("Registered and signed in as {}", profile.display_name());
                self.store(auth, profile);
                Ok(SignUpOutcome::SignedIn)
            }
            SignUp::ConfirmationPending(user) => {
                tracing::info!("Registered {}, waiting for email confirmation", user.id);
                Ok(SignUpOutcome::ConfirmationPending)
            }
        }
    }

    /// Drop the session. The provider is told first, but the local cache is
    /// cleared regardless of its answer.
    pub async fn sign_out(&self) {
        let cached = self.write().take();
        let Some(cached) = cached else {
            return;
        };
        if let Err(e) = self.backend.sign_out(&cached.auth).await {
            tracing::warn!("Provider sign-out failed, session cleared locally: {}", e);
        } else {
            tracing::info!("Signed out {}", cached.profile.display_name());
        }
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        self.backend.reset_password(email).await
    }

    /// Re-fetch the profile for the cached session.
    ///
    /// A session the provider no longer accepts is dropped and `Ok(None)`
    /// returned; other failures leave the cache alone.
    pub async fn refresh(&self) -> Result<Option<Profile>, ApiError> {
        if !self.is_signed_in() {
            return Ok(None);
        }
        match self.get_profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is(ErrorKind::NotAuthenticated) => {
                tracing::warn!("Cached session rejected, signing out locally: {}", e);
                self.write().take();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let auth = self.auth()?;
        let profile = self.backend.get_profile(&auth).await?;
        self.replace_profile(&auth, profile.clone());
        Ok(profile)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let auth = self.auth()?;
        let profile = self.backend.update_profile(&auth, update).await?;
        self.replace_profile(&auth, profile.clone());
        Ok(profile)
    }

    /// Upload an avatar image and return its public URL.
    pub async fn upload_avatar(&self, file: &AvatarFile) -> Result<String, ApiError> {
        let auth = self.auth()?;
        self.backend.upload_avatar(&auth, file).await
    }

    pub async fn create_wiki_article(
        &self,
        article: &NewWikiArticle,
    ) -> Result<WikiArticle, ApiError> {
        let auth = self.auth()?;
        let created = self.backend.create_wiki_article(&auth, article).await?;
        tracing::info!("Created wiki article {} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn get_wiki_article(&self, id: &str) -> Result<WikiArticle, ApiError> {
        let auth = self.auth().ok();
        self.backend.get_wiki_article(auth.as_ref(), id).await
    }

    fn auth(&self) -> Result<AuthSession, ApiError> {
        self.read()
            .as_ref()
            .map(|c| c.auth.clone())
            .ok_or_else(ApiError::not_authenticated)
    }

    /// Profile for a fresh session; falls back to the auth record when the
    /// profile row can't be read yet (e.g. created by a trigger that lags).
    async fn load_profile(&self, auth: &AuthSession, username: Option<&str>) -> Profile {
        match self.backend.get_profile(auth).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Profile unavailable for {}: {}", auth.user.id, e);
                fallback_profile(&auth.user, username)
            }
        }
    }

    fn store(&self, auth: AuthSession, profile: Profile) {
        *self.write() = Some(Cached { auth, profile });
    }

    /// Only replace the profile if the session that fetched it is still the
    /// current one; a sign-out in between wins.
    fn replace_profile(&self, auth: &AuthSession, profile: Profile) {
        let mut current = self.write();
        if let Some(cached) = current.as_mut() {
            if cached.auth.access_token == auth.access_token {
                cached.profile = profile;
            }
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Cached>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Cached>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn fallback_profile(user: &AuthUser, username: Option<&str>) -> Profile {
    Profile {
        id: user.id.clone(),
        email: user.email.clone().unwrap_or_default(),
        username: username.map(str::to_string),
        avatar_url: None,
        name_color: None,
        created_at: user.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::{Op, DEV_EMAIL, DEV_PASSWORD, DEV_USERNAME};
    use api::{MemoryBackend, WikiCategory};

    fn store() -> (MemoryBackend, SessionStore<MemoryBackend>) {
        let backend = MemoryBackend::with_dev_account();
        (backend.clone(), SessionStore::new(backend))
    }

    #[tokio::test]
    async fn test_starts_signed_out() {
        let (_, session) = store();
        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
        assert_eq!(session.refresh().await, Ok(None));
    }

    #[tokio::test]
    async fn test_sign_in_caches_profile() {
        let (_, session) = store();
        let profile = session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        assert_eq!(profile.display_name(), DEV_USERNAME);
        assert_eq!(session.current_user(), Some(profile));
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_cache_empty() {
        let (_, session) = store();
        let err = session.sign_in(DEV_EMAIL, "wrong-password").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_up_signs_in() {
        let (_, session) = store();
        let outcome = session.sign_up("miles@vincere.gg", "gladius", "Miles").await.unwrap();
        assert_eq!(outcome, SignUpOutcome::SignedIn);
        assert_eq!(session.current_user().unwrap().display_name(), "Miles");
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation() {
        let (backend, session) = store();
        backend.require_email_confirmation(true);
        let outcome = session.sign_up("miles@vincere.gg", "gladius", "Miles").await.unwrap();
        assert_eq!(outcome, SignUpOutcome::ConfirmationPending);
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_survives_missing_profile() {
        let (backend, session) = store();
        backend.fail_next(Op::GetProfile, ApiError::not_found("Profile"));
        let profile = session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        assert_eq!(profile.email, DEV_EMAIL);
        assert_eq!(profile.username, None);
        assert!(session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_provider_fails() {
        let (backend, session) = store();
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        backend.fail_next(Op::SignOut, ApiError::network("offline"));

        session.sign_out().await;
        assert!(!session.is_signed_in());
        assert_eq!(backend.calls(Op::SignOut), 1);

        // Already signed out: nothing to tell the provider
        session.sign_out().await;
        assert_eq!(backend.calls(Op::SignOut), 1);
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let (_, session) = store();
        let other = session.clone();
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        assert!(other.is_signed_in());
        other.sign_out().await;
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_data_access_requires_session() {
        let (backend, session) = store();
        let article = NewWikiArticle {
            title: "Aqueducts".to_string(),
            content: "Water flows downhill.".to_string(),
            category: WikiCategory::Buildings,
        };
        let err = session.create_wiki_article(&article).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAuthenticated);
        assert_eq!(backend.calls(Op::CreateWikiArticle), 0);

        let err = session.get_profile().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAuthenticated);
    }

    #[tokio::test]
    async fn test_update_profile_refreshes_cache() {
        let (_, session) = store();
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        let update = ProfileUpdate {
            username: "Legion_99".to_string(),
            email: DEV_EMAIL.to_string(),
            avatar_url: None,
            name_color: "#7F1D1D".to_string(),
        };
        session.update_profile(&update).await.unwrap();

        let cached = session.current_user().unwrap();
        assert_eq!(cached.display_name(), "Legion_99");
        assert_eq!(cached.name_color(), "#7F1D1D");
    }

    #[tokio::test]
    async fn test_refresh_drops_rejected_session() {
        let (backend, session) = store();
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        backend.fail_next(Op::GetProfile, ApiError::not_authenticated());

        assert_eq!(session.refresh().await, Ok(None));
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_refresh_keeps_session_on_network_error() {
        let (backend, session) = store();
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        backend.fail_next(Op::GetProfile, ApiError::network("offline"));

        let err = session.refresh().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(session.is_signed_in());
    }
}
