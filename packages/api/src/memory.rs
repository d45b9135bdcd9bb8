//! In-process backend.
//!
//! [`MemoryBackend`] keeps accounts, profiles and articles in a shared map.
//! The site runs against it when no provider is configured, and tests use it
//! as their double: every call is counted per [`Op`], and
//! [`MemoryBackend::fail_next`] queues a one-shot failure.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    AuthSession, AuthUser, AvatarFile, NewWikiArticle, Profile, ProfileUpdate, SignUp, WikiArticle,
};

/// Test account pre-filled by the login page's dev button.
pub const DEV_EMAIL: &str = "vincere@dev.com";
pub const DEV_PASSWORD: &str = "vincere1";
pub const DEV_USERNAME: &str = "Vincere";

const MIN_PASSWORD_LEN: usize = 6;

/// Backend operations, for call counting and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    SignIn,
    SignUp,
    SignOut,
    ResetPassword,
    GetProfile,
    UpdateProfile,
    UploadAvatar,
    CreateWikiArticle,
    GetWikiArticle,
}

#[derive(Debug)]
struct Account {
    user: AuthUser,
    password: String,
    confirmed: bool,
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, String>,
    profiles: HashMap<String, Profile>,
    articles: Vec<WikiArticle>,
    recoveries: Vec<String>,
    calls: HashMap<Op, usize>,
    failures: HashMap<Op, ApiError>,
    require_confirmation: bool,
}

impl State {
    /// Count the call and hand back an injected failure, if one is queued.
    fn record(&mut self, op: Op) -> Result<(), ApiError> {
        *self.calls.entry(op).or_default() += 1;
        match self.failures.remove(&op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn authorize(&self, session: &AuthSession) -> Result<String, ApiError> {
        self.tokens
            .get(&session.access_token)
            .cloned()
            .ok_or_else(ApiError::not_authenticated)
    }

    fn issue_session(&mut self, user: &AuthUser) -> AuthSession {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), user.id.clone());
        AuthSession {
            access_token: token,
            refresh_token: None,
            user: user.clone(),
        }
    }
}

/// In-process [`Backend`] for tests and for running the site without a
/// configured provider.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with the dev test account already registered.
    pub fn with_dev_account() -> Self {
        let backend = Self::new();
        backend.add_account(DEV_EMAIL, DEV_PASSWORD, DEV_USERNAME);
        backend
    }

    /// Register a confirmed account directly, bypassing sign-up.
    pub fn add_account(&self, email: &str, password: &str, username: &str) -> Profile {
        let mut state = self.state();
        insert_account(&mut state, email, password, username, true)
    }

    /// Make sign-up answer with "confirmation pending" instead of a session.
    pub fn require_email_confirmation(&self, required: bool) {
        self.state().require_confirmation = required;
    }

    /// Fail the next call to `op` with `err`.
    pub fn fail_next(&self, op: Op, err: ApiError) {
        self.state().failures.insert(op, err);
    }

    /// How many times `op` has been called.
    pub fn calls(&self, op: Op) -> usize {
        self.state().calls.get(&op).copied().unwrap_or(0)
    }

    /// Emails that asked for a password reset, oldest first.
    pub fn recovery_requests(&self) -> Vec<String> {
        self.state().recoveries.clone()
    }

    pub fn articles(&self) -> Vec<WikiArticle> {
        self.state().articles.clone()
    }

    /// Store an article as-is. Articles created later get numeric ids past
    /// the highest numeric id already stored.
    pub fn add_article(&self, article: WikiArticle) {
        self.state().articles.push(article);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_account(
    state: &mut State,
    email: &str,
    password: &str,
    username: &str,
    confirmed: bool,
) -> Profile {
    let user = AuthUser {
        id: uuid::Uuid::new_v4().to_string(),
        email: Some(email.to_string()),
        created_at: Utc::now(),
    };
    let profile = Profile {
        id: user.id.clone(),
        email: email.to_string(),
        username: Some(username.to_string()),
        avatar_url: None,
        name_color: None,
        created_at: user.created_at,
    };
    state.profiles.insert(user.id.clone(), profile.clone());
    state.accounts.insert(
        email.to_lowercase(),
        Account {
            user,
            password: password.to_string(),
            confirmed,
        },
    );
    profile
}

impl Backend for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let mut state = self.state();
        state.record(Op::SignIn)?;

        let account = state
            .accounts
            .get(&email.to_lowercase())
            .filter(|a| a.password == password)
            .ok_or_else(|| {
                ApiError::from_provider(Some("invalid_credentials"), "Invalid login credentials")
            })?;
        if !account.confirmed {
            return Err(ApiError::from_provider(
                Some("email_not_confirmed"),
                "Email not confirmed",
            ));
        }

        let user = account.user.clone();
        Ok(state.issue_session(&user))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<SignUp, ApiError> {
        let mut state = self.state();
        state.record(Op::SignUp)?;

        if state.accounts.contains_key(&email.to_lowercase()) {
            return Err(ApiError::from_provider(
                Some("user_already_exists"),
                "User already registered",
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::from_provider(
                Some("weak_password"),
                "Password should be at least 6 characters.",
            ));
        }

        let confirmed = !state.require_confirmation;
        let profile = insert_account(&mut state, email, password, username, confirmed);
        let user = AuthUser {
            id: profile.id,
            email: Some(profile.email),
            created_at: profile.created_at,
        };

        if confirmed {
            Ok(SignUp::Session(state.issue_session(&user)))
        } else {
            Ok(SignUp::ConfirmationPending(user))
        }
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), ApiError> {
        let mut state = self.state();
        state.record(Op::SignOut)?;
        state.tokens.remove(&session.access_token);
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        let mut state = self.state();
        state.record(Op::ResetPassword)?;
        // Unknown addresses succeed too, so the form can't reveal which accounts exist
        state.recoveries.push(email.to_string());
        Ok(())
    }

    async fn get_profile(&self, session: &AuthSession) -> Result<Profile, ApiError> {
        let mut state = self.state();
        state.record(Op::GetProfile)?;
        let user_id = state.authorize(session)?;
        state
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Profile"))
    }

    async fn update_profile(
        &self,
        session: &AuthSession,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let mut state = self.state();
        state.record(Op::UpdateProfile)?;
        let user_id = state.authorize(session)?;
        let current = state
            .profiles
            .get(&user_id)
            .ok_or_else(|| ApiError::not_found("Profile"))?;
        let updated = update.apply_to(current);
        state.profiles.insert(user_id, updated.clone());
        Ok(updated)
    }

    async fn upload_avatar(
        &self,
        session: &AuthSession,
        file: &AvatarFile,
    ) -> Result<String, ApiError> {
        let mut state = self.state();
        state.record(Op::UploadAvatar)?;
        state.authorize(session)?;
        // Nothing to serve files from, so the image is its own URL
        Ok(file.data_url())
    }

    async fn create_wiki_article(
        &self,
        session: &AuthSession,
        article: &NewWikiArticle,
    ) -> Result<WikiArticle, ApiError> {
        let mut state = self.state();
        state.record(Op::CreateWikiArticle)?;
        let user_id = state.authorize(session)?;
        let next_id = state
            .articles
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let stored = WikiArticle {
            id: next_id.to_string(),
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category,
            author_id: Some(user_id),
            created_at: Utc::now(),
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn get_wiki_article(
        &self,
        _session: Option<&AuthSession>,
        id: &str,
    ) -> Result<WikiArticle, ApiError> {
        let mut state = self.state();
        state.record(Op::GetWikiArticle)?;
        state
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Article"))
    }
}
