//! Backend selection for the running site.
//!
//! [`make_backend`] returns an [`AppBackend`]:
//! - **Hosted**: [`api::SupabaseBackend`] when `VINCERE_BACKEND_URL` and
//!   `VINCERE_BACKEND_ANON_KEY` are configured
//! - **Local**: [`api::MemoryBackend`] seeded with the dev account and the
//!   wiki listing's articles otherwise

use api::{
    ApiError, AuthSession, AvatarFile, Backend, BackendConfig, MemoryBackend, NewWikiArticle,
    Profile, ProfileUpdate, SignUp, SupabaseBackend, WikiArticle,
};

use crate::content::WIKI_ENTRIES;

/// The backend the app runs against, picked once at startup.
#[derive(Debug, Clone)]
pub enum AppBackend {
    Hosted(SupabaseBackend),
    Local(MemoryBackend),
}

/// Build the backend from configuration, falling back to local mode.
pub fn make_backend() -> AppBackend {
    match BackendConfig::from_env() {
        Ok(config) => {
            tracing::info!("Using hosted backend at {}", config.url);
            AppBackend::Hosted(SupabaseBackend::new(config))
        }
        Err(e) => {
            tracing::warn!("{}; running against the local in-memory backend", e);
            AppBackend::Local(local_backend())
        }
    }
}

fn local_backend() -> MemoryBackend {
    let backend = MemoryBackend::with_dev_account();
    for entry in &WIKI_ENTRIES {
        backend.add_article(entry.to_article());
    }
    backend
}

macro_rules! delegate {
    ($self:ident, $b:ident => $call:expr) => {
        match $self {
            AppBackend::Hosted($b) => $call.await,
            AppBackend::Local($b) => $call.await,
        }
    };
}

impl Backend for AppBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        delegate!(self, b => b.sign_in(email, password))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<SignUp, ApiError> {
        delegate!(self, b => b.sign_up(email, password, username))
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), ApiError> {
        delegate!(self, b => b.sign_out(session))
    }

    async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        delegate!(self, b => b.reset_password(email))
    }

    async fn get_profile(&self, session: &AuthSession) -> Result<Profile, ApiError> {
        delegate!(self, b => b.get_profile(session))
    }

    async fn update_profile(
        &self,
        session: &AuthSession,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        delegate!(self, b => b.update_profile(session, update))
    }

    async fn upload_avatar(
        &self,
        session: &AuthSession,
        file: &AvatarFile,
    ) -> Result<String, ApiError> {
        delegate!(self, b => b.upload_avatar(session, file))
    }

    async fn create_wiki_article(
        &self,
        session: &AuthSession,
        article: &NewWikiArticle,
    ) -> Result<WikiArticle, ApiError> {
        delegate!(self, b => b.create_wiki_article(session, article))
    }

    async fn get_wiki_article(
        &self,
        session: Option<&AuthSession>,
        id: &str,
    ) -> Result<WikiArticle, ApiError> {
        delegate!(self, b => b.get_wiki_article(session, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::{DEV_EMAIL, DEV_PASSWORD};

    #[tokio::test]
    async fn test_local_backend_delegates() {
        let backend = AppBackend::Local(MemoryBackend::with_dev_account());
        let session = backend.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        let profile = backend.get_profile(&session).await.unwrap();
        assert_eq!(profile.email, DEV_EMAIL);
    }

    #[tokio::test]
    async fn test_local_backend_serves_listing_articles() {
        let backend = AppBackend::Local(local_backend());
        for entry in &WIKI_ENTRIES {
            let article = backend
                .get_wiki_article(None, &entry.id.to_string())
                .await
                .unwrap();
            assert_eq!(article.title, entry.title);
        }

        let session = backend.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        let created = backend
            .create_wiki_article(
                &session,
                &NewWikiArticle {
                    title: "Testudo".to_string(),
                    content: "Shields up.".to_string(),
                    category: api::WikiCategory::Strategy,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.id, "7");
        let first = backend.get_wiki_article(None, "1").await.unwrap();
        assert_eq!(first.title, WIKI_ENTRIES[0].title);
    }
}
