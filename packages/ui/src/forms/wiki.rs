//! New wiki article form.

use api::{Backend, NewWikiArticle, WikiCategory};

use crate::session::SessionStore;

pub const MISSING_FIELDS: &str = "Title and content are required.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WikiDraft {
    pub title: String,
    pub content: String,
    pub category: WikiCategory,
}

impl WikiDraft {
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(MISSING_FIELDS);
        }
        Ok(())
    }

    /// Validate and publish. Returns the new article's id.
    pub async fn publish<B: Backend>(&self, session: &SessionStore<B>) -> Result<String, String> {
        self.validate()?;
        let article = NewWikiArticle {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category,
        };
        session
            .create_wiki_article(&article)
            .await
            .map(|created| created.id)
            .map_err(|e| e.message)
    }
}

/// Route path of an article's page.
pub fn article_path(id: &str) -> String {
    format!("/wiki/article/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::{Op, DEV_EMAIL, DEV_PASSWORD};
    use api::{ApiError, MemoryBackend};

    async fn signed_in() -> (MemoryBackend, SessionStore<MemoryBackend>) {
        let backend = MemoryBackend::with_dev_account();
        let session = SessionStore::new(backend.clone());
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        (backend, session)
    }

    #[tokio::test]
    async fn test_empty_content_blocked() {
        let (backend, session) = signed_in().await;
        let draft = WikiDraft {
            title: "Legions".to_string(),
            content: "   ".to_string(),
            category: WikiCategory::Units,
        };
        assert!(draft.can_submit());
        assert_eq!(draft.publish(&session).await, Err(MISSING_FIELDS.to_string()));
        assert_eq!(backend.calls(Op::CreateWikiArticle), 0);
    }

    #[tokio::test]
    async fn test_publish_creates_once() {
        let (backend, session) = signed_in().await;
        let draft = WikiDraft {
            title: "Legions".to_string(),
            content: "Ten cohorts each.".to_string(),
            category: WikiCategory::Units,
        };

        let id = draft.publish(&session).await.unwrap();
        assert_eq!(backend.calls(Op::CreateWikiArticle), 1);
        assert_eq!(article_path(&id), "/wiki/article/1");

        let stored = backend.articles();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].category, WikiCategory::Units);
    }

    #[tokio::test]
    async fn test_failed_publish_yields_no_id() {
        let (backend, session) = signed_in().await;
        backend.fail_next(
            Op::CreateWikiArticle,
            ApiError::from_provider(None, "permission denied for table wiki_articles"),
        );
        let draft = WikiDraft {
            title: "Legions".to_string(),
            content: "Ten cohorts each.".to_string(),
            category: WikiCategory::default(),
        };

        assert_eq!(
            draft.publish(&session).await,
            Err("permission denied for table wiki_articles".to_string())
        );
        assert_eq!(backend.calls(Op::CreateWikiArticle), 1);
        assert!(backend.articles().is_empty());
    }
}
