//! Profile edit draft shared by the profile page's tabs.

use api::{AvatarFile, Backend, Profile, ProfileUpdate, DEFAULT_NAME_COLOR};

use super::validation::validate_username;
use crate::session::SessionStore;

pub const UPLOAD_FAILED: &str = "Error al subir la imagen de perfil";
pub const UPDATE_FAILED: &str = "Error al actualizar el perfil";
pub const PROFILE_SAVED: &str = "¡Perfil actualizado exitosamente!";
pub const FEATURE_UNAVAILABLE: &str = "Esta función aún no está disponible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Profile,
    Account,
    Security,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::Profile,
        ProfileTab::Account,
        ProfileTab::Security,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::Account => "Account Settings",
            ProfileTab::Security => "Security",
        }
    }
}

/// Unsaved copy of the editable profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub username: String,
    pub email: String,
    pub name_color: String,
    /// URL already stored for the profile.
    pub avatar_url: Option<String>,
    /// Newly picked file, uploaded on save.
    pub avatar_file: Option<AvatarFile>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            name_color: DEFAULT_NAME_COLOR.to_string(),
            avatar_url: None,
            avatar_file: None,
        }
    }
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone().unwrap_or_default(),
            email: profile.email.clone(),
            name_color: profile.name_color().to_string(),
            avatar_url: profile.avatar_url.clone(),
            avatar_file: None,
        }
    }

    pub fn select_avatar(&mut self, file: AvatarFile) {
        self.avatar_file = Some(file);
    }

    /// What to show in the avatar slot: the picked file if any, else the
    /// stored image.
    pub fn avatar_preview(&self) -> Option<String> {
        self.avatar_file
            .as_ref()
            .map(AvatarFile::data_url)
            .or_else(|| self.avatar_url.clone())
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        validate_username(&self.username).map_err(|e| e.message())
    }

    /// Validate, upload a newly picked avatar, then save the profile.
    pub async fn save<B: Backend>(&self, session: &SessionStore<B>) -> Result<Profile, String> {
        self.validate()?;

        let mut avatar_url = self.avatar_url.clone();
        if let Some(file) = &self.avatar_file {
            let url = session.upload_avatar(file).await.map_err(|e| {
                tracing::error!("Avatar upload failed: {}", e);
                UPLOAD_FAILED.to_string()
            })?;
            avatar_url = Some(url);
        }

        let update = ProfileUpdate {
            username: self.username.clone(),
            email: self.email.clone(),
            avatar_url,
            name_color: self.name_color.clone(),
        };
        session.update_profile(&update).await.map_err(|e| {
            tracing::error!("Profile update failed: {}", e);
            UPDATE_FAILED.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::UsernameError;
    use api::memory::{Op, DEV_EMAIL, DEV_PASSWORD, DEV_USERNAME};
    use api::{ApiError, MemoryBackend};

    async fn signed_in() -> (MemoryBackend, SessionStore<MemoryBackend>) {
        let backend = MemoryBackend::with_dev_account();
        let session = SessionStore::new(backend.clone());
        session.sign_in(DEV_EMAIL, DEV_PASSWORD).await.unwrap();
        (backend, session)
    }

    #[tokio::test]
    async fn test_draft_from_profile() {
        let (_, session) = signed_in().await;
        let draft = ProfileDraft::from_profile(&session.current_user().unwrap());
        assert_eq!(draft.username, DEV_USERNAME);
        assert_eq!(draft.email, DEV_EMAIL);
        assert_eq!(draft.name_color, DEFAULT_NAME_COLOR);
        assert_eq!(draft.avatar_preview(), None);
    }

    #[tokio::test]
    async fn test_invalid_username_blocks_update() {
        let (backend, session) = signed_in().await;
        let mut draft = ProfileDraft::from_profile(&session.current_user().unwrap());
        draft.username = "ab".to_string();
        draft.select_avatar(AvatarFile::new("me.png", vec![1]));

        let result = draft.save(&session).await;
        assert_eq!(result, Err(UsernameError::TooShort.message().to_string()));
        assert_eq!(backend.calls(Op::UploadAvatar), 0);
        assert_eq!(backend.calls(Op::UpdateProfile), 0);
    }

    #[tokio::test]
    async fn test_save_uploads_avatar_then_updates() {
        let (backend, session) = signed_in().await;
        let mut draft = ProfileDraft::from_profile(&session.current_user().unwrap());
        draft.username = "Legion_99".to_string();
        draft.name_color = "#1E3A8A".to_string();
        draft.select_avatar(AvatarFile::new("eagle.png", vec![1, 2, 3]));
        let preview = draft.avatar_preview().unwrap();
        assert!(preview.starts_with("data:image/png;base64,"));

        let saved = draft.save(&session).await.unwrap();
        assert_eq!(saved.display_name(), "Legion_99");
        assert_eq!(saved.name_color(), "#1E3A8A");
        assert!(saved.avatar_url.is_some());
        assert_eq!(backend.calls(Op::UploadAvatar), 1);
        assert_eq!(session.current_user(), Some(saved));
    }

    #[tokio::test]
    async fn test_save_without_new_avatar_keeps_url() {
        let (backend, session) = signed_in().await;
        let mut draft = ProfileDraft::from_profile(&session.current_user().unwrap());
        draft.avatar_url = Some("https://cdn.vincere.gg/a.png".to_string());

        let saved = draft.save(&session).await.unwrap();
        assert_eq!(saved.avatar_url.as_deref(), Some("https://cdn.vincere.gg/a.png"));
        assert_eq!(backend.calls(Op::UploadAvatar), 0);
    }

    #[tokio::test]
    async fn test_upload_failure_stops_save() {
        let (backend, session) = signed_in().await;
        backend.fail_next(Op::UploadAvatar, ApiError::network("offline"));
        let mut draft = ProfileDraft::from_profile(&session.current_user().unwrap());
        draft.select_avatar(AvatarFile::new("eagle.png", vec![1]));

        assert_eq!(draft.save(&session).await, Err(UPLOAD_FAILED.to_string()));
        assert_eq!(backend.calls(Op::UpdateProfile), 0);
    }

    #[tokio::test]
    async fn test_update_failure_message() {
        let (backend, session) = signed_in().await;
        backend.fail_next(Op::UpdateProfile, ApiError::from_provider(None, "duplicate key"));
        let draft = ProfileDraft::from_profile(&session.current_user().unwrap());

        assert_eq!(draft.save(&session).await, Err(UPDATE_FAILED.to_string()));
        assert_eq!(
            session.current_user().unwrap().display_name(),
            DEV_USERNAME
        );
    }
}
