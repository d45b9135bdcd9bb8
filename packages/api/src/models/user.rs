//! # Account models
//!
//! Two views of a player account:
//!
//! ## [`AuthSession`] / [`AuthUser`]
//!
//! What the provider's auth endpoints return: an access token plus the auth
//! record (`id`, `email`, `created_at`). The token is only ever attached to
//! outgoing requests; the UI never displays it.
//!
//! ## [`Profile`]
//!
//! The row from the `profiles` table that the UI caches as "the current
//! user": username, avatar and the color the username is drawn in.
//! [`ProfileUpdate`] is the payload for saving an edited profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username color used until the player picks one.
pub const DEFAULT_NAME_COLOR: &str = "#B45309";

/// Auth record returned by sign-in and sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A signed-in session: bearer token plus the auth record it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Result of a sign-up request.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUp {
    /// The account is usable right away.
    Session(AuthSession),
    /// The provider sent a confirmation email; no session until it is followed.
    ConfirmationPending(AuthUser),
}

/// Player profile, the client's cached notion of "the current user".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub name_color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Username, falling back to the email address for fresh accounts.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }

    pub fn name_color(&self) -> &str {
        self.name_color.as_deref().unwrap_or(DEFAULT_NAME_COLOR)
    }

    /// Creation date in the `dd/mm/YYYY` form shown on the profile page.
    pub fn created_on(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

/// Fields written when a profile is saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub name_color: String,
}

impl ProfileUpdate {
    /// Apply this update on top of an existing profile.
    pub fn apply_to(&self, profile: &Profile) -> Profile {
        Profile {
            id: profile.id.clone(),
            email: self.email.clone(),
            username: Some(self.username.clone()),
            avatar_url: self.avatar_url.clone(),
            name_color: Some(self.name_color.clone()),
            created_at: profile.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile() -> Profile {
        Profile {
            id: "u1".to_string(),
            email: "legion@vincere.gg".to_string(),
            username: None,
            avatar_url: None,
            name_color: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_display_defaults() {
        let p = profile();
        assert_eq!(p.display_name(), "legion@vincere.gg");
        assert_eq!(p.name_color(), DEFAULT_NAME_COLOR);
        assert_eq!(p.created_on(), "15/03/2025");
    }

    #[test]
    fn test_profile_row_with_nulls() {
        let row = r##"{
            "id": "u1",
            "email": "a@b.co",
            "username": null,
            "avatar_url": null,
            "name_color": "#FF0000",
            "created_at": "2025-03-15T12:00:00+00:00"
        }"##;
        let p: Profile = serde_json::from_str(row).unwrap();
        assert_eq!(p.username, None);
        assert_eq!(p.name_color(), "#FF0000");
    }

    #[test]
    fn test_update_keeps_identity() {
        let update = ProfileUpdate {
            username: "Legion_99".to_string(),
            email: "new@vincere.gg".to_string(),
            avatar_url: Some("https://cdn/avatar.png".to_string()),
            name_color: "#112233".to_string(),
        };
        let updated = update.apply_to(&profile());
        assert_eq!(updated.id, "u1");
        assert_eq!(updated.display_name(), "Legion_99");
        assert_eq!(updated.email, "new@vincere.gg");
        assert_eq!(updated.created_on(), "15/03/2025");
    }
}
