//! Data models shared by the provider client and the front end.

mod avatar;
mod user;
mod wiki;

pub use avatar::AvatarFile;
pub use user::{AuthSession, AuthUser, Profile, ProfileUpdate, SignUp, DEFAULT_NAME_COLOR};
pub use wiki::{NewWikiArticle, WikiArticle, WikiCategory};

/// Row ids come back as strings (uuid) or numbers (identity columns)
/// depending on the table; the client treats them as opaque strings.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
