//! # Hosted provider over HTTP
//!
//! [`SupabaseBackend`] talks to a Supabase-compatible service:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `sign_in` | `POST /auth/v1/token?grant_type=password` |
//! | `sign_up` | `POST /auth/v1/signup` (username in `data`) |
//! | `sign_out` | `POST /auth/v1/logout` |
//! | `reset_password` | `POST /auth/v1/recover` |
//! | `get_profile` / `update_profile` | `GET` / `PATCH /rest/v1/profiles?id=eq.<id>` |
//! | `upload_avatar` | `POST /storage/v1/object/avatars/<path>` |
//! | `create_wiki_article` / `get_wiki_article` | `POST` / `GET /rest/v1/wiki_articles` |
//!
//! Every request carries the public `apikey`; requests made on behalf of a
//! signed-in player also carry their access token as the bearer. Non-2xx
//! responses are turned into [`ApiError`]s by [`ProviderErrorBody`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::Backend;
use crate::config::BackendConfig;
use crate::error::{ApiError, ErrorKind, ProviderErrorBody};
use crate::models::{
    AuthSession, AuthUser, AvatarFile, NewWikiArticle, Profile, ProfileUpdate, SignUp, WikiArticle,
};

const AVATAR_BUCKET: &str = "avatars";
const PROFILES: &str = "rest/v1/profiles";
const WIKI_ARTICLES: &str = "rest/v1/wiki_articles";

/// PostgREST returns a bare object instead of an array with this accept type.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// [`Backend`] implementation for the hosted provider.
#[derive(Debug, Clone)]
pub struct SupabaseBackend {
    config: BackendConfig,
    client: Client,
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&AuthSession>,
    ) -> RequestBuilder {
        let token = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(self.config.anon_key.as_str());
        self.client
            .request(method, self.config.endpoint(path))
            .header("apikey", self.config.anon_key.as_str())
            .bearer_auth(token)
    }

    fn public_object_url(&self, bucket: &str, path: &str) -> String {
        self.config
            .endpoint(&format!("storage/v1/object/public/{bucket}/{path}"))
    }
}

async fn send(req: RequestBuilder) -> Result<String, ApiError> {
    let resp = req.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        tracing::debug!("Provider rejected request ({}): {}", status, body);
        return Err(ProviderErrorBody::into_error(&body, status.as_u16()));
    }
    Ok(body)
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
    let body = send(req).await?;
    parse(&body)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(unexpected_response)
}

fn unexpected_response(e: serde_json::Error) -> ApiError {
    ApiError::new(
        ErrorKind::Provider,
        format!("Unexpected provider response: {e}"),
    )
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    username: &'a str,
}

#[derive(Serialize)]
struct RecoverBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ArticleRow<'a> {
    #[serde(flatten)]
    article: &'a NewWikiArticle,
    author_id: &'a str,
}

/// Sign-up answers with a full session when the account is auto-confirmed,
/// and with the bare user record when a confirmation email went out.
fn parse_sign_up(body: &str) -> Result<SignUp, ApiError> {
    let value: serde_json::Value = parse(body)?;
    if value.get("access_token").is_some() {
        return parse::<AuthSession>(body).map(SignUp::Session);
    }
    let user = value
        .get("user")
        .filter(|u| !u.is_null())
        .cloned()
        .unwrap_or(value);
    serde_json::from_value::<AuthUser>(user)
        .map(SignUp::ConfirmationPending)
        .map_err(unexpected_response)
}

impl Backend for SupabaseBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let req = self
            .request(Method::POST, "auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password });
        send_json(req).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<SignUp, ApiError> {
        let req = self.request(Method::POST, "auth/v1/signup", None).json(&SignUpBody {
            email,
            password,
            data: SignUpMetadata { username },
        });
        let body = send(req).await?;
        parse_sign_up(&body)
    }

    async fn sign_out(&self, session: &AuthSession) -> Result<(), ApiError> {
        let req = self.request(Method::POST, "auth/v1/logout", Some(session));
        send(req).await.map(|_| ())
    }

    async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        let req = self
            .request(Method::POST, "auth/v1/recover", None)
            .json(&RecoverBody { email });
        send(req).await.map(|_| ())
    }

    async fn get_profile(&self, session: &AuthSession) -> Result<Profile, ApiError> {
        let req = self
            .request(Method::GET, PROFILES, Some(session))
            .query(&[("id", format!("eq.{}", session.user.id)), ("select", "*".to_string())])
            .header(ACCEPT, SINGLE_OBJECT);
        send_json(req).await
    }

    async fn update_profile(
        &self,
        session: &AuthSession,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let req = self
            .request(Method::PATCH, PROFILES, Some(session))
            .query(&[("id", format!("eq.{}", session.user.id))])
            .header(ACCEPT, SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(update);
        send_json(req).await
    }

    async fn upload_avatar(
        &self,
        session: &AuthSession,
        file: &AvatarFile,
    ) -> Result<String, ApiError> {
        let path = file.storage_path(&session.user.id);
        let req = self
            .request(
                Method::POST,
                &format!("storage/v1/object/{AVATAR_BUCKET}/{path}"),
                Some(session),
            )
            .header(CONTENT_TYPE, file.content_type.as_str())
            .header("x-upsert", "true")
            .body(file.bytes.clone());
        send(req).await?;
        Ok(self.public_object_url(AVATAR_BUCKET, &path))
    }

    async fn create_wiki_article(
        &self,
        session: &AuthSession,
        article: &NewWikiArticle,
    ) -> Result<WikiArticle, ApiError> {
        let req = self
            .request(Method::POST, WIKI_ARTICLES, Some(session))
            .header(ACCEPT, SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(&ArticleRow {
                article,
                author_id: &session.user.id,
            });
        send_json(req).await
    }

    async fn get_wiki_article(
        &self,
        session: Option<&AuthSession>,
        id: &str,
    ) -> Result<WikiArticle, ApiError> {
        let req = self
            .request(Method::GET, WIKI_ARTICLES, session)
            .query(&[("id", format!("eq.{id}")), ("select", "*".to_string())])
            .header(ACCEPT, SINGLE_OBJECT);
        send_json(req).await
    }
}
