//! Backend configuration from environment variables.

/// Environment variable holding the provider's base URL.
pub const BACKEND_URL_VAR: &str = "VINCERE_BACKEND_URL";
/// Environment variable holding the provider's public (anon) API key.
pub const BACKEND_KEY_VAR: &str = "VINCERE_BACKEND_ANON_KEY";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("{0} must be an http(s) URL")]
    InvalidUrl(String),
}

/// Connection settings for the hosted provider.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Base URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public API key sent as `apikey` on every request.
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();

        if url.is_empty() {
            return Err(ConfigError::Missing(BACKEND_URL_VAR));
        }
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(BACKEND_KEY_VAR));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }

        Ok(Self { url, anon_key })
    }

    /// Read the configuration from the environment.
    ///
    /// Native builds load `.env` first and read the process environment.
    /// Browser builds have no environment, so values captured at compile
    /// time are used instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let url = runtime_var(BACKEND_URL_VAR)
            .or_else(|| option_env!("VINCERE_BACKEND_URL").map(str::to_string))
            .ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let anon_key = runtime_var(BACKEND_KEY_VAR)
            .or_else(|| option_env!("VINCERE_BACKEND_ANON_KEY").map(str::to_string))
            .ok_or(ConfigError::Missing(BACKEND_KEY_VAR))?;

        Self::new(url, anon_key)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}
