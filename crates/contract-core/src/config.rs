//! Client Configuration
//!
//! Where the REST API lives and where the session token is persisted.
//! A browser bundle has no process environment, so overrides are baked in
//! at build time.

/// Default API endpoint (the FastAPI dev server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default local-storage key holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Contracts shown per listing page.
pub const PAGE_SIZE: usize = 9;

/// Delay before a successful registration redirects to the login view.
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2000;

/// Configuration for the REST client and session storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for the API, without trailing slash requirements.
    pub base_url: String,
    /// Storage key for the bearer token.
    pub token_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url` with the default token key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read `CONTRACT_API_URL` / `CONTRACT_TOKEN_KEY` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CONTRACT_API_URL"), option_env!("CONTRACT_TOKEN_KEY"))
    }

    fn from_values(base_url: Option<&str>, token_key: Option<&str>) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Self {
            base_url: non_empty(base_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_key: non_empty(token_key).unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_string()),
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
