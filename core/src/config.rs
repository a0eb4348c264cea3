//! Base URL resolution.
//!
//! The base URL is resolved once, usually at startup, and handed to
//! `ServerClient`. Nothing in this crate reads the environment on its own
//! after that point.

/// Environment variable holding the API origin.
pub const BASE_URL_VAR: &str = "VITE_API_URL";

/// Origin used when `BASE_URL_VAR` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Immutable configuration for `ServerClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    base_url: String,
}

impl ServerConfig {
    /// Use `base_url` exactly as given. No trailing-slash handling is done.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL through `lookup`, falling back to
    /// `DEFAULT_BASE_URL` when the variable is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_VAR) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `.env` from the working directory (if any), then resolve from the
    /// process environment. Variables already set are not overwritten.
    pub fn from_dotenv() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::from_env()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` followed by `path`, concatenated verbatim.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
