use crate::constants::{
    API_KEY_ENV, BASE_URL_ENV, CHAT_COMPLETIONS_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
use crate::errors::Error;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Connection settings for a [`crate::llm::DeepSeekClient`].
///
/// A `ClientConfig` always carries a non-empty API key and a valid base URL;
/// both are checked when the value is built, so a client made from it can
/// never fail for missing credentials at call time.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration from an explicit API key, pointing at the
    /// public DeepSeek endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the key is empty or only whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "{} must not be empty",
                API_KEY_ENV
            )));
        }

        Ok(ClientConfig {
            api_key,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads the API key (and an optional base URL override) from the
    /// process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] but resolves variables through
    /// `lookup`, which keeps tests away from the real environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or_else(|| {
            Error::Configuration(format!(
                "{} not found in environment variables",
                API_KEY_ENV
            ))
        })?;

        let config = Self::new(api_key)?;
        match lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(&url),
            None => Ok(config),
        }
    }

    /// Points the client at another OpenAI-compatible deployment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] unless `base_url` is an absolute
    /// http or https URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the chat completions route under the base URL.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

// The key stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Configuration(format!("Invalid base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Configuration(format!(
            "Unsupported scheme '{}' in base URL '{}'",
            scheme, raw
        ))),
    }
}
