mod client;
mod parser;

use crate::constants::{DEFAULT_MODEL, DEFAULT_RESPONSE_FILE, DEFAULT_TEMPERATURE};
use crate::errors::Error;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;

pub use client::ClientConfig;
pub use parser::load_chat_settings;

/// Per-run chat settings, read from a YAML file and/or the command line
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatSettings {
    /// Model identifier (e.g. "deepseek-chat", "deepseek-reasoner")
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature passed through to the API
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Base URL of an OpenAI-compatible endpoint
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout written as a human duration ("30s", "2m")
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub timeout: Option<Duration>,
    /// Where the response is saved
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl ChatSettings {
    /// Layers `overrides` on top of `self`: any field set in `overrides` wins.
    pub fn merge(self, overrides: ChatSettings) -> ChatSettings {
        ChatSettings {
            model: overrides.model.or(self.model),
            temperature: overrides.temperature.or(self.temperature),
            base_url: overrides.base_url.or(self.base_url),
            timeout: overrides.timeout.or(self.timeout),
            output: overrides.output.or(self.output),
        }
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESPONSE_FILE))
    }

    /// Applies the connection-related settings to a client configuration.
    /// Fields left unset keep whatever `config` already had.
    pub fn apply_to(&self, config: ClientConfig) -> Result<ClientConfig, Error> {
        let config = match &self.base_url {
            Some(url) => config.with_base_url(url)?,
            None => config,
        };
        Ok(match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        })
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| humantime::parse_duration(&s).map_err(serde::de::Error::custom))
        .transpose()
}
