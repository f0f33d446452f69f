use crate::config::ClientConfig;
use crate::constants::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::errors::Error;
use crate::llm::{ChatMessage, ChatRequest};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::{debug, error};

/// Client for DeepSeek's chat completions API
///
/// Holds the credential, the endpoint and a reusable HTTP client. Every
/// [`DeepSeekClient::chat`] call is an independent request; nothing is
/// remembered between calls.
#[derive(Clone)]
pub struct DeepSeekClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl DeepSeekClient {
    /// Creates a new client from a validated configuration
    ///
    /// # Arguments
    /// * `config` - API key, base URL and timeout
    ///
    /// # Returns
    /// * `Result<Self, Error>` - Client instance, or a transport error if the
    ///   HTTP client could not be initialised
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(DeepSeekClient {
            http,
            endpoint: config.chat_completions_url(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Creates a client with the API key read from `DEEPSEEK_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// URL every chat request is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `messages` to the chat completions endpoint and returns the
    /// decoded JSON response.
    ///
    /// # Arguments
    /// * `messages` - Conversation to send, in order
    /// * `model` - Model identifier, passed through unchecked
    /// * `temperature` - Sampling temperature, passed through unchecked
    ///
    /// # Errors
    /// * [`Error::EmptyConversation`] - `messages` is empty; nothing is sent
    /// * [`Error::Transport`] - the request could not be sent or timed out
    /// * [`Error::Status`] - the API answered with a non-success status
    /// * [`Error::Decode`] - the body was not valid JSON
    ///
    /// Failures are logged before being returned.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        temperature: f64,
    ) -> Result<Value, Error> {
        if messages.is_empty() {
            error!("{}", Error::EmptyConversation);
            return Err(Error::EmptyConversation);
        }

        let request = ChatRequest::new(messages, model, temperature);
        match self.send(&request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        }
    }

    /// [`DeepSeekClient::chat`] with `deepseek-chat` at temperature 0.7.
    pub async fn chat_with_defaults(&self, messages: &[ChatMessage]) -> Result<Value, Error> {
        self.chat(messages, DEFAULT_MODEL, DEFAULT_TEMPERATURE).await
    }

    /// Writes a response to `filename` as indented JSON.
    /// See [`crate::llm::save_response`].
    pub fn save_response(&self, response: &Value, filename: impl AsRef<Path>) -> Result<(), Error> {
        crate::llm::save_response(response, filename)
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<Value, Error> {
        debug!(
            "POST {} model={} messages={} temperature={}",
            self.endpoint,
            request.model,
            request.messages.len(),
            request.temperature
        );

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        let text = res.text().await?;
        debug!("DeepSeek responded with {} ({} bytes)", status, text.len());
        serde_json::from_str(&text).map_err(Error::Decode)
    }
}

impl fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
