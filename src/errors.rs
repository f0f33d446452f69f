use reqwest::StatusCode;
use std::path::PathBuf;

/// Every failure the client can report.
///
/// `Configuration` is raised while building a client and happens before any
/// network activity. The other variants come out of `chat` or `save_response`
/// and have already been logged by the time the caller sees them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Cannot send an empty conversation")]
    EmptyConversation,
    #[error("Error making request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("DeepSeek API error ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Error decoding response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Error saving response to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error loading settings from {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },
}

impl Error {
    /// True for failures where the request never produced a usable HTTP
    /// exchange: connection errors, timeouts and non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status { .. })
    }

    /// True when the remote answered but the body was not JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
