//! Minimal client for DeepSeek's chat completions API.
//!
//! Build a [`config::ClientConfig`] (explicitly or from `DEEPSEEK_API_KEY`),
//! turn it into a [`llm::DeepSeekClient`], send an ordered list of
//! [`llm::ChatMessage`]s and optionally save the raw JSON reply.
//!
//! ```no_run
//! use deepseek_client::config::ClientConfig;
//! use deepseek_client::llm::{ChatMessage, DeepSeekClient};
//!
//! # async fn run() -> Result<(), deepseek_client::Error> {
//! let client = DeepSeekClient::new(ClientConfig::new("sk-...")?)?;
//! let response = client
//!     .chat_with_defaults(&[ChatMessage::user("Hello, how are you?")])
//!     .await?;
//! client.save_response(&response, "response.json")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod llm;
pub mod utils;

pub use errors::Error;
