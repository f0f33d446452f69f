use crate::config::ChatSettings;
use crate::constants::DEFAULT_GREETING;
use crate::llm::ChatMessage;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command line interface for the application
#[derive(Parser, Debug)]
#[command(version, about = "Send a chat completion request to DeepSeek and save the reply")]
pub struct Cli {
    /// Message sent as the user turn
    #[arg(short, long, default_value_t = String::from(DEFAULT_GREETING))]
    pub message: String,

    /// Optional system prompt, sent before the user message
    #[arg(long)]
    pub system: Option<String>,

    /// Model identifier (default: deepseek-chat)
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature (default: 0.7)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Base URL of the API (default: https://api.deepseek.com/v1)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout, e.g. "30s" or "2m" (default: 30s)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// File the response is saved to (default: response.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the response without saving it
    #[arg(long)]
    pub no_save: bool,

    /// YAML file with model, temperature, base_url, timeout and output
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to daily rotating files under ./logs
    #[arg(long)]
    pub log_to_file: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay `None` so that a
    /// settings file can fill them in.
    pub fn settings(&self) -> ChatSettings {
        ChatSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            base_url: self.base_url.clone(),
            timeout: self.timeout,
            output: self.output.clone(),
        }
    }

    /// Conversation to send: the optional system prompt, then the message.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.system
            .iter()
            .map(ChatMessage::system)
            .chain(std::iter::once(ChatMessage::user(self.message.as_str())))
            .collect()
    }
}
