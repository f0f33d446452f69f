use std::time::Duration;

/// Environment variable holding the DeepSeek API key
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Optional environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "DEEPSEEK_BASE_URL";

/// Base URL of the DeepSeek API, without the trailing route
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Route appended to the base URL for chat completions
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Sampling temperature used when the caller does not pick one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Request timeout applied to every chat call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File the last response is written to
pub const DEFAULT_RESPONSE_FILE: &str = "response.json";

/// Message sent by the command line when none is given
pub const DEFAULT_GREETING: &str = "Hello, how are you?";
