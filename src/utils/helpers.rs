use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Starts a spinner on stderr showing `message` and the elapsed time
///
/// The spinner ticks on its own thread, so it keeps moving while the caller
/// awaits a request. Call `finish_and_clear` when done.
///
/// # Examples
///
/// ```no_run
/// let spinner = deepseek_client::utils::start_spinner("Waiting for DeepSeek...");
/// spinner.finish_and_clear();
/// ```
pub fn start_spinner(message: &str) -> ProgressBar {
    info!("{}", message);
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner} [{elapsed_precise}] {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
