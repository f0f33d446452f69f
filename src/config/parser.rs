use super::ChatSettings;
use crate::errors::Error;
use std::fs;
use std::path::Path;

use tracing::info;

/// Loads chat settings from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML settings file
///
/// # Errors
///
/// Returns [`Error::ConfigFile`] if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into `ChatSettings`, including
///   unknown keys and timeouts that are not valid durations
pub fn load_chat_settings(file_path: impl AsRef<Path>) -> Result<ChatSettings, Error> {
    let path = file_path.as_ref();
    let config_error = |message: String| Error::ConfigFile {
        path: path.to_path_buf(),
        message,
    };

    let yaml_str = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    if yaml_str.trim().is_empty() {
        return Ok(ChatSettings::default());
    }

    // A document holding only comments parses as null.
    let settings: ChatSettings = serde_yaml::from_str::<Option<ChatSettings>>(&yaml_str)
        .map_err(|e| config_error(e.to_string()))?
        .unwrap_or_default();
    info!("Loaded chat settings from {}", path.display());
    Ok(settings)
}
