use crate::errors::Error;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// Returns the assistant text of the first choice in an OpenAI-compatible
/// response, if there is one.
pub fn first_choice_content(response: &Value) -> Option<&str> {
    response["choices"][0]["message"]["content"].as_str()
}

/// Writes `response` to `filename` as JSON indented with two spaces,
/// replacing any previous contents.
///
/// The file is closed on every path out of this function. Failures are
/// logged here and returned as [`Error::Persistence`].
pub fn save_response<T>(response: &T, filename: impl AsRef<Path>) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let path = filename.as_ref();
    match write_pretty(response, path) {
        Ok(()) => {
            info!("Response saved to {}", path.display());
            Ok(())
        }
        Err(source) => {
            let err = Error::Persistence {
                path: path.to_path_buf(),
                source,
            };
            error!("{}", err);
            Err(err)
        }
    }
}

fn write_pretty<T>(value: &T, path: &Path) -> std::io::Result<()>
where
    T: Serialize + ?Sized,
{
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}
