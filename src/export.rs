use crate::errors::ExportError;
use log::{
    error,
    info,
};
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

/// The directory rendered configs are written to when no other directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// The extension appended to every exported config file name.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Returns the path `export_config` writes `file_name` to inside of `output_dir`.
#[must_use]
pub fn output_path(
    output_dir: &Path,
    file_name: &str,
) -> PathBuf {
    output_dir.join(format!("{file_name}.{OUTPUT_EXTENSION}"))
}

/// Writes rendered config text to `<output_dir>/<file_name>.txt`, creating `output_dir` if needed,
/// and logs the outcome. Returns the written path.
///
/// # Errors
///
/// Returns `ExportError::Io` if the directory can not be created or the file can not be written.
pub fn export_config<P: AsRef<Path>>(
    config_text: &str,
    file_name: &str,
    output_dir: P,
) -> Result<PathBuf, ExportError> {
    let output_dir = output_dir.as_ref();
    let path = output_path(output_dir, file_name);

    let written = fs::create_dir_all(output_dir).and_then(|()| fs::write(&path, config_text));

    match written {
        Ok(()) => {
            info!("config saved successfully to '{}'", path.display());

            Ok(path)
        }
        Err(source) => {
            error!(
                "failed writing config to '{}', error: {source}",
                path.display()
            );

            Err(ExportError::Io { path, source })
        }
    }
}
