//! File loading, output path derivation and atomic output writing.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Prefix of the temporary files created next to the output.
const TEMP_PREFIX: &str = ".swf-zopfli-";

/// Contents and permissions of a loaded input file.
#[derive(Debug)]
pub struct InputFile {
    /// Complete file contents
    pub bytes: Vec<u8>,
    /// Permissions to give the output file
    pub permissions: Permissions,
}

/// Loads a whole input file into memory.
///
/// # Errors
///
/// - [`Error::EmptyOrDirectoryInput`] if `path` is a directory or an empty file
/// - [`Error::UnreadableFile`] if the file cannot be opened or read
pub fn load_input(path: &Path) -> Result<InputFile> {
    let unreadable = |source| Error::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(unreadable)?;
    if metadata.is_dir() {
        return Err(Error::EmptyOrDirectoryInput {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(unreadable)?;
    if bytes.is_empty() {
        return Err(Error::EmptyOrDirectoryInput {
            path: path.to_path_buf(),
        });
    }

    Ok(InputFile {
        bytes,
        permissions: metadata.permissions(),
    })
}

/// Generates the output path by appending `suffix` to the input file name.
///
/// The output always lives next to the input.
///
/// # Errors
///
/// Returns [`Error::InvalidSuffix`] if `suffix` is empty, since the output
/// would then replace the input.
pub fn output_path_for(input: &Path, suffix: &str) -> Result<PathBuf> {
    if suffix.is_empty() {
        return Err(Error::InvalidSuffix);
    }

    let mut output = input.as_os_str().to_owned();
    output.push(suffix);
    Ok(PathBuf::from(output))
}

/// Writes `bytes` to `path` without ever exposing a partial file.
///
/// Data goes to a temporary file in the destination directory which is then
/// renamed over `path`. An existing file at `path` is replaced. If anything
/// fails, the temporary file is removed and `path` is left untouched.
///
/// # Errors
///
/// Returns [`Error::OutputWriteFailure`] if the temporary file cannot be
/// created, written or renamed.
pub fn write_output(path: &Path, bytes: &[u8], permissions: Option<Permissions>) -> Result<()> {
    let write_failure = |source| Error::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    // Use the parent directory, or current directory if none
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)
        .map_err(write_failure)?;

    file.write_all(bytes).map_err(write_failure)?;
    file.as_file().sync_all().map_err(write_failure)?;
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_failure)?;
    }

    file.persist(path).map_err(|err| write_failure(err.error))?;
    debug!(path = %path.display(), len = bytes.len(), "output written");

    Ok(())
}
