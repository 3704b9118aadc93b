//! Filesystem adapter for env documents.
//!
//! The only module that touches storage: it reads a file's full text into a
//! string and writes a string back as a whole-file overwrite. Everything
//! else in the crate operates on strings.

use std::io;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Errors that can occur while reading or writing an env file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  /// Error reading the env file
  #[error("Failed to read env file: {0}")]
  Read(io::Error),
  /// Error creating the file's parent directories
  #[error("Failed to create parent directories: {0}")]
  CreateDir(io::Error),
  /// Error writing the env file
  #[error("Failed to write env file: {0}")]
  Write(io::Error),
}

/// Reads the full text of the env file at `path`.
///
/// A missing file yields an empty string instead of an error; any other
/// I/O failure propagates.
pub fn read_env_file<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
  #[cfg(feature = "tracing")]
  debug!("Reading env file: {:?}", path.as_ref());

  match std::fs::read_to_string(path) {
    Ok(content) => Ok(content),
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
    Err(err) => Err(FileError::Read(err)),
  }
}

/// Overwrites the env file at `path` with `content`, creating the parent
/// directory chain first when it is missing.
pub fn write_env_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
  let path = path.as_ref();

  #[cfg(feature = "tracing")]
  debug!("Writing env file: {:?} ({} bytes)", path, content.len());

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent).map_err(FileError::CreateDir)?;
  }

  std::fs::write(path, content).map_err(FileError::Write)
}
