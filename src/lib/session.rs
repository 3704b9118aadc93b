//! Chainable editing sessions bound to one env file.
//!
//! A session loads the file's content once, applies any number of in-memory
//! edits, and flushes the accumulated result back on demand. There is no
//! locking between open and write: two sessions on the same path race, and
//! the last write wins.

use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::edit;
use crate::file::{self, FileError};

/// A stateful editor holding one file path and its in-memory content.
///
/// Nothing touches the filesystem between [`open`](EnvSession::open) and
/// [`write`](EnvSession::write).
///
/// # Example
///
/// ```rust,no_run
/// use env_edit::session::EnvSession;
///
/// let mut session = EnvSession::open(".env").unwrap();
/// session.set("API_KEY", "secret").delete("LEGACY_FLAG");
/// session.write().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnvSession {
  path: PathBuf,
  content: String,
}

impl EnvSession {
  /// Opens a session on `path`, loading its current content.
  ///
  /// A missing file starts the session with empty content; the file itself
  /// is only created by a later [`write`](EnvSession::write).
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
    let path = path.as_ref().to_path_buf();
    let content = file::read_env_file(&path)?;

    #[cfg(feature = "tracing")]
    debug!("Opened session on {:?} ({} bytes)", path, content.len());

    Ok(Self { path, content })
  }

  /// Returns the value of `key` in the held content. Does not mutate.
  pub fn get(&self, key: &str) -> Option<&str> {
    edit::get_env(&self.content, key)
  }

  /// Sets `key` to `value` in the held content. Chainable.
  pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
    self.content = edit::set_env(&self.content, key, value);
    self
  }

  /// Removes `key` from the held content. Chainable.
  pub fn delete(&mut self, key: &str) -> &mut Self {
    self.content = edit::delete_env(&self.content, key);
    self
  }

  /// Flushes the held content back to the session's path.
  pub fn write(&self) -> Result<(), FileError> {
    file::write_env_file(&self.path, &self.content)
  }

  /// The held content, including any unflushed edits.
  pub fn content(&self) -> &str {
    &self.content
  }
}

/// Opens an [`EnvSession`] on `path`.
pub fn open_session<P: AsRef<Path>>(path: P) -> Result<EnvSession, FileError> {
  EnvSession::open(path)
}
