//! Pure line-oriented transforms over an env document string.
//!
//! Every function here re-scans the raw text on each call; no parse tree is
//! kept between operations. Lines are walked with `split_inclusive` so each
//! line carries its own terminator, which keeps every untouched line
//! byte-for-byte identical in the output.

use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

const COMMENT_PREFIX: &str = "#";
const ASSIGNMENT_OPERATOR: &str = "=";
const LINE_TERMINATOR: &str = "\n";

/// Splits a line into the text before its terminator and the terminator
/// itself (empty at end of file).
fn split_terminator(line: &str) -> (&str, &str) {
  match line.strip_suffix(LINE_TERMINATOR) {
    Some(text) => (text, LINE_TERMINATOR),
    None => (line, ""),
  }
}

/// Returns the value of an active `key=value` line, requiring `key` to sit
/// exactly at the start of the line. A `#`-prefixed line can never match a
/// normal key because the `#` occupies that position.
fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
  line
    .strip_prefix(key)
    .and_then(|rest| rest.strip_prefix(ASSIGNMENT_OPERATOR))
}

/// Splits a line into key and value if it is an active entry: the text
/// before the first `=` is the key and must contain no `#`, which also
/// rules out comment lines. The key may be empty.
fn split_entry(line: &str) -> Option<(&str, &str)> {
  let (key, value) = line.split_once(ASSIGNMENT_OPERATOR)?;
  if key.contains(COMMENT_PREFIX) {
    return None;
  }
  Some((key, value))
}

/// Returns the value of the first active `key=` line in document order.
///
/// `Some("")` means the key is present with an empty value; `None` means
/// the key is absent. A commented-out occurrence (`#KEY=value`) counts as
/// absent. Matching is case-sensitive.
pub fn get_env<'a>(content: &'a str, key: &str) -> Option<&'a str> {
  #[cfg(feature = "tracing")]
  trace!("Looking up key: {}", key);

  content
    .split_inclusive(LINE_TERMINATOR)
    .find_map(|line| value_of(split_terminator(line).0, key))
}

/// Collects every active entry into a key → value map.
///
/// Blank lines, comment lines, and lines without `=` are skipped. Values
/// split at the first `=`. When a key appears on several active lines, the
/// last one wins.
pub fn get_envs(content: &str) -> HashMap<&str, &str> {
  let mut envs = HashMap::new();

  for line in content.split_inclusive(LINE_TERMINATOR) {
    if let Some((key, value)) = split_entry(split_terminator(line).0) {
      #[cfg(feature = "tracing")]
      trace!("Found entry: {}", key);

      envs.insert(key, value);
    }
  }

  #[cfg(feature = "tracing")]
  debug!("Collected {} entries", envs.len());

  envs
}

/// Sets `key` to `value`, returning the new document.
///
/// When the key has no active line, `key=value` is appended at the end,
/// separated by a newline unless the content is empty or already ends with
/// one. When the key is present, every active matching line is rewritten in
/// place, keeping its terminator (or the absence of one at end of file).
/// Comment lines are never modified, even `#KEY=value` with the same key.
pub fn set_env(content: &str, key: &str, value: &str) -> String {
  if get_env(content, key).is_none() {
    #[cfg(feature = "tracing")]
    debug!("Appending new entry for key: {}", key);

    let separator = if content.is_empty() || content.ends_with(LINE_TERMINATOR) {
      ""
    } else {
      LINE_TERMINATOR
    };
    return format!(
      "{}{}{}{}{}",
      content, separator, key, ASSIGNMENT_OPERATOR, value
    );
  }

  #[cfg(feature = "tracing")]
  debug!("Replacing active entries for key: {}", key);

  content
    .split_inclusive(LINE_TERMINATOR)
    .map(|line| {
      let (text, terminator) = split_terminator(line);
      if value_of(text, key).is_some() {
        format!("{}{}{}{}", key, ASSIGNMENT_OPERATOR, value, terminator)
      } else {
        line.to_string()
      }
    })
    .collect()
}

/// Applies [`set_env`] for each pair in iteration order.
pub fn set_envs<K, V, I>(content: &str, pairs: I) -> String
where
  K: AsRef<str>,
  V: AsRef<str>,
  I: IntoIterator<Item = (K, V)>,
{
  pairs
    .into_iter()
    .fold(content.to_string(), |content, (key, value)| {
      set_env(&content, key.as_ref(), value.as_ref())
    })
}

/// Removes every active `key=` line together with its terminator.
///
/// An absent key is a no-op. Comment lines and blank lines always survive,
/// and deleting a final line that had no terminator does not introduce one.
pub fn delete_env(content: &str, key: &str) -> String {
  #[cfg(feature = "tracing")]
  trace!("Deleting key: {}", key);

  content
    .split_inclusive(LINE_TERMINATOR)
    .filter(|line| value_of(split_terminator(line).0, key).is_none())
    .collect()
}

/// Applies [`delete_env`] for each key in order.
pub fn delete_envs<K, I>(content: &str, keys: I) -> String
where
  K: AsRef<str>,
  I: IntoIterator<Item = K>,
{
  keys.into_iter().fold(content.to_string(), |content, key| {
    delete_env(&content, key.as_ref())
  })
}
