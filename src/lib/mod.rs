//! Environment file editing library.
//!
//! This library reads, queries, mutates, and persists `KEY=VALUE` env files
//! while preserving the surrounding formatting: blank lines, comments, and
//! line ordering survive every edit untouched.
//!
//! # Features
//!
//! - **Format preservation**: an edit only rewrites the targeted key's line
//! - **Comment awareness**: `#KEY=value` lines are never read or edited
//! - **Pure transforms**: every edit is string-in, string-out
//! - **Chainable sessions**: load a file once, chain edits, write back
//! - **Optional tracing**: detailed logging when the `tracing` feature is enabled
//!
//! # Example
//!
//! ```rust,no_run
//! use env_edit::session::EnvSession;
//!
//! let mut session = EnvSession::open(".env").unwrap();
//! session.set("DB_HOST", "localhost").set("DB_PORT", "5432");
//! session.write().unwrap();
//! ```

pub mod edit;
pub mod file;
pub mod session;
