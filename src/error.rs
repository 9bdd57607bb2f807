//! # Error Module
//!
//! This module defines the error type shared by the library surface.
//!
//! Errors fall into three categories: invalid configuration (raised before any
//! filesystem access), I/O failures during the walk or rewrite (fatal to the
//! run, never retried), and malformed exclusion patterns.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for scan and reconcile operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The configuration failed validation or could not be loaded.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// A directory entry could not be visited during the walk.
  #[error("Failed to walk directory: {source}")]
  Walk {
    #[from]
    source: walkdir::Error,
  },

  /// A file could not be read. Aborts the whole run rather than silently
  /// skipping, since a partial result would be misleading about compliance.
  #[error("Failed to read file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// A rewritten file could not be written back.
  #[error("Failed to write file '{path}': {source}")]
  Write { path: PathBuf, source: std::io::Error },

  /// An exclusion string is not a valid glob pattern.
  #[error("Invalid exclusion pattern '{pattern}': {source}")]
  Pattern {
    pattern: String,
    source: glob::PatternError,
  },
}

impl Error {
  /// Whether this error was raised by configuration validation, before any
  /// filesystem work took place.
  pub const fn is_config(&self) -> bool {
    matches!(self, Self::Config(_))
  }
}
