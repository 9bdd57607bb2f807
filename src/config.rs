//! # Configuration Module
//!
//! This module provides the user-supplied options that drive a check or
//! update run, along with loading from a JSON file and validation.
//!
//! Options are validated once per invocation, before any filesystem work
//! occurs. Validation checks run in a fixed order so error messages are
//! reproducible in tests.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// Placeholder token that must appear exactly once in the header text.
pub const TIMEFRAME_TOKEN: &str = "{TIMEFRAME}";

/// The earliest first year accepted as plausible for a copyright notice.
const MIN_FIRST_YEAR: i32 = 1900;

/// Options for a header check or update run.
///
/// Loaded from a JSON configuration file (camelCase field names) or
/// constructed in-process by library callers.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
  /// File extensions to check, e.g. `[".ts", ".rs"]`. A file is in scope
  /// only if its name ends with one of these.
  pub extensions: Vec<String>,

  /// Glob patterns of files or directories to exclude. A file whose path
  /// matches any of these is skipped entirely, even if its extension
  /// matches. Supports `*` within a path segment and `**` across segments.
  #[serde(default)]
  pub exclusions: Vec<String>,

  /// The first year of the copyright. When present and not equal to the
  /// current year, the rendered timeframe spans "firstYear-currentYear";
  /// otherwise only the current year is shown.
  #[serde(default)]
  pub first_year: Option<i32>,

  /// The copyright/license header text. Must contain [`TIMEFRAME_TOKEN`]
  /// exactly once; it is replaced by the rendered timeframe.
  pub header_text: String,

  /// The root directory to walk.
  pub root_dir: PathBuf,

  /// Suppress console output.
  #[serde(default)]
  pub quiet: bool,
}

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid JSON.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },

  /// `firstYear` is implausibly old or in the future.
  #[error("Invalid first year")]
  InvalidFirstYear,

  /// The extension list is empty.
  #[error("No extensions provided")]
  NoExtensions,

  /// The root directory is empty.
  #[error("No root directory provided")]
  NoRootDir,

  /// The header text is empty.
  #[error("No header text provided")]
  NoHeaderText,

  /// The header text does not contain the timeframe placeholder exactly
  /// once, so it cannot be split into a prefix and suffix.
  #[error("Header text must contain '{{TIMEFRAME}}' exactly once")]
  MalformedPlaceholder,
}

impl Options {
  /// Load options from a JSON configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed. Validation is a
  /// separate step, performed by the processor against the current year.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    let options: Options = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })?;

    Ok(options)
  }

  /// Validate the options against the current year.
  ///
  /// Checks, in order:
  /// - `first_year`, when present, is after 1900 and not in the future
  /// - `extensions` is non-empty
  /// - `root_dir` is non-empty
  /// - `header_text` is non-empty
  /// - `header_text` contains the timeframe placeholder exactly once
  ///
  /// The placeholder check resolves behavior the original left undefined:
  /// a missing or repeated token is rejected up front instead of producing
  /// an arbitrary prefix/suffix split.
  pub fn validate(&self, current_year: i32) -> Result<(), ConfigError> {
    if let Some(first_year) = self.first_year
      && (first_year <= MIN_FIRST_YEAR || first_year > current_year)
    {
      return Err(ConfigError::InvalidFirstYear);
    }

    if self.extensions.is_empty() {
      return Err(ConfigError::NoExtensions);
    }

    if self.root_dir.as_os_str().is_empty() {
      return Err(ConfigError::NoRootDir);
    }

    if self.header_text.is_empty() {
      return Err(ConfigError::NoHeaderText);
    }

    if self.header_text.matches(TIMEFRAME_TOKEN).count() != 1 {
      return Err(ConfigError::MalformedPlaceholder);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  fn valid_options() -> Options {
    Options {
      extensions: vec![".ts".to_string()],
      exclusions: vec![],
      first_year: Some(2022),
      header_text: format!("// Copyright {TIMEFRAME_TOKEN}. MIT license."),
      root_dir: PathBuf::from("."),
      quiet: true,
    }
  }

  #[test]
  fn test_valid_options_pass() {
    valid_options().validate(2026).expect("options should validate");
  }

  #[test]
  fn test_first_year_too_old() {
    let mut options = valid_options();
    options.first_year = Some(1900);
    let err = options.validate(2026).expect_err("should fail");
    assert_eq!(err.to_string(), "Invalid first year");
  }

  #[test]
  fn test_first_year_in_future() {
    let mut options = valid_options();
    options.first_year = Some(2027);
    let err = options.validate(2026).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidFirstYear));
  }

  #[test]
  fn test_first_year_equal_to_current_is_valid() {
    let mut options = valid_options();
    options.first_year = Some(2026);
    options.validate(2026).expect("current year is a valid first year");
  }

  #[test]
  fn test_empty_extensions() {
    let mut options = valid_options();
    options.extensions.clear();
    let err = options.validate(2026).expect_err("should fail");
    assert_eq!(err.to_string(), "No extensions provided");
  }

  #[test]
  fn test_empty_root_dir() {
    let mut options = valid_options();
    options.root_dir = PathBuf::new();
    let err = options.validate(2026).expect_err("should fail");
    assert_eq!(err.to_string(), "No root directory provided");
  }

  #[test]
  fn test_empty_header_text() {
    let mut options = valid_options();
    options.header_text = String::new();
    let err = options.validate(2026).expect_err("should fail");
    assert_eq!(err.to_string(), "No header text provided");
  }

  #[test]
  fn test_missing_placeholder() {
    let mut options = valid_options();
    options.header_text = "// Copyright 2023. MIT license.".to_string();
    let err = options.validate(2026).expect_err("should fail");
    assert!(matches!(err, ConfigError::MalformedPlaceholder));
  }

  #[test]
  fn test_repeated_placeholder() {
    let mut options = valid_options();
    options.header_text = format!("// {TIMEFRAME_TOKEN} and {TIMEFRAME_TOKEN}");
    let err = options.validate(2026).expect_err("should fail");
    assert!(matches!(err, ConfigError::MalformedPlaceholder));
  }

  #[test]
  fn test_validation_order_is_deterministic() {
    // Several fields invalid at once: the first check in document order wins.
    let options = Options {
      extensions: vec![],
      exclusions: vec![],
      first_year: Some(1800),
      header_text: String::new(),
      root_dir: PathBuf::new(),
      quiet: false,
    };
    let err = options.validate(2026).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidFirstYear));
  }

  #[test]
  fn test_load_from_json_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("headers.json");
    std::fs::write(
      &config_path,
      concat!(
        "{\n",
        "  \"extensions\": [\".ts\"],\n",
        "  \"exclusions\": [\"**/vendor/**\"],\n",
        "  \"firstYear\": 2023,\n",
        "  \"headerText\": \"// Copyright {TIMEFRAME}. MIT license.\",\n",
        "  \"rootDir\": \".\",\n",
        "  \"quiet\": true\n",
        "}\n",
      ),
    )
    .expect("write config");

    let options = Options::load(&config_path).expect("load should succeed");
    assert_eq!(options.extensions, vec![".ts".to_string()]);
    assert_eq!(options.exclusions, vec!["**/vendor/**".to_string()]);
    assert_eq!(options.first_year, Some(2023));
    assert_eq!(options.root_dir, PathBuf::from("."));
    assert!(options.quiet);
  }

  #[test]
  fn test_load_with_optional_fields_omitted() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("headers.json");
    std::fs::write(
      &config_path,
      "{\"extensions\": [\".rs\"], \"headerText\": \"// {TIMEFRAME}\", \"rootDir\": \"src\"}",
    )
    .expect("write config");

    let options = Options::load(&config_path).expect("load should succeed");
    assert!(options.exclusions.is_empty());
    assert_eq!(options.first_year, None);
    assert!(!options.quiet);
  }

  #[test]
  fn test_load_file_not_found() {
    let result = Options::load(Path::new("/nonexistent/headers.json"));
    assert!(matches!(
      result.expect_err("should fail"),
      ConfigError::Read { .. }
    ));
  }

  #[test]
  fn test_load_invalid_json() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("headers.json");
    std::fs::write(&config_path, "{not json").expect("write config");

    let result = Options::load(&config_path);
    assert!(matches!(
      result.expect_err("should fail"),
      ConfigError::Parse { .. }
    ));
  }
}
