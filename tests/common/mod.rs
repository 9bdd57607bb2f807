#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use headerlint::Options;

/// Fixed year used by tests that pin the processor's idea of "now".
pub const TEST_YEAR: i32 = 2026;

/// The real current year, for tests that exercise the public API (which
/// always renders against the wall clock).
pub fn current_year() -> i32 {
  chrono::Local::now().year()
}

/// Baseline options for a test tree: `.test` files, no exclusions, a simple
/// MIT-style header and quiet output.
pub fn test_options(root: &Path) -> Options {
  Options {
    extensions: vec![".test".to_string()],
    exclusions: vec![],
    first_year: None,
    header_text: "// Copyright {TIMEFRAME}. MIT license.".to_string(),
    root_dir: root.to_path_buf(),
    quiet: true,
  }
}

/// Writes a file under `dir`, creating parent directories as needed.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Writes a JSON configuration file for CLI tests, mirroring the camelCase
/// shape the loader expects.
pub fn write_config(dir: &Path, name: &str, options: &Options) -> Result<PathBuf> {
  let json = serde_json::json!({
    "extensions": options.extensions,
    "exclusions": options.exclusions,
    "firstYear": options.first_year,
    "headerText": options.header_text,
    "rootDir": options.root_dir,
    "quiet": options.quiet,
  });

  write_file(dir, name, &serde_json::to_string_pretty(&json)?)
}
