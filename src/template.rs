//! # Template Module
//!
//! This module renders the header template for the current run and exposes
//! the prefix/suffix split used for stale-header detection.
//!
//! The header text contains the `{TIMEFRAME}` placeholder exactly once
//! (enforced by configuration validation). Splitting on the placeholder
//! yields the fixed prefix and suffix; the rendered header is
//! `prefix + timeframe + suffix` where the timeframe is either the current
//! year or a "firstYear-currentYear" range.

use chrono::Datelike;

use crate::config::{ConfigError, TIMEFRAME_TOKEN};

/// A header template split on the timeframe placeholder and rendered for
/// the current run.
///
/// Computed once per invocation. The prefix and suffix are the basis for
/// stale-vs-missing classification: a file containing both fragments but
/// not the exact rendered header carries an outdated timeframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  prefix: String,
  suffix: String,
  rendered: String,
}

impl HeaderTemplate {
  /// Split the header text on the placeholder and render it with the given
  /// timeframe.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MalformedPlaceholder`] if the placeholder is
  /// absent. Callers are expected to have validated the options first.
  pub fn new(header_text: &str, timeframe: &str) -> Result<Self, ConfigError> {
    let (prefix, suffix) = header_text
      .split_once(TIMEFRAME_TOKEN)
      .ok_or(ConfigError::MalformedPlaceholder)?;

    let rendered = format!("{prefix}{timeframe}{suffix}");

    Ok(Self {
      prefix: prefix.to_string(),
      suffix: suffix.to_string(),
      rendered,
    })
  }

  /// The header text before the timeframe placeholder.
  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  /// The header text after the timeframe placeholder.
  pub fn suffix(&self) -> &str {
    &self.suffix
  }

  /// The full header with the timeframe substituted in.
  pub fn rendered(&self) -> &str {
    &self.rendered
  }
}

/// Render the timeframe for a run.
///
/// When `first_year` is present and differs from the current year the
/// timeframe spans both, e.g. "2018-2026"; otherwise it is just the current
/// year.
pub fn render_timeframe(first_year: Option<i32>, current_year: i32) -> String {
  match first_year {
    Some(first) if first != current_year => format!("{first}-{current_year}"),
    _ => current_year.to_string(),
  }
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
  chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timeframe_with_earlier_first_year() {
    assert_eq!(render_timeframe(Some(2018), 2026), "2018-2026");
  }

  #[test]
  fn test_timeframe_without_first_year() {
    assert_eq!(render_timeframe(None, 2026), "2026");
  }

  #[test]
  fn test_timeframe_first_year_equals_current() {
    assert_eq!(render_timeframe(Some(2026), 2026), "2026");
  }

  #[test]
  fn test_split_and_render() {
    let template =
      HeaderTemplate::new("// Copyright {TIMEFRAME}. MIT license.", "2018-2026").expect("valid template");

    assert_eq!(template.prefix(), "// Copyright ");
    assert_eq!(template.suffix(), ". MIT license.");
    assert_eq!(template.rendered(), "// Copyright 2018-2026. MIT license.");
  }

  #[test]
  fn test_placeholder_at_start_yields_empty_prefix() {
    let template = HeaderTemplate::new("{TIMEFRAME} - all rights reserved", "2026").expect("valid template");

    assert_eq!(template.prefix(), "");
    assert_eq!(template.suffix(), " - all rights reserved");
    assert_eq!(template.rendered(), "2026 - all rights reserved");
  }

  #[test]
  fn test_placeholder_at_end_yields_empty_suffix() {
    let template = HeaderTemplate::new("// Copyright {TIMEFRAME}", "2026").expect("valid template");

    assert_eq!(template.suffix(), "");
    assert_eq!(template.rendered(), "// Copyright 2026");
  }

  #[test]
  fn test_missing_placeholder_is_rejected() {
    let result = HeaderTemplate::new("// Copyright 2023", "2026");
    assert!(matches!(
      result.expect_err("should fail"),
      ConfigError::MalformedPlaceholder
    ));
  }
}
