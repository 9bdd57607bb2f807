//! # Exclusions Module
//!
//! This module compiles the configured exclusion strings into glob matchers
//! applied against walk-relative paths.
//!
//! Matching semantics: `*` matches within a path segment, `**` matches
//! across segments. Patterns are evaluated in configuration order and
//! short-circuit on the first match. A bare pattern without a leading `**/`
//! also matches at any depth, so `"file.ts"` excludes that filename in every
//! directory — callers rely on both the bare and the `**/name` forms.

use glob::{MatchOptions, Pattern};

use crate::error::Error;
use crate::verbose_log;

/// Match options requiring `/` to be matched literally, so `*` stays within
/// a single path segment while `**` spans segments.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

/// A compiled, ordered set of exclusion patterns.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
  patterns: Vec<Pattern>,
}

impl ExclusionSet {
  /// Compile exclusion strings into patterns.
  ///
  /// Each string compiles to the pattern as given plus an `**/`-prefixed
  /// variant (unless it already starts with `**/`), preserving the
  /// match-anywhere behavior of bare filename exclusions.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Pattern`] if any exclusion string is not a valid glob.
  pub fn new(exclusions: &[String]) -> Result<Self, Error> {
    let mut patterns = Vec::with_capacity(exclusions.len() * 2);

    for exclusion in exclusions {
      // Normalize pattern: convert backslashes to forward slashes
      let exclusion = exclusion.replace('\\', "/");

      let compile = |p: &str| -> Result<Pattern, Error> {
        Pattern::new(p).map_err(|source| Error::Pattern {
          pattern: p.to_string(),
          source,
        })
      };

      patterns.push(compile(&exclusion)?);

      if !exclusion.starts_with("**/") {
        patterns.push(compile(&format!("**/{exclusion}"))?);
      }
    }

    Ok(Self { patterns })
  }

  /// Whether a walk-relative path (with `/` separators) matches any
  /// exclusion pattern.
  pub fn is_excluded(&self, path: &str) -> bool {
    if self
      .patterns
      .iter()
      .any(|pattern| pattern.matches_with(path, MATCH_OPTIONS))
    {
      verbose_log!("Skipping: {} (matches exclusion pattern)", path);
      return true;
    }
    false
  }

  /// Whether the set contains no patterns.
  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}
