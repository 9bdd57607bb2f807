//! # Report Module
//!
//! This module defines the result of a scan or reconcile run: the ordered
//! lists of files missing a header and files with a stale header.
//!
//! Files that are already current are not recorded. Classification results
//! are produced fresh each run; the filesystem itself is the only state
//! store between runs.

use std::path::{Path, PathBuf};

/// Paths accumulated during a scan or reconcile run, in visitation order.
///
/// In update mode the same lists describe what was rewritten: `missing`
/// files had the header prepended, `stale` files had their header span
/// replaced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
  /// Files containing neither the rendered header nor both prefix/suffix
  /// fragments.
  pub missing: Vec<PathBuf>,

  /// Files containing the header's prefix and suffix but not the exact
  /// rendered header, implying an outdated timeframe.
  pub stale: Vec<PathBuf>,
}

impl ScanReport {
  /// Whether every in-scope file already carries the current header.
  pub fn is_all_current(&self) -> bool {
    self.missing.is_empty() && self.stale.is_empty()
  }

  /// Total number of files needing attention.
  pub fn issue_count(&self) -> usize {
    self.missing.len() + self.stale.len()
  }

  pub(crate) fn record_missing(&mut self, path: &Path) {
    self.missing.push(path.to_path_buf());
  }

  pub(crate) fn record_stale(&mut self, path: &Path) {
    self.stale.push(path.to_path_buf());
  }
}
