//! # Processor Module
//!
//! This module contains the core scan-and-reconcile routine shared by check
//! mode and update mode.
//!
//! A run walks the configured root directory in deterministic lexical order,
//! filters files by exclusion pattern and extension, reads each remaining
//! file in full and classifies it as current, stale or missing against the
//! rendered header. In update mode, stale and missing files are rewritten in
//! place immediately upon classification. The first I/O failure aborts the
//! whole run; a partial result would be misleading about compliance.

use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::exclusions::ExclusionSet;
use crate::report::ScanReport;
use crate::template::{self, HeaderTemplate};

/// Classification of a single in-scope file against the rendered header.
///
/// The three states are mutually exclusive and exhaust all in-scope files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
  /// The content contains the exact rendered header.
  Current,
  /// The content contains both the prefix and suffix fragments but not the
  /// rendered header. `start` is the byte offset of the first prefix
  /// occurrence, `end` the offset one past the first suffix occurrence.
  /// The suffix search is independent of the prefix position, so `end` may
  /// precede `start` on pathological inputs; the rewrite reproduces that
  /// splice faithfully.
  Stale { start: usize, end: usize },
  /// Neither the rendered header nor both fragments were found.
  Missing,
}

/// Processor for scanning a file tree and reconciling headers.
///
/// Construction validates the options against the current year and compiles
/// the exclusion patterns, so a failed run performs no filesystem access.
pub struct Processor {
  options: Options,
  template: HeaderTemplate,
  exclusions: ExclusionSet,
}

impl Processor {
  /// Creates a processor for the current calendar year.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] if the options fail validation, or
  /// [`Error::Pattern`] if an exclusion string is not a valid glob.
  pub fn new(options: Options) -> Result<Self> {
    Self::with_year(options, template::current_year())
  }

  /// Creates a processor with an explicit current year.
  ///
  /// Exposed so callers (and tests) can pin the year a run renders against.
  pub fn with_year(options: Options, current_year: i32) -> Result<Self> {
    options.validate(current_year)?;

    let timeframe = template::render_timeframe(options.first_year, current_year);
    let template = HeaderTemplate::new(&options.header_text, &timeframe)?;
    let exclusions = ExclusionSet::new(&options.exclusions)?;

    debug!("Rendered header: {}", template.rendered());

    Ok(Self {
      options,
      template,
      exclusions,
    })
  }

  /// The options this processor was built from.
  pub fn options(&self) -> &Options {
    &self.options
  }

  /// Walks the root directory and classifies every in-scope file, without
  /// modifying anything.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Walk`] if a directory entry cannot be visited, or
  /// [`Error::Read`] if a file cannot be read as text. Either aborts the
  /// run.
  pub fn scan(&self) -> Result<ScanReport> {
    self.walk(false)
  }

  /// Walks the root directory, classifies every in-scope file and rewrites
  /// stale or missing files in place.
  ///
  /// Missing files get the rendered header and a newline prepended; stale
  /// files have the span from the first prefix occurrence through the end
  /// of the first suffix occurrence replaced with the rendered header,
  /// leaving all other content byte-for-byte unchanged. Rewrites happen
  /// immediately upon classification; a failure on one file does not roll
  /// back files already rewritten, which is safe because a rerun converges
  /// every remaining file.
  ///
  /// # Errors
  ///
  /// As for [`scan`](Self::scan), plus [`Error::Write`] if a rewrite cannot
  /// be written back.
  pub fn reconcile(&self) -> Result<ScanReport> {
    self.walk(true)
  }

  fn walk(&self, rewrite: bool) -> Result<ScanReport> {
    let root = &self.options.root_dir;
    let mut report = ScanReport::default();

    debug!("Walking {}", root.display());

    for entry in WalkDir::new(root).sort_by_file_name() {
      let entry = entry?;
      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.path();
      if !self.in_scope(path) {
        continue;
      }

      trace!("Classifying {}", path.display());
      let content = read_file(path)?;

      match self.classify(&content) {
        Classification::Current => {}
        Classification::Stale { start, end } => {
          report.record_stale(path);
          if rewrite {
            let updated = self.splice_header(&content, start, end);
            write_file(path, &updated)?;
          }
        }
        Classification::Missing => {
          report.record_missing(path);
          if rewrite {
            let updated = format!("{}\n{}", self.template.rendered(), content);
            write_file(path, &updated)?;
          }
        }
      }
    }

    Ok(report)
  }

  /// Whether a walked file passes the exclusion and extension filters.
  ///
  /// Exclusion patterns are matched against the path relative to the root
  /// directory, with `/` separators.
  fn in_scope(&self, path: &Path) -> bool {
    let relative = path.strip_prefix(&self.options.root_dir).unwrap_or(path);
    let relative = relative.to_string_lossy().replace('\\', "/");

    if self.exclusions.is_excluded(&relative) {
      return false;
    }

    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    self.options.extensions.iter().any(|ext| file_name.ends_with(ext))
  }

  /// Classifies file content against the rendered header.
  ///
  /// Stale detection finds the prefix and suffix by independent substring
  /// search, without verifying adjacency or relative order. A file
  /// containing both fragments anywhere is stale, not necessarily
  /// wrong-year; this loose heuristic is kept for compatibility with the
  /// established behavior.
  fn classify(&self, content: &str) -> Classification {
    if content.contains(self.template.rendered()) {
      return Classification::Current;
    }

    let prefix_at = content.find(self.template.prefix());
    let suffix_at = content.find(self.template.suffix());

    match (prefix_at, suffix_at) {
      (Some(start), Some(at)) => Classification::Stale {
        start,
        end: at + self.template.suffix().len(),
      },
      _ => Classification::Missing,
    }
  }

  /// Replaces `content[start..end]` with the rendered header.
  ///
  /// The two slices are taken independently, so an `end` before `start`
  /// duplicates the overlap rather than panicking, matching the splice the
  /// classification describes.
  fn splice_header(&self, content: &str, start: usize, end: usize) -> String {
    let mut updated = String::with_capacity(content.len() + self.template.rendered().len());
    updated.push_str(&content[..start]);
    updated.push_str(self.template.rendered());
    updated.push_str(&content[end..]);
    updated
  }
}

fn read_file(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).map_err(|source| Error::Read {
    path: path.to_path_buf(),
    source,
  })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
  std::fs::write(path, content).map_err(|source| Error::Write {
    path: path.to_path_buf(),
    source,
  })
}
