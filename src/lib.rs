//! # headerlint
//!
//! A tool that verifies and enforces an up-to-date copyright/license header
//! across a tree of source files, and can rewrite files in place to insert
//! or refresh that header.
//!
//! Each run walks a root directory, filters files by extension and glob
//! exclusion patterns, and classifies every remaining file against a
//! year-templated header string: *current* (contains the exact rendered
//! header), *stale* (contains the header's fixed prefix and suffix but not
//! the rendered header, implying an outdated year) or *missing*. Check mode
//! only reports; update mode additionally rewrites stale and missing files.
//! Updates are idempotent, so a rerun converges every remaining file.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use headerlint::{Options, check_copyright_headers, update_copyright_headers};
//!
//! fn main() -> headerlint::Result<()> {
//!     let options = Options {
//!         extensions: vec![".rs".to_string()],
//!         exclusions: vec!["**/target/**".to_string()],
//!         first_year: Some(2023),
//!         header_text: "// Copyright {TIMEFRAME} Example Corp. MIT license.".to_string(),
//!         root_dir: PathBuf::from("src"),
//!         quiet: true,
//!     };
//!
//!     // Read-only check
//!     let report = check_copyright_headers(&options)?;
//!     if !report.is_all_current() {
//!         // Rewrite stale and missing files in place
//!         update_copyright_headers(&options)?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - The scan-and-reconcile engine
//! * [`config`] - Options loading and validation
//! * [`template`] - Header rendering and the prefix/suffix split
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod error;
pub mod exclusions;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod template;

pub use config::{ConfigError, Options};
pub use error::{Error, Result};
pub use processor::Processor;
pub use report::ScanReport;

/// Checks that all in-scope files under the root directory carry the current
/// rendered header. Read-only.
///
/// Returns the lists of missing and stale files in visitation order.
///
/// # Errors
///
/// Fails with [`Error::Config`] before any filesystem access if the options
/// are invalid, or with an I/O error if a file cannot be read (which aborts
/// the whole scan).
pub fn check_copyright_headers(options: &Options) -> Result<ScanReport> {
  Processor::new(options.clone())?.scan()
}

/// Updates all in-scope files under the root directory so they carry the
/// current rendered header, rewriting stale and missing files in place.
///
/// Returns the lists of files that had a header added (`missing`) or
/// refreshed (`stale`), in visitation order.
///
/// # Errors
///
/// As for [`check_copyright_headers`], plus an I/O error if a rewrite cannot
/// be written back. Files rewritten before the failure are left updated.
pub fn update_copyright_headers(options: &Options) -> Result<ScanReport> {
  Processor::new(options.clone())?.reconcile()
}
