//! # Output Module
//!
//! This module centralizes the user-facing report rendering for the
//! headerlint tool.
//!
//! Exact wording is a presentation concern, not part of the core contract;
//! the core exposes the two ordered path lists and any renderer can
//! reproduce this output. Rendering respects the global quiet mode.

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::ScanReport;

/// Print the check-mode report: files missing a header and files with an
/// out-of-date header, or an all-clear message when both lists are empty.
pub fn print_check_report(report: &ScanReport) {
  if is_quiet() {
    return;
  }

  if report.is_all_current() {
    println!(
      "{}",
      "All files have valid up to date copyright header".if_supports_color(Stream::Stdout, |m| m.green())
    );
    return;
  }

  if !report.missing.is_empty() {
    println!();
    print_list(
      "Files missing copyright header:",
      "----------------------",
      &report.missing,
    );
  }
  if !report.stale.is_empty() {
    println!();
    print_list(
      "Files with out-of-date copyright header:",
      "------------------------------",
      &report.stale,
    );
  }
  println!();
}

/// Print the update-mode report: files that had a header added and files
/// that had their header refreshed, or a nothing-to-do message.
pub fn print_update_report(report: &ScanReport) {
  if is_quiet() {
    return;
  }

  if report.is_all_current() {
    println!(
      "{}",
      "No updates necessary, all files have valid up to date copyright/license header"
        .if_supports_color(Stream::Stdout, |m| m.green())
    );
    return;
  }

  if !report.missing.is_empty() {
    println!();
    print_list(
      "Added copyright/license header to:",
      "----------------------------",
      &report.missing,
    );
  }
  if !report.stale.is_empty() {
    println!();
    print_list(
      "Updated copyright/license header in:",
      "------------------------------",
      &report.stale,
    );
  }
  println!();
}

fn print_list(heading: &str, rule: &str, paths: &[std::path::PathBuf]) {
  println!("{}", heading.if_supports_color(Stream::Stdout, |m| m.red()));
  println!("{rule}");
  for path in paths {
    println!("  {}", path.display());
  }
}
