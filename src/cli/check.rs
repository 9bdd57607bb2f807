//! # Check Command
//!
//! Read-only mode: scans the configured tree and reports files missing a
//! header or carrying an out-of-date one, without modifying anything.

use std::process;

use anyhow::Result;
use clap::Args;
use headerlint::check_copyright_headers;
use headerlint::output::print_check_report;
use tracing::debug;

use super::CommonArgs;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Exit with status 1 when any file is missing a header or has an
  /// out-of-date one
  #[arg(long)]
  pub strict: bool,
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  let options = super::prepare(&args.common)?;

  let report = check_copyright_headers(&options)?;
  debug!(
    "Scan finished: {} missing, {} stale",
    report.missing.len(),
    report.stale.len()
  );

  print_check_report(&report);

  // Historically check always exits 0; --strict opts into a failing status
  if args.strict && !report.is_all_current() {
    process::exit(1);
  }

  Ok(())
}
