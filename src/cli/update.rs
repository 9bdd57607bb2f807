//! # Update Command
//!
//! Update mode: performs the same walk and classification as check, but
//! rewrites stale and missing files in place so they carry the current
//! header.

use anyhow::Result;
use clap::Args;
use headerlint::output::print_update_report;
use headerlint::update_copyright_headers;
use tracing::debug;

use super::CommonArgs;

/// Arguments for the update command
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
  #[command(flatten)]
  pub common: CommonArgs,
}

/// Run the update command with the given arguments
pub fn run_update(args: UpdateArgs) -> Result<()> {
  let options = super::prepare(&args.common)?;

  let report = update_copyright_headers(&options)?;
  debug!(
    "Reconcile finished: {} added, {} refreshed",
    report.missing.len(),
    report.stale.len()
  );

  print_update_report(&report);

  Ok(())
}
