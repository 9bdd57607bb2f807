//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing with a subcommand per mode.

mod check;
mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
pub use check::{CheckArgs, run_check};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
use headerlint::Options;
use headerlint::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
pub use update::{UpdateArgs, run_update};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check headers without modifying files
  headerlint check headers.json

  # Check headers and fail the build when any are missing or out of date
  headerlint check --strict headers.json

  # Insert missing headers and refresh out-of-date ones in place
  headerlint update headers.json

  # Same, but without the console report
  headerlint update --quiet headers.json
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Check headers without modifying files
  Check(CheckArgs),
  /// Insert or refresh headers, rewriting files in place
  Update(UpdateArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Arguments shared by the check and update subcommands.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
  /// Path to the JSON configuration file
  #[arg(value_name = "CONFIG")]
  pub config: PathBuf,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors (overrides the config's quiet flag)
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Initialize logging from the shared flags and load the configuration file.
fn prepare(common: &CommonArgs) -> Result<Options> {
  // Initialize tracing subscriber for structured diagnostics
  init_tracing(common.quiet, common.verbose);

  // Set verbose/quiet mode for output formatting and the info_log! macro
  if common.verbose > 0 {
    set_verbose();
  } else if common.quiet {
    set_quiet();
  }
  common.colors.apply();

  let options = Options::load(&common.config)
    .with_context(|| format!("Failed to load configuration from {}", common.config.display()))?;

  // The config's quiet flag suppresses report output too, but never wins
  // over an explicit -v on the command line
  if options.quiet && common.verbose == 0 {
    set_quiet();
  }

  Ok(options)
}
