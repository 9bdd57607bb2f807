//! # headerlint
//!
//! A tool that verifies and enforces an up-to-date copyright/license header
//! across a tree of source files.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, Command, run_check, run_update};

fn main() -> Result<()> {
  match Cli::parse_args().command {
    Command::Check(args) => run_check(args),
    Command::Update(args) => run_update(args),
  }
}
