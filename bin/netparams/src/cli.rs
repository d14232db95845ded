//! Contains the netparams CLI.

use crate::commands::{GateCommand, NextCommand, ShowCommand};
use anyhow::Result;
use clap::{Parser, Subcommand};
use netparams_cli::{GlobalArgs, cli_styles};

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Validate and print a network parameters file.
    Show(ShowCommand),
    /// Derive the parameters of the next epoch.
    Next(NextCommand),
    /// Check whether a platform version gate passes.
    Gate(GateCommand),
}

/// The netparams CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, styles = cli_styles(), long_about = None)]
pub(crate) struct Cli {
    /// Global arguments for the CLI.
    #[clap(flatten)]
    pub(crate) global: GlobalArgs,
    /// The subcommand to run.
    #[clap(subcommand)]
    pub(crate) subcommand: Commands,
}

impl Cli {
    /// Runs the CLI.
    pub(crate) fn run(self) -> Result<()> {
        self.global.init_tracing()?;

        match self.subcommand {
            Commands::Show(show) => show.run(&self.global),
            Commands::Next(next) => next.run(&self.global),
            Commands::Gate(gate) => gate.run(&self.global),
        }
    }
}
