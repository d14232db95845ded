#![doc = "Inspect and validate ledger network parameters."]

use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    netparams_cli::backtrace::enable();
    cli::Cli::parse().run()
}
