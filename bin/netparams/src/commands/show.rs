//! Show Subcommand

use clap::Parser;
use netparams_cli::{GlobalArgs, load_network_parameters};
use std::path::PathBuf;

/// The `show` Subcommand
///
/// Loads a network parameters file, validates it and prints its rendering.
///
/// # Usage
///
/// ```sh
/// netparams show [FLAGS] <FILE>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Validates and prints a network parameters file (.json or .toml)")]
pub(crate) struct ShowCommand {
    /// Path to the network parameters file.
    pub(crate) file: PathBuf,
}

impl ShowCommand {
    /// Runs the subcommand.
    pub(crate) fn run(self, _args: &GlobalArgs) -> anyhow::Result<()> {
        let params = load_network_parameters(&self.file)?;
        tracing::info!(
            target: "netparams",
            epoch = params.epoch(),
            notaries = params.notaries().len(),
            "Network parameters are valid"
        );
        println!("{params}");
        Ok(())
    }
}
