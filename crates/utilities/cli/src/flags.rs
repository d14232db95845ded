//! Global arguments shared by netparams binaries.

use clap::{ArgAction, Parser};

/// Global arguments for the CLI.
#[derive(Parser, Default, Clone, Debug)]
pub struct GlobalArgs {
    /// Verbosity level (0-2)
    #[arg(long = "verbosity", short = 'v', global = true, action = ArgAction::Count)]
    pub v: u8,
}

impl GlobalArgs {
    /// Installs the tracing subscriber for the configured verbosity.
    pub fn init_tracing(&self) -> crate::CliResult<()> {
        crate::init_tracing_subscriber(self.v, None::<tracing_subscriber::EnvFilter>)
    }
}
