//! Gate Subcommand

use clap::Parser;
use netparams_cli::{GlobalArgs, load_network_parameters};
use netparams_version::{PlatformVersionInfo, VersionContext};
use std::path::PathBuf;

/// The `gate` Subcommand
///
/// Evaluates a platform version gate. The current version comes either from `--current` or from
/// the minimum platform version of a parameters file.
///
/// # Usage
///
/// ```sh
/// netparams gate --current <VERSION> --required <VERSION>
/// netparams gate --params <FILE> --required <VERSION>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Checks whether a feature requiring a platform version is enabled")]
pub(crate) struct GateCommand {
    /// The platform version in effect.
    #[arg(long, conflicts_with = "params", env = "NETPARAMS_PLATFORM_VERSION")]
    pub(crate) current: Option<i32>,
    /// Take the platform version in effect from this parameters file.
    #[arg(long)]
    pub(crate) params: Option<PathBuf>,
    /// The platform version the feature requires.
    #[arg(long)]
    pub(crate) required: i32,
}

impl GateCommand {
    /// Builds the version context described by the flags. Left unset when neither source is
    /// given.
    pub(crate) fn context(&self) -> anyhow::Result<VersionContext> {
        let mut ctx = VersionContext::default();
        if let Some(current) = self.current {
            ctx.set_current_version(PlatformVersionInfo::new(current));
        } else if let Some(path) = &self.params {
            let params = load_network_parameters(path)?;
            ctx.set_current_version(PlatformVersionInfo::new(params.minimum_platform_version()));
        }
        Ok(ctx)
    }

    /// Runs the subcommand.
    pub(crate) fn run(self, _args: &GlobalArgs) -> anyhow::Result<()> {
        let ctx = self.context()?;
        ctx.check_minimum_version(self.required)?;
        println!("enabled: platform version {} >= {}", ctx.current_version()?, self.required);
        Ok(())
    }
}
