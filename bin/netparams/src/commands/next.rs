//! Next Subcommand

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use clap::Parser;
use netparams_cli::{GlobalArgs, load_network_parameters};
use netparams_types::{NetworkParameters, NetworkParametersUpdate};
use std::path::PathBuf;

/// The `next` Subcommand
///
/// Derives the parameter set of the following epoch from an existing file and prints it as
/// JSON. The event horizon always carries over unchanged.
///
/// # Usage
///
/// ```sh
/// netparams next [FLAGS] [OPTIONS] <FILE>
/// ```
#[derive(Parser, Debug, Clone)]
#[command(about = "Derives the parameters of the next epoch from an existing file")]
pub(crate) struct NextCommand {
    /// Path to the current network parameters file.
    pub(crate) file: PathBuf,
    /// Modification time of the new parameters (RFC 3339). Defaults to now.
    #[arg(long)]
    pub(crate) modified_time: Option<DateTime<Utc>>,
    /// New minimum platform version.
    #[arg(long)]
    pub(crate) minimum_platform_version: Option<i32>,
    /// New maximum message size, in bytes.
    #[arg(long)]
    pub(crate) max_message_size: Option<i32>,
    /// New maximum transaction size, in bytes.
    #[arg(long)]
    pub(crate) max_transaction_size: Option<i32>,
}

impl NextCommand {
    /// Builds the next epoch's parameters from `current`.
    pub(crate) fn next_epoch(
        &self,
        current: &NetworkParameters,
    ) -> anyhow::Result<NetworkParameters> {
        let epoch = current
            .epoch()
            .checked_add(1)
            .ok_or_else(|| anyhow!("epoch {} cannot be incremented", current.epoch()))?;

        let update = NetworkParametersUpdate {
            minimum_platform_version: self.minimum_platform_version,
            max_message_size: self.max_message_size,
            max_transaction_size: self.max_transaction_size,
            ..Default::default()
        }
        .with_epoch(epoch)
        .with_modified_time(self.modified_time.unwrap_or_else(Utc::now));

        Ok(current.copy_with(update)?)
    }

    /// Runs the subcommand.
    pub(crate) fn run(self, _args: &GlobalArgs) -> anyhow::Result<()> {
        let current = load_network_parameters(&self.file)?;
        let next = self.next_epoch(&current)?;
        tracing::info!(
            target: "netparams",
            from = current.epoch(),
            to = next.epoch(),
            "Derived next epoch"
        );
        println!("{}", serde_json::to_string_pretty(&next)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use netparams_types::WhitelistedContracts;

    fn current(epoch: i32) -> NetworkParameters {
        NetworkParameters::new(
            2,
            Vec::new(),
            1024,
            2048,
            DateTime::from_timestamp(1_704_067_200, 0).unwrap(),
            epoch,
            WhitelistedContracts::new(),
            Duration::days(10),
        )
        .unwrap()
    }

    fn command() -> NextCommand {
        NextCommand {
            file: PathBuf::from("unused.json"),
            modified_time: DateTime::from_timestamp(1_735_689_600, 0),
            minimum_platform_version: None,
            max_message_size: None,
            max_transaction_size: None,
        }
    }

    #[test]
    fn test_next_epoch() {
        let next = command().next_epoch(&current(7)).unwrap();
        assert_eq!(next.epoch(), 8);
        assert_eq!(next.modified_time(), DateTime::from_timestamp(1_735_689_600, 0).unwrap());
        assert_eq!(next.minimum_platform_version(), 2);
        assert_eq!(next.event_horizon(), Duration::days(10));
    }

    #[test]
    fn test_next_epoch_overrides() {
        let cmd = NextCommand { minimum_platform_version: Some(5), ..command() };
        let next = cmd.next_epoch(&current(1)).unwrap();
        assert_eq!(next.minimum_platform_version(), 5);
        assert_eq!(next.max_message_size(), 1024);
    }

    #[test]
    fn test_next_epoch_invalid_override() {
        let cmd = NextCommand { max_transaction_size: Some(0), ..command() };
        let err = cmd.next_epoch(&current(1)).unwrap_err();
        assert!(err.to_string().contains("maxTransactionSize must be at least 1"), "{err}");
    }

    #[test]
    fn test_next_epoch_overflow() {
        assert!(command().next_epoch(&current(i32::MAX)).is_err());
    }
}
