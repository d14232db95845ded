//! Loading network parameters from disk.

use crate::{CliError, CliResult};
use netparams_types::NetworkParameters;
use std::path::Path;

/// Reads and validates a `.json` or `.toml` network parameters file.
///
/// Parameters without an `eventHorizon` field are accepted and get the legacy default.
pub fn load_network_parameters(path: &Path) -> CliResult<NetworkParameters> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;

    let params: NetworkParameters = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&raw)?,
        Some("toml") => toml::from_str(&raw)?,
        _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!(target: "netparams_cli", path = %path.display(), "Loaded network parameters");
    Ok(params)
}
