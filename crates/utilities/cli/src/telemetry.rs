//! Tracing subscriber setup.

use crate::{CliError, CliResult};
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Maps a `-v` count to a log level: 0 is INFO, 1 is DEBUG, anything above is TRACE.
pub(crate) const fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// Without an explicit `filter`, the level from `verbosity` is the default directive and
/// `RUST_LOG` directives are layered on top.
pub fn init_tracing_subscriber(
    verbosity: u8,
    filter: Option<impl Into<EnvFilter>>,
) -> CliResult<()> {
    let filter = match filter {
        Some(filter) => filter.into(),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(verbosity_level(verbosity)).into())
            .from_env_lossy(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), Level::INFO);
        assert_eq!(verbosity_level(1), Level::DEBUG);
        assert_eq!(verbosity_level(2), Level::TRACE);
        assert_eq!(verbosity_level(u8::MAX), Level::TRACE);
    }

    #[test]
    fn test_init_twice_fails() {
        let first = init_tracing_subscriber(0, None::<EnvFilter>);
        let second = init_tracing_subscriber(0, Some(EnvFilter::new("info")));
        // Another test in this binary may have installed the global subscriber first.
        assert!(first.is_err() || second.is_err());
        assert!(matches!(second, Err(CliError::TracingInit(_))));
    }
}
