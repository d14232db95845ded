//! Errors returned by the version gate.

use thiserror::Error;

/// An error returned when reading or checking the current platform version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    /// No platform version was set in this context, nor in the context it was forked from.
    #[error("the current platform version has not been initialized")]
    NotInitialized,
    /// The feature requires a newer platform version than the current one.
    #[error(
        "feature requires platform version {required}, but the current version is {current}"
    )]
    TooLow {
        /// The platform version the feature requires.
        required: i32,
        /// The platform version in effect.
        current: i32,
    },
}
