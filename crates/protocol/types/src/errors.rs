//! Errors raised while constructing [`NetworkParameters`](crate::NetworkParameters).

use crate::{Party, params::format_seconds};
use chrono::Duration;
use thiserror::Error;

/// A single broken invariant of a set of network parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterViolation {
    /// The minimum platform version was not positive.
    #[error("minimumPlatformVersion must be at least 1, got {0}")]
    MinimumPlatformVersion(i32),
    /// Two notary entries share an identity.
    #[error("duplicate notary identity: {0}")]
    DuplicateNotary(Party),
    /// The maximum message size was not positive.
    #[error("maxMessageSize must be at least 1, got {0}")]
    MaxMessageSize(i32),
    /// The maximum transaction size was not positive.
    #[error("maxTransactionSize must be at least 1, got {0}")]
    MaxTransactionSize(i32),
    /// The epoch was not positive.
    #[error("epoch must be at least 1, got {0}")]
    Epoch(i32),
    /// The event horizon was negative.
    #[error("eventHorizon cannot be negative, got {}", format_seconds(.0))]
    NegativeEventHorizon(Duration),
}

/// Construction of [`NetworkParameters`](crate::NetworkParameters) failed.
///
/// Every invariant is checked, so `violations` lists all of the problems with the input, in the
/// order the fields are declared. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid network parameters: {}", join_violations(.violations))]
pub struct InvalidNetworkParametersError {
    /// The broken invariants.
    pub violations: Vec<ParameterViolation>,
}

impl InvalidNetworkParametersError {
    /// Returns true if the given violation was reported.
    pub fn contains(&self, violation: &ParameterViolation) -> bool {
        self.violations.contains(violation)
    }
}

fn join_violations(violations: &[ParameterViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
