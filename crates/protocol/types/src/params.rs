//! The network parameters value object.

use crate::{AttachmentId, InvalidNetworkParametersError, NotaryInfo, ParameterViolation};
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashSet};

/// Contract class names mapped to the attachments allowed to implement them.
pub type WhitelistedContracts = BTreeMap<String, Vec<AttachmentId>>;

/// The event horizon given to parameters that predate the field, in days (`i32::MAX`).
pub const DEFAULT_EVENT_HORIZON_DAYS: i64 = i32::MAX as i64;

/// Returns the event horizon given to parameters that predate the field.
pub fn default_event_horizon() -> Duration {
    Duration::days(DEFAULT_EVENT_HORIZON_DAYS)
}

/// Formats a duration as seconds, e.g. `2592000s` or `-0.5s`. Trailing zero nanoseconds are
/// omitted.
pub(crate) fn format_seconds(duration: &Duration) -> String {
    let sign = if *duration < Duration::zero() { "-" } else { "" };
    let abs = duration.abs();
    match abs.subsec_nanos() {
        0 => format!("{sign}{}s", abs.num_seconds()),
        nanos => {
            let fraction = format!("{nanos:09}");
            format!("{sign}{}.{}s", abs.num_seconds(), fraction.trim_end_matches('0'))
        }
    }
}

/// The parameters every participant of a network must agree on.
///
/// A [`NetworkParameters`] can only be obtained through a validating constructor, so holding one
/// means all of its invariants hold:
///
/// - `minimum_platform_version`, `max_message_size`, `max_transaction_size` and `epoch` are
///   positive.
/// - No two notaries share an identity.
/// - `event_horizon` is not negative.
///
/// Instances are immutable snapshots. Nodes replace them wholesale when a new epoch is
/// published; [`NetworkParameters::copy_with`] derives a new set from an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawNetworkParameters")
)]
pub struct NetworkParameters {
    /// Minimum platform version a node needs to join the network.
    minimum_platform_version: i32,
    /// The trusted notaries.
    notaries: Vec<NotaryInfo>,
    /// Maximum size of a peer-to-peer message, in bytes.
    max_message_size: i32,
    /// Maximum size of a transaction, in bytes.
    max_transaction_size: i32,
    /// When these parameters were last modified.
    modified_time: DateTime<Utc>,
    /// Version counter of the published parameter set.
    epoch: i32,
    /// Attachments allowed to implement each contract.
    whitelisted_contract_implementations: WhitelistedContracts,
    /// How long a node may go unseen before it is purged from the network map.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "netparams_serde::duration::serialize")
    )]
    event_horizon: Duration,
}

impl NetworkParameters {
    /// Validates the given fields and builds a [`NetworkParameters`].
    ///
    /// # Errors
    ///
    /// Returns every invariant the fields break. See the type-level docs for the list.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        minimum_platform_version: i32,
        notaries: Vec<NotaryInfo>,
        max_message_size: i32,
        max_transaction_size: i32,
        modified_time: DateTime<Utc>,
        epoch: i32,
        whitelisted_contract_implementations: WhitelistedContracts,
        event_horizon: Duration,
    ) -> Result<Self, InvalidNetworkParametersError> {
        let params = Self {
            minimum_platform_version,
            notaries,
            max_message_size,
            max_transaction_size,
            modified_time,
            epoch,
            whitelisted_contract_implementations,
            event_horizon,
        };

        let violations = params.violations();
        if !violations.is_empty() {
            let err = InvalidNetworkParametersError { violations };
            tracing::debug!(target: "netparams", %err, "Rejected network parameters");
            return Err(err);
        }

        Ok(params)
    }

    /// Builds a [`NetworkParameters`] from fields recorded before the event horizon existed.
    ///
    /// The event horizon is set to [`default_event_horizon`].
    ///
    /// # Errors
    ///
    /// Same as [`NetworkParameters::new`].
    pub fn new_legacy(
        minimum_platform_version: i32,
        notaries: Vec<NotaryInfo>,
        max_message_size: i32,
        max_transaction_size: i32,
        modified_time: DateTime<Utc>,
        epoch: i32,
        whitelisted_contract_implementations: WhitelistedContracts,
    ) -> Result<Self, InvalidNetworkParametersError> {
        Self::new(
            minimum_platform_version,
            notaries,
            max_message_size,
            max_transaction_size,
            modified_time,
            epoch,
            whitelisted_contract_implementations,
            default_event_horizon(),
        )
    }

    /// Returns a copy with the given fields replaced. Fields left as `None` in the update keep
    /// their current value.
    ///
    /// The event horizon is always carried over: [`NetworkParametersUpdate`] has no field for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting parameters break an invariant.
    pub fn copy_with(
        &self,
        update: NetworkParametersUpdate,
    ) -> Result<Self, InvalidNetworkParametersError> {
        Self::new(
            update.minimum_platform_version.unwrap_or(self.minimum_platform_version),
            update.notaries.unwrap_or_else(|| self.notaries.clone()),
            update.max_message_size.unwrap_or(self.max_message_size),
            update.max_transaction_size.unwrap_or(self.max_transaction_size),
            update.modified_time.unwrap_or(self.modified_time),
            update.epoch.unwrap_or(self.epoch),
            update
                .whitelisted_contract_implementations
                .unwrap_or_else(|| self.whitelisted_contract_implementations.clone()),
            self.event_horizon,
        )
    }

    /// Checks all invariants, collecting every violation in field order.
    fn violations(&self) -> Vec<ParameterViolation> {
        let mut violations = Vec::new();

        if self.minimum_platform_version <= 0 {
            violations.push(ParameterViolation::MinimumPlatformVersion(
                self.minimum_platform_version,
            ));
        }

        let mut seen = HashSet::with_capacity(self.notaries.len());
        let mut reported = HashSet::new();
        for notary in &self.notaries {
            if !seen.insert(&notary.identity) && reported.insert(&notary.identity) {
                violations.push(ParameterViolation::DuplicateNotary(notary.identity.clone()));
            }
        }

        if self.max_message_size <= 0 {
            violations.push(ParameterViolation::MaxMessageSize(self.max_message_size));
        }
        if self.max_transaction_size <= 0 {
            violations.push(ParameterViolation::MaxTransactionSize(self.max_transaction_size));
        }
        if self.epoch <= 0 {
            violations.push(ParameterViolation::Epoch(self.epoch));
        }
        if self.event_horizon < Duration::zero() {
            violations.push(ParameterViolation::NegativeEventHorizon(self.event_horizon));
        }

        violations
    }

    /// Returns the minimum platform version a node needs to join the network.
    pub const fn minimum_platform_version(&self) -> i32 {
        self.minimum_platform_version
    }

    /// Returns the trusted notaries.
    pub fn notaries(&self) -> &[NotaryInfo] {
        &self.notaries
    }

    /// Returns the notaries that validate the transactions they notarise.
    pub fn validating_notaries(&self) -> impl Iterator<Item = &NotaryInfo> {
        self.notaries.iter().filter(|n| n.validating)
    }

    /// Returns the maximum size of a peer-to-peer message, in bytes.
    pub const fn max_message_size(&self) -> i32 {
        self.max_message_size
    }

    /// Returns the maximum size of a transaction, in bytes.
    pub const fn max_transaction_size(&self) -> i32 {
        self.max_transaction_size
    }

    /// Returns when these parameters were last modified.
    pub const fn modified_time(&self) -> DateTime<Utc> {
        self.modified_time
    }

    /// Returns the epoch of this parameter set.
    pub const fn epoch(&self) -> i32 {
        self.epoch
    }

    /// Returns the whitelisted contract implementations.
    pub const fn whitelisted_contract_implementations(&self) -> &WhitelistedContracts {
        &self.whitelisted_contract_implementations
    }

    /// Returns true if `attachment` is whitelisted as an implementation of `contract`.
    pub fn is_whitelisted(&self, contract: &str, attachment: &AttachmentId) -> bool {
        self.whitelisted_contract_implementations
            .get(contract)
            .is_some_and(|ids| ids.contains(attachment))
    }

    /// Returns the event horizon.
    pub const fn event_horizon(&self) -> Duration {
        self.event_horizon
    }
}

impl core::fmt::Display for NetworkParameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "NetworkParameters {{")?;
        writeln!(f, "      minimumPlatformVersion={}", self.minimum_platform_version)?;
        write!(f, "      notaries=[")?;
        for (i, notary) in self.notaries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{notary}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "      maxMessageSize={}", self.max_message_size)?;
        writeln!(f, "      maxTransactionSize={}", self.max_transaction_size)?;
        writeln!(f, "      whitelistedContractImplementations {{")?;
        for (contract, ids) in &self.whitelisted_contract_implementations {
            let ids = ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            writeln!(f, "        {contract}=[{ids}]")?;
        }
        writeln!(f, "      }}")?;
        writeln!(f, "      eventHorizon={}", format_seconds(&self.event_horizon))?;
        writeln!(f, "      modifiedTime={}", self.modified_time.to_rfc3339())?;
        writeln!(f, "      epoch={}", self.epoch)?;
        write!(f, "  }}")
    }
}

/// Specifies which fields [`NetworkParameters::copy_with`] replaces.
///
/// There is deliberately no event horizon field: a copy always keeps the original's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkParametersUpdate {
    /// New minimum platform version.
    pub minimum_platform_version: Option<i32>,
    /// New notary list.
    pub notaries: Option<Vec<NotaryInfo>>,
    /// New maximum message size.
    pub max_message_size: Option<i32>,
    /// New maximum transaction size.
    pub max_transaction_size: Option<i32>,
    /// New modification time.
    pub modified_time: Option<DateTime<Utc>>,
    /// New epoch.
    pub epoch: Option<i32>,
    /// New whitelist.
    pub whitelisted_contract_implementations: Option<WhitelistedContracts>,
}

impl NetworkParametersUpdate {
    /// Sets the minimum platform version.
    pub const fn with_minimum_platform_version(mut self, version: i32) -> Self {
        self.minimum_platform_version = Some(version);
        self
    }

    /// Sets the notaries.
    pub fn with_notaries(mut self, notaries: Vec<NotaryInfo>) -> Self {
        self.notaries = Some(notaries);
        self
    }

    /// Sets the maximum message size.
    pub const fn with_max_message_size(mut self, size: i32) -> Self {
        self.max_message_size = Some(size);
        self
    }

    /// Sets the maximum transaction size.
    pub const fn with_max_transaction_size(mut self, size: i32) -> Self {
        self.max_transaction_size = Some(size);
        self
    }

    /// Sets the modification time.
    pub const fn with_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.modified_time = Some(time);
        self
    }

    /// Sets the epoch.
    pub const fn with_epoch(mut self, epoch: i32) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Sets the whitelisted contract implementations.
    pub fn with_whitelisted_contract_implementations(
        mut self,
        whitelist: WhitelistedContracts,
    ) -> Self {
        self.whitelisted_contract_implementations = Some(whitelist);
        self
    }
}

/// Wire shape of [`NetworkParameters`], validated on conversion. A missing `eventHorizon` marks a
/// payload written before the field existed.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawNetworkParameters {
    minimum_platform_version: i32,
    notaries: Vec<NotaryInfo>,
    max_message_size: i32,
    max_transaction_size: i32,
    modified_time: DateTime<Utc>,
    epoch: i32,
    #[serde(default)]
    whitelisted_contract_implementations: WhitelistedContracts,
    #[serde(default, with = "netparams_serde::duration::option")]
    event_horizon: Option<Duration>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNetworkParameters> for NetworkParameters {
    type Error = InvalidNetworkParametersError;

    fn try_from(raw: RawNetworkParameters) -> Result<Self, Self::Error> {
        match raw.event_horizon {
            Some(event_horizon) => Self::new(
                raw.minimum_platform_version,
                raw.notaries,
                raw.max_message_size,
                raw.max_transaction_size,
                raw.modified_time,
                raw.epoch,
                raw.whitelisted_contract_implementations,
                event_horizon,
            ),
            None => Self::new_legacy(
                raw.minimum_platform_version,
                raw.notaries,
                raw.max_message_size,
                raw.max_transaction_size,
                raw.modified_time,
                raw.epoch,
                raw.whitelisted_contract_implementations,
            ),
        }
    }
}
