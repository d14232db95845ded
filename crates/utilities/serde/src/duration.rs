//! (De)serializes a signed [`chrono::Duration`] without losing precision.
//!
//! A whole number of seconds is written as a plain integer. A duration with a sub-second part is
//! written as `{ "seconds": <i64>, "nanos": <i32> }`, both parts carrying the sign of the
//! duration. Either shape is accepted on input.
//!
//! Negative values are kept as-is so that callers can reject them with a meaningful error
//! rather than having the decoder clamp or refuse them.
//!
//! ```ignore
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Retention {
//!     #[serde(with = "netparams_serde::duration")]
//!     window: chrono::Duration,
//! }
//! ```

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Wire shape of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Seconds(i64),
    Split { seconds: i64, nanos: i32 },
}

impl From<&Duration> for Repr {
    fn from(duration: &Duration) -> Self {
        match duration.subsec_nanos() {
            0 => Self::Seconds(duration.num_seconds()),
            nanos => Self::Split { seconds: duration.num_seconds(), nanos },
        }
    }
}

impl Repr {
    fn into_duration<E: Error>(self) -> Result<Duration, E> {
        let (seconds, nanos) = match self {
            Self::Seconds(seconds) => (seconds, 0),
            Self::Split { seconds, nanos } => (seconds, nanos),
        };
        if nanos.unsigned_abs() >= NANOS_PER_SEC {
            return Err(E::custom(format!("duration nanos out of range: {nanos}")));
        }
        Duration::try_seconds(seconds)
            .and_then(|d| d.checked_add(&Duration::nanoseconds(nanos.into())))
            .ok_or_else(|| E::custom("duration seconds out of range"))
    }
}

/// Serializes the duration as whole seconds, or as seconds plus nanoseconds.
pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Repr::from(duration).serialize(serializer)
}

/// Deserializes either wire shape into a [`Duration`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    Repr::deserialize(deserializer)?.into_duration()
}

/// Same encoding for an optional duration. Pair with `#[serde(default)]` so a missing field
/// decodes to `None`.
pub mod option {
    use super::Repr;
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes `Some` like [`super::serialize`] and `None` as a unit/null value.
    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_ref().map(Repr::from).serialize(serializer)
    }

    /// Deserializes an optional duration.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Repr>::deserialize(deserializer)?.map(Repr::into_duration).transpose()
    }
}
