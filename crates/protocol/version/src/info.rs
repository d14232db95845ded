//! The platform version in effect for an execution context.

use crate::VersionError;

/// Wraps the platform version currently in effect.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlatformVersionInfo {
    /// The platform version.
    pub minimum_platform_version: i32,
}

impl PlatformVersionInfo {
    /// Creates a new [`PlatformVersionInfo`].
    pub const fn new(minimum_platform_version: i32) -> Self {
        Self { minimum_platform_version }
    }

    /// Returns an error if `required` is newer than this version.
    pub const fn check_minimum(&self, required: i32) -> Result<(), VersionError> {
        if required > self.minimum_platform_version {
            return Err(VersionError::TooLow { required, current: self.minimum_platform_version });
        }
        Ok(())
    }
}

impl From<i32> for PlatformVersionInfo {
    fn from(minimum_platform_version: i32) -> Self {
        Self::new(minimum_platform_version)
    }
}

impl core::fmt::Display for PlatformVersionInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.minimum_platform_version)
    }
}
