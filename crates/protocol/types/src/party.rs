//! Network identities and the notary entries built from them.

use alloy_primitives::B256;

/// A reference to a well-known network identity.
///
/// Resolution and certificate checks belong to the identity subsystem; here a [`Party`] is only
/// compared for equality.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct Party {
    /// The legal name the identity is registered under.
    pub name: String,
    /// Hash of the identity's owning public key.
    pub owning_key: B256,
}

impl Party {
    /// Creates a new [`Party`].
    pub fn new(name: impl Into<String>, owning_key: B256) -> Self {
        Self { name: name.into(), owning_key }
    }
}

impl core::fmt::Display for Party {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A trusted notary of the network.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct NotaryInfo {
    /// The notary's identity. Unique within a set of network parameters.
    pub identity: Party,
    /// Whether the notary validates transactions it notarises, or only checks uniqueness.
    pub validating: bool,
}

impl NotaryInfo {
    /// Creates a new [`NotaryInfo`].
    pub const fn new(identity: Party, validating: bool) -> Self {
        Self { identity, validating }
    }
}

impl core::fmt::Display for NotaryInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (validating={})", self.identity, self.validating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notary_display() {
        let notary = NotaryInfo::new(Party::new("O=Notary, L=Zurich, C=CH", B256::ZERO), true);
        assert_eq!(notary.to_string(), "O=Notary, L=Zurich, C=CH (validating=true)");
    }

    #[test]
    fn test_party_equality_uses_key_and_name() {
        let a = Party::new("Notary", B256::repeat_byte(1));
        assert_eq!(a, Party::new("Notary", B256::repeat_byte(1)));
        assert_ne!(a, Party::new("Notary", B256::repeat_byte(2)));
        assert_ne!(a, Party::new("Other", B256::repeat_byte(1)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_notary_info_serde() {
        let raw = r#"{
            "identity": {
                "name": "O=Notary, L=Zurich, C=CH",
                "owningKey": "0x0101010101010101010101010101010101010101010101010101010101010101"
            },
            "validating": false
        }"#;
        let notary: NotaryInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(
            notary,
            NotaryInfo::new(Party::new("O=Notary, L=Zurich, C=CH", B256::repeat_byte(1)), false)
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_notary_info_unknown_field() {
        let raw = r#"{
            "identity": { "name": "N", "owningKey": "0x0000000000000000000000000000000000000000000000000000000000000000" },
            "validating": true,
            "unknown_field": 1
        }"#;
        let err = serde_json::from_str::<NotaryInfo>(raw).unwrap_err();
        assert_eq!(err.classify(), serde_json::error::Category::Data);
    }
}
