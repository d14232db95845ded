//! Content-addressed attachment identifiers.

use alloy_primitives::B256;

/// Identifier of a content-addressed artifact (the hash of its bytes).
///
/// Attachment ids are opaque here: nothing checks that the referenced artifact exists.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttachmentId(pub B256);

impl AttachmentId {
    /// Returns the underlying hash.
    pub const fn hash(&self) -> B256 {
        self.0
    }
}

impl core::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_attachment_id_display() {
        let id = AttachmentId::from(b256!(
            "00000000000000000000000000000000000000000000000000000000000000ab"
        ));
        assert_eq!(
            id.to_string(),
            "0x00000000000000000000000000000000000000000000000000000000000000ab"
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_attachment_id_serde_transparent() {
        let id = AttachmentId(B256::repeat_byte(0x11));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", B256::repeat_byte(0x11)));
        assert_eq!(serde_json::from_str::<AttachmentId>(&json).unwrap(), id);
    }
}
