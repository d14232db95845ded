//! Fixtures shared by the unit tests of this crate.

use crate::{AttachmentId, NetworkParameters, NotaryInfo, Party, WhitelistedContracts};
use alloy_primitives::B256;
use chrono::{DateTime, Duration, Utc};

/// 2024-01-01T00:00:00Z
pub(crate) fn modified_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).expect("valid timestamp")
}

pub(crate) fn party(name: &str, key: u8) -> Party {
    Party::new(name, B256::repeat_byte(key))
}

pub(crate) fn notaries() -> Vec<NotaryInfo> {
    vec![
        NotaryInfo::new(party("O=Notary A, L=London, C=GB", 0xaa), true),
        NotaryInfo::new(party("O=Notary B, L=Paris, C=FR", 0xbb), false),
    ]
}

pub(crate) fn whitelist() -> WhitelistedContracts {
    WhitelistedContracts::from([
        (
            "com.example.CashContract".to_string(),
            vec![AttachmentId(B256::repeat_byte(0x01)), AttachmentId(B256::repeat_byte(0x02))],
        ),
        ("com.example.BondContract".to_string(), vec![AttachmentId(B256::repeat_byte(0x03))]),
    ])
}

/// A valid set of parameters with easily distinguishable values.
pub(crate) fn params() -> NetworkParameters {
    NetworkParameters::new(
        4,
        notaries(),
        10_485_760,
        524_288_000,
        modified_time(),
        7,
        whitelist(),
        Duration::days(30),
    )
    .expect("valid parameters")
}
