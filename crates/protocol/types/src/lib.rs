#![doc = "Network parameter types: the settings every participant of a ledger network agrees on."]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod attachment;
pub use attachment::AttachmentId;

mod party;
pub use party::{NotaryInfo, Party};

mod errors;
pub use errors::{InvalidNetworkParametersError, ParameterViolation};

mod params;
pub use params::{
    DEFAULT_EVENT_HORIZON_DAYS, NetworkParameters, NetworkParametersUpdate, WhitelistedContracts,
    default_event_horizon,
};

#[cfg(test)]
pub(crate) mod test_utils;
