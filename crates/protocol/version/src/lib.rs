#![doc = "A context-scoped platform version gate."]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::VersionError;

mod info;
pub use info::PlatformVersionInfo;

mod context;
pub use context::VersionContext;
