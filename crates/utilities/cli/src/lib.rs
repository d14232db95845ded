#![doc = "Shared CLI utilities for netparams binaries."]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod backtrace;

mod error;
pub use error::{CliError, CliResult};

mod telemetry;
pub use telemetry::init_tracing_subscriber;

mod styles;
pub use styles::cli_styles;

mod flags;
pub use flags::GlobalArgs;

pub mod load;
pub use load::load_network_parameters;
