//! Template synthesis.
//!
//! - [`generate`] - runs one generation over a selection
//! - [`validate`] - advisory checks run before building
//! - [`BuildContext`] / [`Generation`] - per-run accumulation and its result
//! - builders, one module per target resource kind

mod context;
mod copy_blob;
mod load_balancer;
mod network_interface;
mod network_security_group;
mod pipeline;
mod public_ip;
mod resolve;
mod route_table;
mod status;
mod storage_account;
mod validate;
mod virtual_machine;
mod virtual_network;

pub use context::{BuildContext, Generation, GenerationSummary};
pub use copy_blob::{build_copy_blob_detail, CopyBlobDetail};
pub use pipeline::generate;
pub use route_table::next_hop_type;
pub use status::{LogStatus, RecordingStatus, StatusProvider};
pub use validate::validate;
pub use virtual_machine::{image_reference, vm_size};
pub use virtual_network::{
    local_gateway_name, vpn_type, EXPRESS_ROUTE_CIRCUIT_PLACEHOLDER, SHARED_KEY_PLACEHOLDER,
};
