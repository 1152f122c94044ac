// onmsctl-core: Resolution layer between the CLI and onmsctl-api.
//
// Owns everything a provisioning command does besides talking HTTP and
// printing: positional argument checks, YAML apply, `key=value` parameter
// flattening and shell completion candidates.

pub mod apply;
pub mod complete;
pub mod config;
pub mod error;
pub mod params;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use apply::{Applier, decode};
pub use complete::{Completer, ResourceKind, shell_is_zsh};
pub use config::ServerConfig;
pub use error::CoreError;
pub use params::parse_parameters;
pub use validate::{Positional, Requirement, ValidationError, validate};

// Re-export the API types handlers need, so the CLI depends on one crate.
pub use onmsctl_api::{
    Credentials, Detector, ElementList, Error as ApiError, ForeignSourceDef, Parameter, Plugin,
    PluginDescriptor, PluginList, Policy, ProvisioningClient, Requisition, RequisitionAsset,
    RequisitionCategory, RequisitionInterface, RequisitionMonitoredService, RequisitionNames,
    RequisitionNode, RescanMode, SnmpPrimary, TlsMode,
};
