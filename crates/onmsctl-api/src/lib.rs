// onmsctl-api: Async Rust client for the OpenNMS provisioning REST API

pub mod client;
pub mod error;
pub mod foreign_sources;
pub mod models;
pub mod requisitions;
pub mod transport;

pub use client::{Credentials, ProvisioningClient};
pub use error::Error;
pub use models::{
    Detector, ElementList, ForeignSourceDef, Parameter, Plugin, PluginDescriptor, PluginList,
    PluginParameter, Policy, Requisition, RequisitionAsset, RequisitionCategory,
    RequisitionInterface, RequisitionMonitoredService, RequisitionNames, RequisitionNode,
    SnmpPrimary,
};
pub use requisitions::RescanMode;
pub use transport::{TlsMode, TransportConfig};
