// Wire models for the provisioning REST API.
//
// Field names follow the server's JSON representation (kebab-case, singular
// list names such as `node` and `interface`). The same serde mapping is used
// for the YAML documents accepted by `apply`, so a `get` output can be fed
// straight back in.

use serde::{Deserialize, Serialize};

// ── Requisitions ────────────────────────────────────────────────────

/// A named collection of nodes to be provisioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Requisition {
    #[serde(rename = "foreign-source")]
    pub name: String,
    /// Last modification, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_stamp: Option<i64>,
    /// Last import into the database, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_import: Option<i64>,
    #[serde(rename = "node", default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<RequisitionNode>,
}

impl Requisition {
    /// An empty requisition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn node(&self, foreign_id: &str) -> Option<&RequisitionNode> {
        self.nodes.iter().find(|n| n.foreign_id == foreign_id)
    }
}

/// Response of `GET /rest/requisitionNames`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionNames {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "foreign-source", default)]
    pub names: Vec<String>,
}

/// A node inside a requisition. `foreign_id` is unique within the requisition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RequisitionNode {
    pub foreign_id: String,
    #[serde(default)]
    pub node_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_foreign_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_foreign_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_node_label: Option<String>,
    #[serde(rename = "interface", default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<RequisitionInterface>,
    #[serde(rename = "category", default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<RequisitionCategory>,
    #[serde(rename = "asset", default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<RequisitionAsset>,
}

impl RequisitionNode {
    /// A bare node whose label defaults to its foreign ID.
    pub fn new(foreign_id: impl Into<String>) -> Self {
        let foreign_id = foreign_id.into();
        Self {
            node_label: foreign_id.clone(),
            foreign_id,
            ..Self::default()
        }
    }

    pub fn interface(&self, ip_addr: &str) -> Option<&RequisitionInterface> {
        self.interfaces.iter().find(|i| i.ip_addr == ip_addr)
    }
}

/// SNMP primary flag of an interface.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum SnmpPrimary {
    #[serde(rename = "P")]
    #[strum(serialize = "P")]
    Primary,
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    Secondary,
    #[default]
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    NotEligible,
}

/// An IP interface of a requisition node. The address is passed through
/// verbatim; the server validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RequisitionInterface {
    pub ip_addr: String,
    #[serde(rename = "descr", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snmp_primary: Option<SnmpPrimary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(
        rename = "monitored-service",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub services: Vec<RequisitionMonitoredService>,
}

impl RequisitionInterface {
    pub fn new(ip_addr: impl Into<String>) -> Self {
        Self {
            ip_addr: ip_addr.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionMonitoredService {
    #[serde(rename = "service-name")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionCategory {
    pub name: String,
}

/// Free-form asset field of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionAsset {
    pub name: String,
    pub value: String,
}

// ── Foreign sources ─────────────────────────────────────────────────

/// Detector and policy configuration applied when a requisition is imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ForeignSourceDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_stamp: Option<i64>,
    #[serde(default = "default_scan_interval")]
    pub scan_interval: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detectors: Vec<Detector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<Policy>,
}

fn default_scan_interval() -> String {
    "1d".into()
}

impl ForeignSourceDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_stamp: None,
            scan_interval: default_scan_interval(),
            detectors: Vec::new(),
            policies: Vec::new(),
        }
    }
}

/// A plugin-backed rule of a foreign source: a detector or a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub class: String,
    #[serde(rename = "parameter", default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl Plugin {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            parameters: Vec::new(),
        }
    }
}

pub type Detector = Plugin;
pub type Policy = Plugin;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

// ── Plugin catalog ──────────────────────────────────────────────────

/// Response of `GET /rest/foreignSourcesConfig/{policies,detectors}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
}

impl PluginList {
    /// Look a plugin up by display name or implementation class.
    pub fn find(&self, name_or_class: &str) -> Option<&PluginDescriptor> {
        self.plugins
            .iter()
            .find(|p| p.name == name_or_class || p.class == name_or_class)
    }
}

/// An available detector/policy implementation and its parameter schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub class: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<PluginParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginParameter {
    pub key: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Generic `{count, element: [..]}` list, e.g. available asset fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub element: Vec<String>,
}
