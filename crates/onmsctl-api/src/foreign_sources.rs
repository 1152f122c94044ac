// Foreign source endpoints: definitions, detectors and policies under
// `/rest/foreignSources`, plus the plugin catalog under
// `/rest/foreignSourcesConfig`.

use crate::client::ProvisioningClient;
use crate::error::Error;
use crate::models::{Detector, ElementList, ForeignSourceDef, PluginDescriptor, PluginList, Policy};

impl ProvisioningClient {
    // ── Definitions ──────────────────────────────────────────────────

    pub async fn get_foreign_source(&self, name: &str) -> Result<ForeignSourceDef, Error> {
        self.get(self.endpoint(&["foreignSources", name])?).await
    }

    /// Create or replace a whole foreign source definition.
    pub async fn set_foreign_source(&self, def: &ForeignSourceDef) -> Result<(), Error> {
        self.post(self.endpoint(&["foreignSources"])?, def).await
    }

    pub async fn delete_foreign_source(&self, name: &str) -> Result<(), Error> {
        self.delete(self.endpoint(&["foreignSources", name])?).await
    }

    // ── Detectors ────────────────────────────────────────────────────

    pub async fn get_detector(&self, foreign_source: &str, name: &str) -> Result<Detector, Error> {
        self.get(self.endpoint(&["foreignSources", foreign_source, "detectors", name])?)
            .await
    }

    pub async fn set_detector(&self, foreign_source: &str, detector: &Detector) -> Result<(), Error> {
        self.post(
            self.endpoint(&["foreignSources", foreign_source, "detectors"])?,
            detector,
        )
        .await
    }

    pub async fn delete_detector(&self, foreign_source: &str, name: &str) -> Result<(), Error> {
        self.delete(self.endpoint(&["foreignSources", foreign_source, "detectors", name])?)
            .await
    }

    // ── Policies ─────────────────────────────────────────────────────

    pub async fn get_policy(&self, foreign_source: &str, name: &str) -> Result<Policy, Error> {
        self.get(self.endpoint(&["foreignSources", foreign_source, "policies", name])?)
            .await
    }

    pub async fn set_policy(&self, foreign_source: &str, policy: &Policy) -> Result<(), Error> {
        self.post(
            self.endpoint(&["foreignSources", foreign_source, "policies"])?,
            policy,
        )
        .await
    }

    pub async fn delete_policy(&self, foreign_source: &str, name: &str) -> Result<(), Error> {
        self.delete(self.endpoint(&["foreignSources", foreign_source, "policies", name])?)
            .await
    }

    // ── Plugin catalog ───────────────────────────────────────────────

    pub async fn list_available_detectors(&self) -> Result<PluginList, Error> {
        self.get(self.endpoint(&["foreignSourcesConfig", "detectors"])?)
            .await
    }

    pub async fn list_available_policies(&self) -> Result<PluginList, Error> {
        self.get(self.endpoint(&["foreignSourcesConfig", "policies"])?)
            .await
    }

    /// Describe a detector implementation, matched by name or class.
    pub async fn describe_detector(&self, name_or_class: &str) -> Result<PluginDescriptor, Error> {
        let catalog = self.list_available_detectors().await?;
        find_plugin(&catalog, "detector", name_or_class)
    }

    /// Describe a policy implementation, matched by name or class.
    pub async fn describe_policy(&self, name_or_class: &str) -> Result<PluginDescriptor, Error> {
        let catalog = self.list_available_policies().await?;
        find_plugin(&catalog, "policy", name_or_class)
    }

    /// Asset field names the server accepts on requisition nodes.
    pub async fn list_available_assets(&self) -> Result<ElementList, Error> {
        self.get(self.endpoint(&["foreignSourcesConfig", "assets"])?)
            .await
    }
}

fn find_plugin(catalog: &PluginList, kind: &str, name_or_class: &str) -> Result<PluginDescriptor, Error> {
    catalog
        .find(name_or_class)
        .cloned()
        .ok_or_else(|| Error::NotFound {
            message: format!("{kind} class '{name_or_class}' not found"),
        })
}
