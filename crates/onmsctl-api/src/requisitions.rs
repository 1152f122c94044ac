// Requisition endpoints: requisitions, nodes, interfaces, services,
// categories and assets under `/rest/requisitions`.
//
// Lists of children are never fetched separately: callers read the parent
// document and walk it.

use crate::client::ProvisioningClient;
use crate::error::Error;
use crate::models::{
    Requisition, RequisitionAsset, RequisitionCategory, RequisitionInterface,
    RequisitionMonitoredService, RequisitionNames, RequisitionNode,
};

/// How an import treats nodes that already exist in the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum RescanMode {
    /// Rescan every existing node.
    #[default]
    #[strum(serialize = "true")]
    Full,
    /// Only add and delete nodes, do not rescan.
    #[strum(serialize = "false")]
    Skip,
    /// Update the database without scanning.
    #[strum(serialize = "dbonly")]
    DbOnly,
}

impl ProvisioningClient {
    // ── Requisitions ─────────────────────────────────────────────────

    pub async fn list_requisition_names(&self) -> Result<RequisitionNames, Error> {
        self.get(self.endpoint(&["requisitionNames"])?).await
    }

    pub async fn get_requisition(&self, name: &str) -> Result<Requisition, Error> {
        self.get(self.endpoint(&["requisitions", name])?).await
    }

    /// Create or replace a whole requisition.
    pub async fn set_requisition(&self, requisition: &Requisition) -> Result<(), Error> {
        self.post(self.endpoint(&["requisitions"])?, requisition)
            .await
    }

    /// Remove both the pending and the deployed copy of a requisition.
    ///
    /// The pending copy goes first; a failure on the deployed copy is
    /// reported as [`Error::DeployedDeleteFailed`].
    pub async fn delete_requisition(&self, name: &str) -> Result<(), Error> {
        self.delete(self.endpoint(&["requisitions", name])?).await?;
        self.delete(self.endpoint(&["requisitions", "deployed", name])?)
            .await
            .map_err(|e| Error::DeployedDeleteFailed {
                name: name.to_owned(),
                source: Box::new(e),
            })
    }

    /// Ask the server to synchronize a requisition into the database.
    pub async fn import_requisition(&self, name: &str, rescan: RescanMode) -> Result<(), Error> {
        self.put_with_params(
            self.endpoint(&["requisitions", name, "import"])?,
            &[("rescanExisting", rescan.to_string())],
        )
        .await
    }

    // ── Nodes ────────────────────────────────────────────────────────

    pub async fn get_node(
        &self,
        requisition: &str,
        foreign_id: &str,
    ) -> Result<RequisitionNode, Error> {
        self.get(self.endpoint(&["requisitions", requisition, "nodes", foreign_id])?)
            .await
    }

    pub async fn set_node(&self, requisition: &str, node: &RequisitionNode) -> Result<(), Error> {
        self.post(self.endpoint(&["requisitions", requisition, "nodes"])?, node)
            .await
    }

    pub async fn delete_node(&self, requisition: &str, foreign_id: &str) -> Result<(), Error> {
        self.delete(self.endpoint(&["requisitions", requisition, "nodes", foreign_id])?)
            .await
    }

    // ── Interfaces ───────────────────────────────────────────────────

    pub async fn get_interface(
        &self,
        requisition: &str,
        foreign_id: &str,
        ip_addr: &str,
    ) -> Result<RequisitionInterface, Error> {
        self.get(self.endpoint(&[
            "requisitions",
            requisition,
            "nodes",
            foreign_id,
            "interfaces",
            ip_addr,
        ])?)
        .await
    }

    pub async fn set_interface(
        &self,
        requisition: &str,
        foreign_id: &str,
        interface: &RequisitionInterface,
    ) -> Result<(), Error> {
        self.post(
            self.endpoint(&["requisitions", requisition, "nodes", foreign_id, "interfaces"])?,
            interface,
        )
        .await
    }

    pub async fn delete_interface(
        &self,
        requisition: &str,
        foreign_id: &str,
        ip_addr: &str,
    ) -> Result<(), Error> {
        self.delete(self.endpoint(&[
            "requisitions",
            requisition,
            "nodes",
            foreign_id,
            "interfaces",
            ip_addr,
        ])?)
        .await
    }

    // ── Monitored services ───────────────────────────────────────────

    pub async fn set_service(
        &self,
        requisition: &str,
        foreign_id: &str,
        ip_addr: &str,
        service: &RequisitionMonitoredService,
    ) -> Result<(), Error> {
        self.post(
            self.endpoint(&[
                "requisitions",
                requisition,
                "nodes",
                foreign_id,
                "interfaces",
                ip_addr,
                "services",
            ])?,
            service,
        )
        .await
    }

    pub async fn delete_service(
        &self,
        requisition: &str,
        foreign_id: &str,
        ip_addr: &str,
        service: &str,
    ) -> Result<(), Error> {
        self.delete(self.endpoint(&[
            "requisitions",
            requisition,
            "nodes",
            foreign_id,
            "interfaces",
            ip_addr,
            "services",
            service,
        ])?)
        .await
    }

    // ── Categories ───────────────────────────────────────────────────

    pub async fn set_category(
        &self,
        requisition: &str,
        foreign_id: &str,
        category: &RequisitionCategory,
    ) -> Result<(), Error> {
        self.post(
            self.endpoint(&["requisitions", requisition, "nodes", foreign_id, "categories"])?,
            category,
        )
        .await
    }

    pub async fn delete_category(
        &self,
        requisition: &str,
        foreign_id: &str,
        category: &str,
    ) -> Result<(), Error> {
        self.delete(self.endpoint(&[
            "requisitions",
            requisition,
            "nodes",
            foreign_id,
            "categories",
            category,
        ])?)
        .await
    }

    // ── Assets ───────────────────────────────────────────────────────

    pub async fn set_asset(
        &self,
        requisition: &str,
        foreign_id: &str,
        asset: &RequisitionAsset,
    ) -> Result<(), Error> {
        self.post(
            self.endpoint(&["requisitions", requisition, "nodes", foreign_id, "assets"])?,
            asset,
        )
        .await
    }

    pub async fn delete_asset(
        &self,
        requisition: &str,
        foreign_id: &str,
        asset: &str,
    ) -> Result<(), Error> {
        self.delete(self.endpoint(&[
            "requisitions",
            requisition,
            "nodes",
            foreign_id,
            "assets",
            asset,
        ])?)
        .await
    }
}
