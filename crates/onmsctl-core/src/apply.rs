// Declarative apply: decode a YAML document and upsert it.
//
// The decoded document replaces whatever the server holds. There is no
// local diff and no merge, so optional fields left out of the document are
// dropped on the server.

use serde::de::DeserializeOwned;
use tracing::debug;

use onmsctl_api::{
    Detector, ForeignSourceDef, Policy, ProvisioningClient, Requisition, RequisitionInterface,
    RequisitionNode,
};

use crate::error::CoreError;

/// Decode a YAML document into `T`. Fails without touching the network.
pub fn decode<T: DeserializeOwned>(kind: &'static str, raw: &[u8]) -> Result<T, CoreError> {
    serde_yaml::from_slice(raw).map_err(|e| CoreError::MalformedDocument {
        kind,
        message: e.to_string(),
    })
}

/// Apply engine bound to one client.
pub struct Applier<'a> {
    client: &'a ProvisioningClient,
}

impl<'a> Applier<'a> {
    pub fn new(client: &'a ProvisioningClient) -> Self {
        Self { client }
    }

    pub async fn requisition(&self, raw: &[u8]) -> Result<Requisition, CoreError> {
        let requisition: Requisition = decode("requisition", raw)?;
        debug!(name = %requisition.name, "applying requisition");
        self.client.set_requisition(&requisition).await?;
        Ok(requisition)
    }

    pub async fn node(&self, requisition: &str, raw: &[u8]) -> Result<RequisitionNode, CoreError> {
        let node: RequisitionNode = decode("node", raw)?;
        debug!(requisition, foreign_id = %node.foreign_id, "applying node");
        self.client.set_node(requisition, &node).await?;
        Ok(node)
    }

    pub async fn interface(
        &self,
        requisition: &str,
        foreign_id: &str,
        raw: &[u8],
    ) -> Result<RequisitionInterface, CoreError> {
        let interface: RequisitionInterface = decode("interface", raw)?;
        debug!(requisition, foreign_id, ip = %interface.ip_addr, "applying interface");
        self.client
            .set_interface(requisition, foreign_id, &interface)
            .await?;
        Ok(interface)
    }

    pub async fn foreign_source(&self, raw: &[u8]) -> Result<ForeignSourceDef, CoreError> {
        let def: ForeignSourceDef = decode("foreign source", raw)?;
        debug!(name = %def.name, "applying foreign source definition");
        self.client.set_foreign_source(&def).await?;
        Ok(def)
    }

    pub async fn detector(&self, foreign_source: &str, raw: &[u8]) -> Result<Detector, CoreError> {
        let detector: Detector = decode("detector", raw)?;
        debug!(foreign_source, name = %detector.name, "applying detector");
        self.client.set_detector(foreign_source, &detector).await?;
        Ok(detector)
    }

    pub async fn policy(&self, foreign_source: &str, raw: &[u8]) -> Result<Policy, CoreError> {
        let policy: Policy = decode("policy", raw)?;
        debug!(foreign_source, name = %policy.name, "applying policy");
        self.client.set_policy(foreign_source, &policy).await?;
        Ok(policy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ServerConfig;

    async fn setup() -> (MockServer, ProvisioningClient) {
        let server = MockServer::start().await;
        let url = Url::parse(&format!("{}/opennms", server.uri())).unwrap();
        let client = ServerConfig::anonymous(url).connect().unwrap();
        (server, client)
    }

    const NODE_YAML: &str = "\
foreign-id: opennms.com
node-label: opennms.com
interface:
- ip-addr: www.opennms.com
  snmp-primary: N
  monitored-service:
  - service-name: ICMP
  - service-name: HTTP
category:
- name: Server
asset:
- name: city
  value: Durham
";

    #[tokio::test]
    async fn node_apply_sends_one_set_with_decoded_document() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/opennms/rest/requisitions/Test/nodes"))
            .and(body_json(json!({
                "foreign-id": "opennms.com",
                "node-label": "opennms.com",
                "interface": [{
                    "ip-addr": "www.opennms.com",
                    "snmp-primary": "N",
                    "monitored-service": [{"service-name": "ICMP"}, {"service-name": "HTTP"}]
                }],
                "category": [{"name": "Server"}],
                "asset": [{"name": "city", "value": "Durham"}]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let node = Applier::new(&client)
            .node("Test", NODE_YAML.as_bytes())
            .await
            .unwrap();

        assert_eq!(node.foreign_id, "opennms.com");
        assert_eq!(node.interfaces[0].services.len(), 2);
    }

    #[tokio::test]
    async fn malformed_document_makes_no_request() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&server)
            .await;

        let err = Applier::new(&client)
            .policy("Test", b"name: [unterminated")
            .await
            .unwrap_err();

        assert!(
            matches!(err, CoreError::MalformedDocument { kind: "policy", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn server_rejection_is_reported() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/opennms/rest/foreignSources/Test/detectors"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid detector class"))
            .mount(&server)
            .await;

        let err = Applier::new(&client)
            .detector("Test", b"name: ICMP\nclass: org.example.Bogus\n")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid detector class");
    }

    #[test]
    fn foreign_source_document_fills_defaults() {
        let def: ForeignSourceDef = decode("foreign source", b"name: Test\n").unwrap();
        assert_eq!(def.scan_interval, "1d");
    }
}
