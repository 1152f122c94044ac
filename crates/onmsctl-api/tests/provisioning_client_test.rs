#![allow(clippy::unwrap_used)]
// Integration tests for `ProvisioningClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use onmsctl_api::{
    Credentials, Error, Plugin, ProvisioningClient, RequisitionInterface, RequisitionNode,
    RescanMode, SnmpPrimary,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ProvisioningClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/opennms", server.uri())).unwrap();
    let client = ProvisioningClient::with_client(
        reqwest::Client::new(),
        base_url,
        Some(Credentials {
            username: "admin".into(),
            password: SecretString::from("admin"),
        }),
    );
    (server, client)
}

fn rest_path(suffix: &str) -> String {
    format!("/opennms/rest/{suffix}")
}

// ── Requisition tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_requisition_names() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(rest_path("requisitionNames")))
        .and(basic_auth("admin", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "foreign-source": ["Servers", "Routers"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let names = client.list_requisition_names().await.unwrap();

    assert_eq!(names.count, 2);
    assert_eq!(names.names, vec!["Servers", "Routers"]);
}

#[tokio::test]
async fn test_get_requisition_with_nodes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(rest_path("requisitions/Test")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foreign-source": "Test",
            "date-stamp": 1_589_922_413_483_i64,
            "node": [{
                "foreign-id": "n1",
                "node-label": "srv01",
                "interface": [{"ip-addr": "10.0.0.1", "snmp-primary": "P"}]
            }]
        })))
        .mount(&server)
        .await;

    let req = client.get_requisition("Test").await.unwrap();

    assert_eq!(req.name, "Test");
    assert_eq!(req.date_stamp, Some(1_589_922_413_483));
    let node = req.node("n1").unwrap();
    assert_eq!(node.node_label, "srv01");
    assert_eq!(
        node.interface("10.0.0.1").unwrap().snmp_primary,
        Some(SnmpPrimary::Primary)
    );
}

#[tokio::test]
async fn test_delete_requisition_removes_pending_and_deployed() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(rest_path("requisitions/Test")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(rest_path("requisitions/deployed/Test")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_requisition("Test").await.unwrap();
}

#[tokio::test]
async fn test_delete_requisition_reports_failed_deployed_delete() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(rest_path("requisitions/Test")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(rest_path("requisitions/deployed/Test")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Deployed requisition is locked"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.delete_requisition("Test").await.unwrap_err();
    assert!(
        matches!(err, Error::DeployedDeleteFailed { ref name, .. } if name == "Test"),
        "expected DeployedDeleteFailed, got: {err:?}"
    );
    assert_eq!(
        err.to_string(),
        "Pending copy of requisition Test removed, deleting the deployed copy failed: \
         Server error (HTTP 500): Deployed requisition is locked"
    );
}

#[tokio::test]
async fn test_import_requisition_passes_rescan_mode() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(rest_path("requisitions/Test/import")))
        .and(query_param("rescanExisting", "dbonly"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .import_requisition("Test", RescanMode::DbOnly)
        .await
        .unwrap();
}

// ── Node / interface tests ──────────────────────────────────────────

#[tokio::test]
async fn test_set_node_posts_full_document() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rest_path("requisitions/Test/nodes")))
        .and(body_json(json!({"foreign-id": "n2", "node-label": "n2"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .set_node("Test", &RequisitionNode::new("n2"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_interface() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rest_path("requisitions/Test/nodes/n1/interfaces")))
        .and(body_json(json!({"ip-addr": "10.0.0.10"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .set_interface("Test", "n1", &RequisitionInterface::new("10.0.0.10"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_interface() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(rest_path("requisitions/Test/nodes/n1/interfaces/10.0.0.10")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete_interface("Test", "n1", "10.0.0.10")
        .await
        .unwrap();
}

// ── Foreign source tests ────────────────────────────────────────────

#[tokio::test]
async fn test_set_policy_with_parameters() {
    let (server, client) = setup().await;

    let mut policy = Plugin::new(
        "Production",
        "org.opennms.netmgt.provision.persist.policies.NodeCategorySettingPolicy",
    );
    policy.parameters.push(onmsctl_api::Parameter {
        key: "category".into(),
        value: "Production".into(),
    });

    Mock::given(method("POST"))
        .and(path(rest_path("foreignSources/Test/policies")))
        .and(body_json(json!({
            "name": "Production",
            "class": "org.opennms.netmgt.provision.persist.policies.NodeCategorySettingPolicy",
            "parameter": [{"key": "category", "value": "Production"}]
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client.set_policy("Test", &policy).await.unwrap();
}

#[tokio::test]
async fn test_describe_detector_by_class() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(rest_path("foreignSourcesConfig/detectors")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "plugins": [
                {"name": "ICMP", "class": "org.opennms.netmgt.provision.detector.icmp.IcmpDetector"},
                {"name": "SNMP", "class": "org.opennms.netmgt.provision.detector.snmp.SnmpDetector",
                 "parameters": [{"key": "port", "required": false}]}
            ]
        })))
        .mount(&server)
        .await;

    let plugin = client
        .describe_detector("org.opennms.netmgt.provision.detector.snmp.SnmpDetector")
        .await
        .unwrap();

    assert_eq!(plugin.name, "SNMP");
    assert_eq!(plugin.parameters[0].key, "port");

    let missing = client.describe_detector("Bogus").await;
    assert!(
        matches!(missing, Err(Error::NotFound { .. })),
        "expected NotFound error, got: {missing:?}"
    );
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_message_is_passed_through() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(rest_path("requisitions/Test/nodes")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Requisition Test is locked"))
        .mount(&server)
        .await;

    let err = client
        .set_node("Test", &RequisitionNode::new("n1"))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Requisition Test is locked");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(rest_path("requisitionNames")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_requisition_names().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_no_content_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(rest_path("requisitions/Test/nodes/ghost")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client.get_node("Test", "ghost").await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}
