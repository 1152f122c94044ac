//! Foreign source definition command handlers.

use tracing::debug;

use onmsctl_core::validate::{CONTENT, FOREIGN_SOURCE, SCAN_INTERVAL};
use onmsctl_core::{Applier, ProvisioningClient, validate};

use crate::cli::{ForeignSourceArgs, ForeignSourceCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: &ProvisioningClient,
    args: ForeignSourceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ForeignSourceCommand::Get { foreign_source } => {
            let [name] = validate([FOREIGN_SOURCE], [foreign_source.as_deref()])?;
            let def = client.get_foreign_source(name).await?;
            let out = output::render_single(&global.output, &def, |d| d.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ForeignSourceCommand::Apply { content, payload } => {
            let raw = util::read_payload(content, &payload)?;
            let [raw] = validate([CONTENT], [raw.as_deref()])?;
            let def = Applier::new(client).foreign_source(raw.as_bytes()).await?;
            if !global.quiet {
                eprintln!("Foreign source definition {} applied", def.name);
            }
            Ok(())
        }

        // Read-modify-write: the server has no endpoint for the interval alone.
        ForeignSourceCommand::Interval {
            foreign_source,
            interval,
        } => {
            let [name, interval] = validate(
                [FOREIGN_SOURCE, SCAN_INTERVAL],
                [foreign_source.as_deref(), interval.as_deref()],
            )?;
            let mut def = client.get_foreign_source(name).await?;
            debug!(name, from = %def.scan_interval, to = interval, "changing scan interval");
            interval.clone_into(&mut def.scan_interval);
            client.set_foreign_source(&def).await?;
            if !global.quiet {
                eprintln!("Scan interval of {name} set to {interval}");
            }
            Ok(())
        }

        ForeignSourceCommand::Delete { foreign_source } => {
            let [name] = validate([FOREIGN_SOURCE], [foreign_source.as_deref()])?;
            client.delete_foreign_source(name).await?;
            if !global.quiet {
                eprintln!("Foreign source definition {name} deleted");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::testing::{REST, run, run_err};

    #[tokio::test]
    async fn interval_needs_name_then_value() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        assert_eq!(
            run_err(&server, &["fs", "interval"]).await,
            "Foreign source name required"
        );
        assert_eq!(
            run_err(&server, &["fs", "interval", "Test"]).await,
            "Scan interval required"
        );
    }

    #[tokio::test]
    async fn apply_without_content_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        assert_eq!(
            run_err(&server, &["foreign-source", "apply"]).await,
            "Content required"
        );
    }

    #[tokio::test]
    async fn interval_rewrites_definition() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{REST}/foreignSources/Test")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Test",
                "scan-interval": "1d",
                "detectors": [{"name": "ICMP", "class": "org.opennms.netmgt.provision.detector.icmp.IcmpDetector"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(format!("{REST}/foreignSources")))
            .and(body_json(json!({
                "name": "Test",
                "scan-interval": "12h",
                "detectors": [{"name": "ICMP", "class": "org.opennms.netmgt.provision.detector.icmp.IcmpDetector"}]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        run(&server, &["foreign-source", "interval", "Test", "12h"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn apply_posts_definition() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{REST}/foreignSources")))
            .and(body_json(json!({"name": "Routers", "scan-interval": "7d"})))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        run(&server, &["fs", "apply", "name: Routers\nscan-interval: 7d\n"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_of_missing_definition_reports_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{REST}/foreignSources/Nope")))
            .respond_with(ResponseTemplate::new(500).set_body_string("Cannot delete Nope"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(
            run_err(&server, &["fs", "del", "Nope"]).await,
            "Cannot delete Nope"
        );
    }
}
