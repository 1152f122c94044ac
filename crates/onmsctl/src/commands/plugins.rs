//! Detector and policy command handlers.
//!
//! Both are plugin-backed entries of a foreign source definition and share
//! one verb set; `PluginKind` picks the endpoints, labels and messages.

use serde::Serialize;
use tabled::Tabled;

use onmsctl_core::validate::{CLASS, CONTENT, DETECTOR, FOREIGN_SOURCE, PLUGIN, POLICY};
use onmsctl_core::{
    Applier, ForeignSourceDef, Plugin, PluginDescriptor, Positional, ProvisioningClient,
    parse_parameters, validate,
};

use crate::cli::{GlobalOpts, OutputFormat, PluginCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Detector,
    Policy,
}

impl PluginKind {
    fn noun(self) -> &'static str {
        match self {
            Self::Detector => "Detector",
            Self::Policy => "Policy",
        }
    }

    fn slot(self) -> Positional {
        match self {
            Self::Detector => DETECTOR,
            Self::Policy => POLICY,
        }
    }

    fn entries(self, def: &ForeignSourceDef) -> &[Plugin] {
        match self {
            Self::Detector => &def.detectors,
            Self::Policy => &def.policies,
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::Detector => "There are no detectors on the chosen foreign source definition",
            Self::Policy => "There are no policies on the chosen foreign source definition",
        }
    }
}

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DetectorRow {
    #[tabled(rename = "Detector Name")]
    name: String,
    #[tabled(rename = "Detector Class")]
    class: String,
}

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "Policy Name")]
    name: String,
    #[tabled(rename = "Policy Class")]
    class: String,
}

/// Name and class of anything listed as a plugin.
trait NamedClass {
    fn name(&self) -> &str;
    fn class(&self) -> &str;
}

impl NamedClass for Plugin {
    fn name(&self) -> &str {
        &self.name
    }
    fn class(&self) -> &str {
        &self.class
    }
}

impl NamedClass for PluginDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
    fn class(&self) -> &str {
        &self.class
    }
}

fn render_plugins<T: Serialize + NamedClass>(
    kind: PluginKind,
    format: &OutputFormat,
    items: &[T],
    empty_message: &str,
) -> Result<String, CliError> {
    let id = |p: &T| p.name().to_owned();
    match kind {
        PluginKind::Detector => output::render_list(
            format,
            items,
            empty_message,
            |p| DetectorRow {
                name: p.name().to_owned(),
                class: p.class().to_owned(),
            },
            id,
        ),
        PluginKind::Policy => output::render_list(
            format,
            items,
            empty_message,
            |p| PolicyRow {
                name: p.name().to_owned(),
                class: p.class().to_owned(),
            },
            id,
        ),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(
    client: &ProvisioningClient,
    kind: PluginKind,
    command: PluginCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let noun = kind.noun();
    match command {
        PluginCommand::List { foreign_source } => {
            let [fs] = validate([FOREIGN_SOURCE], [foreign_source.as_deref()])?;
            let def = util::found(client.get_foreign_source(fs).await)?;
            let entries = def.as_ref().map_or(&[][..], |d| kind.entries(d));
            let out = render_plugins(kind, &global.output, entries, kind.empty_message())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PluginCommand::Get {
            foreign_source,
            name,
        } => {
            let [fs, name] = validate(
                [FOREIGN_SOURCE, kind.slot()],
                [foreign_source.as_deref(), name.as_deref()],
            )?;
            let entry = match kind {
                PluginKind::Detector => client.get_detector(fs, name).await?,
                PluginKind::Policy => client.get_policy(fs, name).await?,
            };
            let out = output::render_single(&global.output, &entry, |p| p.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PluginCommand::Set {
            foreign_source,
            name,
            class,
            parameters,
        } => {
            let [fs, name, class] = validate(
                [FOREIGN_SOURCE, kind.slot(), CLASS],
                [
                    foreign_source.as_deref(),
                    name.as_deref(),
                    class.as_deref(),
                ],
            )?;
            let entry = Plugin {
                parameters: parse_parameters(&parameters)?,
                ..Plugin::new(name, class)
            };
            match kind {
                PluginKind::Detector => client.set_detector(fs, &entry).await?,
                PluginKind::Policy => client.set_policy(fs, &entry).await?,
            }
            if !global.quiet {
                eprintln!("{noun} {name} set on foreign source {fs}");
            }
            Ok(())
        }

        PluginCommand::Delete {
            foreign_source,
            name,
        } => {
            let [fs, name] = validate(
                [FOREIGN_SOURCE, kind.slot()],
                [foreign_source.as_deref(), name.as_deref()],
            )?;
            match kind {
                PluginKind::Detector => client.delete_detector(fs, name).await?,
                PluginKind::Policy => client.delete_policy(fs, name).await?,
            }
            if !global.quiet {
                eprintln!("{noun} {name} deleted from foreign source {fs}");
            }
            Ok(())
        }

        PluginCommand::Apply {
            foreign_source,
            content,
            payload,
        } => {
            let [fs] = validate([FOREIGN_SOURCE], [foreign_source.as_deref()])?;
            let raw = util::read_payload(content, &payload)?;
            let [raw] = validate([CONTENT], [raw.as_deref()])?;
            let applier = Applier::new(client);
            let entry = match kind {
                PluginKind::Detector => applier.detector(fs, raw.as_bytes()).await?,
                PluginKind::Policy => applier.policy(fs, raw.as_bytes()).await?,
            };
            if !global.quiet {
                eprintln!("{noun} {} applied to foreign source {fs}", entry.name);
            }
            Ok(())
        }

        PluginCommand::Enumerate => {
            let catalog = match kind {
                PluginKind::Detector => client.list_available_detectors().await?,
                PluginKind::Policy => client.list_available_policies().await?,
            };
            let empty = format!("There are no {} classes available", noun.to_lowercase());
            let out = render_plugins(kind, &global.output, &catalog.plugins, &empty)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PluginCommand::Describe { name } => {
            let [name] = validate([PLUGIN], [name.as_deref()])?;
            let descriptor = match kind {
                PluginKind::Detector => client.describe_detector(name).await?,
                PluginKind::Policy => client.describe_policy(name).await?,
            };
            let out = output::render_single(&global.output, &descriptor, |d| d.class.clone())?;
            output::print_output(&out, global.quiet);
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

    use super::*;
    use crate::commands::testing::{REST, run, run_err};

    const MATCHING_POLICY: &str =
        "org.opennms.netmgt.provision.persist.policies.MatchingIpInterfacePolicy";

    async fn silent_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn entry_name_is_labelled_by_kind() {
        let server = silent_server().await;

        assert_eq!(
            run_err(&server, &["policy", "get", "Test"]).await,
            "Policy name required"
        );
        assert_eq!(
            run_err(&server, &["detector", "del", "Test"]).await,
            "Detector name required"
        );
        assert_eq!(
            run_err(&server, &["policy", "set", "Test", "Production"]).await,
            "Class name required"
        );
        assert_eq!(
            run_err(&server, &["detector", "describe"]).await,
            "Plugin name or class required"
        );
    }

    #[tokio::test]
    async fn apply_requires_content_for_both_kinds() {
        let server = silent_server().await;

        for kind in ["detector", "policy"] {
            assert_eq!(
                run_err(&server, &[kind, "apply"]).await,
                "Foreign source name required"
            );
            assert_eq!(
                run_err(&server, &[kind, "apply", "Test"]).await,
                "Content required"
            );
        }
    }

    #[tokio::test]
    async fn set_splits_parameters_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{REST}/foreignSources/Test/policies")))
            .and(body_json(json!({
                "name": "Production",
                "class": MATCHING_POLICY,
                "parameter": [
                    {"key": "matchBehavior", "value": "ALL_PARAMETERS"},
                    {"key": "ipAddress", "value": "~^10\\..*$=x"}
                ]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        run(
            &server,
            &[
                "policy",
                "set",
                "Test",
                "Production",
                MATCHING_POLICY,
                "-p",
                "matchBehavior=ALL_PARAMETERS",
                "-p",
                "ipAddress=~^10\\..*$=x",
            ],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn malformed_parameter_issues_no_request() {
        let server = silent_server().await;
        let err = run(
            &server,
            &["detector", "set", "Test", "ICMP", "IcmpDetector", "-p", "timeout"],
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Malformed parameter 'timeout'");
    }

    #[tokio::test]
    async fn list_reads_definition() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{REST}/foreignSources/Test")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Test",
                "scan-interval": "1d",
                "detectors": [{"name": "ICMP", "class": "org.opennms.netmgt.provision.detector.icmp.IcmpDetector"}]
            })))
            .expect(2)
            .mount(&server)
            .await;

        run(&server, &["detector", "list", "Test"]).await.unwrap();
        // No policies on the definition: informational message, still a success.
        run(&server, &["policy", "ls", "Test"]).await.unwrap();
    }

    #[tokio::test]
    async fn list_of_unknown_definition_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{REST}/foreignSources/Ghost")))
            .respond_with(ResponseTemplate::new(404))
            .expect(2)
            .mount(&server)
            .await;

        run(&server, &["detector", "list", "Ghost"]).await.unwrap();
        run(&server, &["policy", "list", "Ghost"]).await.unwrap();
    }

    #[tokio::test]
    async fn apply_posts_one_detector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{REST}/foreignSources/Test/detectors")))
            .and(body_json(json!({
                "name": "HTTP",
                "class": "org.opennms.netmgt.provision.detector.simple.HttpDetector",
                "parameter": [{"key": "port", "value": "8080"}]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let yaml = "name: HTTP\n\
                    class: org.opennms.netmgt.provision.detector.simple.HttpDetector\n\
                    parameter:\n\
                    - key: port\n  \
                      value: '8080'\n";
        run(&server, &["detector", "apply", "Test", yaml])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn describe_matches_class() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{REST}/foreignSourcesConfig/policies")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "plugins": [{"name": "Match IP Interface", "class": MATCHING_POLICY}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        run(&server, &["policy", "desc", MATCHING_POLICY])
            .await
            .unwrap();
    }

    #[test]
    fn policy_table_uses_policy_headers() {
        let policies = vec![Plugin::new("Production", MATCHING_POLICY)];
        let out = render_plugins(
            PluginKind::Policy,
            &OutputFormat::Table,
            &policies,
            PluginKind::Policy.empty_message(),
        )
        .unwrap();
        assert!(out.contains("Policy Name"));
        assert!(out.contains("Policy Class"));
        assert!(out.contains("Production"));
    }
}
