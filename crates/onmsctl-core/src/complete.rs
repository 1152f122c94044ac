// Dynamic completion candidates.
//
// Backs the hidden `onmsctl complete <kind> <verb> [args...]` command, which
// prints candidates for the next positional argument one per line. The
// scripts from `onmsctl completions <shell>` are static and cover
// subcommands and flags only; shell setups that want live names call the
// hidden command from their own completion function. Lookups are best
// effort: a failed request produces no candidates and is only logged at
// debug level.

use tracing::debug;

use onmsctl_api::{Error, ProvisioningClient, Requisition, RequisitionNode};

/// Resource kinds that take positional arguments worth completing.
///
/// Parses the same names and aliases as the command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum ResourceKind {
    #[strum(to_string = "requisition", serialize = "req")]
    Requisition,
    #[strum(to_string = "node", serialize = "n")]
    Node,
    #[strum(to_string = "interface", serialize = "intf")]
    Interface,
    #[strum(to_string = "service", serialize = "svc")]
    Service,
    #[strum(to_string = "category", serialize = "cat")]
    Category,
    #[strum(to_string = "asset")]
    Asset,
    #[strum(to_string = "foreign-source", serialize = "fs")]
    ForeignSource,
    #[strum(to_string = "detector", serialize = "d")]
    Detector,
    #[strum(to_string = "policy", serialize = "p")]
    Policy,
}

/// Completion provider over a provisioning client.
pub struct Completer<'a> {
    client: &'a ProvisioningClient,
    zsh: bool,
}

impl<'a> Completer<'a> {
    pub fn new(client: &'a ProvisioningClient) -> Self {
        Self { client, zsh: false }
    }

    /// Escape `:` in candidates, as zsh's `_describe` treats it as a separator.
    pub fn for_zsh(mut self, zsh: bool) -> Self {
        self.zsh = zsh;
        self
    }

    /// Candidates for the next positional argument of `kind verb args...`.
    pub async fn candidates(
        &self,
        kind: ResourceKind,
        verb: &str,
        args: &[String],
    ) -> Vec<String> {
        match self.lookup(kind, verb, args).await {
            Ok(names) => names.into_iter().map(|n| self.normalize(n)).collect(),
            Err(e) => {
                debug!(%kind, verb, error = %e, "completion lookup failed");
                Vec::new()
            }
        }
    }

    fn normalize(&self, candidate: String) -> String {
        if self.zsh {
            candidate.replace(':', "\\:")
        } else {
            candidate
        }
    }

    async fn lookup(
        &self,
        kind: ResourceKind,
        verb: &str,
        args: &[String],
    ) -> Result<Vec<String>, Error> {
        let arg = |i: usize| args.get(i).map_or("", String::as_str);

        // Plugin catalog lookups do not start with a container name.
        if matches!(verb, "describe" | "desc") {
            return match kind {
                ResourceKind::Detector if args.is_empty() => self.detector_classes().await,
                ResourceKind::Policy if args.is_empty() => self.policy_classes().await,
                _ => Ok(Vec::new()),
            };
        }
        let takes_no_args = matches!(verb, "enumerate" | "enum")
            || (kind == ResourceKind::Requisition && matches!(verb, "list" | "ls"));
        if takes_no_args {
            return Ok(Vec::new());
        }

        if args.is_empty() {
            return self.requisition_names().await;
        }

        match (kind, args.len()) {
            (
                ResourceKind::Node
                | ResourceKind::Interface
                | ResourceKind::Service
                | ResourceKind::Category
                | ResourceKind::Asset,
                1,
            ) => Ok(self
                .requisition(arg(0))
                .await?
                .nodes
                .into_iter()
                .map(|n| n.foreign_id)
                .collect()),

            (ResourceKind::Interface | ResourceKind::Service, 2) => {
                let node = self.node(arg(0), arg(1)).await?;
                Ok(node.interfaces.into_iter().map(|i| i.ip_addr).collect())
            }
            (ResourceKind::Service, 3) if is_delete(verb) => {
                let node = self.node(arg(0), arg(1)).await?;
                Ok(node
                    .interface(arg(2))
                    .map(|i| i.services.iter().map(|s| s.name.clone()).collect())
                    .unwrap_or_default())
            }
            (ResourceKind::Category, 2) if is_delete(verb) => {
                let node = self.node(arg(0), arg(1)).await?;
                Ok(node.categories.into_iter().map(|c| c.name).collect())
            }
            (ResourceKind::Asset, 2) if is_delete(verb) => {
                let node = self.node(arg(0), arg(1)).await?;
                Ok(node.assets.into_iter().map(|a| a.name).collect())
            }
            (ResourceKind::Asset, 2) => Ok(self.client.list_available_assets().await?.element),

            (ResourceKind::Detector, 1) if verb != "set" && verb != "add" => {
                let def = self.client.get_foreign_source(arg(0)).await?;
                Ok(def.detectors.into_iter().map(|d| d.name).collect())
            }
            (ResourceKind::Policy, 1) if verb != "set" && verb != "add" => {
                let def = self.client.get_foreign_source(arg(0)).await?;
                Ok(def.policies.into_iter().map(|p| p.name).collect())
            }
            (ResourceKind::Detector, 2) if verb == "set" || verb == "add" => {
                self.detector_classes().await
            }
            (ResourceKind::Policy, 2) if verb == "set" || verb == "add" => {
                self.policy_classes().await
            }

            _ => Ok(Vec::new()),
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────

    async fn requisition_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.client.list_requisition_names().await?.names)
    }

    async fn requisition(&self, name: &str) -> Result<Requisition, Error> {
        self.client.get_requisition(name).await
    }

    async fn node(&self, requisition: &str, foreign_id: &str) -> Result<RequisitionNode, Error> {
        self.client.get_node(requisition, foreign_id).await
    }

    async fn detector_classes(&self) -> Result<Vec<String>, Error> {
        let catalog = self.client.list_available_detectors().await?;
        Ok(catalog.plugins.into_iter().map(|p| p.class).collect())
    }

    async fn policy_classes(&self) -> Result<Vec<String>, Error> {
        let catalog = self.client.list_available_policies().await?;
        Ok(catalog.plugins.into_iter().map(|p| p.class).collect())
    }
}

fn is_delete(verb: &str) -> bool {
    matches!(verb, "delete" | "del")
}

/// Whether the user's login shell is zsh.
pub fn shell_is_zsh() -> bool {
    std::env::var("SHELL").is_ok_and(|shell| shell.contains("zsh"))
}
