//! Node command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{CONTENT, FOREIGN_ID, REQUISITION};
use onmsctl_core::{Applier, ProvisioningClient, RequisitionNode, validate};

use crate::cli::{GlobalOpts, NodeArgs, NodeCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Foreign ID")]
    foreign_id: String,
    #[tabled(rename = "Node Label")]
    label: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Interfaces")]
    interfaces: usize,
    #[tabled(rename = "Categories")]
    categories: String,
}

impl From<&RequisitionNode> for NodeRow {
    fn from(n: &RequisitionNode) -> Self {
        Self {
            foreign_id: n.foreign_id.clone(),
            label: n.node_label.clone(),
            location: n.location.clone().unwrap_or_else(|| "-".into()),
            interfaces: n.interfaces.len(),
            categories: n
                .categories
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ProvisioningClient,
    args: NodeArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NodeCommand::List { requisition } => {
            let [req] = validate([REQUISITION], [requisition.as_deref()])?;
            let nodes = util::found(client.get_requisition(req).await)?
                .map(|r| r.nodes)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &nodes,
                "There are no nodes on the chosen requisition",
                |n| NodeRow::from(n),
                |n| n.foreign_id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NodeCommand::Get {
            requisition,
            foreign_id,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let node = client.get_node(req, fid).await?;
            let out = output::render_single(&global.output, &node, |n| n.foreign_id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NodeCommand::Add {
            requisition,
            foreign_id,
            label,
            location,
            building,
            city,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let mut node = RequisitionNode::new(fid);
            if let Some(label) = label {
                node.node_label = label;
            }
            node.location = location;
            node.building = building;
            node.city = city;

            client.set_node(req, &node).await?;
            if !global.quiet {
                eprintln!("Node {fid} added to requisition {req}");
            }
            Ok(())
        }

        NodeCommand::Delete {
            requisition,
            foreign_id,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            client.delete_node(req, fid).await?;
            if !global.quiet {
                eprintln!("Node {fid} deleted from requisition {req}");
            }
            Ok(())
        }

        NodeCommand::Apply {
            requisition,
            content,
            payload,
        } => {
            let [req] = validate([REQUISITION], [requisition.as_deref()])?;
            let raw = util::read_payload(content, &payload)?;
            let [raw] = validate([CONTENT], [raw.as_deref()])?;
            let node = Applier::new(client).node(req, raw.as_bytes()).await?;
            if !global.quiet {
                eprintln!("Node {} applied to requisition {req}", node.foreign_id);
            }
            Ok(())
        }
    }
}
