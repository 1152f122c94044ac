//! IP interface command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{CONTENT, FOREIGN_ID, IP_ADDRESS, NEW_IP_ADDRESS, REQUISITION};
use onmsctl_core::{Applier, ProvisioningClient, RequisitionInterface, SnmpPrimary, validate};

use crate::cli::{GlobalOpts, InterfaceArgs, InterfaceCommand, SnmpPrimaryFlag};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "IP Address")]
    ip_addr: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "SNMP Primary")]
    snmp_primary: String,
    #[tabled(rename = "Services")]
    services: String,
}

impl From<&RequisitionInterface> for InterfaceRow {
    fn from(i: &RequisitionInterface) -> Self {
        Self {
            ip_addr: i.ip_addr.clone(),
            description: i.description.clone().unwrap_or_default(),
            snmp_primary: i
                .snmp_primary
                .map_or_else(|| "-".into(), |p| p.to_string()),
            services: i
                .services
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<SnmpPrimaryFlag> for SnmpPrimary {
    fn from(flag: SnmpPrimaryFlag) -> Self {
        match flag {
            SnmpPrimaryFlag::Primary => Self::Primary,
            SnmpPrimaryFlag::Secondary => Self::Secondary,
            SnmpPrimaryFlag::NotEligible => Self::NotEligible,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ProvisioningClient,
    args: InterfaceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InterfaceCommand::List {
            requisition,
            foreign_id,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let interfaces = util::found(client.get_node(req, fid).await)?
                .map(|n| n.interfaces)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &interfaces,
                "There are no IP interfaces on the chosen node",
                |i| InterfaceRow::from(i),
                |i| i.ip_addr.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InterfaceCommand::Get {
            requisition,
            foreign_id,
            ip_address,
        } => {
            let [req, fid, ip] = validate(
                [REQUISITION, FOREIGN_ID, IP_ADDRESS],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    ip_address.as_deref(),
                ],
            )?;
            let interface = client.get_interface(req, fid, ip).await?;
            let out = output::render_single(&global.output, &interface, |i| i.ip_addr.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InterfaceCommand::Add {
            requisition,
            foreign_id,
            ip_address,
            description,
            snmp_primary,
        } => {
            let [req, fid, ip] = validate(
                [REQUISITION, FOREIGN_ID, NEW_IP_ADDRESS],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    ip_address.as_deref(),
                ],
            )?;
            let interface = RequisitionInterface {
                description,
                snmp_primary: snmp_primary.map(SnmpPrimary::from),
                ..RequisitionInterface::new(ip)
            };
            client.set_interface(req, fid, &interface).await?;
            if !global.quiet {
                eprintln!("Interface {ip} added to node {fid}");
            }
            Ok(())
        }

        InterfaceCommand::Delete {
            requisition,
            foreign_id,
            ip_address,
        } => {
            let [req, fid, ip] = validate(
                [REQUISITION, FOREIGN_ID, IP_ADDRESS],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    ip_address.as_deref(),
                ],
            )?;
            client.delete_interface(req, fid, ip).await?;
            if !global.quiet {
                eprintln!("Interface {ip} deleted from node {fid}");
            }
            Ok(())
        }

        InterfaceCommand::Apply {
            requisition,
            foreign_id,
            content,
            payload,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let raw = util::read_payload(content, &payload)?;
            let [raw] = validate([CONTENT], [raw.as_deref()])?;
            let interface = Applier::new(client)
                .interface(req, fid, raw.as_bytes())
                .await?;
            if !global.quiet {
                eprintln!("Interface {} applied to node {fid}", interface.ip_addr);
            }
            Ok(())
        }
    }
}
