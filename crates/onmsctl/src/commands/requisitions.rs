//! Requisition command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{CONTENT, REQUISITION};
use onmsctl_core::{Applier, ProvisioningClient, RescanMode, Requisition, validate};

use crate::cli::{GlobalOpts, RequisitionArgs, RequisitionCommand, RescanExisting};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RequisitionRow {
    #[tabled(rename = "Requisition Name")]
    name: String,
}

impl From<&String> for RequisitionRow {
    fn from(name: &String) -> Self {
        Self { name: name.clone() }
    }
}

impl From<RescanExisting> for RescanMode {
    fn from(flag: RescanExisting) -> Self {
        match flag {
            RescanExisting::True => Self::Full,
            RescanExisting::False => Self::Skip,
            RescanExisting::Dbonly => Self::DbOnly,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &ProvisioningClient,
    args: RequisitionArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RequisitionCommand::List => {
            let names = util::found(client.list_requisition_names().await)?
                .map(|n| n.names)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &names,
                "There are no requisitions",
                |r| RequisitionRow::from(r),
                Clone::clone,
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RequisitionCommand::Get { requisition } => {
            let [name] = validate([REQUISITION], [requisition.as_deref()])?;
            let req = client.get_requisition(name).await?;
            let out = output::render_single(&global.output, &req, |r| r.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RequisitionCommand::Add { requisition } => {
            let [name] = validate([REQUISITION], [requisition.as_deref()])?;
            client.set_requisition(&Requisition::new(name)).await?;
            if !global.quiet {
                eprintln!("Requisition {name} added");
            }
            Ok(())
        }

        RequisitionCommand::Delete { requisition } => {
            let [name] = validate([REQUISITION], [requisition.as_deref()])?;
            if !util::confirm(
                &format!("Delete requisition {name} and its deployed copy?"),
                "requisition delete",
                global.yes,
            )? {
                return Ok(());
            }
            client.delete_requisition(name).await?;
            if !global.quiet {
                eprintln!("Requisition {name} deleted");
            }
            Ok(())
        }

        RequisitionCommand::Import {
            requisition,
            rescan_existing,
        } => {
            let [name] = validate([REQUISITION], [requisition.as_deref()])?;
            client
                .import_requisition(name, rescan_existing.into())
                .await?;
            if !global.quiet {
                eprintln!("Import of requisition {name} requested");
            }
            Ok(())
        }

        RequisitionCommand::Apply { content, payload } => {
            let raw = util::read_payload(content, &payload)?;
            let [raw] = validate([CONTENT], [raw.as_deref()])?;
            let req = Applier::new(client).requisition(raw.as_bytes()).await?;
            if !global.quiet {
                eprintln!("Requisition {} applied", req.name);
            }
            Ok(())
        }
    }
}
