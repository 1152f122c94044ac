//! Node category command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{CATEGORY, FOREIGN_ID, REQUISITION};
use onmsctl_core::{ProvisioningClient, RequisitionCategory, validate};

use crate::cli::{CategoryArgs, CategoryCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category Name")]
    name: String,
}

pub async fn handle(
    client: &ProvisioningClient,
    args: CategoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoryCommand::List {
            requisition,
            foreign_id,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let categories = util::found(client.get_node(req, fid).await)?
                .map(|n| n.categories)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &categories,
                "There are no categories on the chosen node",
                |c| CategoryRow {
                    name: c.name.clone(),
                },
                |c| c.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoryCommand::Add {
            requisition,
            foreign_id,
            category,
        } => {
            let [req, fid, name] = validate(
                [REQUISITION, FOREIGN_ID, CATEGORY],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    category.as_deref(),
                ],
            )?;
            let category = RequisitionCategory { name: name.into() };
            client.set_category(req, fid, &category).await?;
            if !global.quiet {
                eprintln!("Category {name} added to node {fid}");
            }
            Ok(())
        }

        CategoryCommand::Delete {
            requisition,
            foreign_id,
            category,
        } => {
            let [req, fid, name] = validate(
                [REQUISITION, FOREIGN_ID, CATEGORY],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    category.as_deref(),
                ],
            )?;
            client.delete_category(req, fid, name).await?;
            if !global.quiet {
                eprintln!("Category {name} removed from node {fid}");
            }
            Ok(())
        }
    }
}
