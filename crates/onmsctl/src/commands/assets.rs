//! Node asset command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{ASSET_NAME, ASSET_VALUE, FOREIGN_ID, REQUISITION};
use onmsctl_core::{ProvisioningClient, RequisitionAsset, validate};

use crate::cli::{AssetArgs, AssetCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AssetRow {
    #[tabled(rename = "Asset Name")]
    name: String,
    #[tabled(rename = "Asset Value")]
    value: String,
}

impl From<&RequisitionAsset> for AssetRow {
    fn from(a: &RequisitionAsset) -> Self {
        Self {
            name: a.name.clone(),
            value: a.value.clone(),
        }
    }
}

#[derive(Tabled)]
struct AvailableAssetRow {
    #[tabled(rename = "Asset Name")]
    name: String,
}

pub async fn handle(
    client: &ProvisioningClient,
    args: AssetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AssetCommand::List {
            requisition,
            foreign_id,
        } => {
            let [req, fid] = validate(
                [REQUISITION, FOREIGN_ID],
                [requisition.as_deref(), foreign_id.as_deref()],
            )?;
            let assets = util::found(client.get_node(req, fid).await)?
                .map(|n| n.assets)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &assets,
                "There are no assets on the chosen node",
                |a| AssetRow::from(a),
                |a| a.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AssetCommand::Set {
            requisition,
            foreign_id,
            name,
            value,
        } => {
            let [req, fid, name, value] = validate(
                [REQUISITION, FOREIGN_ID, ASSET_NAME, ASSET_VALUE],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    name.as_deref(),
                    value.as_deref(),
                ],
            )?;
            let asset = RequisitionAsset {
                name: name.into(),
                value: value.into(),
            };
            client.set_asset(req, fid, &asset).await?;
            if !global.quiet {
                eprintln!("Asset {name} set on node {fid}");
            }
            Ok(())
        }

        AssetCommand::Delete {
            requisition,
            foreign_id,
            name,
        } => {
            let [req, fid, name] = validate(
                [REQUISITION, FOREIGN_ID, ASSET_NAME],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    name.as_deref(),
                ],
            )?;
            client.delete_asset(req, fid, name).await?;
            if !global.quiet {
                eprintln!("Asset {name} removed from node {fid}");
            }
            Ok(())
        }

        AssetCommand::Enumerate => {
            let names = client.list_available_assets().await?.element;
            let out = output::render_list(
                &global.output,
                &names,
                "There are no assets available",
                |n| AvailableAssetRow { name: n.clone() },
                Clone::clone,
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
