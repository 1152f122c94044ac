//! Monitored service command handlers.

use tabled::Tabled;

use onmsctl_core::validate::{FOREIGN_ID, IP_ADDRESS, REQUISITION, SERVICE};
use onmsctl_core::{ProvisioningClient, RequisitionMonitoredService, validate};

use crate::cli::{GlobalOpts, ServiceArgs, ServiceCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service Name")]
    name: String,
}

pub async fn handle(
    client: &ProvisioningClient,
    args: ServiceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ServiceCommand::List {
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
            let services = util::found(client.get_interface(req, fid, ip).await)?
                .map(|i| i.services)
                .unwrap_or_default();
            let out = output::render_list(
                &global.output,
                &services,
                "There are no monitored services on the chosen IP interface",
                |s| ServiceRow {
                    name: s.name.clone(),
                },
                |s| s.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ServiceCommand::Add {
            requisition,
            foreign_id,
            ip_address,
            service,
        } => {
            let [req, fid, ip, svc] = validate(
                [REQUISITION, FOREIGN_ID, IP_ADDRESS, SERVICE],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    ip_address.as_deref(),
                    service.as_deref(),
                ],
            )?;
            let service = RequisitionMonitoredService { name: svc.into() };
            client.set_service(req, fid, ip, &service).await?;
            if !global.quiet {
                eprintln!("Service {svc} added to interface {ip}");
            }
            Ok(())
        }

        ServiceCommand::Delete {
            requisition,
            foreign_id,
            ip_address,
            service,
        } => {
            let [req, fid, ip, svc] = validate(
                [REQUISITION, FOREIGN_ID, IP_ADDRESS, SERVICE],
                [
                    requisition.as_deref(),
                    foreign_id.as_deref(),
                    ip_address.as_deref(),
                    service.as_deref(),
                ],
            )?;
            client.delete_service(req, fid, ip, svc).await?;
            if !global.quiet {
                eprintln!("Service {svc} removed from interface {ip}");
            }
            Ok(())
        }
    }
}
