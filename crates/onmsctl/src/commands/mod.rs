//! Command dispatch: bridges CLI args -> provisioning client -> output formatting.

pub mod assets;
pub mod categories;
pub mod complete;
pub mod config_cmd;
pub mod foreign_sources;
pub mod interfaces;
pub mod nodes;
pub mod plugins;
pub mod requisitions;
pub mod services;
pub mod util;

use onmsctl_core::ProvisioningClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &ProvisioningClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Requisition(args) => requisitions::handle(client, args, global).await,
        Command::Node(args) => nodes::handle(client, args, global).await,
        Command::Interface(args) => interfaces::handle(client, args, global).await,
        Command::Service(args) => services::handle(client, args, global).await,
        Command::Category(args) => categories::handle(client, args, global).await,
        Command::Asset(args) => assets::handle(client, args, global).await,
        Command::ForeignSource(args) => foreign_sources::handle(client, args, global).await,
        Command::Detector(args) => {
            plugins::handle(client, plugins::PluginKind::Detector, args.command, global).await
        }
        Command::Policy(args) => {
            plugins::handle(client, plugins::PluginKind::Policy, args.command, global).await
        }
        // Config and completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) | Command::Complete(_) => unreachable!(),
    }
}
