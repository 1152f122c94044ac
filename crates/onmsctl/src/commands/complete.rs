//! Hidden `complete` subcommand: live candidates for the next positional
//! argument, for use from custom shell completion functions.
//!
//! Never fails: a bad kind, a missing profile or an unreachable server all
//! produce an empty candidate list.

use std::io::{self, Write};

use tracing::debug;

use onmsctl_core::{Completer, ResourceKind, shell_is_zsh};

use crate::cli::{CompleteArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub async fn handle(args: CompleteArgs, global: &GlobalOpts) {
    let Ok(kind) = args.kind.parse::<ResourceKind>() else {
        debug!(kind = %args.kind, "no completions for unknown resource kind");
        return;
    };

    let client = match config::build_server_config(global)
        .and_then(|server| server.connect().map_err(CliError::from))
    {
        Ok(client) => client,
        Err(e) => {
            debug!(error = %e, "completion skipped, no usable server configuration");
            return;
        }
    };

    let candidates = Completer::new(&client)
        .for_zsh(shell_is_zsh())
        .candidates(kind, &args.verb, &args.args)
        .await;

    let mut stdout = io::stdout().lock();
    for candidate in candidates {
        if writeln!(stdout, "{candidate}").is_err() {
            break;
        }
    }
}
