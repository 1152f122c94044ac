//! Shared helpers for command handlers.

use std::io::{self, IsTerminal};

use onmsctl_core::ApiError;

use crate::cli::PayloadArgs;
use crate::error::CliError;

/// Parent lookup behind a list command.
///
/// A container the server does not know reads as absent, so the caller can
/// render its "There are no ..." line instead of failing.
pub fn found<T>(lookup: Result<T, ApiError>) -> Result<Option<T>, CliError> {
    match lookup {
        Ok(parent) => Ok(Some(parent)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolve the payload of an `apply` command.
///
/// `-f -` reads standard input, `-f PATH` reads a file, otherwise the inline
/// argument is used. Returns `None` when nothing was supplied so the caller
/// can report the missing content by name.
pub fn read_payload(inline: Option<String>, payload: &PayloadArgs) -> Result<Option<String>, CliError> {
    match payload.file.as_deref() {
        Some("-") => io::read_to_string(io::stdin())
            .map(Some)
            .map_err(|source| CliError::Input {
                path: "standard input".into(),
                source,
            }),
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .map_err(|source| CliError::Input {
                path: path.into(),
                source,
            }),
        None => Ok(inline),
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, `--yes` is mandatory.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(io::Error::other(e)))?;
    Ok(confirmed)
}
