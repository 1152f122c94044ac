//! CLI configuration: a thin wrapper around `onmsctl_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--url, --password, etc.).

use std::time::Duration;

use secrecy::SecretString;

use onmsctl_core::{Credentials, ServerConfig, TlsMode};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use onmsctl_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config, store_password,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for diagnostics.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build a `ServerConfig` from the config file, profile, and CLI overrides.
///
/// An explicitly requested profile must exist. Without one, a stock local
/// install (`admin`/`admin` at the default URL) is assumed.
pub fn build_server_config(global: &GlobalOpts) -> Result<ServerConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &cfg.defaults, global);
    }
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            available: available_profiles(&cfg),
            name: profile_name,
        });
    }

    tracing::debug!(profile = %profile_name, "no profile configured, using local defaults");
    let mut server = ServerConfig {
        timeout: Duration::from_secs(cfg.defaults.timeout),
        ..ServerConfig::default()
    };
    if cfg.defaults.insecure {
        server.tls = TlsMode::DangerAcceptInvalid;
    }
    apply_flags(server, global)
}

/// Translate a `Profile` + global flags into a `ServerConfig`.
///
/// CLI flag overrides take priority over profile values; `--password`
/// short-circuits the profile's password chain entirely.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ServerConfig, CliError> {
    let mut profile = profile.clone();
    if let Some(ref url) = global.url {
        profile.url.clone_from(url);
    }
    if let Some(ref username) = global.username {
        profile.username = Some(username.clone());
    }
    if global.insecure {
        profile.insecure = Some(true);
    } else if profile.insecure.is_none() {
        profile.insecure = Some(defaults.insecure);
    }
    profile.timeout = global.timeout.or(profile.timeout).or(Some(defaults.timeout));

    let Some(ref password) = global.password else {
        return Ok(onmsctl_config::profile_to_server_config(
            &profile,
            profile_name,
        )?);
    };

    let username = profile.username.take().unwrap_or_else(|| "admin".into());
    let mut server = onmsctl_config::profile_to_server_config(&profile, profile_name)?;
    server.credentials = Some(Credentials {
        username,
        password: SecretString::from(password.clone()),
    });
    Ok(server)
}

/// Layer global flags over an already resolved `ServerConfig`.
fn apply_flags(mut server: ServerConfig, global: &GlobalOpts) -> Result<ServerConfig, CliError> {
    if let Some(ref url_str) = global.url {
        server.url = url_str.parse().map_err(|_| CliError::Validation {
            field: "url".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
    }

    match (&global.username, &global.password) {
        (username, Some(password)) => {
            let username = username
                .clone()
                .or_else(|| server.credentials.as_ref().map(|c| c.username.clone()))
                .unwrap_or_else(|| "admin".into());
            server.credentials = Some(Credentials {
                username,
                password: SecretString::from(password.clone()),
            });
        }
        (Some(username), None) => match server.credentials {
            Some(ref mut creds) => creds.username.clone_from(username),
            None => {
                return Err(CliError::NoCredentials {
                    profile: "default".into(),
                });
            }
        },
        (None, None) => {}
    }

    if global.insecure {
        server.tls = TlsMode::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        server.timeout = Duration::from_secs(secs);
    }
    Ok(server)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["onmsctl"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["requisition", "list"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    fn lab_profile() -> Profile {
        Profile {
            url: "https://onms.lab.example/opennms".into(),
            username: Some("provisioner".into()),
            password: Some("from-file".into()),
            ..Profile::default()
        }
    }

    #[test]
    fn flags_override_local_defaults() {
        let server = apply_flags(
            ServerConfig::default(),
            &global(&["--url", "https://onms.example.org/opennms", "--password", "pw"]),
        )
        .unwrap();

        assert_eq!(server.url.as_str(), "https://onms.example.org/opennms");
        let creds = server.credentials.unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password.expose_secret(), "pw");
    }

    #[test]
    fn invalid_url_flag_is_a_validation_error() {
        let err = apply_flags(ServerConfig::default(), &global(&["--url", "::nope"])).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "url"));
    }

    #[test]
    fn password_flag_beats_profile_chain() {
        let server = resolve_profile(
            &lab_profile(),
            "onmsctl-test-no-keyring",
            &Defaults::default(),
            &global(&["--password", "from-flag", "-k", "--timeout", "3"]),
        )
        .unwrap();

        let creds = server.credentials.unwrap();
        assert_eq!(creds.username, "provisioner");
        assert_eq!(creds.password.expose_secret(), "from-flag");
        assert!(matches!(server.tls, TlsMode::DangerAcceptInvalid));
        assert_eq!(server.timeout, Duration::from_secs(3));
    }

    #[test]
    fn profile_timeout_falls_back_to_defaults() {
        let defaults = Defaults {
            timeout: 12,
            ..Defaults::default()
        };
        let server = resolve_profile(
            &lab_profile(),
            "onmsctl-test-no-keyring",
            &defaults,
            &global(&["--password", "x"]),
        )
        .unwrap();
        assert_eq!(server.timeout, Duration::from_secs(12));
    }

    #[test]
    fn active_profile_prefers_flag() {
        let cfg = Config::default();
        assert_eq!(active_profile_name(&global(&[]), &cfg), "default");
        assert_eq!(
            active_profile_name(&global(&["--profile", "lab"]), &cfg),
            "lab"
        );
    }
}
