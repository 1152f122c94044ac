// ── Runtime connection configuration ──
//
// Describes *how* to reach one OpenNMS server. Carries credentials and
// transport tuning but never touches disk: the CLI resolves profiles and
// hands a `ServerConfig` in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use onmsctl_api::{Credentials, ProvisioningClient, TlsMode, TransportConfig};

use crate::error::CoreError;

pub const DEFAULT_URL: &str = "http://localhost:8980/opennms";

/// Configuration for connecting to a single server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server base URL, including the web context (e.g. `/opennms`).
    pub url: Url,
    /// Basic-auth credentials; `None` sends unauthenticated requests.
    pub credentials: Option<Credentials>,
    pub tls: TlsMode,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ServerConfig {
    /// A stock local install: `admin`/`admin` on port 8980.
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).unwrap_or_else(|_| unreachable!("DEFAULT_URL is valid")),
            credentials: Some(Credentials {
                username: "admin".into(),
                password: SecretString::from("admin"),
            }),
            tls: TlsMode::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// A config for `url` without credentials.
    pub fn anonymous(url: Url) -> Self {
        Self {
            url,
            credentials: None,
            ..Self::default()
        }
    }

    /// Build the HTTP client for this server. No request is sent.
    pub fn connect(&self) -> Result<ProvisioningClient, CoreError> {
        let transport = TransportConfig {
            tls: self.tls.clone(),
            timeout: self.timeout,
        };
        let http = transport.build_client()?;
        Ok(ProvisioningClient::with_client(
            http,
            self.url.clone(),
            self.credentials.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_install() {
        let config = ServerConfig::default();
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(
            config.credentials.map(|c| c.username).as_deref(),
            Some("admin")
        );
    }
}
