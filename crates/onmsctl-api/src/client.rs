// HTTP client for the OpenNMS provisioning REST API.
//
// Base path: {server}/rest/
// Auth: HTTP basic
//
// Endpoint methods live in `requisitions.rs` and `foreign_sources.rs` as
// inherent impls; this module only owns URL construction and response
// handling. Every call is a single attempt, retries are left to the caller.

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::{ParseError, Url};

use crate::error::Error;

/// Basic-auth credentials for the REST API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Client bound to one server endpoint and one credential set.
pub struct ProvisioningClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ProvisioningClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Wrap a `reqwest::Client` built from a [`TransportConfig`](crate::TransportConfig).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base}/rest/{segments...}`, percent-encoding every segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("rest")
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.credentials {
            Some(c) => builder.basic_auth(&c.username, Some(c.password.expose_secret())),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.request(Method::GET, url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<B: Serialize + Sync>(&self, url: Url, body: &B) -> Result<(), Error> {
        debug!("POST {url}");

        let resp = self.request(Method::POST, url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    pub(crate) async fn put_with_params(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<(), Error> {
        debug!("PUT {url} params={params:?}");

        let resp = self.request(Method::PUT, url).query(params).send().await?;
        Self::handle_empty(resp).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.request(Method::DELETE, url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let path = resp.url().path().to_owned();
        let body = resp.text().await?;
        trace!(status = status.as_u16(), bytes = body.len(), "response body received");

        // The server answers 204 (or an empty 200) for lookups that match nothing.
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Err(Error::NotFound {
                message: format!("{path} not found"),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let path = resp.url().path().to_owned();
        let raw = resp.text().await.unwrap_or_default();
        let raw = raw.trim();

        match status {
            StatusCode::UNAUTHORIZED => Error::Authentication {
                message: "credentials rejected by server".into(),
            },
            StatusCode::NOT_FOUND => Error::NotFound {
                message: if raw.is_empty() {
                    format!("{path} not found")
                } else {
                    raw.to_owned()
                },
            },
            _ => Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.to_owned()
                },
            },
        }
    }
}
