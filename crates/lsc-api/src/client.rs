// RESTCONF HTTP client
//
// Wraps `reqwest::Client` with controller base-URL construction, the
// token header, and response classification. Knows nothing about payload
// shapes: bodies go out and come back as raw bytes.

use std::fmt;

use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::path::ResourcePath;
use crate::transport::TransportConfig;

const JSON: &str = "application/json";

/// The verbs the reconciler needs. Nothing else is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// Async client for a controller's RESTCONF endpoint.
///
/// Holds only fixed configuration (base URL, token header, connection
/// pool), so a single instance can be shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct RestconfClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestconfClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from controller address, port, and token.
    ///
    /// Injects `Authorization: <token>` as a default header on every request.
    /// The token is sent verbatim; acquiring or refreshing it is the caller's job.
    pub fn new(
        address: &str,
        port: u16,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut token_value =
            HeaderValue::from_str(token.expose_secret()).map_err(|e| Error::InvalidToken {
                message: format!("invalid Authorization header value: {e}"),
            })?;
        token_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, token_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(address, port)?;

        Ok(Self { http, base_url })
    }

    /// `{scheme}://{address}:{port}/`. A bare host defaults to plain HTTP,
    /// which is how RESTCONF northbound listeners usually ship.
    fn normalize_base_url(address: &str, port: u16) -> Result<Url, Error> {
        let raw = if address.contains("://") {
            address.to_owned()
        } else {
            format!("http://{address}")
        };
        let mut url = Url::parse(&raw)?;
        url.set_port(Some(port))
            .map_err(|()| Error::InvalidBaseUrl(address.to_owned()))?;

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Issue one request and classify the outcome.
    ///
    /// - 2xx: the response body, unparsed.
    /// - 404: [`Error::NotFound`].
    /// - anything else: [`Error::Rejected`] with the controller's body text.
    ///
    /// Connection failures come back as [`Error::Transport`] and are never
    /// retried here.
    pub async fn request(
        &self,
        path: &ResourcePath,
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<Bytes, Error> {
        let url = path.to_url(&self.base_url)?;
        debug!("{method} {url}");

        let mut req = self.http.request(method.as_reqwest(), url);
        match (method, body) {
            (Method::Get, _) => {
                req = req.header(CONTENT_TYPE, JSON).header(ACCEPT, JSON);
            }
            (Method::Put, Some(body)) if !body.is_empty() => {
                req = req
                    .header(CONTENT_TYPE, JSON)
                    .header(ACCEPT, JSON)
                    .body(body);
            }
            _ => {}
        }

        let resp = req.send().await?;
        Self::handle_response(path, resp).await
    }

    pub async fn get(&self, path: &ResourcePath) -> Result<Bytes, Error> {
        self.request(path, Method::Get, None).await
    }

    pub async fn put(&self, path: &ResourcePath, body: Vec<u8>) -> Result<Bytes, Error> {
        self.request(path, Method::Put, Some(body)).await
    }

    pub async fn delete(&self, path: &ResourcePath) -> Result<(), Error> {
        self.request(path, Method::Delete, None).await.map(drop)
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response(path: &ResourcePath, resp: reqwest::Response) -> Result<Bytes, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.bytes().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                path: path.to_string(),
            });
        }

        let body = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "controller rejected request");
        Err(Error::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_scheme_and_port() {
        let url = RestconfClient::normalize_base_url("10.0.0.5", 8181).unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:8181/");
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let url = RestconfClient::normalize_base_url("https://sdn.lab", 8443).unwrap();
        assert_eq!(url.as_str(), "https://sdn.lab:8443/");
    }

    #[test]
    fn base_path_gains_trailing_slash() {
        let url = RestconfClient::normalize_base_url("https://sdn.lab/lumina", 443).unwrap();
        assert_eq!(url.path(), "/lumina/");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let token = SecretString::from("Basic abc\n".to_string());
        let result = RestconfClient::new("10.0.0.5", 8181, &token, &TransportConfig::default());
        assert!(matches!(result, Err(Error::InvalidToken { .. })));
    }

    #[test]
    fn method_display_matches_http_verb() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
