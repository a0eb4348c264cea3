//! JSON request helper bound to a base URL.
//!
//! # Design
//! `ServerClient` holds an immutable `ServerConfig` and a `Transport`, and
//! carries no mutable state between calls. A call is split the same way the
//! wire is: `build_request` turns a path and options into an `HttpRequest`,
//! the transport executes it, and `parse_response` checks the status and
//! decodes the body. Both halves are pure, so a host that does its own I/O
//! can use them directly and skip `request` entirely.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::error::FetchError;
use crate::http::{default_headers, merge_headers, HttpRequest, HttpResponse};
use crate::options::RequestOptions;
use crate::transport::Transport;

#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct ServerClient<T = ReqwestTransport> {
    config: ServerConfig,
    transport: T,
}

#[cfg(not(feature = "reqwest"))]
#[derive(Debug, Clone)]
pub struct ServerClient<T> {
    config: ServerConfig,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl ServerClient<ReqwestTransport> {
    /// Client using a default `reqwest::Client`.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T> ServerClient<T> {
    pub fn with_transport(config: ServerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `path` and `options` into the exact request that will be sent.
    ///
    /// Without options this is a `GET` carrying only
    /// `Content-Type: application/json`.
    pub fn build_request(&self, path: &str, options: Option<RequestOptions>) -> HttpRequest {
        let RequestOptions {
            method,
            headers,
            body,
            timeout,
        } = options.unwrap_or_default();
        HttpRequest {
            method,
            url: self.config.url_for(path),
            headers: merge_headers(&default_headers(), &headers),
            body,
            timeout,
        }
    }
}

impl<T: Transport> ServerClient<T> {
    /// Send one request to `base_url + path` and decode the JSON reply.
    pub async fn request(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Value, FetchError> {
        self.request_as(path, options).await
    }

    /// Like `request`, decoding the body straight into `D`.
    pub async fn request_as<D: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<D, FetchError> {
        let request = self.build_request(path, options);
        tracing::debug!(method = %request.method, url = %request.url, "sending server request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(FetchError::Transport)?;
        tracing::debug!(status = response.status, "server responded");

        parse_response_as(response)
    }
}

/// Check the status and decode the body as a JSON value.
pub fn parse_response(response: HttpResponse) -> Result<Value, FetchError> {
    parse_response_as(response)
}

/// Check the status and decode the body into `D`.
///
/// A non-success status yields `FetchError::ServerRequestFailed` without
/// looking at the body. A leading UTF-8 byte order mark is ignored.
pub fn parse_response_as<D: DeserializeOwned>(response: HttpResponse) -> Result<D, FetchError> {
    if !response.ok() {
        return Err(FetchError::ServerRequestFailed);
    }
    let body = response.body.strip_prefix('\u{feff}').unwrap_or(&response.body);
    Ok(serde_json::from_str(body)?)
}
