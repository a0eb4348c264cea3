//! JSON request helper for a configurable API origin.
//!
//! # Overview
//! `ServerClient::request(path, options)` sends one HTTP request to
//! `base_url + path` with a `Content-Type: application/json` header (caller
//! headers win), fails with a fixed "Server request failed" error on a
//! non-2xx status, and otherwise returns the body parsed as JSON.
//!
//! # Design
//! - The base URL lives in `ServerConfig`, resolved once (from `VITE_API_URL`,
//!   falling back to `http://localhost:5000`) and injected into the client.
//! - Header precedence is a single pure function, `merge_headers`.
//! - `build_request` / `parse_response` are I/O free; a `Transport` runs the
//!   round trip between them. `ReqwestTransport` is the default.
//! - No retries, caching or cancellation are added on top of the transport,
//!   and no timeout unless the caller asks for one in `RequestOptions`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;

pub use client::{parse_response, parse_response_as, ServerClient};
pub use config::{ServerConfig, BASE_URL_VAR, DEFAULT_BASE_URL};
pub use error::{BoxError, FetchError};
pub use http::{default_headers, merge_headers, HttpMethod, HttpRequest, HttpResponse};
pub use options::RequestOptions;
pub use transport::Transport;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
