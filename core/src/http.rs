//! HTTP request/response types described as plain data.
//!
//! # Design
//! `ServerClient::build_request` produces an `HttpRequest` and
//! `parse_response` consumes an `HttpResponse` without touching the network.
//! A `Transport` (or the host itself) executes the round trip in between.
//!
//! Headers are ordered `(name, value)` pairs. Names are compared ASCII
//! case-insensitively wherever precedence matters, as HTTP requires.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Header name the helper always sets unless the caller overrides it.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Media type sent in the default `Content-Type` header.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved HTTP request: absolute URL, merged headers, body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Caller-chosen limit for the whole round trip. `None` leaves the
    /// transport's own default in place.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the `200..=299` success range.
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Headers every request starts from before caller overrides are applied.
pub fn default_headers() -> Vec<(String, String)> {
    vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]
}

/// Layer `overrides` on top of `defaults`.
///
/// A default is dropped when any override shares its name (ASCII
/// case-insensitive). Every override is kept, in order, so repeating a header
/// sends each value. Surviving defaults come first.
pub fn merge_headers(
    defaults: &[(String, String)],
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    defaults
        .iter()
        .filter(|(name, _)| find_header(overrides, name).is_none())
        .chain(overrides)
        .cloned()
        .collect()
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
