//! Caller-supplied overlay for a single request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::HttpMethod;

/// Method, extra headers, body and timeout for one call to `ServerClient::request`.
///
/// Every field is passed through to the outgoing request unchanged, except
/// `headers`, which are layered over the default JSON content type by
/// `merge_headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Serialize `value` as the request body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(self.body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bare_get() {
        let options = RequestOptions::new();
        assert_eq!(options.method, HttpMethod::Get);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert!(options.timeout.is_none());
    }

    #[test]
    fn timeout_is_recorded() {
        let options = RequestOptions::new().timeout(Duration::from_millis(250));
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn json_body_is_serialized() {
        let options = RequestOptions::new()
            .method(HttpMethod::Post)
            .json(&serde_json::json!({"name": "widget", "qty": 2}))
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(options.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "widget");
        assert_eq!(body["qty"], 2);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let options: RequestOptions = serde_json::from_str(r#"{"method":"PUT"}"#).unwrap();
        assert_eq!(options.method, HttpMethod::Put);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }
}
