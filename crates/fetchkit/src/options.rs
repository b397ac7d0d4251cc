//! Request options and the finalized request handed to a transport.

use std::collections::HashMap;

use crate::body::{Body, PreparedBody};
use crate::cancel::AbortSignal;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header map with case-insensitive names. Names are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn delete(&mut self, key: &str) {
        self.0.remove(&key.to_ascii_lowercase());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_ascii_lowercase())
    }

    /// Inserts `value` only when no header named `key` is present.
    pub fn insert_missing(&mut self, key: &str, value: &str) {
        self.0
            .entry(key.to_ascii_lowercase())
            .or_insert_with(|| value.to_string());
    }

    /// Adds every header from `defaults` that this map does not already set.
    pub fn merge_missing(&mut self, defaults: &Headers) {
        for (key, value) in defaults.iter() {
            self.insert_missing(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SameOrigin,
    NoCors,
    Cors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cache {
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Follow,
    Error,
    Manual,
}

/// Fetch-style options for a single request.
///
/// `signal` is accepted for parity with browser fetch options but is always
/// replaced by the signal of the per-call token.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Body,
    pub signal: Option<AbortSignal>,
    pub credentials: Option<Credentials>,
    pub mode: Option<Mode>,
    pub cache: Option<Cache>,
    pub redirect: Option<Redirect>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: impl Into<Body>) -> Self {
        Self::new().method(HttpMethod::Post).body(body)
    }

    pub fn put(body: impl Into<Body>) -> Self {
        Self::new().method(HttpMethod::Put).body(body)
    }

    pub fn patch(body: impl Into<Body>) -> Self {
        Self::new().method(HttpMethod::Patch).body(body)
    }

    pub fn delete() -> Self {
        Self::new().method(HttpMethod::Delete)
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn cache(mut self, cache: Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }
}

/// A request with its headers and body finalized, ready for a transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Option<PreparedBody>,
    pub signal: AbortSignal,
    pub credentials: Option<Credentials>,
    pub mode: Option<Mode>,
    pub cache: Option<Cache>,
    pub redirect: Option<Redirect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");

        assert_eq!(headers.get("content-type"), Some("text/plain"));
        assert!(headers.contains("CONTENT-TYPE"));

        headers.delete("Content-type");
        assert!(headers.is_empty());
    }

    #[test]
    fn insert_missing_keeps_existing_value() {
        let mut headers: Headers = [("Content-Type", "text/csv")].into_iter().collect();
        headers.insert_missing(CONTENT_TYPE, APPLICATION_JSON);
        headers.insert_missing("accept", APPLICATION_JSON);

        assert_eq!(headers.get(CONTENT_TYPE), Some("text/csv"));
        assert_eq!(headers.get("Accept"), Some(APPLICATION_JSON));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn merge_missing_prefers_own_headers() {
        let mut headers: Headers = [("x-trace", "mine")].into_iter().collect();
        let defaults: Headers = [("X-Trace", "default"), ("x-client", "fetchkit")]
            .into_iter()
            .collect();

        headers.merge_missing(&defaults);

        assert_eq!(headers.get("x-trace"), Some("mine"));
        assert_eq!(headers.get("x-client"), Some("fetchkit"));
    }

    #[test]
    fn builder_sets_method_and_body() {
        let options = RequestOptions::post(serde_json::json!({"a": 1}))
            .header("Authorization", "Bearer t")
            .credentials(Credentials::Include);

        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.body, Body::Json(serde_json::json!({"a": 1})));
        assert_eq!(options.headers.get("authorization"), Some("Bearer t"));
        assert_eq!(options.credentials, Some(Credentials::Include));
        assert!(options.signal.is_none());
    }

    #[test]
    fn default_options_are_a_bare_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, HttpMethod::Get);
        assert_eq!(options.body, Body::Empty);
        assert!(options.headers.is_empty());
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}
