//! Centralized API base URL and request options.
//!
//! The base URL comes from `VITE_API_URL` (the frontend build shares the same
//! variable), falling back to the local development server.

use std::env;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5200/api";

const API_URL_VAR: &str = "VITE_API_URL";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("invalid header name: '{name}'")]
    InvalidHeaderName { name: String },

    #[error("invalid header value for '{name}'")]
    InvalidHeaderValue { name: String },
}

/// API base URL: `VITE_API_URL` if set and non-empty, the local default otherwise.
pub fn api_base_url() -> String {
    env::var(API_URL_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Build a full API URL from an endpoint path (e.g. `/families`, `/users`).
pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", api_base_url(), endpoint)
}

/// Default request options with authorization.
///
/// Produces `Content-Type: application/json`, `Authorization: Bearer <token>`
/// when a token is present, and caller-supplied overrides. Overrides win over
/// the defaults.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    token: Option<String>,
    overrides: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a bearer token (e.g. the JWT from the auth context).
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add or replace a header. Applied after the defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Build the final header set.
    pub fn headers(&self) -> Result<HeaderMap, ApiConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ApiConfigError::InvalidHeaderValue {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.overrides {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ApiConfigError::InvalidHeaderName { name: name.clone() }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiConfigError::InvalidHeaderValue {
                    name: name.clone(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use serial_test::serial;

    use super::{api_base_url, api_url, RequestOptions, DEFAULT_API_BASE_URL};

    #[test]
    #[serial]
    fn base_url_defaults_to_localhost() {
        env::remove_var("VITE_API_URL");
        assert_eq!(api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    #[serial]
    fn api_url_joins_endpoint() {
        env::remove_var("VITE_API_URL");
        assert_eq!(api_url("/families"), "http://localhost:5200/api/families");
    }

    #[test]
    #[serial]
    fn base_url_respects_env_override() {
        env::set_var("VITE_API_URL", "https://api.example.com/api");
        assert_eq!(api_url("/users"), "https://api.example.com/api/users");
        env::remove_var("VITE_API_URL");
    }

    #[test]
    #[serial]
    fn empty_env_var_falls_back_to_default() {
        env::set_var("VITE_API_URL", "");
        assert_eq!(api_base_url(), DEFAULT_API_BASE_URL);
        env::remove_var("VITE_API_URL");
    }

    #[test]
    fn headers_default_to_json_content_type() {
        let headers = RequestOptions::new().headers().unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn headers_include_bearer_token_when_present() {
        let headers = RequestOptions::new()
            .bearer_token("abc123")
            .headers()
            .unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn overrides_win_over_defaults() {
        let headers = RequestOptions::new()
            .header("Content-Type", "text/plain")
            .header("X-Request-Id", "42")
            .headers()
            .unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get("x-request-id").unwrap(), "42");
    }

    #[test]
    fn invalid_override_value_is_rejected() {
        let res = RequestOptions::new().header("X-Bad", "line\nbreak").headers();
        assert!(res.is_err());
    }
}
