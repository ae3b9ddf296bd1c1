//! API utilities for frontend-backend communication
//!
//! Provides the client configuration, URL construction and the JSON request
//! helpers every domain `model.rs` goes through.

use crate::shared::error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Build-time override of the backend location, e.g. `http://127.0.0.1:8000`.
const API_BASE_ENV: Option<&str> = option_env!("INVENTORY_API_BASE");

/// Client-side settings for reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same origin.
    pub api_base: String,
    /// Send no-cache headers and a cache-buster on reads so every render
    /// reflects the backend, never a browser cache.
    pub no_cache: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            no_cache: true,
        }
    }
}

impl ClientConfig {
    /// Configuration for this build.
    pub fn load() -> Self {
        Self::from_base(API_BASE_ENV)
    }

    pub fn from_base(base: Option<&str>) -> Self {
        let api_base = base
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        Self {
            api_base,
            ..Self::default()
        }
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```ignore
    /// let url = config.api_url("/api/products/12/materials");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// URL for a GET request, with a `_ts` cache-buster when `no_cache` is on.
    pub fn read_url(&self, path: &str, timestamp: i64) -> String {
        let url = self.api_url(path);
        if !self.no_cache {
            return url;
        }
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}_ts={}", url, sep, timestamp)
    }
}

fn with_no_cache(builder: RequestBuilder, config: &ClientConfig) -> RequestBuilder {
    if config.no_cache {
        builder
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
    } else {
        builder
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(config: &ClientConfig, path: &str) -> Result<T, ApiError> {
    let url = config.read_url(path, js_sys::Date::now() as i64);
    let response = with_no_cache(Request::get(&url), config)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body; the response body is not inspected.
pub async fn post_json<B: Serialize>(config: &ClientConfig, path: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::post(&config.api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await
}

/// PATCH a JSON body; the response body is not inspected.
pub async fn patch_json<B: Serialize>(config: &ClientConfig, path: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::patch(&config.api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await
}

pub async fn delete(config: &ClientConfig, path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&config.api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(&response)
}

async fn send(request: Request) -> Result<(), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        let config = ClientConfig::from_base(None);
        assert_eq!(config.api_url("/api/products"), "/api/products");
        assert!(config.no_cache);
    }

    #[test]
    fn test_base_trailing_slash_trimmed() {
        let config = ClientConfig::from_base(Some("http://127.0.0.1:8000/ "));
        assert_eq!(
            config.api_url("/api/materials"),
            "http://127.0.0.1:8000/api/materials"
        );
    }

    #[test]
    fn test_read_url_cache_buster() {
        let config = ClientConfig::default();
        assert_eq!(config.read_url("/api/products", 42), "/api/products?_ts=42");
        assert_eq!(
            config.read_url("/api/reports/low-stock?limit=5", 42),
            "/api/reports/low-stock?limit=5&_ts=42"
        );

        let cached = ClientConfig {
            no_cache: false,
            ..ClientConfig::default()
        };
        assert_eq!(cached.read_url("/api/products", 42), "/api/products");
    }
}
