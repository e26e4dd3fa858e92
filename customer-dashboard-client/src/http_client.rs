//! Generic HTTP client tools
//!
//! Reusable request execution, status mapping and JSON parsing for the
//! customer client. Every call is a single round trip: there is no retry.
//!
//! # Status mapping
//! - `2xx` - success
//! - `404` - [`ClientError::NotFound`]
//! - `400` / `422` - [`ClientError::ValidationError`]
//! - anything else - [`ClientError::UnexpectedStatus`]

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the given request timeout.
pub fn create_http_client(request_timeout: Duration) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .map_err(|e| ClientError::InvalidConfiguration {
            detail: format!("failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - for any status, including non-2xx
    /// * `Err(ClientError::NetworkError | ClientError::Timeout)` - the request did not complete
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Map a non-2xx status to an error, passing 2xx bodies through.
    ///
    /// # Arguments
    /// * `status_code` - HTTP status
    /// * `response_text` - response body
    /// * `resource` - path of the requested resource (used for `NotFound`)
    pub fn ensure_success(status_code: u16, response_text: String, resource: &str) -> Result<String> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }

        let raw_message = response_text.trim().to_string();
        let error = match status_code {
            404 => ClientError::NotFound {
                resource: resource.to_string(),
                raw_message: Some(raw_message).filter(|m| !m.is_empty()),
            },
            400 | 422 => ClientError::ValidationError {
                status: status_code,
                raw_message,
            },
            _ => ClientError::UnexpectedStatus {
                status: status_code,
                raw_message: Some(raw_message).filter(|m| !m.is_empty()),
            },
        };

        if error.is_expected() {
            log::warn!("{resource}: {error}");
        } else {
            log::error!("{resource}: {}", truncate_for_log(&error.to_string()));
        }
        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
