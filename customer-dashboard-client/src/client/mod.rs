//! HTTP 客户 API 客户端

mod api;
mod http;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::http_client::{create_http_client, DEFAULT_REQUEST_TIMEOUT_SECS};

/// 客户资源路径（相对 base URL）
pub(crate) const CUSTOMER_PATH: &str = "/customer";
/// 单页最大记录数
pub(crate) const MAX_PAGE_LIMIT: u32 = 100;

/// Connection settings for [`HttpCustomerClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:3000/api`. Customer routes live under `/customer`.
    pub base_url: String,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// [`CustomerApi`](crate::CustomerApi) over HTTP.
#[derive(Debug)]
pub struct HttpCustomerClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpCustomerClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config.request_timeout)?,
            base_url: normalize_base_url(&config.base_url)?,
        })
    }

    /// Normalized API root (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// 去掉末尾的 `/`，并校验协议
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::InvalidConfiguration {
            detail: "base URL is empty".to_string(),
        });
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::InvalidConfiguration {
            detail: format!("base URL must start with http:// or https://: {trimmed}"),
        });
    }
    Ok(trimmed.to_string())
}
