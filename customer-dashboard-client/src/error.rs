use serde::{Deserialize, Serialize};

/// Unified error type for all customer API operations.
///
/// Every variant is serializable for structured error reporting. No variant is
/// retried automatically: a failed call surfaces to the caller as-is.
///
/// # Expected vs. unexpected
///
/// [`is_expected`](Self::is_expected) separates failures caused by user input
/// or missing records (logged at `warn`) from transport and protocol failures
/// (logged at `error`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The request could not complete (DNS failure, connection refused, reset, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The remote service does not know the requested resource (HTTP 404).
    NotFound {
        /// Path of the resource that was not found, relative to the base URL.
        resource: String,
        /// Response body from the remote service, if any.
        raw_message: Option<String>,
    },

    /// The remote service rejected the payload (HTTP 400 or 422).
    ValidationError {
        /// HTTP status code returned by the remote service.
        status: u16,
        /// Response body from the remote service.
        raw_message: String,
    },

    /// Any other non-2xx response.
    UnexpectedStatus {
        /// HTTP status code returned by the remote service.
        status: u16,
        /// Response body from the remote service, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the remote service's response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be constructed (bad base URL, TLS backend failure).
    InvalidConfiguration {
        /// Description of what's wrong.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ValidationError { .. })
    }

    /// 网络层失败（请求未完成）
    #[must_use]
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message.as_deref().filter(|m| !m.is_empty()) {
                    write!(f, "Resource '{resource}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource}' not found")
                }
            }
            Self::ValidationError {
                status,
                raw_message,
            } => {
                write!(f, "Rejected by server (HTTP {status}): {raw_message}")
            }
            Self::UnexpectedStatus {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message.as_deref().filter(|m| !m.is_empty()) {
                    write!(f, "Unexpected HTTP {status}: {msg}")
                } else {
                    write!(f, "Unexpected HTTP {status}")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidConfiguration { detail } => {
                write!(f, "Invalid client configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_not_found_with_message() {
        let e = ClientError::NotFound {
            resource: "/customer/7".to_string(),
            raw_message: Some("Customer not found".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "Resource '/customer/7' not found: Customer not found"
        );
    }

    #[test]
    fn display_not_found_with_empty_body() {
        let e = ClientError::NotFound {
            resource: "/customer/7".to_string(),
            raw_message: Some(String::new()),
        };
        assert_eq!(e.to_string(), "Resource '/customer/7' not found");
    }

    #[test]
    fn display_validation_error() {
        let e = ClientError::ValidationError {
            status: 422,
            raw_message: "cpf is invalid".to_string(),
        };
        assert_eq!(e.to_string(), "Rejected by server (HTTP 422): cpf is invalid");
    }

    #[test]
    fn display_unexpected_status() {
        let e = ClientError::UnexpectedStatus {
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Unexpected HTTP 500");
    }

    #[test]
    fn expected_classification() {
        assert!(ClientError::NotFound {
            resource: "/customer/1".into(),
            raw_message: None,
        }
        .is_expected());
        assert!(ClientError::ValidationError {
            status: 400,
            raw_message: "bad".into(),
        }
        .is_expected());
        assert!(!ClientError::Timeout { detail: "x".into() }.is_expected());
        assert!(!ClientError::ParseError { detail: "x".into() }.is_expected());
    }

    #[test]
    fn network_failure_classification() {
        assert!(ClientError::Timeout { detail: "x".into() }.is_network_failure());
        assert!(ClientError::NetworkError { detail: "x".into() }.is_network_failure());
        assert!(!ClientError::UnexpectedStatus {
            status: 503,
            raw_message: None,
        }
        .is_network_failure());
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ClientError::ValidationError {
            status: 400,
            raw_message: "missing name".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ValidationError\""));
        assert!(json.contains("\"status\":400"));
    }

    #[test]
    fn deserialize_preserves_display() {
        let original = ClientError::NotFound {
            resource: "/customer/3".to_string(),
            raw_message: None,
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: ClientError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
