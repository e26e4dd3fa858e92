//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::form::StateError;

// Re-export library error type
pub use customer_dashboard_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The customer has no id yet (never created)
    #[error("Customer has not been created yet")]
    CustomerNotPersisted,

    /// Invalid form edit (caller bug)
    #[error("Invalid form edit: {0}")]
    State(#[from] StateError),

    /// Client error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Client(e) => e.is_expected(),
            Self::CustomerNotPersisted | Self::State(_) => false,
        }
    }

    /// The remote service does not know the customer
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Client(ClientError::NotFound { .. }))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_classification() {
        let not_found: CoreError = ClientError::NotFound {
            resource: "/customer/1".into(),
            raw_message: None,
        }
        .into();
        assert!(not_found.is_expected());
        assert!(not_found.is_not_found());

        let timeout: CoreError = ClientError::Timeout { detail: "x".into() }.into();
        assert!(!timeout.is_expected());
    }

    #[test]
    fn state_errors_are_unexpected() {
        let err: CoreError = StateError::MalformedPath { path: ".".into() }.into();
        assert!(!err.is_expected());
        assert_eq!(err.to_string(), "Invalid form edit: Malformed field path '.'");
    }

    #[test]
    fn serializes_with_code_and_details() {
        let err = CoreError::CustomerNotPersisted;
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"CustomerNotPersisted\""));
    }
}
