//! Customer Dashboard Core Library
//!
//! Provides the platform-independent business logic of the customer dashboard:
//! - Customer form state (`form`): path-addressed edits, type switching, change tracking
//! - Customer service (`services`): listing, loading, creating, saving and deleting
//!   customers through any [`CustomerApi`](customer_dashboard_client::CustomerApi)
//!
//! The presentation layer owns a [`CustomerForm`] per open editor and drives the
//! remote API only through [`CustomerService`].

pub mod error;
pub mod form;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export common types
pub use customer_dashboard_client as client;
pub use error::{CoreError, CoreResult};
pub use form::{CustomerForm, FieldLocator, FieldValue, StateError};
pub use services::{CustomerService, SaveOutcome};
