//! # customer-dashboard-client
//!
//! A typed async client for the customer management REST API.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_customers`](CustomerApi::list_customers) | `GET {base}/customer?<attribute>=<value>&page=&limit=` |
//! | [`get_customer`](CustomerApi::get_customer) | `GET {base}/customer/:id` |
//! | [`create_customer`](CustomerApi::create_customer) | `POST {base}/customer` |
//! | [`update_customer`](CustomerApi::update_customer) | `PUT {base}/customer/:id` (partial body) |
//! | [`delete_customer`](CustomerApi::delete_customer) | `DELETE {base}/customer/:id` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use customer_dashboard_client::{
//!     ClientConfig, CustomerApi, CustomerFilter, CustomerQuery, FilterAttribute,
//!     HttpCustomerClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpCustomerClient::new(&ClientConfig::new("http://localhost:3000/api"))?;
//!
//!     let query = CustomerQuery {
//!         filter: Some(CustomerFilter::new(FilterAttribute::Cpf, "123")),
//!         ..CustomerQuery::default()
//!     };
//!     let page = client.list_customers(&query).await?;
//!     for customer in &page.customers {
//!         println!("{} ({})", customer.name, customer.customer_type().code());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`] — the request did not complete
//! - [`ClientError::NotFound`] — the id is unknown to the server
//! - [`ClientError::ValidationError`] — the server rejected the payload
//!
//! Nothing is retried; failures surface to the caller immediately.

mod client;
mod error;
mod http_client;
mod patch;
mod traits;
mod types;
mod utils;
mod wire;

pub use client::{ClientConfig, HttpCustomerClient};
pub use error::{ClientError, Result};
pub use http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use patch::CustomerPatch;
pub use traits::CustomerApi;
pub use types::{
    Address, BusinessDetails, Customer, CustomerFilter, CustomerId, CustomerKind, CustomerPage,
    CustomerQuery, CustomerType, EmailContact, FilterAttribute, IndividualDetails, PhoneContact,
};

pub use utils::datetime;
pub use utils::log_sanitizer::mask_document;
