use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::WireCustomer;

/// Server-assigned customer identifier.
pub type CustomerId = u64;

// ============ Customer ============

/// Discriminator between individual (`PF`) and business (`PJ`) customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CustomerType {
    /// Pessoa Física: an individual.
    #[default]
    #[serde(rename = "PF")]
    Individual,
    /// Pessoa Jurídica: a business.
    #[serde(rename = "PJ")]
    Business,
}

impl CustomerType {
    /// Wire code (`"PF"` or `"PJ"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Business => "PJ",
        }
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Individual => Self::Business,
            Self::Business => Self::Individual,
        }
    }
}

/// Fields that only exist on individual customers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndividualDetails {
    /// CPF tax identifier.
    pub cpf: Option<String>,
    /// Birth date as sent by the server (usually `YYYY-MM-DD`).
    pub birth_date: Option<String>,
    /// Mother's name.
    pub mother_name: Option<String>,
}

/// Fields that only exist on business customers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusinessDetails {
    /// Registered business name (razão social).
    pub business_name: Option<String>,
    /// CNPJ tax identifier.
    pub cnpj: Option<String>,
}

/// Variant-specific part of a [`Customer`].
///
/// Fields that do not apply to the current variant do not exist in the value,
/// so switching variants cannot leave stale cross-variant data behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerKind {
    /// Individual customer (`PF`).
    Individual(IndividualDetails),
    /// Business customer (`PJ`).
    Business(BusinessDetails),
}

impl Default for CustomerKind {
    fn default() -> Self {
        Self::Individual(IndividualDetails::default())
    }
}

impl CustomerKind {
    /// An empty variant of the given type.
    pub fn empty(customer_type: CustomerType) -> Self {
        match customer_type {
            CustomerType::Individual => Self::Individual(IndividualDetails::default()),
            CustomerType::Business => Self::Business(BusinessDetails::default()),
        }
    }

    pub fn customer_type(&self) -> CustomerType {
        match self {
            Self::Individual(_) => CustomerType::Individual,
            Self::Business(_) => CustomerType::Business,
        }
    }
}

/// A customer record.
///
/// On the wire this is the flat camelCase object served by the API, with a
/// `type` discriminator of `"PF"` or `"PJ"` and `null` for inapplicable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WireCustomer", into = "WireCustomer")]
pub struct Customer {
    /// Server-assigned id. `None` until the customer has been created.
    pub id: Option<CustomerId>,
    pub name: String,
    pub identity_document: String,
    pub issuing_agency: String,
    /// Last modification time, maintained by the server.
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether [`correspondence_address`](Self::correspondence_address) is in use.
    pub is_correspondence_address: bool,
    pub address: Address,
    /// Only meaningful while [`is_correspondence_address`](Self::is_correspondence_address)
    /// is set, but retained otherwise.
    pub correspondence_address: Address,
    pub phone_contacts: Vec<PhoneContact>,
    pub email_contacts: Vec<EmailContact>,
    pub kind: CustomerKind,
}

impl Customer {
    pub fn customer_type(&self) -> CustomerType {
        self.kind.customer_type()
    }

    pub fn cpf(&self) -> Option<&str> {
        match &self.kind {
            CustomerKind::Individual(d) => d.cpf.as_deref(),
            CustomerKind::Business(_) => None,
        }
    }

    pub fn cnpj(&self) -> Option<&str> {
        match &self.kind {
            CustomerKind::Business(d) => d.cnpj.as_deref(),
            CustomerKind::Individual(_) => None,
        }
    }

    pub fn business_name(&self) -> Option<&str> {
        match &self.kind {
            CustomerKind::Business(d) => d.business_name.as_deref(),
            CustomerKind::Individual(_) => None,
        }
    }

    /// First email contact's address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_contacts.first().map(|c| c.email.as_str())
    }

    /// First phone contact's number, if any.
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_contacts.first().map(|c| c.phone.as_str())
    }
}

// ============ Address & Contacts ============

/// A postal address embedded in a [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Server-assigned id. `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    /// Address usage, e.g. `"OWN"`.
    #[serde(rename = "type", default)]
    pub address_type: String,
    #[serde(default)]
    pub has_multiple_units: bool,
}

impl Address {
    /// `"street, city, state, country"`, as shown in list rows.
    pub fn summary(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
        ]
        .join(", ")
    }
}

/// A phone contact. Contacts are ordered; there is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneContact {
    /// Server-assigned id. `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_whatsapp: bool,
}

/// An email contact. Contacts are ordered; there is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContact {
    /// Server-assigned id. `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

// ============ Query Types ============

/// Attributes the list endpoint can filter on. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FilterAttribute {
    #[default]
    Name,
    Cpf,
    BusinessName,
    Cnpj,
    IdentityDocument,
}

impl FilterAttribute {
    /// All attributes, in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Cpf,
        Self::BusinessName,
        Self::Cnpj,
        Self::IdentityDocument,
    ];

    /// Query-string key understood by the API.
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::BusinessName => "businessName",
            Self::Cnpj => "cnpj",
            Self::IdentityDocument => "identityDocument",
        }
    }

    /// Value of this attribute on a customer (`None` when the variant lacks it).
    pub fn value_of(self, customer: &Customer) -> Option<&str> {
        match self {
            Self::Name => Some(customer.name.as_str()),
            Self::Cpf => customer.cpf(),
            Self::BusinessName => customer.business_name(),
            Self::Cnpj => customer.cnpj(),
            Self::IdentityDocument => Some(customer.identity_document.as_str()),
        }
    }
}

/// A single attribute filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    pub attribute: FilterAttribute,
    pub value: String,
}

impl CustomerFilter {
    pub fn new(attribute: FilterAttribute, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    /// A filter with a blank search term matches everything.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Parameters for listing customers.
///
/// # Default
///
/// `page = 1, limit = 5`, no filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    /// Optional attribute filter. Blank filters are not sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<CustomerFilter>,
    /// Optional restriction to one customer type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub limit: u32,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        Self {
            filter: None,
            customer_type: None,
            page: 1,
            limit: 5,
        }
    }
}

impl CustomerQuery {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `limit` is clamped to `1..=max_limit`
    /// - blank filters are dropped
    #[must_use]
    pub fn validated(&self, max_limit: u32) -> Self {
        Self {
            filter: self.filter.clone().filter(|f| !f.is_blank()),
            customer_type: self.customer_type,
            page: self.page.max(1),
            limit: self.limit.clamp(1, max_limit),
        }
    }

    /// Query-string pairs in the order they are sent.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(filter) = self.filter.as_ref().filter(|f| !f.is_blank()) {
            pairs.push((filter.attribute.query_key(), filter.value.trim().to_string()));
        }
        if let Some(customer_type) = self.customer_type {
            pairs.push(("type", customer_type.code().to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }
}

/// One page of customers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    /// Customers on the current page.
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Number of customers matching the query across all pages.
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// Current page number (1-indexed; `0` for an empty result).
    #[serde(default)]
    pub current_page: u32,
}

impl CustomerPage {
    /// Whether a page after `current_page` exists.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(cpf: &str) -> Customer {
        Customer {
            name: "Ana".to_string(),
            kind: CustomerKind::Individual(IndividualDetails {
                cpf: Some(cpf.to_string()),
                ..IndividualDetails::default()
            }),
            ..Customer::default()
        }
    }

    #[test]
    fn query_pairs_skip_blank_filter() {
        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::Cpf, "  ")),
            ..CustomerQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![("page", "1".to_string()), ("limit", "5".to_string())]
        );
    }

    #[test]
    fn query_pairs_use_attribute_key() {
        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::BusinessName, " Acme ")),
            customer_type: Some(CustomerType::Business),
            page: 3,
            limit: 10,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("businessName", "Acme".to_string()),
                ("type", "PJ".to_string()),
                ("page", "3".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn validated_clamps_page_and_limit() {
        let query = CustomerQuery {
            page: 0,
            limit: 500,
            ..CustomerQuery::default()
        };
        let v = query.validated(100);
        assert_eq!(v.page, 1);
        assert_eq!(v.limit, 100);
    }

    #[test]
    fn filter_value_respects_variant() {
        let c = individual("123");
        assert_eq!(FilterAttribute::Cpf.value_of(&c), Some("123"));
        assert_eq!(FilterAttribute::Cnpj.value_of(&c), None);
        assert_eq!(FilterAttribute::Name.value_of(&c), Some("Ana"));
    }

    #[test]
    fn address_summary_joins_parts() {
        let address = Address {
            street: "Rua A".to_string(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
            country: "Brasil".to_string(),
            ..Address::default()
        };
        assert_eq!(address.summary(), "Rua A, Campinas, SP, Brasil");
    }

    #[test]
    fn customer_type_toggles() {
        assert_eq!(CustomerType::Individual.toggled(), CustomerType::Business);
        assert_eq!(CustomerType::Business.toggled(), CustomerType::Individual);
        assert_eq!(CustomerType::Business.code(), "PJ");
    }

    #[test]
    fn page_has_more() {
        let page = CustomerPage {
            total: 12,
            total_pages: 3,
            current_page: 2,
            ..CustomerPage::default()
        };
        assert!(page.has_more());
        assert!(!CustomerPage::default().has_more());
    }
}
