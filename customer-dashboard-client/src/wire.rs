//! 客户在线上的扁平 JSON 表示
//!
//! API 使用一个扁平对象承载 PF/PJ 两种客户，`type` 字段区分类型，
//! 不适用于当前类型的字段为 `null`。这里负责它与 [`Customer`] 之间的转换。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    Address, BusinessDetails, Customer, CustomerId, CustomerKind, CustomerType, EmailContact,
    IndividualDetails, PhoneContact,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCustomer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(rename = "type", default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub identity_document: String,
    #[serde(default)]
    pub issuing_agency: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub is_correspondence_address: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub correspondence_address: Option<Address>,
    #[serde(default)]
    pub phone_contacts: Vec<PhoneContact>,
    #[serde(default)]
    pub email_contacts: Vec<EmailContact>,
}

impl From<WireCustomer> for Customer {
    fn from(wire: WireCustomer) -> Self {
        // 另一类型的字段即使服务端返回了也丢弃
        let kind = match wire.customer_type {
            CustomerType::Individual => CustomerKind::Individual(IndividualDetails {
                cpf: wire.cpf,
                birth_date: wire.birth_date,
                mother_name: wire.mother_name,
            }),
            CustomerType::Business => CustomerKind::Business(BusinessDetails {
                business_name: wire.business_name,
                cnpj: wire.cnpj,
            }),
        };

        Self {
            id: wire.id,
            name: wire.name,
            identity_document: wire.identity_document,
            issuing_agency: wire.issuing_agency,
            updated_at: wire.updated_at,
            is_correspondence_address: wire.is_correspondence_address,
            address: wire.address.unwrap_or_default(),
            correspondence_address: wire.correspondence_address.unwrap_or_default(),
            phone_contacts: wire.phone_contacts,
            email_contacts: wire.email_contacts,
            kind,
        }
    }
}

impl From<Customer> for WireCustomer {
    fn from(customer: Customer) -> Self {
        let customer_type = customer.customer_type();
        let (individual, business) = match customer.kind {
            CustomerKind::Individual(d) => (d, BusinessDetails::default()),
            CustomerKind::Business(d) => (IndividualDetails::default(), d),
        };

        Self {
            id: customer.id,
            customer_type,
            name: customer.name,
            cpf: individual.cpf,
            business_name: business.business_name,
            cnpj: business.cnpj,
            identity_document: customer.identity_document,
            issuing_agency: customer.issuing_agency,
            birth_date: individual.birth_date,
            mother_name: individual.mother_name,
            is_correspondence_address: customer.is_correspondence_address,
            updated_at: customer.updated_at,
            address: Some(customer.address),
            correspondence_address: Some(customer.correspondence_address),
            phone_contacts: customer.phone_contacts,
            email_contacts: customer.email_contacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::types::{Customer, CustomerKind, CustomerType};

    fn sample_json() -> Value {
        json!({
            "id": 42,
            "type": "PF",
            "name": "Maria Silva",
            "cpf": "123.456.789-00",
            "businessName": null,
            "cnpj": null,
            "identityDocument": "12.345.678-9",
            "issuingAgency": "SSP",
            "birthDate": "1990-05-17",
            "motherName": "Joana Silva",
            "isCorrespondenceAddress": true,
            "updatedAt": "2024-03-01T12:30:00.000Z",
            "address": {
                "id": 7,
                "zipCode": "01001-000",
                "street": "Praça da Sé",
                "number": "100",
                "neighborhood": "Sé",
                "complement": null,
                "city": "São Paulo",
                "state": "SP",
                "country": "Brasil",
                "type": "OWN",
                "hasMultipleUnits": false
            },
            "correspondenceAddress": {
                "id": 8,
                "zipCode": "13010-000",
                "street": "Rua B",
                "number": "5",
                "neighborhood": "Centro",
                "complement": "apto 3",
                "city": "Campinas",
                "state": "SP",
                "country": "Brasil",
                "type": "OWN",
                "hasMultipleUnits": true
            },
            "phoneContacts": [
                { "id": 1, "phone": "11 99999-0000", "name": "Celular", "isWhatsapp": true }
            ],
            "emailContacts": [
                { "id": 2, "email": "maria@example.com", "name": "Pessoal" }
            ]
        })
    }

    #[test]
    fn decodes_individual_customer() {
        let customer: Customer = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(customer.id, Some(42));
        assert_eq!(customer.customer_type(), CustomerType::Individual);
        assert_eq!(customer.cpf(), Some("123.456.789-00"));
        assert_eq!(customer.address.city, "São Paulo");
        assert_eq!(customer.address.complement, None);
        assert_eq!(
            customer.correspondence_address.complement.as_deref(),
            Some("apto 3")
        );
        assert!(customer.correspondence_address.has_multiple_units);
        assert!(customer.phone_contacts[0].is_whatsapp);
        assert_eq!(customer.primary_email(), Some("maria@example.com"));
        assert!(customer.updated_at.is_some());
    }

    #[test]
    fn business_customer_drops_individual_fields() {
        let mut value = sample_json();
        value["type"] = json!("PJ");
        value["businessName"] = json!("Silva Ltda");
        value["cnpj"] = json!("12.345.678/0001-90");

        let customer: Customer = serde_json::from_value(value).unwrap();

        assert!(
            matches!(&customer.kind, CustomerKind::Business(d) if d.business_name.as_deref() == Some("Silva Ltda")),
            "unexpected kind: {:?}",
            customer.kind
        );
        assert_eq!(customer.cpf(), None);

        let encoded = serde_json::to_value(&customer).unwrap();
        assert_eq!(encoded["type"], json!("PJ"));
        assert_eq!(encoded["cpf"], Value::Null);
        assert_eq!(encoded["birthDate"], Value::Null);
        assert_eq!(encoded["motherName"], Value::Null);
    }

    #[test]
    fn encodes_flat_camel_case_object() {
        let customer: Customer = serde_json::from_value(sample_json()).unwrap();
        let encoded = serde_json::to_value(&customer).unwrap();

        assert_eq!(encoded["identityDocument"], json!("12.345.678-9"));
        assert_eq!(encoded["isCorrespondenceAddress"], json!(true));
        assert_eq!(encoded["address"]["zipCode"], json!("01001-000"));
        assert_eq!(encoded["address"]["type"], json!("OWN"));
        assert_eq!(encoded["phoneContacts"][0]["isWhatsapp"], json!(true));
        assert_eq!(encoded["businessName"], Value::Null);
    }

    #[test]
    fn new_customer_omits_server_assigned_fields() {
        let encoded = serde_json::to_value(Customer::default()).unwrap();

        assert!(encoded.get("id").is_none());
        assert!(encoded.get("updatedAt").is_none());
        assert!(encoded["address"].get("id").is_none());
        assert_eq!(encoded["type"], json!("PF"));
    }

    #[test]
    fn tolerates_missing_correspondence_address() {
        let mut value = sample_json();
        value["correspondenceAddress"] = Value::Null;
        value.as_object_mut().unwrap().remove("emailContacts");

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(customer.correspondence_address, Default::default());
        assert!(customer.email_contacts.is_empty());
    }

    #[test]
    fn accepts_millisecond_timestamps() {
        let mut value = sample_json();
        value["updatedAt"] = json!(1_709_296_200_000_i64);

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(
            customer.updated_at.map(|t| t.timestamp()),
            Some(1_709_296_200)
        );
    }
}
