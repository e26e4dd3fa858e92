//! 客户表单状态

use customer_dashboard_client::{
    Address, BusinessDetails, Customer, CustomerId, CustomerKind, CustomerPatch, CustomerType,
    EmailContact, IndividualDetails, PhoneContact,
};

use super::error::StateError;
use super::locator::{
    AddressField, AddressSection, ContactField, ContactSection, CustomerField, FieldKind,
    FieldLocator,
};
use super::value::FieldValue;
use crate::error::CoreResult;

/// 新地址的默认州
pub const DEFAULT_STATE: &str = "SP";
/// 新地址的默认类型
pub const DEFAULT_ADDRESS_TYPE: &str = "OWN";

/// 新客户的初始值：个人客户、空字段、默认地址、无联系方式
pub fn blank_customer() -> Customer {
    let address = Address {
        state: DEFAULT_STATE.to_string(),
        address_type: DEFAULT_ADDRESS_TYPE.to_string(),
        ..Address::default()
    };
    Customer {
        address: address.clone(),
        correspondence_address: address,
        kind: CustomerKind::empty(CustomerType::Individual),
        ..Customer::default()
    }
}

/// 单个客户的编辑状态
///
/// 所有修改都经过这里列出的操作；非法编辑返回 [`StateError`] 且不改变状态。
/// `original` 保存载入时的值，用于计算变更和重置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    original: Customer,
    current: Customer,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerForm {
    /// 新建客户表单
    pub fn new() -> Self {
        Self::from_customer(blank_customer())
    }

    /// 编辑已有客户
    pub fn from_customer(customer: Customer) -> Self {
        Self {
            original: customer.clone(),
            current: customer,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.current
    }

    pub fn original(&self) -> &Customer {
        &self.original
    }

    pub fn into_customer(self) -> Customer {
        self.current
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.current.id
    }

    pub fn customer_type(&self) -> CustomerType {
        self.current.customer_type()
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// 丢弃所有编辑
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// 相对载入值变化的顶层字段
    pub fn changes(&self) -> CoreResult<CustomerPatch> {
        Ok(CustomerPatch::diff(&self.original, &self.current)?)
    }

    // ========== 字段编辑 ==========

    /// 解析路径后编辑
    pub fn apply_path_edit(
        &mut self,
        path: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), StateError> {
        let locator: FieldLocator = path.parse()?;
        self.apply_field_edit(&locator, value.into())
    }

    /// 覆盖定位器指向的字段，不影响其他字段
    ///
    /// 可空文本字段写入空串时存为 `None`。
    pub fn apply_field_edit(
        &mut self,
        locator: &FieldLocator,
        value: FieldValue,
    ) -> Result<(), StateError> {
        match (locator.kind(), value) {
            (FieldKind::Text, FieldValue::Text(text)) => self.apply_text(locator, text),
            (FieldKind::Flag, FieldValue::Flag(flag)) => self.apply_flag(locator, flag),
            (expected, _) => Err(StateError::TypeMismatch {
                field: locator.to_string(),
                expected: expected.name(),
            }),
        }
    }

    fn apply_text(&mut self, locator: &FieldLocator, text: String) -> Result<(), StateError> {
        let mismatch = || StateError::TypeMismatch {
            field: locator.to_string(),
            expected: FieldKind::Flag.name(),
        };

        match *locator {
            FieldLocator::TopLevel(field) => top_level_slot(&mut self.current, field)?.assign(text),
            FieldLocator::Nested(section, field) => {
                address_text_slot(self.address_mut(section), field)
                    .ok_or_else(mismatch)?
                    .assign(text);
            }
            FieldLocator::ListItem(section, index, field) => {
                self.check_item(locator, section, index, field)?;
                let slot = match section {
                    ContactSection::Phone => phone_text_slot(&mut self.current.phone_contacts[index], field),
                    ContactSection::Email => email_text_slot(&mut self.current.email_contacts[index], field),
                };
                *slot.ok_or_else(mismatch)? = text;
            }
        }
        Ok(())
    }

    fn apply_flag(&mut self, locator: &FieldLocator, flag: bool) -> Result<(), StateError> {
        let mismatch = || StateError::TypeMismatch {
            field: locator.to_string(),
            expected: FieldKind::Text.name(),
        };

        match *locator {
            FieldLocator::Nested(section, AddressField::HasMultipleUnits) => {
                self.address_mut(section).has_multiple_units = flag;
            }
            FieldLocator::ListItem(section, index, field) => {
                self.check_item(locator, section, index, field)?;
                match (section, field) {
                    (ContactSection::Phone, ContactField::IsWhatsapp) => {
                        self.current.phone_contacts[index].is_whatsapp = flag;
                    }
                    _ => return Err(mismatch()),
                }
            }
            FieldLocator::TopLevel(_) | FieldLocator::Nested(..) => return Err(mismatch()),
        }
        Ok(())
    }

    /// 读取定位器指向的字段（`None` 读作空串）
    pub fn read_field(&self, locator: &FieldLocator) -> Result<FieldValue, StateError> {
        match *locator {
            FieldLocator::TopLevel(field) => {
                top_level_value(&self.current, field).map(|v| FieldValue::Text(v.to_string()))
            }
            FieldLocator::Nested(section, field) => Ok(address_value(self.address(section), field)),
            FieldLocator::ListItem(section, index, field) => {
                self.check_item(locator, section, index, field)?;
                Ok(match (section, field) {
                    (ContactSection::Phone, ContactField::IsWhatsapp) => {
                        FieldValue::Flag(self.current.phone_contacts[index].is_whatsapp)
                    }
                    (ContactSection::Phone, ContactField::Phone) => {
                        FieldValue::Text(self.current.phone_contacts[index].phone.clone())
                    }
                    (ContactSection::Phone, _) => {
                        FieldValue::Text(self.current.phone_contacts[index].name.clone())
                    }
                    (ContactSection::Email, ContactField::Email) => {
                        FieldValue::Text(self.current.email_contacts[index].email.clone())
                    }
                    (ContactSection::Email, _) => {
                        FieldValue::Text(self.current.email_contacts[index].name.clone())
                    }
                })
            }
        }
    }

    // ========== 专门操作 ==========

    /// 设置是否使用通讯地址；关闭时保留已填写的通讯地址
    pub fn set_correspondence_toggle(&mut self, value: bool) {
        self.current.is_correspondence_address = value;
    }

    /// 切换客户类型，丢弃另一类型独有的字段
    pub fn set_customer_type(&mut self, customer_type: CustomerType) {
        if self.customer_type() != customer_type {
            self.current.kind = CustomerKind::empty(customer_type);
        }
    }

    /// 追加一个空联系方式，返回其索引
    pub fn append_contact(&mut self, section: ContactSection) -> usize {
        match section {
            ContactSection::Phone => {
                self.current.phone_contacts.push(PhoneContact::default());
                self.current.phone_contacts.len() - 1
            }
            ContactSection::Email => {
                self.current.email_contacts.push(EmailContact::default());
                self.current.email_contacts.len() - 1
            }
        }
    }

    pub fn contact_len(&self, section: ContactSection) -> usize {
        match section {
            ContactSection::Phone => self.current.phone_contacts.len(),
            ContactSection::Email => self.current.email_contacts.len(),
        }
    }

    /// 当前客户类型下所有可编辑字段，按表单顺序
    pub fn editable_locators(&self) -> Vec<FieldLocator> {
        let customer_type = self.customer_type();
        let mut locators: Vec<FieldLocator> = CustomerField::ALL
            .into_iter()
            .filter(|f| applies_to(*f, customer_type))
            .map(FieldLocator::TopLevel)
            .collect();

        for section in AddressSection::ALL {
            locators.extend(
                AddressField::ALL
                    .into_iter()
                    .map(|field| FieldLocator::Nested(section, field)),
            );
        }
        for section in ContactSection::ALL {
            for index in 0..self.contact_len(section) {
                locators.extend(
                    section
                        .fields()
                        .iter()
                        .map(|field| FieldLocator::ListItem(section, index, *field)),
                );
            }
        }
        locators
    }

    // ========== 内部工具 ==========

    fn address(&self, section: AddressSection) -> &Address {
        match section {
            AddressSection::Primary => &self.current.address,
            AddressSection::Correspondence => &self.current.correspondence_address,
        }
    }

    fn address_mut(&mut self, section: AddressSection) -> &mut Address {
        match section {
            AddressSection::Primary => &mut self.current.address,
            AddressSection::Correspondence => &mut self.current.correspondence_address,
        }
    }

    fn check_item(
        &self,
        locator: &FieldLocator,
        section: ContactSection,
        index: usize,
        field: ContactField,
    ) -> Result<(), StateError> {
        if !section.has_field(field) {
            return Err(StateError::UnknownField {
                path: locator.to_string(),
                segment: field.key().to_string(),
            });
        }
        let len = self.contact_len(section);
        if index >= len {
            return Err(StateError::IndexOutOfRange {
                section: section.key(),
                index,
                len,
            });
        }
        Ok(())
    }
}

fn applies_to(field: CustomerField, customer_type: CustomerType) -> bool {
    match customer_type {
        CustomerType::Individual => !field.is_business_only(),
        CustomerType::Business => !field.is_individual_only(),
    }
}

fn not_applicable(field: CustomerField, customer_type: CustomerType) -> StateError {
    StateError::FieldNotApplicable {
        field: field.key().to_string(),
        customer_type: customer_type.code(),
    }
}

/// 可写文本字段
enum TextSlot<'a> {
    Required(&'a mut String),
    Nullable(&'a mut Option<String>),
}

impl TextSlot<'_> {
    fn assign(self, text: String) {
        match self {
            Self::Required(slot) => *slot = text,
            Self::Nullable(slot) => *slot = (!text.is_empty()).then_some(text),
        }
    }
}

fn individual_slot(d: &mut IndividualDetails, field: CustomerField) -> Option<&mut Option<String>> {
    match field {
        CustomerField::Cpf => Some(&mut d.cpf),
        CustomerField::BirthDate => Some(&mut d.birth_date),
        CustomerField::MotherName => Some(&mut d.mother_name),
        _ => None,
    }
}

fn business_slot(d: &mut BusinessDetails, field: CustomerField) -> Option<&mut Option<String>> {
    match field {
        CustomerField::BusinessName => Some(&mut d.business_name),
        CustomerField::Cnpj => Some(&mut d.cnpj),
        _ => None,
    }
}

fn top_level_slot(customer: &mut Customer, field: CustomerField) -> Result<TextSlot<'_>, StateError> {
    let customer_type = customer.customer_type();
    match field {
        CustomerField::Name => Ok(TextSlot::Required(&mut customer.name)),
        CustomerField::IdentityDocument => Ok(TextSlot::Required(&mut customer.identity_document)),
        CustomerField::IssuingAgency => Ok(TextSlot::Required(&mut customer.issuing_agency)),
        _ => {
            let slot = match &mut customer.kind {
                CustomerKind::Individual(d) => individual_slot(d, field),
                CustomerKind::Business(d) => business_slot(d, field),
            };
            slot.map(TextSlot::Nullable)
                .ok_or_else(|| not_applicable(field, customer_type))
        }
    }
}

fn top_level_value(customer: &Customer, field: CustomerField) -> Result<&str, StateError> {
    match (field, &customer.kind) {
        (CustomerField::Name, _) => Ok(&customer.name),
        (CustomerField::IdentityDocument, _) => Ok(&customer.identity_document),
        (CustomerField::IssuingAgency, _) => Ok(&customer.issuing_agency),
        (CustomerField::Cpf, CustomerKind::Individual(d)) => Ok(d.cpf.as_deref().unwrap_or_default()),
        (CustomerField::BirthDate, CustomerKind::Individual(d)) => Ok(d.birth_date.as_deref().unwrap_or_default()),
        (CustomerField::MotherName, CustomerKind::Individual(d)) => Ok(d.mother_name.as_deref().unwrap_or_default()),
        (CustomerField::BusinessName, CustomerKind::Business(d)) => Ok(d.business_name.as_deref().unwrap_or_default()),
        (CustomerField::Cnpj, CustomerKind::Business(d)) => Ok(d.cnpj.as_deref().unwrap_or_default()),
        (field, kind) => Err(not_applicable(field, kind.customer_type())),
    }
}

fn address_text_slot(address: &mut Address, field: AddressField) -> Option<TextSlot<'_>> {
    let slot = match field {
        AddressField::ZipCode => TextSlot::Required(&mut address.zip_code),
        AddressField::Street => TextSlot::Required(&mut address.street),
        AddressField::Number => TextSlot::Required(&mut address.number),
        AddressField::Neighborhood => TextSlot::Required(&mut address.neighborhood),
        AddressField::Complement => TextSlot::Nullable(&mut address.complement),
        AddressField::City => TextSlot::Required(&mut address.city),
        AddressField::State => TextSlot::Required(&mut address.state),
        AddressField::Country => TextSlot::Required(&mut address.country),
        AddressField::Type => TextSlot::Required(&mut address.address_type),
        AddressField::HasMultipleUnits => return None,
    };
    Some(slot)
}

fn address_value(address: &Address, field: AddressField) -> FieldValue {
    let text = match field {
        AddressField::ZipCode => &address.zip_code,
        AddressField::Street => &address.street,
        AddressField::Number => &address.number,
        AddressField::Neighborhood => &address.neighborhood,
        AddressField::Complement => {
            return FieldValue::Text(address.complement.clone().unwrap_or_default())
        }
        AddressField::City => &address.city,
        AddressField::State => &address.state,
        AddressField::Country => &address.country,
        AddressField::Type => &address.address_type,
        AddressField::HasMultipleUnits => return FieldValue::Flag(address.has_multiple_units),
    };
    FieldValue::Text(text.clone())
}

fn phone_text_slot(contact: &mut PhoneContact, field: ContactField) -> Option<&mut String> {
    match field {
        ContactField::Phone => Some(&mut contact.phone),
        ContactField::Name => Some(&mut contact.name),
        ContactField::Email | ContactField::IsWhatsapp => None,
    }
}

fn email_text_slot(contact: &mut EmailContact, field: ContactField) -> Option<&mut String> {
    match field {
        ContactField::Email => Some(&mut contact.email),
        ContactField::Name => Some(&mut contact.name),
        ContactField::Phone | ContactField::IsWhatsapp => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_individual() -> CustomerForm {
        let mut customer = blank_customer();
        customer.id = Some(1);
        customer.name = "Maria".to_string();
        customer.kind = CustomerKind::Individual(IndividualDetails {
            cpf: Some("123".to_string()),
            birth_date: Some("1990-01-01".to_string()),
            mother_name: Some("Joana".to_string()),
        });
        customer.phone_contacts = vec![
            PhoneContact {
                id: Some(10),
                phone: "1111".to_string(),
                name: "Casa".to_string(),
                is_whatsapp: false,
            },
            PhoneContact {
                id: Some(11),
                phone: "2222".to_string(),
                name: "Trabalho".to_string(),
                is_whatsapp: true,
            },
        ];
        customer.email_contacts = vec![EmailContact {
            id: Some(20),
            email: "maria@example.com".to_string(),
            name: "Pessoal".to_string(),
        }];
        CustomerForm::from_customer(customer)
    }

    #[test]
    fn new_form_has_defaults() {
        let form = CustomerForm::new();
        let c = form.customer();
        assert_eq!(c.customer_type(), CustomerType::Individual);
        assert_eq!(c.address.state, "SP");
        assert_eq!(c.address.address_type, "OWN");
        assert!(!c.address.has_multiple_units);
        assert_eq!(c.correspondence_address, c.address);
        assert!(!c.is_correspondence_address);
        assert!(c.phone_contacts.is_empty());
        assert!(c.email_contacts.is_empty());
        assert!(!form.is_dirty());
    }

    #[test]
    fn top_level_edit() {
        let mut form = loaded_individual();
        form.apply_path_edit("name", "Maria Clara").unwrap();
        assert_eq!(form.customer().name, "Maria Clara");
        assert!(form.is_dirty());
    }

    #[test]
    fn nested_edit_preserves_siblings() {
        let mut form = loaded_individual();
        form.apply_path_edit("address.street", "Rua A").unwrap();

        let c = form.customer();
        assert_eq!(c.address.street, "Rua A");
        assert_eq!(c.address.state, "SP");
        assert_eq!(c.correspondence_address.street, "");
    }

    #[test]
    fn list_edit_touches_one_element() {
        let mut form = loaded_individual();
        form.apply_path_edit("phoneContacts.1.phone", "3333").unwrap();
        form.apply_path_edit("phoneContacts.0.isWhatsapp", true).unwrap();

        let phones = &form.customer().phone_contacts;
        assert_eq!(phones[1].phone, "3333");
        assert_eq!(phones[1].id, Some(11));
        assert_eq!(phones[0].phone, "1111");
        assert!(phones[0].is_whatsapp);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_change() {
        let mut form = loaded_individual();
        let before = form.clone();

        let err = form.apply_path_edit("emailContacts.1.email", "x@y.z").unwrap_err();

        assert_eq!(
            err,
            StateError::IndexOutOfRange {
                section: "emailContacts",
                index: 1,
                len: 1,
            }
        );
        assert_eq!(form, before);
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let mut form = loaded_individual();
        let before = form.clone();

        assert!(matches!(
            form.apply_path_edit("address.hasMultipleUnits", "yes"),
            Err(StateError::TypeMismatch { .. })
        ));
        assert!(matches!(
            form.apply_path_edit("name", true),
            Err(StateError::TypeMismatch { .. })
        ));
        assert_eq!(form, before);
    }

    #[test]
    fn hand_built_locator_with_foreign_contact_field_is_rejected() {
        let mut form = loaded_individual();
        let locator = FieldLocator::ListItem(ContactSection::Email, 0, ContactField::IsWhatsapp);
        assert!(matches!(
            form.apply_field_edit(&locator, FieldValue::Flag(true)),
            Err(StateError::UnknownField { .. })
        ));
    }

    #[test]
    fn variant_field_on_wrong_type_is_rejected() {
        let mut form = loaded_individual();
        let before = form.clone();

        let err = form.apply_path_edit("cnpj", "00.000.000/0001-00").unwrap_err();

        assert_eq!(
            err,
            StateError::FieldNotApplicable {
                field: "cnpj".to_string(),
                customer_type: "PF",
            }
        );
        assert_eq!(form, before);
    }

    #[test]
    fn empty_text_clears_nullable_fields() {
        let mut form = loaded_individual();
        form.apply_path_edit("address.complement", "apto 1").unwrap();
        assert_eq!(form.customer().address.complement.as_deref(), Some("apto 1"));

        form.apply_path_edit("address.complement", "").unwrap();
        form.apply_path_edit("motherName", "").unwrap();

        assert_eq!(form.customer().address.complement, None);
        assert_eq!(
            form.read_field(&"motherName".parse().unwrap()).unwrap(),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn switching_to_business_drops_individual_fields() {
        let mut form = loaded_individual();
        let before = form.customer().clone();

        form.set_customer_type(CustomerType::Business);
        let c = form.customer();

        assert_eq!(c.customer_type(), CustomerType::Business);
        assert_eq!(c.cpf(), None);
        assert_eq!(c.name, before.name);
        assert_eq!(c.address, before.address);
        assert_eq!(c.phone_contacts, before.phone_contacts);
        assert_eq!(c.email_contacts, before.email_contacts);

        form.set_customer_type(CustomerType::Individual);
        assert_eq!(
            form.customer().kind,
            CustomerKind::Individual(IndividualDetails::default())
        );
    }

    #[test]
    fn setting_same_type_keeps_fields() {
        let mut form = loaded_individual();
        form.set_customer_type(CustomerType::Individual);
        assert_eq!(form.customer().cpf(), Some("123"));
    }

    #[test]
    fn correspondence_toggle_keeps_address() {
        let mut form = loaded_individual();
        form.set_correspondence_toggle(true);
        form.apply_path_edit("correspondenceAddress.city", "Campinas").unwrap();

        form.set_correspondence_toggle(false);
        assert!(!form.customer().is_correspondence_address);
        assert_eq!(form.customer().correspondence_address.city, "Campinas");

        form.set_correspondence_toggle(true);
        assert_eq!(form.customer().correspondence_address.city, "Campinas");
    }

    #[test]
    fn append_phone_adds_blank_contact() {
        let mut form = loaded_individual();
        let index = form.append_contact(ContactSection::Phone);

        assert_eq!(index, 2);
        assert_eq!(form.customer().phone_contacts.len(), 3);
        assert_eq!(
            form.customer().phone_contacts[2],
            PhoneContact {
                id: None,
                phone: String::new(),
                name: String::new(),
                is_whatsapp: false,
            }
        );
        form.apply_path_edit("phoneContacts.2.name", "Novo").unwrap();
    }

    #[test]
    fn append_email_adds_blank_contact() {
        let mut form = CustomerForm::new();
        assert_eq!(form.append_contact(ContactSection::Email), 0);
        assert_eq!(form.customer().email_contacts, vec![EmailContact::default()]);
    }

    #[test]
    fn changes_and_reset() {
        let mut form = loaded_individual();
        assert!(form.changes().unwrap().is_empty());

        form.apply_path_edit("issuingAgency", "SSP-SP").unwrap();
        let patch = form.changes().unwrap();
        assert_eq!(patch.keys().collect::<Vec<_>>(), vec!["issuingAgency"]);

        form.reset();
        assert!(!form.is_dirty());
    }

    #[test]
    fn editable_locators_follow_type_and_contacts() {
        let mut form = loaded_individual();
        let locators = form.editable_locators();
        assert!(locators.contains(&FieldLocator::TopLevel(CustomerField::Cpf)));
        assert!(!locators.contains(&FieldLocator::TopLevel(CustomerField::Cnpj)));
        assert!(locators.contains(&FieldLocator::ListItem(ContactSection::Phone, 1, ContactField::IsWhatsapp)));
        // 6 top-level + 2 * 10 address + 2 * 3 phone + 1 * 2 email
        assert_eq!(locators.len(), 6 + 20 + 6 + 2);

        form.set_customer_type(CustomerType::Business);
        let locators = form.editable_locators();
        assert!(locators.contains(&FieldLocator::TopLevel(CustomerField::BusinessName)));
        assert!(!locators.contains(&FieldLocator::TopLevel(CustomerField::MotherName)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn value_for(locator: &FieldLocator, text: String, flag: bool) -> FieldValue {
            match locator.kind() {
                FieldKind::Text => FieldValue::Text(text),
                FieldKind::Flag => FieldValue::Flag(flag),
            }
        }

        fn snapshot(form: &CustomerForm) -> Vec<(FieldLocator, FieldValue)> {
            form.editable_locators()
                .into_iter()
                .filter_map(|l| form.read_field(&l).ok().map(|v| (l, v)))
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: an edit changes exactly the targeted field.
            #[test]
            fn edit_changes_only_target(
                business in any::<bool>(),
                pick in any::<prop::sample::Index>(),
                text in "[A-Za-z0-9 ]{0,12}",
                flag in any::<bool>(),
            ) {
                let mut form = loaded_individual();
                if business {
                    form.set_customer_type(CustomerType::Business);
                }
                let locators = form.editable_locators();
                let target = locators[pick.index(locators.len())];
                let before = snapshot(&form);
                let before_customer = form.customer().clone();

                let value = value_for(&target, text, flag);
                form.apply_field_edit(&target, value.clone()).unwrap();

                prop_assert_eq!(form.read_field(&target).unwrap(), value);
                for (locator, old) in before {
                    if locator != target {
                        prop_assert_eq!(form.read_field(&locator).unwrap(), old, "{} changed", locator);
                    }
                }
                let after = form.customer();
                prop_assert_eq!(after.id, before_customer.id);
                prop_assert_eq!(after.customer_type(), before_customer.customer_type());
                prop_assert_eq!(after.is_correspondence_address, before_customer.is_correspondence_address);
                prop_assert_eq!(after.phone_contacts.len(), before_customer.phone_contacts.len());
                prop_assert_eq!(after.email_contacts.len(), before_customer.email_contacts.len());
            }

            /// Property: invalid indices never modify state.
            #[test]
            fn out_of_range_never_mutates(index in 2usize..64, text in "[a-z]{0,8}") {
                let mut form = loaded_individual();
                let before = form.clone();
                let locator = FieldLocator::ListItem(ContactSection::Phone, index, ContactField::Phone);
                let is_out_of_range = matches!(
                    form.apply_field_edit(&locator, FieldValue::Text(text)),
                    Err(StateError::IndexOutOfRange { .. })
                );
                prop_assert!(is_out_of_range);
                prop_assert_eq!(form, before);
            }

            /// Property: PF -> PJ -> PF never resurrects individual fields.
            #[test]
            fn type_round_trip_does_not_resurrect(cpf in "[0-9]{1,11}", name in "[A-Za-z]{1,10}") {
                let mut form = loaded_individual();
                form.apply_path_edit("cpf", cpf).unwrap();
                form.apply_path_edit("name", name.clone()).unwrap();

                form.set_customer_type(CustomerType::Business);
                form.set_customer_type(CustomerType::Individual);

                prop_assert_eq!(form.customer().cpf(), None);
                prop_assert_eq!(&form.customer().name, &name);
            }

            /// Property: appending grows exactly one list by one blank element.
            #[test]
            fn append_grows_by_one(phones in 0usize..5, emails in 0usize..5) {
                let mut form = CustomerForm::new();
                for _ in 0..phones {
                    form.append_contact(ContactSection::Phone);
                }
                for _ in 0..emails {
                    form.append_contact(ContactSection::Email);
                }
                let before = form.customer().clone();

                let index = form.append_contact(ContactSection::Phone);

                prop_assert_eq!(index, phones);
                prop_assert_eq!(form.customer().phone_contacts.len(), phones + 1);
                prop_assert_eq!(&form.customer().phone_contacts[index], &PhoneContact::default());
                prop_assert_eq!(&form.customer().email_contacts, &before.email_contacts);
            }
        }
    }
}
