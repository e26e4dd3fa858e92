//! 字段定位器
//!
//! 把 `"address.street"`、`"phoneContacts.0.phone"` 这样的路径在绑定层解析一次，
//! 之后编辑都使用类型化的 [`FieldLocator`]。

use std::fmt;
use std::str::FromStr;

use super::error::StateError;

/// 字段值的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Flag => "flag",
        }
    }
}

// ========== 顶层字段 ==========

/// 可通过定位器编辑的顶层字段
///
/// `type` 与 `isCorrespondenceAddress` 不在此列，它们有专门的操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Cpf,
    BusinessName,
    Cnpj,
    IdentityDocument,
    IssuingAgency,
    BirthDate,
    MotherName,
}

impl CustomerField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Cpf,
        Self::BusinessName,
        Self::Cnpj,
        Self::IdentityDocument,
        Self::IssuingAgency,
        Self::BirthDate,
        Self::MotherName,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::BusinessName => "businessName",
            Self::Cnpj => "cnpj",
            Self::IdentityDocument => "identityDocument",
            Self::IssuingAgency => "issuingAgency",
            Self::BirthDate => "birthDate",
            Self::MotherName => "motherName",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// 仅个人客户拥有
    pub fn is_individual_only(self) -> bool {
        matches!(self, Self::Cpf | Self::BirthDate | Self::MotherName)
    }

    /// 仅企业客户拥有
    pub fn is_business_only(self) -> bool {
        matches!(self, Self::BusinessName | Self::Cnpj)
    }
}

// ========== 地址 ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressSection {
    Primary,
    Correspondence,
}

impl AddressSection {
    pub const ALL: [Self; 2] = [Self::Primary, Self::Correspondence];

    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "address",
            Self::Correspondence => "correspondenceAddress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    ZipCode,
    Street,
    Number,
    Neighborhood,
    Complement,
    City,
    State,
    Country,
    Type,
    HasMultipleUnits,
}

impl AddressField {
    pub const ALL: [Self; 10] = [
        Self::ZipCode,
        Self::Street,
        Self::Number,
        Self::Neighborhood,
        Self::Complement,
        Self::City,
        Self::State,
        Self::Country,
        Self::Type,
        Self::HasMultipleUnits,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ZipCode => "zipCode",
            Self::Street => "street",
            Self::Number => "number",
            Self::Neighborhood => "neighborhood",
            Self::Complement => "complement",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::Type => "type",
            Self::HasMultipleUnits => "hasMultipleUnits",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn kind(self) -> FieldKind {
        if self == Self::HasMultipleUnits {
            FieldKind::Flag
        } else {
            FieldKind::Text
        }
    }
}

// ========== 联系方式 ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSection {
    Phone,
    Email,
}

impl ContactSection {
    pub const ALL: [Self; 2] = [Self::Phone, Self::Email];

    pub fn key(self) -> &'static str {
        match self {
            Self::Phone => "phoneContacts",
            Self::Email => "emailContacts",
        }
    }

    /// 该列表元素拥有的字段
    pub fn fields(self) -> &'static [ContactField] {
        match self {
            Self::Phone => &[ContactField::Phone, ContactField::Name, ContactField::IsWhatsapp],
            Self::Email => &[ContactField::Email, ContactField::Name],
        }
    }

    pub fn has_field(self, field: ContactField) -> bool {
        self.fields().contains(&field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Phone,
    Email,
    Name,
    IsWhatsapp,
}

impl ContactField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Name => "name",
            Self::IsWhatsapp => "isWhatsapp",
        }
    }

    pub fn kind(self) -> FieldKind {
        if self == Self::IsWhatsapp {
            FieldKind::Flag
        } else {
            FieldKind::Text
        }
    }
}

// ========== 定位器 ==========

/// 指向 Customer 中一个可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLocator {
    /// 顶层标量字段，如 `name`
    TopLevel(CustomerField),
    /// 地址内字段，如 `address.street`
    Nested(AddressSection, AddressField),
    /// 联系方式列表元素的字段，如 `phoneContacts.0.phone`
    ListItem(ContactSection, usize, ContactField),
}

impl FieldLocator {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::TopLevel(_) => FieldKind::Text,
            Self::Nested(_, field) => field.kind(),
            Self::ListItem(_, _, field) => field.kind(),
        }
    }

    /// 最后一段路径（用于标签和错误信息）
    pub fn leaf_key(&self) -> &'static str {
        match self {
            Self::TopLevel(field) => field.key(),
            Self::Nested(_, field) => field.key(),
            Self::ListItem(_, _, field) => field.key(),
        }
    }
}

impl fmt::Display for FieldLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevel(field) => f.write_str(field.key()),
            Self::Nested(section, field) => write!(f, "{}.{}", section.key(), field.key()),
            Self::ListItem(section, index, field) => {
                write!(f, "{}.{index}.{}", section.key(), field.key())
            }
        }
    }
}

impl FromStr for FieldLocator {
    type Err = StateError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = |segment: &str| StateError::UnknownField {
            path: path.to_string(),
            segment: segment.to_string(),
        };
        let malformed = || StateError::MalformedPath {
            path: path.to_string(),
        };

        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(malformed());
        }

        match segments.as_slice() {
            [key] => match *key {
                "type" | "isCorrespondenceAddress" | "id" | "updatedAt" => Err(StateError::ReservedField {
                    field: (*key).to_string(),
                }),
                _ => CustomerField::from_key(key)
                    .map(Self::TopLevel)
                    .ok_or_else(|| unknown(key)),
            },
            [section, key] => {
                let section = AddressSection::ALL
                    .into_iter()
                    .find(|s| s.key() == *section)
                    .ok_or_else(|| unknown(section))?;
                if *key == "id" {
                    return Err(StateError::ReservedField {
                        field: path.to_string(),
                    });
                }
                let field = AddressField::from_key(key).ok_or_else(|| unknown(key))?;
                Ok(Self::Nested(section, field))
            }
            [section, index, key] => {
                let section = ContactSection::ALL
                    .into_iter()
                    .find(|s| s.key() == *section)
                    .ok_or_else(|| unknown(section))?;
                let index: usize = index.parse().map_err(|_| malformed())?;
                if *key == "id" {
                    return Err(StateError::ReservedField {
                        field: path.to_string(),
                    });
                }
                let field = section
                    .fields()
                    .iter()
                    .copied()
                    .find(|f| f.key() == *key)
                    .ok_or_else(|| unknown(key))?;
                Ok(Self::ListItem(section, index, field))
            }
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_shape() {
        assert_eq!(
            "name".parse::<FieldLocator>().unwrap(),
            FieldLocator::TopLevel(CustomerField::Name)
        );
        assert_eq!(
            "correspondenceAddress.zipCode".parse::<FieldLocator>().unwrap(),
            FieldLocator::Nested(AddressSection::Correspondence, AddressField::ZipCode)
        );
        assert_eq!(
            "phoneContacts.2.isWhatsapp".parse::<FieldLocator>().unwrap(),
            FieldLocator::ListItem(ContactSection::Phone, 2, ContactField::IsWhatsapp)
        );
    }

    #[test]
    fn display_round_trips_every_field() {
        let mut locators: Vec<FieldLocator> =
            CustomerField::ALL.into_iter().map(FieldLocator::TopLevel).collect();
        for section in AddressSection::ALL {
            locators.extend(AddressField::ALL.into_iter().map(|f| FieldLocator::Nested(section, f)));
        }
        for section in ContactSection::ALL {
            locators.extend(section.fields().iter().map(|f| FieldLocator::ListItem(section, 3, *f)));
        }

        for locator in locators {
            let path = locator.to_string();
            assert_eq!(path.parse::<FieldLocator>().unwrap(), locator, "path {path}");
        }
    }

    #[test]
    fn rejects_unknown_segments() {
        assert!(matches!(
            "nickname".parse::<FieldLocator>(),
            Err(StateError::UnknownField { segment, .. }) if segment == "nickname"
        ));
        assert!(matches!(
            "billingAddress.street".parse::<FieldLocator>(),
            Err(StateError::UnknownField { .. })
        ));
        assert!(matches!(
            "address.floor".parse::<FieldLocator>(),
            Err(StateError::UnknownField { .. })
        ));
    }

    #[test]
    fn rejects_fields_from_the_other_contact_list() {
        assert!(matches!(
            "emailContacts.0.isWhatsapp".parse::<FieldLocator>(),
            Err(StateError::UnknownField { segment, .. }) if segment == "isWhatsapp"
        ));
        assert!(matches!(
            "phoneContacts.0.email".parse::<FieldLocator>(),
            Err(StateError::UnknownField { .. })
        ));
    }

    #[test]
    fn rejects_malformed_paths() {
        for path in ["", "address.", ".name", "phoneContacts.x.phone", "phoneContacts.-1.phone", "a.b.c.d"] {
            assert!(
                matches!(path.parse::<FieldLocator>(), Err(StateError::MalformedPath { .. })),
                "path {path:?} should be malformed"
            );
        }
    }

    #[test]
    fn rejects_reserved_fields() {
        for path in ["type", "isCorrespondenceAddress", "id", "address.id", "emailContacts.0.id"] {
            assert!(
                matches!(path.parse::<FieldLocator>(), Err(StateError::ReservedField { .. })),
                "path {path:?} should be reserved"
            );
        }
    }

    #[test]
    fn field_kinds() {
        assert_eq!(
            FieldLocator::Nested(AddressSection::Primary, AddressField::HasMultipleUnits).kind(),
            FieldKind::Flag
        );
        assert_eq!(FieldLocator::TopLevel(CustomerField::BirthDate).kind(), FieldKind::Text);
    }
}
