//! 客户表单编辑状态
//!
//! 在 [`CustomerForm`] 之上维护一个焦点位置，把按键翻译为字段编辑。
//! 详情页编辑和新建弹窗共用。

use customer_dashboard_client::CustomerType;
use customer_dashboard_core::form::{
    AddressField, AddressSection, ContactSection, CustomerField, FieldKind,
};
use customer_dashboard_core::{CustomerForm, FieldLocator, FieldValue, StateError};

/// 表单中的一个可聚焦项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    /// 客户类型（PF/PJ）
    CustomerType,
    /// 普通字段
    Field(FieldLocator),
    /// 是否使用通讯地址
    CorrespondenceToggle,
    /// “添加联系方式”按钮
    AddContact(ContactSection),
}

/// 客户表单编辑器
#[derive(Debug, Clone)]
pub struct CustomerEditor {
    pub form: CustomerForm,
    /// 当前焦点在 [`fields`](Self::fields) 中的索引
    pub focus: usize,
}

impl CustomerEditor {
    pub fn new(form: CustomerForm) -> Self {
        Self { form, focus: 0 }
    }

    /// 当前表单下所有可聚焦项，按显示顺序
    ///
    /// 通讯地址只在开关打开时出现。
    pub fn fields(&self) -> Vec<EditorField> {
        let customer_type = self.form.customer_type();
        let mut fields = vec![EditorField::CustomerType];

        fields.extend(
            CustomerField::ALL
                .into_iter()
                .filter(|f| match customer_type {
                    CustomerType::Individual => !f.is_business_only(),
                    CustomerType::Business => !f.is_individual_only(),
                })
                .map(|f| EditorField::Field(FieldLocator::TopLevel(f))),
        );
        fields.extend(address_fields(AddressSection::Primary));

        fields.push(EditorField::CorrespondenceToggle);
        if self.form.customer().is_correspondence_address {
            fields.extend(address_fields(AddressSection::Correspondence));
        }

        for section in ContactSection::ALL {
            for index in 0..self.form.contact_len(section) {
                fields.extend(
                    section
                        .fields()
                        .iter()
                        .map(|f| EditorField::Field(FieldLocator::ListItem(section, index, *f))),
                );
            }
            fields.push(EditorField::AddContact(section));
        }
        fields
    }

    /// 当前焦点项
    pub fn focused(&self) -> EditorField {
        let fields = self.fields();
        let index = self.focus.min(fields.len().saturating_sub(1));
        fields.get(index).copied().unwrap_or(EditorField::CustomerType)
    }

    pub fn next_field(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn prev_field(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// 输入一个字符
    ///
    /// 文本字段追加字符；其他项上空格等同于 [`toggle`](Self::toggle)。
    pub fn input(&mut self, ch: char) -> Result<(), StateError> {
        match self.focused() {
            EditorField::Field(locator) if locator.kind() == FieldKind::Text => {
                let mut text = self.text_of(&locator)?;
                text.push(ch);
                self.form.apply_field_edit(&locator, FieldValue::Text(text))
            }
            _ if ch == ' ' => self.toggle(),
            _ => Ok(()),
        }
    }

    /// 删除文本字段的最后一个字符
    pub fn backspace(&mut self) -> Result<(), StateError> {
        if let EditorField::Field(locator) = self.focused() {
            if locator.kind() == FieldKind::Text {
                let mut text = self.text_of(&locator)?;
                if text.pop().is_some() {
                    return self.form.apply_field_edit(&locator, FieldValue::Text(text));
                }
            }
        }
        Ok(())
    }

    /// 切换当前项
    pub fn toggle(&mut self) -> Result<(), StateError> {
        match self.focused() {
            EditorField::CustomerType => {
                let toggled = self.form.customer_type().toggled();
                self.form.set_customer_type(toggled);
            }
            EditorField::CorrespondenceToggle => {
                let current = self.form.customer().is_correspondence_address;
                self.form.set_correspondence_toggle(!current);
            }
            EditorField::AddContact(section) => {
                let index = self.form.append_contact(section);
                if let Some(first) = section.fields().first() {
                    let target =
                        EditorField::Field(FieldLocator::ListItem(section, index, *first));
                    if let Some(pos) = self.fields().iter().position(|f| *f == target) {
                        self.focus = pos;
                    }
                }
            }
            EditorField::Field(locator) => {
                if let FieldValue::Flag(value) = self.form.read_field(&locator)? {
                    self.form.apply_field_edit(&locator, FieldValue::Flag(!value))?;
                }
            }
        }
        // 字段数量可能变化
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len - 1;
        }
        Ok(())
    }

    fn text_of(&self, locator: &FieldLocator) -> Result<String, StateError> {
        Ok(self
            .form
            .read_field(locator)?
            .as_text()
            .unwrap_or_default()
            .to_string())
    }
}

fn address_fields(section: AddressSection) -> impl Iterator<Item = EditorField> {
    AddressField::ALL
        .into_iter()
        .map(move |f| EditorField::Field(FieldLocator::Nested(section, f)))
}
