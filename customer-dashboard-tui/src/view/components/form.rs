//! 客户表单组件
//!
//! 把 [`CustomerEditor`] 展开为带标签的行；详情页编辑和新建弹窗共用。

use customer_dashboard_client::CustomerType;
use customer_dashboard_core::form::{
    AddressField, AddressSection, ContactField, ContactSection, CustomerField, FieldKind,
};
use customer_dashboard_core::{FieldLocator, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{CustomerEditor, EditorField};
use crate::view::theme::{colors, Styles};

/// 标签列宽度（显示宽度）
const LABEL_WIDTH: usize = 24;

/// 渲染表单，自动滚动到焦点所在行
pub fn render(editor: &CustomerEditor, frame: &mut Frame, area: Rect) {
    let (lines, focused_line) = form_lines(editor);

    let height = usize::from(area.height);
    let offset = if height == 0 {
        0
    } else {
        focused_line.saturating_sub(height.saturating_sub(2))
    };
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// 表单各行以及焦点所在行号
pub fn form_lines(editor: &CustomerEditor) -> (Vec<Line<'static>>, usize) {
    let texts = t();
    let focused = editor.focused();
    let mut lines = Vec::new();
    let mut focused_line = 0;
    let mut section: Option<&'static str> = None;

    for field in editor.fields() {
        let heading = section_of(field);
        if section != Some(heading) {
            if section.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(heading, Styles::section()));
            section = Some(heading);
        }

        let is_focused = field == focused;
        if is_focused {
            focused_line = lines.len();
        }
        lines.push(field_line(editor, field, is_focused));
    }

    if lines.is_empty() {
        lines.push(Line::from(texts.common.no_data));
    }
    (lines, focused_line)
}

fn field_line(editor: &CustomerEditor, field: EditorField, is_focused: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_focused { "▶ " } else { "  " };

    if let EditorField::AddContact(section) = field {
        let label = match section {
            ContactSection::Phone => t().fields.add_phone,
            ContactSection::Email => t().fields.add_email,
        };
        let style = if is_focused {
            Styles::selected()
        } else {
            Style::default().fg(c.highlight)
        };
        return Line::from(vec![Span::raw(prefix), Span::styled(label, style)]);
    }

    let label = field_label(field);
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let value = field_value(editor, field);

    let label_style = if is_focused {
        Styles::title()
    } else {
        Styles::label()
    };
    let value_style = if is_focused {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let cursor = if is_focused && is_text(field) { "▎" } else { "" };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("{label}{:padding$}", ""), label_style),
        Span::styled(": ", Styles::label()),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

/// 字段标签；联系方式带序号
pub fn field_label(field: EditorField) -> String {
    let f = &t().fields;
    match field {
        EditorField::CustomerType => f.customer_type.to_string(),
        EditorField::CorrespondenceToggle => f.use_correspondence_address.to_string(),
        EditorField::AddContact(ContactSection::Phone) => f.add_phone.to_string(),
        EditorField::AddContact(ContactSection::Email) => f.add_email.to_string(),
        EditorField::Field(FieldLocator::TopLevel(field)) => customer_field_label(field).to_string(),
        EditorField::Field(FieldLocator::Nested(_, field)) => address_field_label(field).to_string(),
        EditorField::Field(FieldLocator::ListItem(_, index, field)) => {
            format!("#{} {}", index + 1, contact_field_label(field))
        }
    }
}

fn field_value(editor: &CustomerEditor, field: EditorField) -> String {
    let f = &t().fields;
    match field {
        EditorField::CustomerType => match editor.form.customer_type() {
            CustomerType::Individual => format!("◀ {} ▶", f.individual),
            CustomerType::Business => format!("◀ {} ▶", f.business),
        },
        EditorField::CorrespondenceToggle => {
            checkbox(editor.form.customer().is_correspondence_address)
        }
        EditorField::AddContact(_) => String::new(),
        EditorField::Field(locator) => match editor.form.read_field(&locator) {
            Ok(FieldValue::Text(text)) => text,
            Ok(FieldValue::Flag(flag)) => checkbox(flag),
            Err(e) => {
                log::warn!("cannot read {locator:?}: {e}");
                String::new()
            }
        },
    }
}

fn is_text(field: EditorField) -> bool {
    matches!(field, EditorField::Field(locator) if locator.kind() == FieldKind::Text)
}

fn checkbox(value: bool) -> String {
    if value { "[x]" } else { "[ ]" }.to_string()
}

fn section_of(field: EditorField) -> &'static str {
    let d = &t().detail;
    match field {
        EditorField::CustomerType | EditorField::Field(FieldLocator::TopLevel(_)) => {
            d.personal_info
        }
        EditorField::Field(FieldLocator::Nested(AddressSection::Primary, _))
        | EditorField::CorrespondenceToggle => d.address,
        EditorField::Field(FieldLocator::Nested(AddressSection::Correspondence, _)) => {
            d.correspondence_address
        }
        EditorField::Field(FieldLocator::ListItem(ContactSection::Phone, ..))
        | EditorField::AddContact(ContactSection::Phone) => d.phone_contacts,
        EditorField::Field(FieldLocator::ListItem(ContactSection::Email, ..))
        | EditorField::AddContact(ContactSection::Email) => d.email_contacts,
    }
}

pub fn customer_field_label(field: CustomerField) -> &'static str {
    let f = &t().fields;
    match field {
        CustomerField::Name => f.name,
        CustomerField::Cpf => f.cpf,
        CustomerField::BusinessName => f.business_name,
        CustomerField::Cnpj => f.cnpj,
        CustomerField::IdentityDocument => f.identity_document,
        CustomerField::IssuingAgency => f.issuing_agency,
        CustomerField::BirthDate => f.birth_date,
        CustomerField::MotherName => f.mother_name,
    }
}

pub fn address_field_label(field: AddressField) -> &'static str {
    let f = &t().fields;
    match field {
        AddressField::ZipCode => f.zip_code,
        AddressField::Street => f.street,
        AddressField::Number => f.number,
        AddressField::Neighborhood => f.neighborhood,
        AddressField::Complement => f.complement,
        AddressField::City => f.city,
        AddressField::State => f.state,
        AddressField::Country => f.country,
        AddressField::Type => f.address_type,
        AddressField::HasMultipleUnits => f.has_multiple_units,
    }
}

pub fn contact_field_label(field: ContactField) -> &'static str {
    let f = &t().fields;
    match field {
        ContactField::Phone => f.phone,
        ContactField::Email => f.email,
        ContactField::Name => f.contact_name,
        ContactField::IsWhatsapp => f.is_whatsapp,
    }
}
