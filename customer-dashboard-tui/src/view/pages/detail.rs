//! 客户详情页面视图

use chrono::Local;
use customer_dashboard_client::{Address, Customer, CustomerKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::PendingAction;
use crate::model::{App, DetailMode};
use crate::view::components::form;
use crate::view::theme::{colors, Styles};

/// 标签列宽度（显示宽度）
const LABEL_WIDTH: usize = 24;

/// 渲染客户详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let detail = &app.detail;
    let texts = t();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 内容
            Constraint::Length(1), // 状态行
        ])
        .split(area);

    match (detail.mode, &detail.customer, &detail.editor) {
        (DetailMode::Loading, ..) => {
            render_message(frame, layout[0], texts.detail.loading, Color::Gray);
        }
        (DetailMode::Unavailable, ..) => {
            render_message(frame, layout[0], texts.detail.unavailable, colors().error);
        }
        (DetailMode::Editing, _, Some(editor)) => form::render(editor, frame, layout[0]),
        (_, Some(customer), _) => render_customer(customer, frame, layout[0]),
        _ => render_message(frame, layout[0], texts.common.no_data, Color::Gray),
    }

    // 状态行：在途操作 > 错误 > 编辑标记
    let status = match (detail.pending, &detail.error) {
        (Some(PendingAction::Save), _) => {
            Line::styled(texts.detail.saving, Style::default().fg(colors().warning))
        }
        (Some(PendingAction::Delete), _) => {
            Line::styled(texts.detail.deleting, Style::default().fg(colors().warning))
        }
        (None, Some(err)) if detail.mode != DetailMode::Unavailable => {
            Line::styled(format!("⚠ {err}"), Styles::error())
        }
        _ if detail.mode == DetailMode::Editing => {
            Line::styled(texts.detail.editing, Style::default().fg(colors().highlight))
        }
        _ => Line::from(""),
    };
    frame.render_widget(Paragraph::new(status), layout[1]);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(color)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 只读视图
fn render_customer(customer: &Customer, frame: &mut Frame, area: Rect) {
    let lines = customer_lines(customer);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn customer_lines(customer: &Customer) -> Vec<Line<'static>> {
    let texts = t();
    let f = &texts.fields;
    let mut lines = vec![Line::styled(texts.detail.personal_info, Styles::section())];

    let type_label = match customer.kind {
        CustomerKind::Individual(_) => f.individual,
        CustomerKind::Business(_) => f.business,
    };
    lines.push(row(f.customer_type, type_label));
    lines.push(row(f.name, &customer.name));
    match &customer.kind {
        CustomerKind::Individual(details) => {
            lines.push(row(f.cpf, details.cpf.as_deref().unwrap_or_default()));
            lines.push(row(f.birth_date, details.birth_date.as_deref().unwrap_or_default()));
            lines.push(row(f.mother_name, details.mother_name.as_deref().unwrap_or_default()));
        }
        CustomerKind::Business(details) => {
            lines.push(row(f.business_name, details.business_name.as_deref().unwrap_or_default()));
            lines.push(row(f.cnpj, details.cnpj.as_deref().unwrap_or_default()));
        }
    }
    lines.push(row(f.identity_document, &customer.identity_document));
    lines.push(row(f.issuing_agency, &customer.issuing_agency));
    if let Some(updated_at) = customer.updated_at {
        let date = updated_at
            .with_timezone(&Local)
            .format(texts.customers.date_format)
            .to_string();
        lines.push(row(texts.detail.last_updated, &date));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.detail.address, Styles::section()));
    address_lines(&customer.address, &mut lines);

    if customer.is_correspondence_address {
        lines.push(Line::from(""));
        lines.push(Line::styled(texts.detail.correspondence_address, Styles::section()));
        address_lines(&customer.correspondence_address, &mut lines);
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.detail.phone_contacts, Styles::section()));
    if customer.phone_contacts.is_empty() {
        lines.push(none_line());
    }
    for contact in &customer.phone_contacts {
        let mut value = contact.phone.clone();
        if !contact.name.is_empty() {
            value = format!("{value} ({})", contact.name);
        }
        if contact.is_whatsapp {
            value = format!("{value} · {}", f.is_whatsapp);
        }
        lines.push(row(f.phone, &value));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.detail.email_contacts, Styles::section()));
    if customer.email_contacts.is_empty() {
        lines.push(none_line());
    }
    for contact in &customer.email_contacts {
        let value = if contact.name.is_empty() {
            contact.email.clone()
        } else {
            format!("{} ({})", contact.email, contact.name)
        };
        lines.push(row(f.email, &value));
    }

    lines
}

fn address_lines(address: &Address, lines: &mut Vec<Line<'static>>) {
    let f = &t().fields;
    lines.push(row(f.zip_code, &address.zip_code));
    lines.push(row(f.street, &address.street));
    lines.push(row(f.number, &address.number));
    lines.push(row(f.neighborhood, &address.neighborhood));
    lines.push(row(f.complement, address.complement.as_deref().unwrap_or_default()));
    lines.push(row(f.city, &address.city));
    lines.push(row(f.state, &address.state));
    lines.push(row(f.country, &address.country));
    lines.push(row(f.address_type, &address.address_type));
    let units = if address.has_multiple_units { t().common.yes } else { t().common.no };
    lines.push(row(f.has_multiple_units, units));
}

fn none_line() -> Line<'static> {
    Line::styled(format!("  {}", t().detail.no_contacts), Style::default().fg(Color::DarkGray))
}

fn row(label: &str, value: &str) -> Line<'static> {
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(format!("  {label}{:padding$}", ""), Styles::label()),
        Span::styled(": ", Styles::label()),
        Span::styled(value.to_string(), Style::default().fg(colors().fg)),
    ])
}
