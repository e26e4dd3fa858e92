//! 客户列表页面视图
//!
//! 搜索栏 + 表格 + 分页信息。

use customer_dashboard_client::FilterAttribute;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::state::CustomerRow;
use crate::model::{App, CustomersState};
use crate::view::theme::{colors, Styles};

/// 渲染客户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索栏
            Constraint::Min(3),    // 表格
            Constraint::Length(1), // 分页
        ])
        .split(area);

    let state = &app.customers;
    render_search_bar(state, frame, layout[0]);
    if state.rows.is_empty() {
        render_empty(state, frame, layout[1]);
    } else {
        render_table(state, frame, layout[1]);
    }
    render_pager(state, frame, layout[2]);
}

/// 过滤属性的显示名
pub fn attribute_label(attribute: FilterAttribute) -> &'static str {
    let a = &t().customers.attributes;
    match attribute {
        FilterAttribute::Name => a.name,
        FilterAttribute::Cpf => a.cpf,
        FilterAttribute::BusinessName => a.business_name,
        FilterAttribute::Cnpj => a.cnpj,
        FilterAttribute::IdentityDocument => a.identity_document,
    }
}

fn render_search_bar(state: &CustomersState, frame: &mut Frame, area: Rect) {
    let texts = &t().customers;
    let c = colors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(state.search_focused));

    let attribute = if state.search_focused {
        format!("◀ {} ▶", attribute_label(state.filter_attribute))
    } else {
        attribute_label(state.filter_attribute).to_string()
    };

    let input = if state.search_focused {
        Span::styled(format!("{}▎", state.search_input), Style::default().fg(c.fg))
    } else if state.search_input.is_empty() {
        Span::styled(texts.search_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.search_input.clone(), Style::default().fg(c.fg))
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}: ", texts.filter_by), Styles::label()),
        Span::styled(attribute, Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        input,
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// 渲染空状态
fn render_empty(state: &CustomersState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if state.loading {
        texts.common.loading
    } else {
        texts.customers.no_customers
    };

    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.customers.add_customer_hint),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some(err) = &state.error {
        content.push(Line::from(""));
        content.push(Line::styled(format!("  ⚠ {err}"), Styles::error()));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_table(state: &CustomersState, frame: &mut Frame, area: Rect) {
    let texts = &t().customers;
    let columns = &texts.columns;

    let header = Row::new([
        columns.id,
        columns.name,
        columns.email,
        columns.phone,
        columns.address,
        columns.updated_at,
    ])
    .style(Styles::title())
    .bottom_margin(1);

    let rows = state.rows.iter().map(|row| table_row(row, texts.date_format));

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(14),
        Constraint::Percentage(30),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn table_row(row: &CustomerRow, date_format: &str) -> Row<'static> {
    let updated = row
        .updated_on
        .map(|date| date.format(date_format).to_string())
        .unwrap_or_default();

    Row::new([
        Cell::from(row.id.to_string()),
        Cell::from(row.name.clone()),
        Cell::from(row.email.clone()),
        Cell::from(row.phone.clone()),
        Cell::from(row.address.clone()),
        Cell::from(updated),
    ])
    .style(Style::default().fg(colors().fg))
}

fn render_pager(state: &CustomersState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut spans = vec![
        Span::styled(
            format!(
                " {} {}/{}",
                texts.common.page,
                state.page + 1,
                state.total_pages.max(1)
            ),
            Style::default().fg(c.fg),
        ),
        Span::styled(
            format!("  ·  {}: {}", texts.common.total, state.total),
            Style::default().fg(c.muted),
        ),
    ];
    if state.loading {
        spans.push(Span::styled(
            format!("  ·  {}", texts.common.loading),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
