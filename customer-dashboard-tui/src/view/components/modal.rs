//! 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::form;
use crate::i18n::t;
use crate::model::state::NewCustomerDialog;
use crate::model::{App, Modal, Severity};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::NewCustomer(dialog) => render_new_customer(frame, dialog),
        Modal::ConfirmDelete {
            customer_name,
            focus,
            ..
        } => render_confirm_delete(frame, customer_name, *focus),
        Modal::Feedback { severity, message } => render_feedback(frame, *severity, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并画出边框，返回内容区
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

// ========== 新建客户 ==========

fn render_new_customer(frame: &mut Frame, dialog: &NewCustomerDialog) {
    let texts = t();
    let screen = frame.area();
    let area = centered_rect(
        screen.width.saturating_mul(3) / 4,
        screen.height.saturating_sub(4),
        screen,
    );
    let inner = modal_frame(frame, area, texts.modal.new_customer.title, Color::Cyan);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 表单
            Constraint::Length(1), // 状态 / 错误
            Constraint::Length(1), // 按键提示
        ])
        .split(inner);

    form::render(&dialog.editor, frame, layout[0]);

    let status = if dialog.submitting {
        Line::styled(
            texts.modal.new_customer.submitting,
            Style::default().fg(colors().warning),
        )
    } else if let Some(err) = &dialog.error {
        Line::styled(format!("⚠ {err}"), Styles::error())
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), layout[1]);

    let hints = key_hints(&[
        ("Tab", texts.hints.actions.next_field),
        ("Enter", texts.hints.actions.toggle),
        ("Alt+s", texts.common.save),
        ("Esc", texts.common.cancel),
    ]);
    frame.render_widget(Paragraph::new(hints), layout[2]);
}

// ========== 确认删除 ==========

fn render_confirm_delete(frame: &mut Frame, customer_name: &str, focus: usize) {
    let texts = &t().modal.confirm_delete;
    let c = colors();

    let area = centered_rect(50, 9, frame.area());
    let inner = modal_frame(frame, area, texts.title, c.error);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.message), Style::default().fg(Color::White)),
        Line::styled(format!("  \"{customer_name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm_button), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

// ========== 操作结果 ==========

fn render_feedback(frame: &mut Frame, severity: Severity, message: &str) {
    let texts = &t().modal.feedback;
    let c = colors();
    let (title, color) = match severity {
        Severity::Success => (texts.success_title, c.success),
        Severity::Error => (texts.error_title, c.error),
    };

    let area = centered_rect(56, 8, frame.area());
    let inner = modal_frame(frame, area, title, color);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(color)),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

// ========== 帮助 ==========

fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let a = &texts.actions;

    let area = centered_rect(58, 30, frame.area());
    let inner = modal_frame(frame, area, texts.title, Color::Cyan);

    let heading = |text: &'static str| {
        Line::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        heading(texts.global_shortcuts),
        entry("Tab", a.switch_panel),
        entry("↑↓/jk", a.move_up_down),
        entry("Enter", a.confirm),
        entry("Esc", a.back_cancel),
        entry("Alt+r", a.refresh),
        entry("q", a.quit),
        Line::from(""),
        heading(texts.list_shortcuts),
        entry("/", a.search),
        entry("←→ PgUp/Dn", a.change_page),
        entry("Alt+a", a.add),
        Line::from(""),
        heading(texts.form_shortcuts),
        entry("Alt+e", a.edit),
        entry("Alt+d", a.delete),
        entry("Tab/↑↓", a.next_field),
        entry("Enter/Space", a.toggle),
        entry("Alt+s", a.save),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::styled(format!(" {desc}"), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}
