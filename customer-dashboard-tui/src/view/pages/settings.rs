//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 < > 符号）
const VALUE_WIDTH: usize = 24;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Language => (
                texts.settings.language,
                settings.language.display_name().to_string(),
            ),
            SettingItem::PageSize => (texts.settings.page_size, settings.page_size.to_string()),
        };
        lines.push(render_setting_row(label, value, settings.selected_index == index));
    }

    // 只读：API 地址来自配置文件或环境变量
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("    {}: ", texts.settings.api_endpoint),
            Style::default().fg(c.muted),
        ),
        Span::styled(app.config.api_base_url.clone(), Style::default().fg(c.fg)),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", texts.hints.keys.arrows_ud),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.select),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.arrows_lr, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.actions.switch_option),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.tab, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.actions.switch_panel),
            Style::default().fg(c.muted),
        ),
    ]));
    lines.push(Line::styled(
        format!("  {}", texts.settings.saved_hint),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row(label: &'static str, value: String, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let value_width = value.width();
    let left_padding = available_space.saturating_sub(value_width) / 2;
    let right_padding = available_space
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}{:label_padding$}", ""), label_style),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:left_padding$}", "")),
        Span::styled(value, value_style),
        Span::raw(format!("{:right_padding$}", "")),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}
