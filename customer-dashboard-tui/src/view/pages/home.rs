//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let c = colors();

    // 首页布局：欢迎信息 + 连接信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Length(6), // 连接信息
            Constraint::Min(0),
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.welcome),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.welcome_desc),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let connection_block = Block::default()
        .title(format!(" {} ", texts.connection))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let connection = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("  {}: ", texts.api_endpoint), Style::default().fg(c.muted)),
            Span::styled(app.config.api_base_url.clone(), Style::default().fg(c.highlight)),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}: ", texts.page_size), Style::default().fg(c.muted)),
            Span::styled(
                app.customers.page_size.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.get_started),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(connection_block);

    frame.render_widget(connection, layout[1]);
}
