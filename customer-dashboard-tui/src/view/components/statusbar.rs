//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, DetailMode, FocusPanel, Modal, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().key)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    // 弹窗打开时只提示弹窗内的按键
    match &app.modal.active {
        Some(Modal::NewCustomer(_)) => {
            hints.push(("Tab", actions.next_field));
            hints.push(("Enter", actions.toggle));
            hints.push(("Alt+s", texts.common.save));
            hints.push((keys.esc, texts.common.cancel));
            return hints;
        }
        Some(Modal::ConfirmDelete { .. }) => {
            hints.push((keys.arrows_lr, actions.switch_option));
            hints.push((keys.enter, texts.common.confirm));
            hints.push((keys.esc, texts.common.cancel));
            return hints;
        }
        Some(Modal::Feedback { .. } | Modal::Help) => {
            hints.push((keys.esc, texts.common.close));
            return hints;
        }
        None => {}
    }

    hints.push((keys.tab, actions.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {}
            Page::Customers if app.customers.search_focused => {
                hints.push((keys.arrows_lr, texts.customers.filter_by));
                hints.push((keys.enter, actions.apply));
                hints.push((keys.esc, texts.common.cancel));
                return hints;
            }
            Page::Customers => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.change_page));
                hints.push((keys.enter, actions.open));
                hints.push((keys.slash, actions.search));
                hints.push(("Alt+a", texts.common.add));
            }
            Page::CustomerDetail { .. } if app.detail.mode == DetailMode::Editing => {
                hints.push(("Tab", actions.next_field));
                hints.push((keys.enter, actions.toggle));
                hints.push(("Alt+s", texts.common.save));
                hints.push((keys.esc, texts.common.cancel));
                return hints;
            }
            Page::CustomerDetail { .. } => {
                hints.push(("Alt+e", texts.common.edit));
                hints.push(("Alt+d", texts.common.delete));
                hints.push((keys.esc, actions.back));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.switch_option));
            }
        },
    }

    hints.push(("q", actions.quit));
    hints
}
