//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::{text_char, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage, EditorMessage, ModalMessage, NavigationMessage};
use crate::model::{App, DetailMode, Modal, Page};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        _ => AppMessage::Noop,                                          // 窗口大小改变时下一帧自动重绘
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 文本输入状态下，字符键不作为快捷键
    if app.focus.is_content() {
        if app.current_page == Page::Customers && app.customers.search_focused {
            return handle_search_keys(key);
        }
        if app.current_page.is_detail_page() && app.detail.mode == DetailMode::Editing {
            return handle_detail_editor_keys(key);
        }
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 通用操作快捷键，是否生效由 update 层按页面决定
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    // 根据当前页面处理特定按键
    match &app.current_page {
        Page::Customers => handle_list_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::Home | Page::CustomerDetail { .. } => AppMessage::Noop,
    }
}

/// 处理客户列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::FocusSearch);
    }
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // ← →: 翻页
        KeyCode::Left => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Right => AppMessage::Content(ContentMessage::NextPage),
        // Enter: 打开详情
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框输入
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::ApplySearch),
        KeyCode::Esc => AppMessage::Content(ContentMessage::CancelSearch),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        // ← →: 切换过滤属性
        KeyCode::Left => AppMessage::Content(ContentMessage::CycleFilterAttribute { forward: false }),
        KeyCode::Right => AppMessage::Content(ContentMessage::CycleFilterAttribute { forward: true }),
        _ => match text_char(&key) {
            Some(ch) => AppMessage::Content(ContentMessage::SearchInput(ch)),
            None => AppMessage::Noop,
        },
    }
}

/// 处理详情页编辑中的按键
fn handle_detail_editor_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_SAVE.matches(&key) {
        return AppMessage::Content(ContentMessage::Save);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    match editor_keys(key) {
        Some(msg) => AppMessage::Content(ContentMessage::Editor(msg)),
        None => AppMessage::Noop,
    }
}

/// 表单通用按键
fn editor_keys(key: KeyEvent) -> Option<EditorMessage> {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => Some(EditorMessage::NextField),
        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => Some(EditorMessage::PrevField),
        // Enter: 切换当前项
        KeyCode::Enter => Some(EditorMessage::Toggle),
        KeyCode::Backspace => Some(EditorMessage::Backspace),
        _ => text_char(&key).map(EditorMessage::Input),
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::NewCustomer(_) => handle_new_customer_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Feedback { .. } => {
            // 帮助和结果弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理新建客户弹窗的按键
fn handle_new_customer_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_SAVE.matches(&key) {
        return AppMessage::Modal(ModalMessage::Confirm);
    }
    match editor_keys(key) {
        Some(msg) => AppMessage::Modal(ModalMessage::Editor(msg)),
        None => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // ←: 切换到上一个值
        KeyCode::Left => {
            AppMessage::Content(ContentMessage::TogglePrev)
        }
        // →: 切换到下一个值
        KeyCode::Right => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}
