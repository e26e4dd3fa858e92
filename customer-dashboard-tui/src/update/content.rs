//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use super::{apply_editor, open_page};
use crate::backend::Command;
use crate::i18n::{set_language, t};
use crate::message::{ContentMessage, EditorMessage};
use crate::model::{App, DetailMode, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
            None
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
            None
        }
        ContentMessage::SelectFirst => {
            if app.current_page == Page::Customers {
                app.customers.select_first();
            }
            None
        }
        ContentMessage::SelectLast => {
            if app.current_page == Page::Customers {
                app.customers.select_last();
            }
            None
        }
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 分页 ==========
        ContentMessage::PrevPage => handle_change_page(app, false),
        ContentMessage::NextPage => handle_change_page(app, true),

        // ========== 搜索 ==========
        ContentMessage::FocusSearch => {
            app.customers.search_focused = true;
            None
        }
        ContentMessage::SearchInput(ch) => {
            app.customers.search_input.push(ch);
            None
        }
        ContentMessage::SearchBackspace => {
            app.customers.search_input.pop();
            None
        }
        ContentMessage::CycleFilterAttribute { forward } => {
            app.customers.cycle_attribute(forward);
            None
        }
        ContentMessage::ApplySearch => {
            app.customers.apply_filter();
            app.customers.request_load().map(Command::LoadCustomers)
        }
        ContentMessage::CancelSearch => {
            app.customers.cancel_search();
            None
        }

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            handle_add(app);
            None
        }
        ContentMessage::Edit => {
            handle_edit(app);
            None
        }
        ContentMessage::Delete => {
            handle_delete(app);
            None
        }
        ContentMessage::Save => handle_save(app),

        ContentMessage::Editor(editor_msg) => {
            handle_editor(app, editor_msg);
            None
        }

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => handle_toggle(app, false),
        ContentMessage::ToggleNext => handle_toggle(app, true),
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match &app.current_page {
        Page::Customers => app.customers.select_previous(),
        Page::Settings => app.settings.select_previous(),
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match &app.current_page {
        Page::Customers => app.customers.select_next(),
        Page::Settings => app.settings.select_next(),
        _ => {}
    }
}

/// 在列表中按 Enter：打开选中客户的详情
fn handle_confirm(app: &mut App) -> Option<Command> {
    if app.current_page != Page::Customers {
        return None;
    }
    let id = app.customers.selected_id()?;
    open_page(app, Page::CustomerDetail { id })
}

fn handle_change_page(app: &mut App, forward: bool) -> Option<Command> {
    if app.current_page != Page::Customers {
        return None;
    }
    let changed = if forward {
        app.customers.next_page()
    } else {
        app.customers.prev_page()
    };
    if !changed {
        return None;
    }
    app.customers.request_load().map(Command::LoadCustomers)
}

// ========== CRUD 操作处理 ==========

fn handle_add(app: &mut App) {
    if app.current_page == Page::Customers {
        app.modal.show_new_customer();
    }
}

fn handle_edit(app: &mut App) {
    if app.current_page.is_detail_page() && app.detail.begin_edit() {
        app.clear_status();
    }
}

/// 只弹出确认框；真正的删除在确认后发生
fn handle_delete(app: &mut App) {
    if !app.current_page.is_detail_page() || !app.detail.can_delete() {
        return;
    }
    let (Some(id), Some(name)) = (app.detail.customer_id, app.detail.customer_name()) else {
        return;
    };
    let name = name.to_string();
    app.modal.show_confirm_delete(id, &name);
}

fn handle_save(app: &mut App) -> Option<Command> {
    if !app.current_page.is_detail_page() {
        return None;
    }
    let id = app.detail.customer_id?;
    match app.detail.request_save() {
        Some(form) => Some(Command::SaveCustomer { id, form }),
        None => {
            if app.detail.mode == DetailMode::Viewing {
                app.set_status(t().feedback.unchanged);
            }
            None
        }
    }
}

fn handle_editor(app: &mut App, msg: EditorMessage) {
    if app.detail.mode != DetailMode::Editing || app.detail.pending.is_some() {
        return;
    }
    if let Some(editor) = app.detail.editor.as_mut() {
        apply_editor(editor, msg);
    }
}

// ========== 设置页面处理 ==========

/// 切换设置项后立即写回配置并持久化
fn handle_toggle(app: &mut App, forward: bool) -> Option<Command> {
    if app.current_page != Page::Settings {
        return None;
    }
    if forward {
        app.settings.toggle_next();
    } else {
        app.settings.toggle_prev();
    }

    if app.settings.language != app.config.language() {
        set_language(app.settings.language);
    }
    if app.settings.page_size != app.customers.page_size {
        app.customers.set_page_size(app.settings.page_size);
    }

    let mut config = app.config.clone();
    app.settings.apply_to(&mut config);
    if config == app.config {
        return None;
    }
    app.config = config.clone();
    Some(Command::SaveSettings(config))
}
