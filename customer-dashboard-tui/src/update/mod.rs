//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │customer-dashboard-│           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台任务结果处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     update 不做任何 I/O。需要访问远程 API 或写文件时，它返回一条 Command，
//!     由 app.rs 交给 Backend 异步执行；执行结果以 AppMessage::Backend 的形式
//!     回到这里。于是一次“删除”会经过两轮 update：
//!
//!         ModalMessage::Confirm                 → Some(Command::DeleteCustomer(id))
//!         BackendMessage::CustomerDeleted {..}  → 跳转列表页，Some(Command::LoadCustomers(..))
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/update/modal.rs 中定义：
//!
//!         根据当前弹窗类型分发到具体的处理函数：
//!             - handle_new_customer()     新建客户表单（提交中再次提交被忽略）
//!             - handle_confirm_delete()   确认删除（焦点在“删除”时才真正删除）
//!             - handle_simple_modal()     帮助、操作结果
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!




mod backend;
mod content;
mod modal;
mod navigation;

use crate::backend::Command;
use crate::message::{AppMessage, EditorMessage};
use crate::model::{App, CustomerEditor, DetailMode, Page, Severity};




/// 处理应用消息，更新状态
///
/// 返回需要交给 Backend 执行的命令。
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            if !app.modal.is_submitting() {
                app.modal.show_help();
            }
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 切换页面，返回进入页面时需要的加载命令
pub(crate) fn open_page(app: &mut App, page: Page) -> Option<Command> {
    app.navigation.select_id(page.nav_item());
    app.current_page = page.clone();
    app.clear_status(); // 切换页面时清除状态消息

    match page {
        Page::Customers => app.customers.request_load().map(Command::LoadCustomers),
        Page::CustomerDetail { id } => {
            app.detail.open(id);
            Some(Command::LoadCustomer(id))
        }
        Page::Home | Page::Settings => None,
    }
}

/// 显示操作结果（弹窗 + 状态栏）
pub(crate) fn report(app: &mut App, severity: Severity, message: impl Into<String>) {
    let message = message.into();
    app.set_status(message.clone());
    app.modal.show_feedback(severity, message);
}

/// 把编辑消息应用到表单
///
/// 编辑器只会产生合法的定位器，失败说明有 bug。
pub(crate) fn apply_editor(editor: &mut CustomerEditor, msg: EditorMessage) {
    let result = match msg {
        EditorMessage::NextField => {
            editor.next_field();
            Ok(())
        }
        EditorMessage::PrevField => {
            editor.prev_field();
            Ok(())
        }
        EditorMessage::Input(ch) => editor.input(ch),
        EditorMessage::Backspace => editor.backspace(),
        EditorMessage::Toggle => editor.toggle(),
    };
    if let Err(e) = &result {
        log::error!("form edit rejected: {e}");
    }
    debug_assert!(result.is_ok(), "form edit rejected: {result:?}");
}

fn go_back(app: &mut App) -> Option<Command> {
    // 如果有弹窗打开，先关闭弹窗
    if app.modal.is_open() {
        if app.modal.is_submitting() {
            return None;
        }
        app.modal.close();
        app.clear_status();
        return None;
    }

    if !app.current_page.is_detail_page() {
        return None;
    }
    match app.detail.mode {
        // 编辑中：放弃修改，重新获取已保存的客户
        DetailMode::Editing => app.detail.cancel_edit().map(Command::LoadCustomer),
        // 删除在途时留在详情页等待结果
        _ if app.detail.pending.is_some() => None,
        _ => open_page(app, Page::Customers),
    }
}

fn refresh(app: &mut App) -> Option<Command> {
    match app.current_page {
        Page::Customers => app.customers.request_load().map(Command::LoadCustomers),
        Page::CustomerDetail { .. }
            if app.detail.mode != DetailMode::Editing && app.detail.pending.is_none() =>
        {
            app.detail.reload().map(Command::LoadCustomer)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;
