//! 弹窗更新逻辑

use super::apply_editor;
use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    // 根据当前弹窗类型分发处理
    match &app.modal.active {
        Some(Modal::NewCustomer(_)) => handle_new_customer(app, msg),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Feedback { .. } | Modal::Help) => {
            handle_simple_modal(app, &msg);
            None
        }
        None => None,
    }
}

// ========== 新建客户 ==========

fn handle_new_customer(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            // 等待创建结果，结果到达后由反馈弹窗替换
            if !app.modal.is_submitting() {
                app.modal.close();
            }
            None
        }
        ModalMessage::Editor(editor_msg) => {
            let dialog = app.modal.new_customer_mut()?;
            // 提交在途时表单只读
            if !dialog.submitting {
                apply_editor(&mut dialog.editor, editor_msg);
            }
            None
        }
        ModalMessage::Confirm => {
            let form = app.modal.new_customer_mut()?.request_submit()?;
            Some(Command::CreateCustomer(form))
        }
        ModalMessage::ToggleDeleteFocus => None,
    }
}

// ========== 确认删除 ==========

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        customer_id, focus, ..
    }) = &mut app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = 1 - *focus;
            None
        }
        ModalMessage::Confirm => {
            let confirmed = *focus == 1;
            let id = *customer_id;
            app.modal.close();
            if confirmed && app.detail.begin_delete(id) {
                log::info!("deleting customer {id}");
                Some(Command::DeleteCustomer(id))
            } else {
                None
            }
        }
        ModalMessage::Close => {
            app.modal.close();
            None
        }
        ModalMessage::Editor(_) => None,
    }
}

// ========== 简单弹窗 ==========

fn handle_simple_modal(app: &mut App, msg: &ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
