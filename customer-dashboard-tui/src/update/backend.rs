//! 后台结果处理
//!
//! 把 [`BackendMessage`] 合并进状态，必要时返回后续命令（刷新列表、重新获取客户）。

use customer_dashboard_core::SaveOutcome;

use super::{open_page, report};
use crate::backend::Command;
use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, Page, Severity};

/// 处理后台结果
pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    match msg {
        BackendMessage::CustomersLoaded { page, error } => {
            if let Some(message) = &error {
                log::warn!("{message}");
                app.set_status(message.clone());
            }
            app.customers.finish_load(page, error).map(Command::LoadCustomers)
        }

        BackendMessage::CustomerLoaded { id, result } => {
            if let Err(message) = &result {
                log::warn!("{message}");
            }
            app.detail.finish_load(id, result);
            None
        }

        BackendMessage::CustomerCreated(result) => handle_created(app, result),

        BackendMessage::CustomerSaved { id, result } => {
            let reload = app.detail.finish_save(id, &result);
            match result {
                Ok(SaveOutcome::Updated) => report(app, Severity::Success, t().feedback.updated),
                Ok(SaveOutcome::Unchanged) => app.set_status(t().feedback.unchanged),
                Err(message) => report(app, Severity::Error, message),
            }
            reload.map(Command::LoadCustomer)
        }

        BackendMessage::CustomerDeleted { id, result } => {
            app.detail.finish_delete(id, &result);
            match result {
                Ok(()) => {
                    log::info!("customer {id} deleted");
                    let command = match app.current_page.clone() {
                        Page::CustomerDetail { id: shown } if shown == id => {
                            open_page(app, Page::Customers)
                        }
                        Page::Customers => {
                            app.customers.request_load().map(Command::LoadCustomers)
                        }
                        _ => None,
                    };
                    report(app, Severity::Success, t().feedback.deleted);
                    command
                }
                Err(message) => {
                    report(app, Severity::Error, message);
                    None
                }
            }
        }

        BackendMessage::SettingsSaved(result) => {
            match result {
                Ok(()) => app.set_status(t().feedback.settings_saved),
                Err(message) => report(app, Severity::Error, message),
            }
            None
        }
    }
}

/// 新建结果：成功时关闭表单并刷新列表；失败时保留表单内容
fn handle_created(
    app: &mut App,
    result: Result<customer_dashboard_client::Customer, String>,
) -> Option<Command> {
    match result {
        Ok(customer) => {
            log::info!("customer created: {:?}", customer.id);
            app.modal.close();
            report(app, Severity::Success, t().feedback.created);
            if app.current_page == Page::Customers {
                app.customers.request_load().map(Command::LoadCustomers)
            } else {
                None
            }
        }
        Err(message) => {
            app.set_status(message.clone());
            if let Some(dialog) = app.modal.new_customer_mut() {
                dialog.submitting = false;
                dialog.error = Some(message);
            } else {
                // 表单已被关闭，改用结果弹窗
                app.modal.show_feedback(Severity::Error, message);
            }
            None
        }
    }
}
