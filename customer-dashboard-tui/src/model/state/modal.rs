//! 弹窗/对话框状态

use customer_dashboard_client::CustomerId;
use customer_dashboard_core::CustomerForm;

use super::CustomerEditor;

/// 反馈消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// 新建客户弹窗
#[derive(Debug, Clone)]
pub struct NewCustomerDialog {
    pub editor: CustomerEditor,
    /// 提交在途，期间再次提交被忽略
    pub submitting: bool,
    pub error: Option<String>,
}

impl NewCustomerDialog {
    pub fn new() -> Self {
        Self {
            editor: CustomerEditor::new(CustomerForm::new()),
            submitting: false,
            error: None,
        }
    }

    /// 请求提交；已在提交中时返回 None
    pub fn request_submit(&mut self) -> Option<CustomerForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.editor.form.clone())
    }
}

impl Default for NewCustomerDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建客户
    NewCustomer(Box<NewCustomerDialog>),
    /// 确认删除
    ConfirmDelete {
        customer_id: CustomerId,
        customer_name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 操作结果
    Feedback { severity: Severity, message: String },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 新建请求在途，弹窗暂不可关闭
    pub fn is_submitting(&self) -> bool {
        matches!(&self.active, Some(Modal::NewCustomer(dialog)) if dialog.submitting)
    }

    /// 显示新建客户弹窗
    pub fn show_new_customer(&mut self) {
        self.active = Some(Modal::NewCustomer(Box::default()));
    }

    /// 显示确认删除弹窗（默认焦点在“取消”）
    pub fn show_confirm_delete(&mut self, customer_id: CustomerId, customer_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            customer_id,
            customer_name: customer_name.to_string(),
            focus: 0,
        });
    }

    /// 显示操作结果
    pub fn show_feedback(&mut self, severity: Severity, message: impl Into<String>) {
        self.active = Some(Modal::Feedback {
            severity,
            message: message.into(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 当前打开的新建客户弹窗
    pub fn new_customer_mut(&mut self) -> Option<&mut NewCustomerDialog> {
        match self.active.as_mut() {
            Some(Modal::NewCustomer(dialog)) => Some(dialog),
            _ => None,
        }
    }
}
