//! 客户详情页面状态
//!
//! ```text
//!   open ──▶ Loading ──ok──▶ Viewing ◀──cancel / save──▶ Editing
//!               │                │
//!               └─err──▶ Unavailable
//! ```
//!
//! 保存或删除在途时（`pending`），新的保存/删除请求被忽略。

use customer_dashboard_client::{Customer, CustomerId};
use customer_dashboard_core::{CustomerForm, SaveOutcome};

use super::CustomerEditor;

/// 详情页模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// 正在获取客户
    Loading,
    /// 获取失败
    Unavailable,
    /// 只读
    Viewing,
    /// 编辑中
    Editing,
}

/// 在途的写操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Save,
    Delete,
}

/// 客户详情页面状态
#[derive(Debug)]
pub struct DetailState {
    pub customer_id: Option<CustomerId>,
    pub mode: DetailMode,
    /// 最近一次从服务器获取的客户
    pub customer: Option<Customer>,
    /// 编辑中的表单（仅 Editing 模式）
    pub editor: Option<CustomerEditor>,
    pub pending: Option<PendingAction>,
    pub error: Option<String>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            customer_id: None,
            mode: DetailMode::Loading,
            customer: None,
            editor: None,
            pending: None,
            error: None,
        }
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开某个客户，进入 Loading
    pub fn open(&mut self, id: CustomerId) {
        *self = Self {
            customer_id: Some(id),
            ..Self::default()
        };
    }

    /// 重新获取当前客户，返回要加载的 id
    pub fn reload(&mut self) -> Option<CustomerId> {
        let id = self.customer_id?;
        self.mode = DetailMode::Loading;
        self.editor = None;
        Some(id)
    }

    /// 记录加载结果；不是当前客户的结果被忽略
    pub fn finish_load(&mut self, id: CustomerId, result: Result<Customer, String>) -> bool {
        if self.customer_id != Some(id) {
            log::debug!("ignoring stale load result for customer {id}");
            return false;
        }
        match result {
            Ok(customer) => {
                self.customer = Some(customer);
                self.mode = DetailMode::Viewing;
                self.error = None;
            }
            Err(message) => {
                self.customer = None;
                self.mode = DetailMode::Unavailable;
                self.error = Some(message);
            }
        }
        true
    }

    // ========== 编辑 ==========

    /// Viewing → Editing
    pub fn begin_edit(&mut self) -> bool {
        if self.mode != DetailMode::Viewing || self.pending.is_some() {
            return false;
        }
        let Some(customer) = self.customer.clone() else {
            return false;
        };
        self.editor = Some(CustomerEditor::new(CustomerForm::from_customer(customer)));
        self.mode = DetailMode::Editing;
        self.error = None;
        true
    }

    /// 放弃编辑，返回需要重新获取的 id
    pub fn cancel_edit(&mut self) -> Option<CustomerId> {
        if self.mode != DetailMode::Editing || self.pending.is_some() {
            return None;
        }
        self.reload()
    }

    /// 请求保存
    ///
    /// 没有变更时直接回到 Viewing 并返回 None；否则标记 pending 并返回要提交的表单。
    pub fn request_save(&mut self) -> Option<CustomerForm> {
        if self.mode != DetailMode::Editing || self.pending.is_some() {
            return None;
        }
        let editor = self.editor.as_ref()?;
        if !editor.form.is_dirty() {
            self.editor = None;
            self.mode = DetailMode::Viewing;
            return None;
        }
        let form = editor.form.clone();
        self.pending = Some(PendingAction::Save);
        Some(form)
    }

    /// 记录保存结果，返回需要重新获取的 id
    ///
    /// 失败时留在 Editing，保留用户输入。
    pub fn finish_save(
        &mut self,
        id: CustomerId,
        result: &Result<SaveOutcome, String>,
    ) -> Option<CustomerId> {
        if self.customer_id != Some(id) {
            return None;
        }
        self.pending = None;
        match result {
            Ok(SaveOutcome::Updated) => self.reload(),
            Ok(SaveOutcome::Unchanged) => {
                self.editor = None;
                self.mode = DetailMode::Viewing;
                None
            }
            Err(message) => {
                self.error = Some(message.clone());
                None
            }
        }
    }

    // ========== 删除 ==========

    /// 是否可以发起删除
    pub fn can_delete(&self) -> bool {
        self.mode == DetailMode::Viewing && self.pending.is_none() && self.customer.is_some()
    }

    /// 标记删除在途；已有在途操作时返回 false
    pub fn begin_delete(&mut self, id: CustomerId) -> bool {
        if self.customer_id != Some(id) || !self.can_delete() {
            return false;
        }
        self.pending = Some(PendingAction::Delete);
        true
    }

    /// 记录删除结果
    pub fn finish_delete(&mut self, id: CustomerId, result: &Result<(), String>) {
        if self.customer_id != Some(id) {
            return;
        }
        self.pending = None;
        if let Err(message) = result {
            self.error = Some(message.clone());
        }
    }

    /// 当前显示的客户名
    pub fn customer_name(&self) -> Option<&str> {
        self.customer.as_ref().map(|c| c.name.as_str())
    }
}
