//! 后台任务结果消息
//!
//! 错误在后台线程中已转换为本地化文本。

use customer_dashboard_client::{Customer, CustomerId, CustomerPage};
use customer_dashboard_core::SaveOutcome;

/// 后台任务完成后发回主循环的消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表加载完成（失败时为空页 + 错误提示）
    CustomersLoaded {
        page: CustomerPage,
        error: Option<String>,
    },
    /// 单个客户加载完成
    CustomerLoaded {
        id: CustomerId,
        result: Result<Customer, String>,
    },
    /// 新建完成
    CustomerCreated(Result<Customer, String>),
    /// 保存完成
    CustomerSaved {
        id: CustomerId,
        result: Result<SaveOutcome, String>,
    },
    /// 删除完成
    CustomerDeleted {
        id: CustomerId,
        result: Result<(), String>,
    },
    /// 设置写入完成
    SettingsSaved(Result<(), String>),
}
