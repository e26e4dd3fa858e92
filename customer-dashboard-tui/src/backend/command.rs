//! 后台命令

use customer_dashboard_client::{CustomerId, CustomerQuery};
use customer_dashboard_core::CustomerForm;

use super::AppConfig;

/// update 层发出、由 [`Backend`](super::Backend) 异步执行的命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 加载客户列表
    LoadCustomers(CustomerQuery),
    /// 加载单个客户
    LoadCustomer(CustomerId),
    /// 新建客户
    CreateCustomer(CustomerForm),
    /// 保存编辑（只发送变化的字段）
    SaveCustomer { id: CustomerId, form: CustomerForm },
    /// 删除客户
    DeleteCustomer(CustomerId),
    /// 写入配置文件
    SaveSettings(AppConfig),
}
