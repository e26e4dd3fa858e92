use async_trait::async_trait;

use crate::error::Result;
use crate::patch::CustomerPatch;
use crate::types::{Customer, CustomerId, CustomerPage, CustomerQuery};

/// 客户 API Trait
///
/// 每个方法对应一次网络往返，失败直接返回，不重试。
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// 获取客户列表 (分页 + 单属性过滤)
    ///
    /// 过滤值为空时返回未过滤的结果。
    async fn list_customers(&self, query: &CustomerQuery) -> Result<CustomerPage>;

    /// 获取客户详情
    async fn get_customer(&self, id: CustomerId) -> Result<Customer>;

    /// 创建客户，返回带服务端 id 的客户
    async fn create_customer(&self, customer: &Customer) -> Result<Customer>;

    /// 更新客户（部分字段）
    async fn update_customer(&self, id: CustomerId, patch: &CustomerPatch) -> Result<()>;

    /// 删除客户
    async fn delete_customer(&self, id: CustomerId) -> Result<()>;
}
