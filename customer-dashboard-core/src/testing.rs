//! 测试辅助模块
//!
//! 提供内存版 [`CustomerApi`] 和便捷的测试工厂方法。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use customer_dashboard_client::{
    ClientError, Customer, CustomerApi, CustomerId, CustomerPage, CustomerPatch, CustomerQuery,
    Result,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::form::blank_customer;

/// 单页最大记录数（与 HTTP 客户端一致）
const MAX_PAGE_LIMIT: u32 = 100;

/// 生成一个只有名称和证件的个人客户
pub fn sample_customer(name: &str) -> Customer {
    let mut customer = blank_customer();
    customer.name = name.to_string();
    customer.identity_document = format!("RG-{name}");
    customer.issuing_agency = "SSP".to_string();
    customer
}

/// 记录的一次 API 调用
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(CustomerQuery),
    Get(CustomerId),
    Create(Customer),
    Update(CustomerId, CustomerPatch),
    Delete(CustomerId),
}

// ===== MockCustomerApi =====

pub struct MockCustomerApi {
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
    next_id: AtomicU64,
    /// 如果 Some，下一次调用返回此错误
    fail_next: RwLock<Option<ClientError>>,
    calls: RwLock<Vec<ApiCall>>,
}

impl Default for MockCustomerApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCustomerApi {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            fail_next: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// 直接写入客户（不记录调用），返回分配的 id
    pub async fn insert(&self, mut customer: Customer) -> CustomerId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        customer.id = Some(id);
        customer.updated_at = Some(Utc::now());
        self.customers.write().await.insert(id, customer);
        id
    }

    pub async fn stored(&self, id: CustomerId) -> Option<Customer> {
        self.customers.read().await.get(&id).cloned()
    }

    pub async fn fail_next(&self, err: ClientError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    pub async fn update_calls(&self) -> Vec<(CustomerId, CustomerPatch)> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                ApiCall::Update(id, patch) => Some((*id, patch.clone())),
                _ => None,
            })
            .collect()
    }

    pub async fn delete_calls(&self) -> Vec<CustomerId> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                ApiCall::Delete(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.write().await.push(call);
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found(id: CustomerId) -> ClientError {
    ClientError::NotFound {
        resource: format!("/customer/{id}"),
        raw_message: Some("Customer not found".to_string()),
    }
}

fn matches_query(customer: &Customer, query: &CustomerQuery) -> bool {
    if query.customer_type.is_some_and(|t| t != customer.customer_type()) {
        return false;
    }
    match query.filter.as_ref().filter(|f| !f.is_blank()) {
        Some(filter) => filter.attribute.value_of(customer) == Some(filter.value.trim()),
        None => true,
    }
}

fn apply_patch(customer: &Customer, patch: &CustomerPatch) -> Result<Customer> {
    let serialization = |e: serde_json::Error| ClientError::SerializationError {
        detail: e.to_string(),
    };
    let mut value = serde_json::to_value(customer).map_err(serialization)?;
    if let Value::Object(fields) = &mut value {
        for (key, v) in patch.as_map() {
            fields.insert(key.clone(), v.clone());
        }
    }
    serde_json::from_value(value).map_err(|e| ClientError::ValidationError {
        status: 400,
        raw_message: e.to_string(),
    })
}

#[async_trait]
impl CustomerApi for MockCustomerApi {
    async fn list_customers(&self, query: &CustomerQuery) -> Result<CustomerPage> {
        self.record(ApiCall::List(query.clone())).await?;

        let query = query.validated(MAX_PAGE_LIMIT);
        let matching: Vec<Customer> = self
            .customers
            .read()
            .await
            .values()
            .filter(|c| matches_query(c, &query))
            .cloned()
            .collect();

        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let skip = ((query.page - 1) * query.limit) as usize;
        let customers = matching
            .into_iter()
            .skip(skip)
            .take(query.limit as usize)
            .collect();

        Ok(CustomerPage {
            customers,
            total,
            total_pages: total.div_ceil(query.limit),
            current_page: query.page,
        })
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.record(ApiCall::Get(id)).await?;
        self.stored(id).await.ok_or_else(|| not_found(id))
    }

    async fn create_customer(&self, customer: &Customer) -> Result<Customer> {
        self.record(ApiCall::Create(customer.clone())).await?;
        let id = self.insert(customer.clone()).await;
        self.stored(id).await.ok_or_else(|| not_found(id))
    }

    async fn update_customer(&self, id: CustomerId, patch: &CustomerPatch) -> Result<()> {
        self.record(ApiCall::Update(id, patch.clone())).await?;
        let mut customers = self.customers.write().await;
        let existing = customers.get(&id).ok_or_else(|| not_found(id))?;
        let mut updated = apply_patch(existing, patch)?;
        updated.id = Some(id);
        updated.updated_at = Some(Utc::now());
        customers.insert(id, updated);
        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<()> {
        self.record(ApiCall::Delete(id)).await?;
        self.customers
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
