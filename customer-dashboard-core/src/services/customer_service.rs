//! 客户管理服务

use std::sync::Arc;

use customer_dashboard_client::{
    Customer, CustomerApi, CustomerId, CustomerPage, CustomerPatch, CustomerQuery,
};

use super::log_failure;
use crate::error::{CoreError, CoreResult};
use crate::form::CustomerForm;

/// 保存结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 已发送更新
    Updated,
    /// 没有变更，未发请求
    Unchanged,
}

/// 客户管理服务
///
/// 对 [`CustomerApi`] 的薄封装：统一错误类型、日志分级，以及表单到请求的转换。
#[derive(Clone)]
pub struct CustomerService {
    api: Arc<dyn CustomerApi>,
}

impl CustomerService {
    /// 创建客户服务实例
    #[must_use]
    pub fn new(api: Arc<dyn CustomerApi>) -> Self {
        Self { api }
    }

    /// 列出客户（分页 + 过滤）
    pub async fn list_customers(&self, query: &CustomerQuery) -> CoreResult<CustomerPage> {
        self.api.list_customers(query).await.map_err(|e| {
            let e = CoreError::from(e);
            log_failure("list customers", &e);
            e
        })
    }

    /// 列出客户，失败时降级为空页
    ///
    /// 返回的错误仅用于提示用户。
    pub async fn list_customers_or_empty(
        &self,
        query: &CustomerQuery,
    ) -> (CustomerPage, Option<CoreError>) {
        match self.list_customers(query).await {
            Ok(page) => (page, None),
            Err(e) => (CustomerPage::default(), Some(e)),
        }
    }

    /// 获取客户详情
    pub async fn get_customer(&self, id: CustomerId) -> CoreResult<Customer> {
        self.api.get_customer(id).await.map_err(|e| {
            let e = CoreError::from(e);
            log_failure(&format!("get customer {id}"), &e);
            e
        })
    }

    /// 提交新客户表单
    pub async fn create_customer(&self, form: &CustomerForm) -> CoreResult<Customer> {
        self.api.create_customer(form.customer()).await.map_err(|e| {
            let e = CoreError::from(e);
            log_failure("create customer", &e);
            e
        })
    }

    /// 更新客户（部分字段）
    pub async fn update_customer(&self, id: CustomerId, patch: &CustomerPatch) -> CoreResult<()> {
        self.api.update_customer(id, patch).await.map_err(|e| {
            let e = CoreError::from(e);
            log_failure(&format!("update customer {id}"), &e);
            e
        })
    }

    /// 保存编辑表单：只发送变化的字段，没有变化时不发请求
    pub async fn save_customer(&self, form: &CustomerForm) -> CoreResult<SaveOutcome> {
        let Some(id) = form.id() else {
            let e = CoreError::CustomerNotPersisted;
            log_failure("save customer", &e);
            return Err(e);
        };

        let patch = form.changes()?;
        if patch.is_empty() {
            log::debug!("customer {id} unchanged, skipping update");
            return Ok(SaveOutcome::Unchanged);
        }

        self.update_customer(id, &patch).await?;
        Ok(SaveOutcome::Updated)
    }

    /// 删除客户
    pub async fn delete_customer(&self, id: CustomerId) -> CoreResult<()> {
        self.api.delete_customer(id).await.map_err(|e| {
            let e = CoreError::from(e);
            log_failure(&format!("delete customer {id}"), &e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use customer_dashboard_client::{
        ClientError, CustomerFilter, CustomerKind, FilterAttribute, IndividualDetails,
    };

    use super::*;
    use crate::testing::{sample_customer, MockCustomerApi};

    fn service_with(api: &Arc<MockCustomerApi>) -> CustomerService {
        CustomerService::new(api.clone())
    }

    fn with_cpf(name: &str, cpf: &str) -> Customer {
        let mut c = sample_customer(name);
        c.kind = CustomerKind::Individual(IndividualDetails {
            cpf: Some(cpf.to_string()),
            ..IndividualDetails::default()
        });
        c
    }

    #[tokio::test]
    async fn filter_by_cpf_returns_matching_customers_and_filtered_total() {
        let api = Arc::new(MockCustomerApi::new());
        for i in 0..7 {
            api.insert(with_cpf(&format!("match-{i}"), "123")).await;
        }
        for i in 0..4 {
            api.insert(with_cpf(&format!("other-{i}"), "999")).await;
        }
        let service = service_with(&api);

        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::Cpf, "123")),
            page: 1,
            limit: 5,
            ..CustomerQuery::default()
        };
        let page = service.list_customers(&query).await.unwrap();

        assert_eq!(page.customers.len(), 5);
        assert!(page.customers.iter().all(|c| c.cpf() == Some("123")));
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn blank_filter_lists_everything() {
        let api = Arc::new(MockCustomerApi::new());
        api.insert(sample_customer("a")).await;
        api.insert(sample_customer("b")).await;
        let service = service_with(&api);

        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::Name, "")),
            ..CustomerQuery::default()
        };
        let page = service.list_customers(&query).await.unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn list_failure_degrades_to_empty_page() {
        let api = Arc::new(MockCustomerApi::new());
        api.insert(sample_customer("a")).await;
        api.fail_next(ClientError::NetworkError {
            detail: "connection refused".into(),
        })
        .await;
        let service = service_with(&api);

        let (page, err) = service
            .list_customers_or_empty(&CustomerQuery::default())
            .await;

        assert_eq!(page, CustomerPage::default());
        assert!(matches!(err, Some(CoreError::Client(ClientError::NetworkError { .. }))));
    }

    #[tokio::test]
    async fn create_then_get_round_trips_submitted_fields() {
        let api = Arc::new(MockCustomerApi::new());
        let service = service_with(&api);

        let mut form = CustomerForm::new();
        form.apply_path_edit("name", "Ana").unwrap();
        form.apply_path_edit("cpf", "321").unwrap();
        form.apply_path_edit("address.city", "Santos").unwrap();

        let created = service.create_customer(&form).await.unwrap();
        let id = created.id.unwrap();
        let fetched = service.get_customer(id).await.unwrap();

        let mut expected = form.into_customer();
        expected.id = fetched.id;
        expected.updated_at = fetched.updated_at;
        assert_eq!(fetched, expected);
    }

    #[tokio::test]
    async fn save_sends_only_changed_fields() {
        let api = Arc::new(MockCustomerApi::new());
        let id = api.insert(sample_customer("Bruno")).await;
        let service = service_with(&api);

        let mut form = CustomerForm::from_customer(service.get_customer(id).await.unwrap());
        form.apply_path_edit("name", "Bruno Lima").unwrap();

        let outcome = service.save_customer(&form).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Updated);
        let patches = api.update_calls().await;
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].0, id);
        assert_eq!(patches[0].1.keys().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(service.get_customer(id).await.unwrap().name, "Bruno Lima");
    }

    #[tokio::test]
    async fn save_without_changes_skips_request() {
        let api = Arc::new(MockCustomerApi::new());
        let id = api.insert(sample_customer("Carla")).await;
        let service = service_with(&api);

        let form = CustomerForm::from_customer(service.get_customer(id).await.unwrap());
        let outcome = service.save_customer(&form).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Unchanged);
        assert!(api.update_calls().await.is_empty());
    }

    #[tokio::test]
    async fn save_requires_persisted_customer() {
        let api = Arc::new(MockCustomerApi::new());
        let service = service_with(&api);

        let result = service.save_customer(&CustomerForm::new()).await;
        assert!(matches!(result, Err(CoreError::CustomerNotPersisted)));
    }

    #[tokio::test]
    async fn update_unknown_customer_is_not_found() {
        let api = Arc::new(MockCustomerApi::new());
        let service = service_with(&api);

        let patch = CustomerPatch::full(&sample_customer("x")).unwrap();
        let result = service.update_customer(404, &patch).await;
        assert!(result.as_ref().is_err_and(CoreError::is_not_found), "{result:?}");
    }

    #[tokio::test]
    async fn delete_removes_customer() {
        let api = Arc::new(MockCustomerApi::new());
        let id = api.insert(sample_customer("Davi")).await;
        let service = service_with(&api);

        service.delete_customer(id).await.unwrap();

        assert_eq!(api.delete_calls().await, vec![id]);
        let gone = service.get_customer(id).await;
        assert!(gone.as_ref().is_err_and(CoreError::is_not_found));
        let again = service.delete_customer(id).await;
        assert!(again.as_ref().is_err_and(CoreError::is_not_found));
    }
}
