//! `CustomerApi` trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::patch::CustomerPatch;
use crate::traits::CustomerApi;
use crate::types::{Customer, CustomerId, CustomerPage, CustomerQuery, FilterAttribute};
use crate::utils::log_sanitizer::mask_document;

use super::{HttpCustomerClient, CUSTOMER_PATH, MAX_PAGE_LIMIT};

fn customer_path(id: CustomerId) -> String {
    format!("{CUSTOMER_PATH}/{id}")
}

/// 日志中展示的过滤值（证件号脱敏）
fn filter_for_log(query: &CustomerQuery) -> String {
    match &query.filter {
        Some(f) if !f.is_blank() => {
            let value = match f.attribute {
                FilterAttribute::Cpf | FilterAttribute::Cnpj => mask_document(&f.value),
                _ => f.value.clone(),
            };
            format!("{}={value}", f.attribute.query_key())
        }
        _ => "none".to_string(),
    }
}

#[async_trait]
impl CustomerApi for HttpCustomerClient {
    async fn list_customers(&self, query: &CustomerQuery) -> Result<CustomerPage> {
        let query = query.validated(MAX_PAGE_LIMIT);
        log::debug!(
            "list customers: filter {}, page {}, limit {}",
            filter_for_log(&query),
            query.page,
            query.limit
        );
        self.get(CUSTOMER_PATH, &query.to_pairs()).await
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.get(&customer_path(id), &[]).await
    }

    async fn create_customer(&self, customer: &Customer) -> Result<Customer> {
        let created: Customer = self
            .send_json(Method::POST, CUSTOMER_PATH, customer)
            .await?;
        log::info!("customer created: id {:?}", created.id);
        Ok(created)
    }

    async fn update_customer(&self, id: CustomerId, patch: &CustomerPatch) -> Result<()> {
        log::debug!(
            "update customer {id}: fields [{}]",
            patch.keys().collect::<Vec<_>>().join(", ")
        );
        self.send_without_reply(Method::PUT, &customer_path(id), Some(patch))
            .await?;
        log::info!("customer updated: id {id}");
        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<()> {
        self.send_without_reply::<()>(Method::DELETE, &customer_path(id), None)
            .await?;
        log::info!("customer deleted: id {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomerFilter;

    #[test]
    fn customer_path_appends_id() {
        assert_eq!(customer_path(12), "/customer/12");
    }

    #[test]
    fn filter_log_masks_documents() {
        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::Cpf, "123.456.789-01")),
            ..CustomerQuery::default()
        };
        assert_eq!(filter_for_log(&query), "cpf=***.***.***-01");
    }

    #[test]
    fn filter_log_without_filter() {
        assert_eq!(filter_for_log(&CustomerQuery::default()), "none");
    }
}
