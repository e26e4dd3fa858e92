//! 命令执行
//!
//! 每条命令在 tokio 运行时上作为独立任务执行，结果通过无界通道回到主循环。

use std::sync::Arc;

use customer_dashboard_client::ClientError;
use customer_dashboard_core::{CoreError, CustomerService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{Command, ConfigService};
use crate::i18n::t;
use crate::message::BackendMessage;

/// 后台服务入口
///
/// 持有业务服务与运行时句柄；UI 线程只通过 [`dispatch`](Self::dispatch) 与之交互。
pub struct Backend {
    service: CustomerService,
    config_service: Arc<dyn ConfigService>,
    runtime: Handle,
    tx: UnboundedSender<BackendMessage>,
}

impl Backend {
    /// 创建后台服务，返回结果接收端
    pub fn new(
        service: CustomerService,
        config_service: Arc<dyn ConfigService>,
        runtime: Handle,
    ) -> (Self, UnboundedReceiver<BackendMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Self {
            service,
            config_service,
            runtime,
            tx,
        };
        (backend, rx)
    }

    /// 异步执行命令
    pub fn dispatch(&self, command: Command) {
        log::debug!("dispatching {command:?}");
        let service = self.service.clone();
        let config_service = Arc::clone(&self.config_service);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let message = execute(&service, config_service, command).await;
            if tx.send(message).is_err() {
                log::debug!("UI loop gone, dropping backend result");
            }
        });
    }
}

/// 执行一条命令并生成结果消息
pub(crate) async fn execute(
    service: &CustomerService,
    config_service: Arc<dyn ConfigService>,
    command: Command,
) -> BackendMessage {
    let texts = &t().feedback;
    match command {
        Command::LoadCustomers(query) => {
            let (page, error) = service.list_customers_or_empty(&query).await;
            BackendMessage::CustomersLoaded {
                page,
                error: error.map(|e| failure(texts.list_failed, &e)),
            }
        }
        Command::LoadCustomer(id) => BackendMessage::CustomerLoaded {
            id,
            result: service
                .get_customer(id)
                .await
                .map_err(|e| failure(texts.load_failed, &e)),
        },
        Command::CreateCustomer(form) => BackendMessage::CustomerCreated(
            service
                .create_customer(&form)
                .await
                .map_err(|e| failure(texts.create_failed, &e)),
        ),
        Command::SaveCustomer { id, form } => BackendMessage::CustomerSaved {
            id,
            result: service
                .save_customer(&form)
                .await
                .map_err(|e| failure(texts.update_failed, &e)),
        },
        Command::DeleteCustomer(id) => BackendMessage::CustomerDeleted {
            id,
            result: service
                .delete_customer(id)
                .await
                .map_err(|e| failure(texts.delete_failed, &e)),
        },
        Command::SaveSettings(config) => {
            let saved = tokio::task::spawn_blocking(move || config_service.save(&config)).await;
            let result = match saved {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => {
                    log::error!("failed to save settings: {e:#}");
                    Err(format!("{}: {e}", texts.settings_failed))
                }
                Err(e) => {
                    log::error!("settings task failed: {e}");
                    Err(texts.settings_failed.to_string())
                }
            };
            BackendMessage::SettingsSaved(result)
        }
    }
}

/// 操作失败提示："<操作>: <原因>"
fn failure(action: &str, error: &CoreError) -> String {
    format!("{action}: {}", describe(error))
}

/// 把错误转换为面向用户的文本
pub fn describe(error: &CoreError) -> String {
    let texts = &t().feedback;
    match error {
        CoreError::Client(ClientError::NotFound { .. }) => texts.not_found.to_string(),
        CoreError::Client(ClientError::NetworkError { .. } | ClientError::Timeout { .. }) => {
            texts.network.to_string()
        }
        CoreError::Client(ClientError::ValidationError { raw_message, .. }) => {
            if raw_message.trim().is_empty() {
                texts.validation.to_string()
            } else {
                format!("{} ({})", texts.validation, raw_message.trim())
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use customer_dashboard_client::{
        CustomerFilter, CustomerKind, CustomerQuery, FilterAttribute, IndividualDetails,
    };
    use customer_dashboard_core::testing::{sample_customer, MockCustomerApi};
    use customer_dashboard_core::{CustomerForm, SaveOutcome};

    use super::*;
    use crate::backend::AppConfig;

    /// 记录保存内容的配置服务
    #[derive(Default)]
    struct RecordingConfigService {
        saved: Mutex<Vec<AppConfig>>,
    }

    impl ConfigService for RecordingConfigService {
        fn load(&self) -> anyhow::Result<AppConfig> {
            Ok(AppConfig::default())
        }

        fn save(&self, config: &AppConfig) -> anyhow::Result<()> {
            self.saved
                .lock()
                .map_err(|_| anyhow::anyhow!("poisoned"))?
                .push(config.clone());
            Ok(())
        }
    }

    fn setup() -> (Arc<MockCustomerApi>, CustomerService, Arc<RecordingConfigService>) {
        let api = Arc::new(MockCustomerApi::new());
        let service = CustomerService::new(api.clone());
        (api, service, Arc::new(RecordingConfigService::default()))
    }

    #[tokio::test]
    async fn list_failure_degrades_to_empty_page() {
        let (api, service, config) = setup();
        api.insert(sample_customer("Ana")).await;
        api.fail_next(ClientError::Timeout { detail: "slow".into() }).await;

        let query = CustomerQuery::default();
        let message = execute(&service, config, Command::LoadCustomers(query)).await;

        let BackendMessage::CustomersLoaded { page, error } = message else {
            unreachable!("unexpected message {message:?}");
        };
        assert!(page.customers.is_empty());
        assert!(error.is_some());
    }

    #[tokio::test]
    async fn filtered_load_reports_filtered_total() {
        let (api, service, config) = setup();
        let mut matching = sample_customer("Ana");
        matching.kind = CustomerKind::Individual(IndividualDetails {
            cpf: Some("123".into()),
            ..IndividualDetails::default()
        });
        api.insert(matching).await;
        api.insert(sample_customer("Bia")).await;

        let query = CustomerQuery {
            filter: Some(CustomerFilter::new(FilterAttribute::Cpf, "123")),
            ..CustomerQuery::default()
        };
        let message = execute(&service, config, Command::LoadCustomers(query)).await;

        let BackendMessage::CustomersLoaded { page, error } = message else {
            unreachable!("unexpected message {message:?}");
        };
        assert!(error.is_none());
        assert_eq!(page.total, 1);
        assert_eq!(page.customers[0].cpf(), Some("123"));
    }

    #[tokio::test]
    async fn unchanged_save_sends_nothing() {
        let (api, service, config) = setup();
        let id = api.insert(sample_customer("Ana")).await;
        let stored = api.stored(id).await.unwrap();

        let message = execute(
            &service,
            config,
            Command::SaveCustomer {
                id,
                form: CustomerForm::from_customer(stored),
            },
        )
        .await;

        assert!(matches!(
            message,
            BackendMessage::CustomerSaved { result: Ok(SaveOutcome::Unchanged), .. }
        ));
        assert!(api.update_calls().await.is_empty());
    }

    #[tokio::test]
    async fn missing_customer_is_reported_as_not_found() {
        let (_api, service, config) = setup();

        let message = execute(&service, config, Command::LoadCustomer(42)).await;

        let BackendMessage::CustomerLoaded { id, result } = message else {
            unreachable!("unexpected message {message:?}");
        };
        assert_eq!(id, 42);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn settings_are_persisted() {
        let (_api, service, config) = setup();
        let wanted = AppConfig {
            page_size: 20,
            ..AppConfig::default()
        };

        let command = Command::SaveSettings(wanted.clone());
        let message = execute(&service, config.clone(), command).await;

        assert!(matches!(message, BackendMessage::SettingsSaved(Ok(()))));
        assert_eq!(*config.saved.lock().unwrap(), vec![wanted]);
    }

    #[test]
    fn validation_errors_include_server_message() {
        let error = CoreError::Client(ClientError::ValidationError {
            status: 422,
            raw_message: "cpf invalid".into(),
        });
        assert!(describe(&error).contains("cpf invalid"));
    }
}
