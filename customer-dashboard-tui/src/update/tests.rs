//! 端到端的 update 测试：消息 → 命令 → 模拟 API → 后台结果 → 状态

use std::sync::{Arc, Mutex};

use customer_dashboard_client::{
    ClientError, CustomerId, CustomerKind, FilterAttribute, IndividualDetails,
};
use customer_dashboard_core::testing::{sample_customer, ApiCall, MockCustomerApi};
use customer_dashboard_core::CustomerService;

use super::*;
use crate::backend::{execute, AppConfig, ConfigService};
use crate::i18n::t;
use crate::message::{ContentMessage, ModalMessage, NavigationMessage};
use crate::model::Modal;

/// 只记录保存内容的配置服务
#[derive(Default)]
struct MemoryConfigService {
    saved: Mutex<Vec<AppConfig>>,
}

impl ConfigService for MemoryConfigService {
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

struct Harness {
    app: App,
    api: Arc<MockCustomerApi>,
    service: CustomerService,
    config: Arc<MemoryConfigService>,
}

impl Harness {
    fn new() -> Self {
        let api = Arc::new(MockCustomerApi::new());
        Self {
            app: App::default(),
            service: CustomerService::new(api.clone()),
            api,
            config: Arc::new(MemoryConfigService::default()),
        }
    }

    /// 处理一条消息，并把产生的命令全部执行完
    async fn send(&mut self, msg: AppMessage) {
        let command = update(&mut self.app, msg);
        self.run(command).await;
    }

    async fn run(&mut self, mut command: Option<Command>) {
        while let Some(cmd) = command {
            let config: Arc<dyn ConfigService> = self.config.clone();
            let reply = execute(&self.service, config, cmd).await;
            command = update(&mut self.app, AppMessage::Backend(reply));
        }
    }

    async fn content(&mut self, msg: ContentMessage) {
        self.send(AppMessage::Content(msg)).await;
    }

    async fn modal(&mut self, msg: ModalMessage) {
        self.send(AppMessage::Modal(msg)).await;
    }

    async fn open_customers(&mut self) {
        let command = open_page(&mut self.app, Page::Customers);
        self.run(command).await;
    }

    /// 打开列表中第一个客户的详情
    async fn open_first_detail(&mut self) -> CustomerId {
        self.open_customers().await;
        self.content(ContentMessage::Confirm).await;
        let Page::CustomerDetail { id } = self.app.current_page else {
            unreachable!("expected detail page, got {:?}", self.app.current_page);
        };
        id
    }
}

// ========== 导航 ==========

#[tokio::test]
async fn navigating_to_customers_loads_first_page() {
    let mut h = Harness::new();
    for name in ["Ana", "Bia", "Caio"] {
        h.api.insert(sample_customer(name)).await;
    }

    h.send(AppMessage::Navigation(NavigationMessage::SelectNext)).await;
    h.send(AppMessage::Navigation(NavigationMessage::Confirm)).await;

    assert_eq!(h.app.current_page, Page::Customers);
    assert_eq!(h.app.customers.rows.len(), 3);
    assert_eq!(h.app.customers.total, 3);
    assert!(!h.app.customers.loading);
}

#[tokio::test]
async fn go_back_from_detail_returns_to_list() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    h.open_first_detail().await;
    assert_eq!(h.app.detail.mode, DetailMode::Viewing);

    h.send(AppMessage::GoBack).await;

    assert_eq!(h.app.current_page, Page::Customers);
    assert_eq!(h.app.customers.rows.len(), 1);
}

#[tokio::test]
async fn missing_customer_shows_unavailable() {
    let mut h = Harness::new();
    let command = open_page(&mut h.app, Page::CustomerDetail { id: 99 });
    h.run(command).await;

    assert_eq!(h.app.detail.mode, DetailMode::Unavailable);
    assert!(h.app.detail.error.is_some());
}

// ========== 搜索 ==========

#[tokio::test]
async fn search_by_cpf_matches_exactly() {
    let mut h = Harness::new();
    for (name, cpf) in [("Ana", "123"), ("Caio", "12345")] {
        let mut customer = sample_customer(name);
        customer.kind = CustomerKind::Individual(IndividualDetails {
            cpf: Some(cpf.into()),
            ..IndividualDetails::default()
        });
        h.api.insert(customer).await;
    }
    h.api.insert(sample_customer("Bia")).await;
    h.open_customers().await;

    h.content(ContentMessage::FocusSearch).await;
    h.content(ContentMessage::CycleFilterAttribute { forward: true }).await;
    for ch in "123".chars() {
        h.content(ContentMessage::SearchInput(ch)).await;
    }
    h.content(ContentMessage::ApplySearch).await;

    assert_eq!(h.app.customers.filter_attribute, FilterAttribute::Cpf);
    assert_eq!(h.app.customers.total, 1);
    assert_eq!(h.app.customers.rows.len(), 1);
    assert_eq!(h.app.customers.rows[0].name, "Ana");
    assert!(!h.app.customers.search_focused);
}

// ========== 删除 ==========

#[tokio::test]
async fn confirmed_delete_calls_api_once_and_returns_to_list() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    h.api.insert(sample_customer("Bia")).await;
    let id = h.open_first_detail().await;

    h.content(ContentMessage::Delete).await;
    assert!(matches!(h.app.modal.active, Some(Modal::ConfirmDelete { focus: 0, .. })));

    h.modal(ModalMessage::ToggleDeleteFocus).await;
    h.modal(ModalMessage::Confirm).await;

    assert_eq!(h.api.delete_calls().await, vec![id]);
    assert!(h.api.stored(id).await.is_none());
    assert_eq!(h.app.current_page, Page::Customers);
    assert_eq!(h.app.customers.rows.len(), 1);
    assert!(matches!(
        h.app.modal.active,
        Some(Modal::Feedback { severity: Severity::Success, .. })
    ));
}

#[tokio::test]
async fn cancelled_delete_has_no_side_effects() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    let id = h.open_first_detail().await;

    h.content(ContentMessage::Delete).await;
    h.modal(ModalMessage::Confirm).await;

    h.content(ContentMessage::Delete).await;
    h.send(AppMessage::GoBack).await;

    assert!(h.api.delete_calls().await.is_empty());
    assert!(h.app.modal.active.is_none());
    assert_eq!(h.app.current_page, Page::CustomerDetail { id });
    assert_eq!(h.app.detail.mode, DetailMode::Viewing);
    assert!(h.app.detail.pending.is_none());
}

#[tokio::test]
async fn failed_delete_stays_on_detail() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    let id = h.open_first_detail().await;

    h.content(ContentMessage::Delete).await;
    h.modal(ModalMessage::ToggleDeleteFocus).await;
    h.api
        .fail_next(ClientError::NetworkError {
            detail: "offline".into(),
        })
        .await;
    h.modal(ModalMessage::Confirm).await;

    assert_eq!(h.app.current_page, Page::CustomerDetail { id });
    assert!(h.app.detail.can_delete());
    assert!(matches!(
        h.app.modal.active,
        Some(Modal::Feedback { severity: Severity::Error, .. })
    ));
}

// ========== 编辑 ==========

#[tokio::test]
async fn saving_sends_only_changed_fields() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    let id = h.open_first_detail().await;

    h.content(ContentMessage::Edit).await;
    assert_eq!(h.app.detail.mode, DetailMode::Editing);
    // 焦点：类型 → 名称
    h.content(ContentMessage::Editor(EditorMessage::NextField)).await;
    for ch in " Maria".chars() {
        h.content(ContentMessage::Editor(EditorMessage::Input(ch))).await;
    }
    h.content(ContentMessage::Save).await;

    let updates = h.api.update_calls().await;
    assert_eq!(updates.len(), 1);
    let (updated_id, patch) = &updates[0];
    assert_eq!(*updated_id, id);
    assert_eq!(patch.keys().collect::<Vec<_>>(), vec!["name"]);

    assert_eq!(h.app.detail.mode, DetailMode::Viewing);
    assert_eq!(h.app.detail.customer_name(), Some("Ana Maria"));
}

#[tokio::test]
async fn saving_without_changes_sends_nothing() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    h.open_first_detail().await;

    h.content(ContentMessage::Edit).await;
    h.content(ContentMessage::Save).await;

    assert!(h.api.update_calls().await.is_empty());
    assert_eq!(h.app.detail.mode, DetailMode::Viewing);
    assert_eq!(h.app.status_message.as_deref(), Some(t().feedback.unchanged));
}

#[tokio::test]
async fn cancelling_edit_restores_persisted_customer() {
    let mut h = Harness::new();
    h.api.insert(sample_customer("Ana")).await;
    let id = h.open_first_detail().await;

    h.content(ContentMessage::Edit).await;
    h.content(ContentMessage::Editor(EditorMessage::NextField)).await;
    h.content(ContentMessage::Editor(EditorMessage::Backspace)).await;
    h.send(AppMessage::GoBack).await;

    assert_eq!(h.app.detail.mode, DetailMode::Viewing);
    assert_eq!(h.app.detail.customer_name(), Some("Ana"));
    let gets = h
        .api
        .calls()
        .await
        .into_iter()
        .filter(|c| *c == ApiCall::Get(id))
        .count();
    assert_eq!(gets, 2);
    assert!(h.api.update_calls().await.is_empty());
}

// ========== 新建 ==========

#[tokio::test]
async fn creating_customer_closes_dialog_and_reloads_list() {
    let mut h = Harness::new();
    h.open_customers().await;
    assert!(h.app.customers.rows.is_empty());

    h.content(ContentMessage::Add).await;
    h.modal(ModalMessage::Editor(EditorMessage::NextField)).await;
    for ch in "Caio".chars() {
        h.modal(ModalMessage::Editor(EditorMessage::Input(ch))).await;
    }
    h.modal(ModalMessage::Confirm).await;

    let creates: Vec<_> = h
        .api
        .calls()
        .await
        .into_iter()
        .filter(|c| matches!(c, ApiCall::Create(_)))
        .collect();
    assert_eq!(creates.len(), 1);
    assert_eq!(h.app.customers.rows.len(), 1);
    assert_eq!(h.app.customers.rows[0].name, "Caio");
    assert!(matches!(
        h.app.modal.active,
        Some(Modal::Feedback { severity: Severity::Success, .. })
    ));
}

#[tokio::test]
async fn dialog_cannot_be_dismissed_while_create_is_pending() {
    let mut h = Harness::new();
    h.open_customers().await;

    h.content(ContentMessage::Add).await;
    h.modal(ModalMessage::Editor(EditorMessage::NextField)).await;
    for ch in "Duda".chars() {
        h.modal(ModalMessage::Editor(EditorMessage::Input(ch))).await;
    }
    let pending = update(&mut h.app, AppMessage::Modal(ModalMessage::Confirm));
    assert!(matches!(pending, Some(Command::CreateCustomer(_))));

    assert!(update(&mut h.app, AppMessage::Modal(ModalMessage::Close)).is_none());
    assert!(update(&mut h.app, AppMessage::GoBack).is_none());
    assert!(update(&mut h.app, AppMessage::ShowHelp).is_none());
    assert!(h.app.modal.is_submitting());

    h.run(pending).await;

    assert!(matches!(
        h.app.modal.active,
        Some(Modal::Feedback { severity: Severity::Success, .. })
    ));
    assert_eq!(h.app.customers.rows[0].name, "Duda");
}

#[tokio::test]
async fn failed_create_keeps_dialog_open_with_error() {
    let mut h = Harness::new();
    h.open_customers().await;

    h.content(ContentMessage::Add).await;
    h.api
        .fail_next(ClientError::ValidationError {
            status: 422,
            raw_message: "name required".into(),
        })
        .await;
    h.modal(ModalMessage::Confirm).await;

    let Some(dialog) = h.app.modal.new_customer_mut() else {
        unreachable!("dialog should stay open");
    };
    assert!(!dialog.submitting);
    assert!(dialog.error.as_deref().is_some_and(|e| e.contains("name required")));
}

// ========== 设置 ==========

#[tokio::test]
async fn changing_page_size_is_persisted_and_applied() {
    let mut h = Harness::new();
    let command = open_page(&mut h.app, Page::Settings);
    assert!(command.is_none());

    h.content(ContentMessage::SelectNext).await;
    h.content(ContentMessage::ToggleNext).await;

    assert_eq!(h.app.customers.page_size, 10);
    assert_eq!(h.app.config.page_size, 10);
    let saved = h.config.saved.lock().unwrap().clone();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].page_size, 10);
    assert_eq!(h.app.status_message.as_deref(), Some(t().feedback.settings_saved));
}
