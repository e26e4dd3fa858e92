//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use customer_dashboard_client::{
    Address, ClientConfig, Customer, CustomerApi, CustomerId, CustomerKind, EmailContact,
    HttpCustomerClient, IndividualDetails, PhoneContact,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_api {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试客户名称
pub fn generate_test_customer_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("_test-{nanos:08x}")
}

/// 生成测试用个人客户（只填提交字段）
pub fn sample_individual(name: &str) -> Customer {
    let address = Address {
        zip_code: "01001-000".to_string(),
        street: "Praça da Sé".to_string(),
        number: "1".to_string(),
        neighborhood: "Sé".to_string(),
        complement: None,
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        country: "Brasil".to_string(),
        address_type: "OWN".to_string(),
        ..Address::default()
    };

    Customer {
        name: name.to_string(),
        identity_document: "12.345.678-9".to_string(),
        issuing_agency: "SSP".to_string(),
        address: address.clone(),
        correspondence_address: address,
        phone_contacts: vec![PhoneContact {
            phone: "11 90000-0000".to_string(),
            name: "Celular".to_string(),
            is_whatsapp: true,
            ..PhoneContact::default()
        }],
        email_contacts: vec![EmailContact {
            email: "test@example.com".to_string(),
            name: "Pessoal".to_string(),
            ..EmailContact::default()
        }],
        kind: CustomerKind::Individual(IndividualDetails {
            cpf: Some("123.456.789-01".to_string()),
            birth_date: Some("1990-01-01".to_string()),
            mother_name: Some("Maria".to_string()),
        }),
        ..Customer::default()
    }
}

/// 去掉服务端分配的字段，用于比较提交内容
pub fn submitted_fields(customer: &Customer) -> Customer {
    let mut c = customer.clone();
    c.id = None;
    c.updated_at = None;
    c.address.id = None;
    c.correspondence_address.id = None;
    for p in &mut c.phone_contacts {
        p.id = None;
    }
    for e in &mut c.email_contacts {
        e.id = None;
    }
    c
}

/// 测试上下文 - 封装客户端
pub struct TestContext {
    pub client: HttpCustomerClient,
}

impl TestContext {
    /// 从 `CUSTOMER_API_BASE_URL` 创建测试上下文
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("CUSTOMER_API_BASE_URL").ok()?;
        let client = HttpCustomerClient::new(&ClientConfig::new(base_url)).ok()?;
        Some(Self { client })
    }

    /// 清理测试客户
    pub async fn cleanup_customer(&self, id: CustomerId) {
        let _ = self.client.delete_customer(id).await;
    }
}
