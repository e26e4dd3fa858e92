//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │customer-dashboard-│           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的远程调用与持久化。
//! 通过 customer-dashboard-core 的 CustomerService 访问客户管理 REST API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // update 层发出的命令
//!         mod config_service;     // 配置文件（TOML）读写 + 环境变量覆盖
//!         mod dispatcher;         // 命令执行（Backend）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、命令（Command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/command.rs 中定义：
//!
//!         update 层不直接发起网络请求，而是返回一条 Command：
//!             - LoadCustomers(query)          加载一页客户
//!             - LoadCustomer(id)              加载单个客户
//!             - CreateCustomer(form)          新建
//!             - SaveCustomer { id, form }     保存编辑（只发送变化的字段）
//!             - DeleteCustomer(id)            删除
//!             - SaveSettings(config)          写入配置文件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、命令执行（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/dispatcher.rs 中定义：
//!
//!         Backend 持有 CustomerService、ConfigService 和 tokio 运行时句柄。
//!         dispatch() 把每条命令作为独立任务 spawn 到运行时上，
//!         完成后把 BackendMessage 发回无界通道。
//!
//!         错误在这里被转换为本地化文本（describe()），
//!         UI 线程收到的只有可以直接显示的字符串。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置服务（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：<config_dir>/customer-dashboard/config.toml
//!
//!         字段：api_base_url、page_size、request_timeout_secs、language
//!         环境变量覆盖：CUSTOMER_DASHBOARD_API_URL / _PAGE_SIZE / _LANG
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在删除确认弹窗中选择"删除"并按 Enter
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，返回 Command::DeleteCustomer(id)
//!         ↓
//!     app.rs 调用 Backend::dispatch()
//!         ↓
//!     tokio 任务调用 CustomerService::delete_customer()
//!         ↓
//!     customer-dashboard-client 发送 DELETE {base}/customer/:id
//!         ↓
//!     BackendMessage::CustomerDeleted 发回通道
//!         ↓
//!     主循环下一次 tick 取出消息，交给 Update 层
//!         ↓
//!     View 层重新渲染
//!

mod command;
mod config_service;
mod dispatcher;

pub use command::Command;
pub use config_service::{AppConfig, ConfigService, FileConfigService};
pub use dispatcher::Backend;
#[cfg(test)]
pub(crate) use dispatcher::execute;
