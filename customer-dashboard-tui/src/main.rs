//! Customer Dashboard TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Customer Dashboard TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志（终端被 TUI 占用）
//!     config_service.load()   // 配置文件 + 环境变量
//!     set_language()          // 界面语言
//!     Runtime::new()          // 后台任务使用的 tokio 运行时
//!     Backend::new()          // HTTP 客户端 → CustomerService → Backend
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环运行在 main 线程上，所有网络请求都在 tokio 运行时的工作线程中执行，
//! 结果经由通道回到主循环（在 /app.rs 下细嗦）。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use customer_dashboard_client::HttpCustomerClient;
use customer_dashboard_core::CustomerService;

use backend::{Backend, ConfigService, FileConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（guard 持有到 main 结束）
    let _log_guard = init_logging()?;

    // 2. 配置
    let config_service = Arc::new(FileConfigService::default_location());
    let config = config_service
        .load()
        .with_context(|| format!("failed to load {}", config_service.path().display()))?;
    log::info!(
        "starting against {} (page size {}, language {})",
        config.api_base_url,
        config.page_size,
        config.language
    );
    i18n::set_language(config.language());

    // 3. 后台服务
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let client = HttpCustomerClient::new(&config.client_config())
        .context("invalid API configuration")?;
    let service = CustomerService::new(Arc::new(client));
    let (backend, mut rx) = Backend::new(service, config_service, runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(&config);
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    let restored = restore_terminal(&mut terminal);
    exit_result(result, restored)
}

/// 合并主循环和终端恢复的结果，主循环的错误优先
fn exit_result(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), restored) => {
            log::error!("exiting with error: {e:#}");
            if let Err(restore) = restored {
                log::error!("failed to restore terminal: {restore:#}");
            }
            Err(e)
        }
        (Ok(()), restored) => restored.context("failed to restore terminal"),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn loop_error_survives_failed_restore() {
        let result = exit_result(Err(anyhow!("loop failed")), Err(anyhow!("tty gone")));
        assert_eq!(result.unwrap_err().to_string(), "loop failed");
    }

    #[test]
    fn restore_error_reported_after_clean_loop() {
        let result = exit_result(Ok(()), Err(anyhow!("tty gone")));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to restore terminal");
        assert_eq!(err.root_cause().to_string(), "tty gone");
    }

    #[test]
    fn clean_exit() {
        assert!(exit_result(Ok(()), Ok(())).is_ok());
    }
}
