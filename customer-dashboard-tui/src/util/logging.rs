//! 日志初始化
//!
//! TUI 占用了终端，日志只能写文件：`<data_local_dir>/customer-dashboard/logs/tui.log.<日期>`。
//! `log` 宏的记录经由 tracing-log 桥接进入同一个订阅者。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "customer-dashboard";
const LOG_FILE_PREFIX: &str = "tui.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join("logs")
}

/// 初始化按天滚动的文件日志
///
/// 返回的 guard 必须持有到程序退出，否则缓冲中的日志会丢失。
/// 日志级别由 `RUST_LOG` 控制，默认 `info`。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
