//! 业务逻辑服务层

mod customer_service;

pub use customer_service::{CustomerService, SaveOutcome};

use crate::error::CoreError;

/// 按错误是否预期选择日志级别
pub(crate) fn log_failure(operation: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
}
