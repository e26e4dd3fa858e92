//! 表单状态错误

use serde::Serialize;
use thiserror::Error;

/// 非法的字段编辑
///
/// 这些错误意味着调用方有 bug：状态保持不变，调用方不应吞掉它们。
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum StateError {
    /// 路径结构不对（空段、段数错误、索引不是数字）
    #[error("Malformed field path '{path}'")]
    MalformedPath { path: String },

    /// 路径中有未知字段
    #[error("Unknown field '{segment}' in path '{path}'")]
    UnknownField { path: String, segment: String },

    /// 列表索引越界
    #[error("Index {index} out of range for {section} (length {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    /// 值类型与字段不符
    #[error("Field '{field}' expects a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// 字段不属于当前客户类型
    #[error("Field '{field}' does not apply to {customer_type} customers")]
    FieldNotApplicable {
        field: String,
        customer_type: &'static str,
    },

    /// 字段只能通过专门的操作修改
    #[error("Field '{field}' cannot be edited through a field path")]
    ReservedField { field: String },
}
