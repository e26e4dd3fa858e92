//! 客户表单编辑消息
//!
//! 详情页编辑和新建弹窗共用。

/// 表单编辑消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 切换当前字段（类型、开关、添加联系方式）
    Toggle,
}
