//! 内容面板消息
//!
//! 处理内容面板中的操作：列表选择、搜索、分页、详情编辑等

use super::EditorMessage;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开详情）
    Confirm,

    // ========== 分页 ==========
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,

    // ========== 搜索 ==========
    /// 进入搜索输入
    FocusSearch,
    /// 搜索框输入字符
    SearchInput(char),
    /// 搜索框删除字符
    SearchBackspace,
    /// 切换过滤属性
    CycleFilterAttribute { forward: bool },
    /// 应用过滤
    ApplySearch,
    /// 退出搜索输入
    CancelSearch,

    // ========== CRUD 操作 ==========
    /// 新建客户
    Add,
    /// 编辑当前客户
    Edit,
    /// 删除当前客户
    Delete,
    /// 保存编辑
    Save,

    /// 详情编辑表单
    Editor(EditorMessage),

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
