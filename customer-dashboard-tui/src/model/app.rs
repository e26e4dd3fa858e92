//! 应用主状态结构

use super::{
    CustomersState, DetailState, FocusPanel, ModalState, NavigationState, Page, SettingsState,
};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前配置（设置页修改后整体写回）
    pub config: AppConfig,

    // === 各页面状态 ===
    /// 客户列表页面状态
    pub customers: CustomersState,
    /// 客户详情页面状态
    pub detail: DetailState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            config: config.clone(),
            customers: CustomersState::new(config.page_size),
            detail: DetailState::new(),
            settings: SettingsState::from_config(config),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
