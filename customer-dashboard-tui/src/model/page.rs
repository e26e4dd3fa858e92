//! 页面状态定义

use customer_dashboard_client::CustomerId;

use super::NavItemId;
use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 客户列表
    Customers,
    /// 客户详情
    CustomerDetail { id: CustomerId },
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        let texts = t();
        match self {
            Page::Home => texts.nav.home,
            Page::Customers => texts.customers.title,
            Page::CustomerDetail { .. } => texts.detail.title,
            Page::Settings => texts.settings.title,
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::CustomerDetail { .. })
    }

    /// 对应的导航项
    pub fn nav_item(&self) -> NavItemId {
        match self {
            Page::Home => NavItemId::Home,
            Page::Customers | Page::CustomerDetail { .. } => NavItemId::Customers,
            Page::Settings => NavItemId::Settings,
        }
    }
}
