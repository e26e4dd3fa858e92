//! 导航更新逻辑

use super::open_page;
use crate::backend::Command;
use crate::message::NavigationMessage;
use crate::model::{App, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),

        NavigationMessage::SelectNext => app.navigation.select_next(),

        NavigationMessage::Confirm => {
            let id = app.navigation.current_id()?;
            return open_page(app, page_from_nav_id(id));
        }

        NavigationMessage::SelectFirst => app.navigation.select_first(),

        NavigationMessage::SelectLast => app.navigation.select_last(),
    }
    None
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Customers => Page::Customers,
        NavItemId::Settings => Page::Settings,
    }
}
