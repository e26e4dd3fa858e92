//! 设置页面状态

use crate::backend::AppConfig;
use crate::i18n::Language;

/// 可选的每页行数
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 20];

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Language,
    PageSize,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Language, SettingItem::PageSize]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }
}

/// 设置页面状态
#[derive(Debug)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前语言
    pub language: Language,
    /// 每页行数
    pub page_size: u32,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            language: Language::default(),
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl SettingsState {
    /// 从配置创建
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            selected_index: 0,
            language: config.language(),
            page_size: config.page_size,
        }
    }

    /// 获取设置项数量
    pub fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Language) => self.language = self.language.next(),
            Some(SettingItem::PageSize) => self.page_size = self.cycle_page_size(true),
            None => {}
        }
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Language) => self.language = self.language.prev(),
            Some(SettingItem::PageSize) => self.page_size = self.cycle_page_size(false),
            None => {}
        }
    }

    /// 写回配置
    pub fn apply_to(&self, config: &mut AppConfig) {
        config.set_language(self.language);
        config.page_size = self.page_size;
    }

    /// 不在候选列表中的值（例如来自环境变量）从第一个候选开始
    fn cycle_page_size(&self, forward: bool) -> u32 {
        let len = PAGE_SIZE_OPTIONS.len();
        let next = match PAGE_SIZE_OPTIONS.iter().position(|s| *s == self.page_size) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        PAGE_SIZE_OPTIONS[next]
    }
}
