//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `home.*`, `customers.*`, `detail.*`
//! 4. **表单字段标签归 `fields.*`**：详情页和新建弹窗共用
//! 5. **操作结果归 `feedback.*`**：反馈弹窗与状态栏共用
//! 6. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 客户列表页面文本
    pub customers: CustomersTexts,
    /// 客户详情页面文本
    pub detail: DetailTexts,
    /// 表单字段标签
    pub fields: FieldLabels,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 操作结果文本
    pub feedback: FeedbackTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    // 状态词
    pub loading: &'static str,
    pub no_data: &'static str,
    pub error: &'static str,
    // 是/否
    pub yes: &'static str,
    pub no: &'static str,
    // 分页
    pub page: &'static str,
    pub total: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
    pub slash: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub switch_option: &'static str,
    pub change_page: &'static str,
    pub search: &'static str,
    pub apply: &'static str,
    pub next_field: &'static str,
    pub toggle: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub customers: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub connection: &'static str,
    pub api_endpoint: &'static str,
    pub page_size: &'static str,
    pub get_started: &'static str,
}

/// 客户列表页面文本
pub struct CustomersTexts {
    pub title: &'static str,
    pub filter_by: &'static str,
    pub search_placeholder: &'static str,
    pub no_customers: &'static str,
    pub add_customer_hint: &'static str,
    /// 列表更新日期格式（chrono 格式串）
    pub date_format: &'static str,
    pub columns: CustomerColumns,
    pub attributes: FilterAttributeTexts,
}

/// 客户列表表头
pub struct CustomerColumns {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub updated_at: &'static str,
}

/// 可过滤属性名称
pub struct FilterAttributeTexts {
    pub name: &'static str,
    pub cpf: &'static str,
    pub business_name: &'static str,
    pub cnpj: &'static str,
    pub identity_document: &'static str,
}

/// 客户详情页面文本
pub struct DetailTexts {
    pub title: &'static str,
    pub loading: &'static str,
    pub unavailable: &'static str,
    pub personal_info: &'static str,
    pub address: &'static str,
    pub correspondence_address: &'static str,
    pub phone_contacts: &'static str,
    pub email_contacts: &'static str,
    pub no_contacts: &'static str,
    pub editing: &'static str,
    pub saving: &'static str,
    pub deleting: &'static str,
    pub last_updated: &'static str,
}

/// 表单字段标签
pub struct FieldLabels {
    pub customer_type: &'static str,
    pub individual: &'static str,
    pub business: &'static str,
    pub name: &'static str,
    pub cpf: &'static str,
    pub birth_date: &'static str,
    pub mother_name: &'static str,
    pub business_name: &'static str,
    pub cnpj: &'static str,
    pub identity_document: &'static str,
    pub issuing_agency: &'static str,
    pub zip_code: &'static str,
    pub street: &'static str,
    pub number: &'static str,
    pub neighborhood: &'static str,
    pub complement: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub address_type: &'static str,
    pub has_multiple_units: &'static str,
    pub use_correspondence_address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub contact_name: &'static str,
    pub is_whatsapp: &'static str,
    pub add_phone: &'static str,
    pub add_email: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub language: &'static str,
    pub page_size: &'static str,
    pub api_endpoint: &'static str,
    pub saved_hint: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    /// 新建客户弹窗
    pub new_customer: NewCustomerTexts,
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
    /// 操作结果弹窗
    pub feedback: FeedbackModalTexts,
}

/// 新建客户弹窗
pub struct NewCustomerTexts {
    pub title: &'static str,
    pub submitting: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

/// 操作结果弹窗
pub struct FeedbackModalTexts {
    pub success_title: &'static str,
    pub error_title: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 操作结果
// ============================================================================

/// 操作结果文本
pub struct FeedbackTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub unchanged: &'static str,
    pub deleted: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub load_failed: &'static str,
    pub list_failed: &'static str,
    pub not_found: &'static str,
    pub network: &'static str,
    pub validation: &'static str,
    pub settings_saved: &'static str,
    pub settings_failed: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub list_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub confirm: &'static str,
    pub back_cancel: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
    pub search: &'static str,
    pub change_page: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub next_field: &'static str,
    pub toggle: &'static str,
}
