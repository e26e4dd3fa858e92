//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod customers;
mod detail;
mod editor;
mod modal;
mod settings;

pub use customers::{CustomerRow, CustomersState};
pub use detail::{DetailMode, DetailState, PendingAction};
pub use editor::{CustomerEditor, EditorField};
pub use modal::{Modal, ModalState, NewCustomerDialog, Severity};
pub use settings::{SettingItem, SettingsState};
