//! 客户表单状态管理
//!
//! ```text
//! ┌──────────────┐  "address.street"   ┌──────────────┐
//! │  UI 绑定层    │ ──── parse() ─────► │ FieldLocator │
//! └──────────────┘                     └──────┬───────┘
//!                                             │ apply_field_edit(locator, value)
//!                                             ▼
//!                              ┌───────────────────────────┐
//!                              │       CustomerForm        │
//!                              │  original ──┐  current    │
//!                              │             └─ diff ─► CustomerPatch
//!                              └───────────────────────────┘
//! ```
//!
//! - 顶层字段 `TopLevel(field)`、地址字段 `Nested(section, field)`、
//!   联系方式字段 `ListItem(section, index, field)`
//! - `type` 与 `isCorrespondenceAddress` 只能通过
//!   [`CustomerForm::set_customer_type`] / [`CustomerForm::set_correspondence_toggle`] 修改
//! - 非法路径、越界索引、类型不符都返回 [`StateError`]，状态不变

mod error;
mod locator;
mod state;
mod value;

pub use error::StateError;
pub use locator::{
    AddressField, AddressSection, ContactField, ContactSection, CustomerField, FieldKind,
    FieldLocator,
};
pub use state::{blank_customer, CustomerForm, DEFAULT_ADDRESS_TYPE, DEFAULT_STATE};
pub use value::FieldValue;
