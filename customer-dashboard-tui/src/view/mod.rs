//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态，也不产生消息。
//! 每一帧由主循环调用 render()，整个界面都从当前的 App 重新画出。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 + 内容 + 状态栏 + 弹窗
//!         mod components;         // 跨页面复用的组件
//!             navigation.rs       //     左侧导航
//!             statusbar.rs        //     底部状态栏（快捷键提示 + 状态消息）
//!             form.rs             //     客户表单（详情编辑和新建弹窗共用）
//!             modal.rs            //     弹窗（新建、确认删除、结果、帮助）
//!         mod pages;              // 右侧内容区的各个页面
//!             home.rs / customers.rs / detail.rs / settings.rs
//!         pub mod theme;          // 颜色与常用样式
//!
//!         pub use layout::render;
//!
//!
//!     布局：
//!
//!         ┌──────────────────────── 标题栏 ─────────────────────────┐
//!         ├──────────┬──────────────────────────────────────────────┤
//!         │  导航    │                                              │
//!         │  (20%)   │            当前页面 (80%)                     │
//!         │          │                                              │
//!         ├──────────┴──────────────────────────────────────────────┤
//!         └──────────────────────── 状态栏 ─────────────────────────┘
//!
//!     弹窗最后绘制，覆盖在以上内容之上。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
