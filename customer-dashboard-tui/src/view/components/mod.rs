//! 可复用的界面组件

pub mod form;
pub mod modal;
pub mod navigation;
pub mod statusbar;
