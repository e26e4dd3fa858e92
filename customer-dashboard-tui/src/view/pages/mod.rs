//! 内容区页面

pub mod customers;
pub mod detail;
pub mod home;
pub mod settings;
