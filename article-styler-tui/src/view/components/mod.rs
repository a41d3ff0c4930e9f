//! 可复用 UI 组件

pub mod drawer;
pub mod statusbar;
