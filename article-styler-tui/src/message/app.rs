//! 应用主消息枚举

use super::{FormMessage, PanelMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 设置面板相关消息
    Panel(PanelMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
