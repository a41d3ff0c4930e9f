//! 面板消息
//!
//! 处理滑出设置面板的开合、行焦点与外部点击

/// 面板消息
#[derive(Debug, Clone)]
pub enum PanelMessage {
    /// 切换控件被激活（键盘或鼠标）
    Toggle,

    /// 在面板与切换控件之外发生指针按下
    OutsidePointerDown,

    /// 聚焦上一行
    FocusPrev,

    /// 聚焦下一行
    FocusNext,

    /// 鼠标点中面板内的某一行
    ClickRow(usize),
}
