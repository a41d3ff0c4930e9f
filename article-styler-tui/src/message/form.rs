//! 表单消息
//!
//! 处理字段编辑与表单级提交/重置

/// 表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 当前字段切换到上一个选项
    PrevOption,

    /// 当前字段切换到下一个选项
    NextOption,

    /// 激活当前聚焦的行（按钮行触发 Применить/Сбросить）
    Activate,
}
