//! 样式选项类型

use serde::Serialize;

/// 一个可选的样式值
///
/// 选项来自固定的预定义集合（见 `crate::options`），运行时不可编辑。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleOption {
    /// 显示标签（UI 文本）
    pub label: &'static str,
    /// CSS 值（如 `#FFFFFF`、`18px`、`Ubuntu, sans-serif`）
    pub value: &'static str,
    /// 可选的样式类名
    pub class_name: Option<&'static str>,
}

impl StyleOption {
    /// 创建不带类名的选项
    #[must_use]
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: None,
        }
    }

    /// 创建带类名的选项
    #[must_use]
    pub const fn with_class(
        label: &'static str,
        value: &'static str,
        class_name: &'static str,
    ) -> Self {
        Self {
            label,
            value,
            class_name: Some(class_name),
        }
    }
}

// 选项相等性按 value 比较，而不是按对象标识
impl PartialEq for StyleOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for StyleOption {}
