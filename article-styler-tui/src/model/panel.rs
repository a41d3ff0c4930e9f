//! 设置面板状态

use article_styler_core::{PanelVisibility, PointerListener, StyleField, VisibilityMode};

/// 面板表单中的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// 字段选择器
    Field(StyleField),
    /// Сбросить 按钮
    Reset,
    /// Применить 按钮
    Apply,
}

impl FormRow {
    /// 获取所有行（面板中的显示顺序）
    #[must_use]
    pub const fn all() -> &'static [FormRow; 7] {
        &[
            FormRow::Field(StyleField::FontFamily),
            FormRow::Field(StyleField::FontSize),
            FormRow::Field(StyleField::FontColor),
            FormRow::Field(StyleField::BackgroundColor),
            FormRow::Field(StyleField::ContentWidth),
            FormRow::Reset,
            FormRow::Apply,
        ]
    }

    /// 是否是按钮行
    #[must_use]
    pub const fn is_button(&self) -> bool {
        matches!(self, FormRow::Reset | FormRow::Apply)
    }
}

/// 把监听器的获取/释放落到日志里，方便核对作用域契约
struct LogListener;

impl PointerListener for LogListener {
    fn acquire(&mut self) {
        log::debug!("outside-pointer listener acquired");
    }

    fn release(&mut self) {
        log::debug!("outside-pointer listener released");
    }
}

/// 设置面板状态
pub struct PanelState {
    /// 可见性状态机（core）
    pub visibility: PanelVisibility,
    /// 当前聚焦的行（FormRow::all() 的索引）
    pub focused: usize,
}

impl PanelState {
    /// 创建自管理模式的面板（初始 Closed）
    #[must_use]
    pub fn new() -> Self {
        Self {
            visibility: PanelVisibility::with_listener(
                VisibilityMode::SelfManaged,
                Box::new(LogListener),
            ),
            focused: 0,
        }
    }

    /// 面板当前是否展开
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// 当前聚焦的行
    #[must_use]
    pub fn focused_row(&self) -> FormRow {
        FormRow::all()[self.focused.min(FormRow::all().len() - 1)]
    }

    /// 聚焦上一行
    pub fn focus_previous(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    /// 聚焦下一行
    pub fn focus_next(&mut self) {
        if self.focused < FormRow::all().len() - 1 {
            self.focused += 1;
        }
    }

    /// 聚焦指定行（越界则忽略）
    pub fn focus_row(&mut self, index: usize) {
        if index < FormRow::all().len() {
            self.focused = index;
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
