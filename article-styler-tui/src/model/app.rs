//! 应用主状态结构

use article_styler_core::ArticleForm;

use super::PanelState;

/// 应用主状态（页面容器）
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 文章样式表单（草稿 + 已提交状态）
    pub form: ArticleForm,

    /// 设置面板状态
    pub panel: PanelState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: ArticleForm::new(),
            panel: PanelState::new(),
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
