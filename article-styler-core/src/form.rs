//! 表单状态服务
//!
//! 持有「已提交」与「草稿」两份文章样式状态，
//! 并向面板暴露页面容器契约：`state` / `change` / `apply` / `reset`。

use crate::options::default_article_state;
use crate::types::{ArticleState, StyleVars};

/// 文章样式表单
///
/// 不变量：已提交状态只在 `apply` / `reset` 内变更；
/// 草稿状态只通过 `change` 或 `reset` 变更。
/// 状态记录从不原地修改，每次更新都是整条记录替换。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleForm {
    /// 已提交状态（投影到文章视图）
    committed: ArticleState,
    /// 草稿状态（面板中正在编辑）
    draft: ArticleState,
}

impl ArticleForm {
    /// 创建表单，草稿与已提交状态均为默认值
    #[must_use]
    pub const fn new() -> Self {
        Self {
            committed: default_article_state(),
            draft: default_article_state(),
        }
    }

    /// 当前草稿状态（供面板读取）
    #[must_use]
    pub const fn state(&self) -> ArticleState {
        self.draft
    }

    /// 当前已提交状态
    #[must_use]
    pub const fn committed(&self) -> ArticleState {
        self.committed
    }

    /// 已提交状态的样式变量投影
    #[must_use]
    pub const fn style_vars(&self) -> StyleVars {
        self.committed.style_vars()
    }

    /// 整条替换草稿状态
    ///
    /// 面板在每次单字段编辑后调用（面板负责用
    /// [`ArticleState::with_field`] 构造完整的下一条记录）。
    pub fn change(&mut self, next: ArticleState) {
        self.draft = next;
    }

    /// 提交：将草稿复制到已提交状态，草稿保持不变
    pub fn apply(&mut self) {
        self.committed = self.draft;
        log::debug!("form applied: {:?}", self.committed.style_vars());
    }

    /// 重置：草稿与已提交状态都恢复为默认值
    pub fn reset(&mut self) {
        self.committed = default_article_state();
        self.draft = default_article_state();
        log::debug!("form reset to defaults");
    }
}

impl Default for ArticleForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{
        default_article_state, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS,
    };
    use crate::types::StyleField;

    #[test]
    fn apply_copies_draft_and_leaves_draft_unchanged() {
        let mut form = ArticleForm::new();
        let edited = form
            .state()
            .with_field(StyleField::FontSize, FONT_SIZE_OPTIONS[1]);
        form.change(edited);

        // 编辑只进入草稿，不触碰已提交状态
        assert_eq!(form.committed(), default_article_state());

        form.apply();
        assert_eq!(form.committed(), edited);
        assert_eq!(form.state(), edited);
    }

    #[test]
    fn reset_restores_both_states_regardless_of_history() {
        let mut form = ArticleForm::new();
        form.change(
            form.state()
                .with_field(StyleField::BackgroundColor, BACKGROUND_COLORS[3])
                .with_field(StyleField::ContentWidth, CONTENT_WIDTH_OPTIONS[1]),
        );
        form.apply();
        form.change(
            form.state()
                .with_field(StyleField::FontSize, FONT_SIZE_OPTIONS[2]),
        );

        form.reset();
        assert_eq!(form.state(), default_article_state());
        assert_eq!(form.committed(), default_article_state());

        // 幂等：再次重置不改变任何东西
        form.reset();
        assert_eq!(form.state(), default_article_state());
        assert_eq!(form.committed(), default_article_state());
    }

    #[test]
    fn background_color_scenario() {
        // 默认字号 18px；选择背景色 «Светлый» (#FFFFFF)，提交后
        // bg-color 变量为 #FFFFFF，font-size 保持 18px。
        let mut form = ArticleForm::new();
        assert_eq!(form.state().font_size.value, "18px");

        let light = BACKGROUND_COLORS[0];
        assert_eq!(light.label, "Светлый");
        form.change(
            form.state()
                .with_field(StyleField::BackgroundColor, light),
        );

        let draft = form.state();
        assert_eq!(draft.background_color.value, "#FFFFFF");
        assert_eq!(draft.font_family, default_article_state().font_family);
        assert_eq!(draft.font_color, default_article_state().font_color);
        assert_eq!(draft.content_width, default_article_state().content_width);

        form.apply();
        let vars = form.style_vars();
        assert_eq!(vars.bg_color, "#FFFFFF");
        assert_eq!(vars.font_size, "18px");
    }
}
