//! 文章样式状态记录

use serde::Serialize;

use super::{StyleOption, StyleVars};

/// 样式字段枚举
///
/// 面板中每个选择器绑定一个字段；`all()` 的顺序即表单中的显示顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl StyleField {
    /// 获取所有字段（表单顺序）
    #[must_use]
    pub const fn all() -> &'static [StyleField] {
        &[
            StyleField::FontFamily,
            StyleField::FontSize,
            StyleField::FontColor,
            StyleField::BackgroundColor,
            StyleField::ContentWidth,
        ]
    }
}

/// 文章样式状态
///
/// 恒有五个字段全部持值，不存在「未设置」状态；
/// 每个字段的值始终来自该字段对应的固定选项集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleState {
    /// 字体
    pub font_family: StyleOption,
    /// 字号
    pub font_size: StyleOption,
    /// 字体颜色
    pub font_color: StyleOption,
    /// 背景颜色
    pub background_color: StyleOption,
    /// 内容宽度
    pub content_width: StyleOption,
}

impl ArticleState {
    /// 读取指定字段的当前值
    #[must_use]
    pub const fn get(&self, field: StyleField) -> StyleOption {
        match field {
            StyleField::FontFamily => self.font_family,
            StyleField::FontSize => self.font_size,
            StyleField::FontColor => self.font_color,
            StyleField::BackgroundColor => self.background_color,
            StyleField::ContentWidth => self.content_width,
        }
    }

    /// 复制整条记录并只覆盖一个字段
    ///
    /// 这是唯一的变更原语：单字段编辑也总是产生一条完整的新记录，
    /// 保证边界上的 `change(next_state)` 契约始终收到全量状态。
    #[must_use]
    pub const fn with_field(self, field: StyleField, option: StyleOption) -> Self {
        let mut next = self;
        match field {
            StyleField::FontFamily => next.font_family = option,
            StyleField::FontSize => next.font_size = option,
            StyleField::FontColor => next.font_color = option,
            StyleField::BackgroundColor => next.background_color = option,
            StyleField::ContentWidth => next.content_width = option,
        }
        next
    }

    /// 投影为样式变量（供宿主渲染上下文读取）
    #[must_use]
    pub const fn style_vars(&self) -> StyleVars {
        StyleVars {
            font_family: self.font_family.value,
            font_size: self.font_size.value,
            font_color: self.font_color.value,
            container_width: self.content_width.value,
            bg_color: self.background_color.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{default_article_state, BACKGROUND_COLORS, FONT_SIZE_OPTIONS};

    #[test]
    fn with_field_replaces_exactly_one_field() {
        let state = default_article_state();
        let next = state.with_field(StyleField::FontSize, FONT_SIZE_OPTIONS[2]);

        assert_eq!(next.font_size, FONT_SIZE_OPTIONS[2]);
        assert_eq!(next.font_family, state.font_family);
        assert_eq!(next.font_color, state.font_color);
        assert_eq!(next.background_color, state.background_color);
        assert_eq!(next.content_width, state.content_width);
    }

    #[test]
    fn edit_sequence_keeps_last_write_per_field() {
        let state = default_article_state()
            .with_field(StyleField::FontSize, FONT_SIZE_OPTIONS[1])
            .with_field(StyleField::BackgroundColor, BACKGROUND_COLORS[1])
            .with_field(StyleField::FontSize, FONT_SIZE_OPTIONS[2]);

        assert_eq!(state.font_size, FONT_SIZE_OPTIONS[2]);
        assert_eq!(state.background_color, BACKGROUND_COLORS[1]);
        // 未编辑过的字段保持默认
        assert_eq!(state.font_family, default_article_state().font_family);
    }

    #[test]
    fn style_vars_mirror_field_values() {
        let vars = default_article_state().style_vars();

        assert_eq!(vars.font_size, "18px");
        assert_eq!(vars.bg_color, "#FFFFFF");
        assert_eq!(vars.container_width, "1394px");
    }
}
