//! 固定选项集合
//!
//! 五组预定义的样式选项以及默认状态。作为静态配置数据提供，
//! 运行时不可编辑；每个字段的取值只能来自这里。

use crate::types::{ArticleState, StyleField, StyleOption};

/// 字体选项
pub const FONT_FAMILY_OPTIONS: [StyleOption; 5] = [
    StyleOption::with_class("Open Sans", "'Open Sans', sans-serif", "font-open-sans"),
    StyleOption::with_class("Ubuntu", "'Ubuntu', sans-serif", "font-ubuntu"),
    StyleOption::with_class(
        "Cormorant Garamond",
        "'Cormorant Garamond', serif",
        "font-cormorant-garamond",
    ),
    StyleOption::with_class("Days One", "'Days One', sans-serif", "font-days-one"),
    StyleOption::with_class("Merriweather", "'Merriweather', serif", "font-merriweather"),
];

/// 字号选项
pub const FONT_SIZE_OPTIONS: [StyleOption; 3] = [
    StyleOption::with_class("18", "18px", "font-size-18"),
    StyleOption::with_class("25", "25px", "font-size-25"),
    StyleOption::with_class("38", "38px", "font-size-38"),
];

/// 字体颜色选项
pub const FONT_COLORS: [StyleOption; 5] = [
    StyleOption::new("Чёрный", "#000000"),
    StyleOption::new("Белый", "#FFFFFF"),
    StyleOption::new("Серый", "#C4C4C4"),
    StyleOption::new("Розовый", "#FD24AF"),
    StyleOption::new("Бирюзовый", "#38D9A9"),
];

/// 背景颜色选项
pub const BACKGROUND_COLORS: [StyleOption; 5] = [
    StyleOption::new("Светлый", "#FFFFFF"),
    StyleOption::new("Тёмный", "#232426"),
    StyleOption::new("Серый", "#C4C4C4"),
    StyleOption::new("Розовый", "#FD24AF"),
    StyleOption::new("Бирюзовый", "#38D9A9"),
];

/// 内容宽度选项
pub const CONTENT_WIDTH_OPTIONS: [StyleOption; 2] = [
    StyleOption::with_class("Широкий", "1394px", "width-wide"),
    StyleOption::with_class("Узкий", "948px", "width-narrow"),
];

/// 默认文章样式状态（草稿与已提交状态的共同初始值）
#[must_use]
pub const fn default_article_state() -> ArticleState {
    ArticleState {
        font_family: FONT_FAMILY_OPTIONS[0],
        font_size: FONT_SIZE_OPTIONS[0],
        font_color: FONT_COLORS[0],
        background_color: BACKGROUND_COLORS[0],
        content_width: CONTENT_WIDTH_OPTIONS[0],
    }
}

impl StyleField {
    /// 该字段的固定选项集合
    #[must_use]
    pub fn options(self) -> &'static [StyleOption] {
        match self {
            StyleField::FontFamily => &FONT_FAMILY_OPTIONS,
            StyleField::FontSize => &FONT_SIZE_OPTIONS,
            StyleField::FontColor => &FONT_COLORS,
            StyleField::BackgroundColor => &BACKGROUND_COLORS,
            StyleField::ContentWidth => &CONTENT_WIDTH_OPTIONS,
        }
    }

    /// 该字段在面板中的标题
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            StyleField::FontFamily => "Шрифт",
            StyleField::FontSize => "Размер шрифта",
            StyleField::FontColor => "Цвет шрифта",
            StyleField::BackgroundColor => "Цвет фона",
            StyleField::ContentWidth => "Ширина контента",
        }
    }
}
