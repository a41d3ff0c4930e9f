//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

use article_styler_core::parse_hex_color;

/// 获取界面颜色方案（界面本身始终深色，文章区颜色来自表单）
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 把表单里的 "#RRGGBB" 值转成终端颜色
///
/// 固定选项集合里的值都是合法的；万一遇到非法值，
/// 记一条日志并退回前景色，不让渲染崩掉。
pub fn css_color(value: &str) -> Color {
    match parse_hex_color(value) {
        Ok((r, g, b)) => Color::Rgb(r, g, b),
        Err(err) => {
            log::warn!("bad color value {value:?}: {err}");
            colors().fg
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 普通边框样式
    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(62, 62, 62))
    }

    /// 焦点边框样式
    pub fn border_focused() -> Style {
        Style::default().fg(Color::Rgb(0, 122, 204))
    }

    /// 选中项样式
    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Rgb(38, 79, 120))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(212, 212, 212))
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_styler_core::{BACKGROUND_COLORS, FONT_COLORS};

    #[test]
    fn every_fixed_color_maps_to_rgb() {
        for option in FONT_COLORS.iter().chain(BACKGROUND_COLORS.iter()) {
            assert!(matches!(css_color(option.value), Color::Rgb(..)));
        }
    }

    #[test]
    fn bad_value_falls_back_to_foreground() {
        assert_eq!(css_color("not-a-color"), colors().fg);
    }
}
