//! 文章页面视图
//!
//! 文章区的颜色和栏宽只读已提交的样式，草稿的编辑在
//! Применить 之前不会影响这里的渲染。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use article_styler_core::parse_px;

use crate::model::App;
use crate::view::theme::css_color;

/// 终端上按比例换算栏宽时的基准像素宽度
const VIEWPORT_PX: u32 = 1600;

/// 示例文章正文
const ARTICLE_PARAGRAPHS: &[&str] = &[
    "Типографика управляет тем, как читатель воспринимает текст задолго \
     до того, как он вникнет в его смысл. Гарнитура, кегль и цвет задают \
     интонацию статьи: строгую, дружелюбную или торжественную.",
    "Ширина колонки влияет на скорость чтения. Слишком широкая строка \
     заставляет глаз терять начало следующей, слишком узкая рвёт фразы \
     на обрывки. Подберите ширину так, чтобы в строке помещалось \
     комфортное число слов.",
    "Цвет фона и цвет шрифта работают в паре. Контраст должен быть \
     достаточным для чтения, но не утомлять. Откройте панель настроек, \
     подберите сочетание и нажмите «Применить», чтобы увидеть статью \
     в новом оформлении.",
];

/// 渲染文章页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let vars = app.form.style_vars();
    let committed = app.form.committed();

    let bg = css_color(vars.bg_color);
    let fg = css_color(vars.font_color);

    // 整个页面先铺背景色
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    // 栏宽按比例换算成列数后水平居中
    let column_width = content_columns(area.width, vars.container_width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(column_width),
            Constraint::Fill(1),
        ])
        .split(area);
    let content = columns[1];

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Как настроить стиль статьи",
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ),
        // 终端没有字体轴，选中的гарнитура和кегль显示在副标题里
        Line::styled(
            format!("{} · {}", committed.font_family.label, committed.font_size.label),
            Style::default().fg(fg).add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ];
    for paragraph in ARTICLE_PARAGRAPHS {
        lines.push(Line::styled(*paragraph, Style::default().fg(fg)));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, content);
}

/// 把 "1394px" 这样的栏宽换算成终端列数
fn content_columns(total: u16, container_width: &str) -> u16 {
    let Ok(px) = parse_px(container_width) else {
        return total;
    };
    // 先在 u32 域内封顶再缩窄，避免大 px 值在转换时截断
    let scaled = u32::from(total) * u32::from(px) / VIEWPORT_PX;
    let columns = scaled.min(u32::from(total)) as u16;
    columns.clamp(20.min(total), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_option_gives_wider_column_than_narrow() {
        let wide = content_columns(120, "1394px");
        let narrow = content_columns(120, "948px");
        assert!(wide > narrow);
        assert!(wide <= 120);
    }

    #[test]
    fn bad_width_falls_back_to_full_area() {
        assert_eq!(content_columns(80, "wide"), 80);
    }

    #[test]
    fn tiny_terminal_never_exceeds_area() {
        assert!(content_columns(10, "1394px") <= 10);
    }

    #[test]
    fn oversized_px_value_saturates_at_the_area_width() {
        // 固定集合里不存在这么大的值，但换算必须在 u32 域内封顶
        assert_eq!(content_columns(60000, "65535px"), 60000);
        assert_eq!(content_columns(80, "65535px"), 80);
    }
}
