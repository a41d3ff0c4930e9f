//! 滑出设置面板（抽屉）组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use article_styler_core::StyleField;

use crate::model::{App, FormRow};
use crate::view::layout;
use crate::view::theme::{colors, Styles};

/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 28;

/// 渲染抽屉面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 抽屉覆盖在文章之上，先清掉底下的内容
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Настройки статьи ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let rows = layout::drawer_rows(area);
    let focused = app.panel.focused_row();

    for (i, row) in FormRow::all().iter().enumerate() {
        let is_focused = *row == focused;
        match row {
            FormRow::Field(field) => {
                render_field_row(app, frame, rows[i], *field, is_focused);
            }
            FormRow::Reset => {
                render_button(frame, rows[6], "Сбросить", is_focused);
            }
            FormRow::Apply => {
                render_button(frame, rows[7], "Применить", is_focused);
            }
        }
    }
}

/// 渲染切换控件（始终可见，点中它不算"外部按下"）
pub fn render_toggle(app: &App, frame: &mut Frame, area: Rect) {
    let label = if app.panel.is_open() { " ⚙ ▶ " } else { " ⚙ ◀ " };
    let style = if app.panel.is_open() {
        Styles::selected()
    } else {
        Style::default().bg(colors().border).fg(colors().fg)
    };
    frame.render_widget(Paragraph::new(label).style(style), area);
}

/// 渲染单个字段行：标签一行，值一行（◀ value ▶）
fn render_field_row(app: &App, frame: &mut Frame, area: Rect, field: StyleField, is_focused: bool) {
    let c = colors();
    let option = app.form.state().get(field);

    let label_style = if is_focused {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_focused {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };
    let arrow_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(c.border)
    };

    let prefix = if is_focused { "▶ " } else { "  " };

    // 使用 unicode-width 计算显示宽度，值居中在 ◀ ▶ 之间
    let value_width = option.label.width();
    let available = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available.saturating_sub(value_width) / 2;
    let right_padding = available
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    let lines = vec![
        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(field.title(), label_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("◀ ", arrow_style),
            Span::raw(format!("{:width$}", "", width = left_padding)),
            Span::styled(option.label, value_style),
            Span::raw(format!("{:width$}", "", width = right_padding)),
            Span::styled(" ▶", arrow_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染按钮行
fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let c = colors();
    let style = if is_focused {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let width = label.width();
    let padding = (usize::from(area.width).saturating_sub(width)) / 2;
    let line = Line::from(vec![
        Span::raw(format!("{:width$}", "", width = padding)),
        Span::styled(label.to_string(), style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
