//! 主布局渲染与命中判定
//!
//! 切换控件和抽屉面板的 Rect 在这里集中计算，
//! View 用它们渲染，Event 用它们做鼠标命中判定，
//! 保证"画在哪里"和"点中哪里"永远一致。

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 抽屉面板宽度（列）
const DRAWER_WIDTH: u16 = 36;
/// 切换控件宽度（列）
const TOGGLE_WIDTH: u16 = 6;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 文章占满整个内容区，抽屉滑出时覆盖其右侧
    pages::article::render(app, frame, content_area);

    if app.panel.is_open() {
        components::drawer::render(app, frame, drawer_rect(size));
    }

    // 切换控件画在最上层
    components::drawer::render_toggle(app, frame, toggle_rect(size));

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Article Styler v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 切换控件的位置（右上角，标题栏下方）
#[must_use]
pub fn toggle_rect(area: Rect) -> Rect {
    let width = TOGGLE_WIDTH.min(area.width);
    Rect::new(
        area.right().saturating_sub(width),
        area.y + 1,
        width,
        u16::from(area.height > 1),
    )
}

/// 抽屉面板的位置（右侧，切换控件下方，状态栏上方）
#[must_use]
pub fn drawer_rect(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    let y = area.y + 2;
    let height = area.height.saturating_sub(3);
    Rect::new(area.right().saturating_sub(width), y, width, height)
}

/// 抽屉内每一行的区域
///
/// 索引 0..=4 为字段行，5 为分隔行，6 为 Сбросить，7 为 Применить。
pub(super) fn drawer_rows(drawer: Rect) -> std::rc::Rc<[Rect]> {
    let inner = drawer.inner(Margin::new(1, 1));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 字体
            Constraint::Length(3), // размер шрифта
            Constraint::Length(3), // цвет шрифта
            Constraint::Length(3), // цвет фона
            Constraint::Length(3), // ширина контента
            Constraint::Length(1), // 分隔
            Constraint::Length(1), // Сбросить
            Constraint::Length(1), // Применить
            Constraint::Min(0),
        ])
        .split(inner)
}

/// 将抽屉内的坐标映射到表单行索引（FormRow::all() 的索引）
#[must_use]
pub fn form_row_at(drawer: Rect, position: Position) -> Option<usize> {
    let rows = drawer_rows(drawer);
    for (i, row) in rows.iter().enumerate().take(8) {
        if row.contains(position) {
            return match i {
                0..=4 => Some(i),
                6 => Some(5), // Сбросить
                7 => Some(6), // Применить
                _ => None,    // 分隔行
            };
        }
    }
    None
}
