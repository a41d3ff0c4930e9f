//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, PanelMessage};
use crate::model::App;
use crate::view::layout;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App, area: Rect) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),        // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app, area), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop,                          // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论面板是否展开）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Tab: 切换设置面板
    if DefaultKeymap::TOGGLE_PANEL.matches(&key) {
        return AppMessage::Panel(PanelMessage::Toggle);
    }

    if app.panel.is_open() {
        handle_panel_keys(key)
    } else {
        handle_page_keys(key)
    }
}

/// 处理面板展开时的按键
fn handle_panel_keys(key: KeyEvent) -> AppMessage {
    // Esc: 收起面板
    if DefaultKeymap::CLOSE_PANEL.matches(&key) {
        return AppMessage::Panel(PanelMessage::Toggle);
    }

    match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Panel(PanelMessage::FocusPrev),

        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Panel(PanelMessage::FocusNext),

        // ←: 切换到上一个选项
        KeyCode::Left => AppMessage::Form(FormMessage::PrevOption),

        // →: 切换到下一个选项
        KeyCode::Right => AppMessage::Form(FormMessage::NextOption),

        // Enter: 激活聚焦行（按钮行触发 Применить/Сбросить）
        KeyCode::Enter => AppMessage::Form(FormMessage::Activate),

        _ => AppMessage::Noop,
    }
}

/// 处理面板收起时的按键
fn handle_page_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // q: 退出（面板收起时没有文本输入，可以用裸字符）
        KeyCode::Char('q') => AppMessage::Quit,

        // s: 打开设置面板
        KeyCode::Char('s') => AppMessage::Panel(PanelMessage::Toggle),

        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
///
/// 只响应左键按下，与 mousedown 语义对齐：命中判定按
/// 切换控件 → 面板内部 → 其余区域 的顺序进行，
/// 所以点中切换控件永远不算"外部按下"。
fn handle_mouse_event(mouse: MouseEvent, app: &App, area: Rect) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }

    let position = Position::new(mouse.column, mouse.row);

    if layout::toggle_rect(area).contains(position) {
        return AppMessage::Panel(PanelMessage::Toggle);
    }

    if app.panel.is_open() {
        let drawer = layout::drawer_rect(area);
        if drawer.contains(position) {
            return match layout::form_row_at(drawer, position) {
                Some(index) => AppMessage::Panel(PanelMessage::ClickRow(index)),
                None => AppMessage::Noop,
            };
        }
        return AppMessage::Panel(PanelMessage::OutsidePointerDown);
    }

    AppMessage::Noop
}
