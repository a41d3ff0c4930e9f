//! 面板消息处理
//!
//! 开合、行焦点与外部点击都走 core 的 PanelVisibility 状态机，
//! 这里只负责把消息转发过去并维护聚焦行。

use crate::message::PanelMessage;
use crate::model::App;

use super::form;

/// 处理面板消息
pub fn update(app: &mut App, msg: PanelMessage) {
    match msg {
        PanelMessage::Toggle => {
            let was_open = app.panel.is_open();
            app.panel.visibility.toggle();
            if !was_open && app.panel.is_open() {
                // 每次展开都从第一行开始
                app.panel.focus_row(0);
                app.clear_status();
            }
        }

        PanelMessage::OutsidePointerDown => {
            app.panel.visibility.outside_pointer_down();
        }

        PanelMessage::FocusPrev => {
            if app.panel.is_open() {
                app.panel.focus_previous();
            }
        }

        PanelMessage::FocusNext => {
            if app.panel.is_open() {
                app.panel.focus_next();
            }
        }

        PanelMessage::ClickRow(index) => {
            if app.panel.is_open() {
                app.panel.focus_row(index);
                if app.panel.focused_row().is_button() {
                    form::activate_focused(app);
                }
            }
        }
    }
}
