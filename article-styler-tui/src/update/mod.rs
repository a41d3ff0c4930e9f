//！┌──────────────────────────────────────────────────────────────────────┐
//！│                            主循环 (app.rs)                           │
//！│                                                                      │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐          │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │          │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │          │
//！│   └─────────┘          │           │          └────┬─────┘          │
//！│        ▲               │ AppMessage│               │ 修改           │
//！│        │               │ PanelMsg  │               ▼                │
//！│   ┌─────────┐          │ FormMsg   │          ┌──────────┐          │
//！│   │  View   │          └───────────┘   ┌───── │  Model   │          │
//！│   │   层    │ ◀──────── 读取 ──────────┘      │    层    │          │
//！│   └────┬────┘                                 └────┬─────┘          │
//！│        │                                           │                │
//！│        ▼                                           ▼                │
//！│   ┌─────────┐                           ┌─────────────────────┐     │
//！│   │  终端   │                           │ article-styler-core │     │
//！│   │ (Util)  │                           │   (表单/面板契约)   │     │
//！│   └─────────┘                           └─────────────────────┘     │
//！└──────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod panel;          // 面板子消息处理（开合、焦点、外部点击）
//!         mod form;           // 表单子消息处理（字段编辑、提交、重置）
//!
//! 每个 Message 变体都对应一个状态变更；复杂的子消息委托给子模块处理。
//! 单字段编辑在 form.rs 中通过 ArticleState::with_field 构造完整的
//! 下一条记录，再整条传给 ArticleForm::change —— 边界上的 onChange
//! 契约永远收到全量状态。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod form;
mod panel;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Panel(panel_msg) => {
            panel::update(app, panel_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{FormMessage, PanelMessage};
    use article_styler_core::{default_article_state, StyleField, BACKGROUND_COLORS};

    fn open_panel(app: &mut App) {
        update(app, AppMessage::Panel(PanelMessage::Toggle));
        assert!(app.panel.is_open());
    }

    #[test]
    fn panel_starts_closed_and_toggles_open_and_back() {
        let mut app = App::new();
        assert!(!app.panel.is_open());

        update(&mut app, AppMessage::Panel(PanelMessage::Toggle));
        assert!(app.panel.is_open());

        update(&mut app, AppMessage::Panel(PanelMessage::Toggle));
        assert!(!app.panel.is_open());
    }

    #[test]
    fn outside_press_closes_open_panel_only() {
        let mut app = App::new();

        // Closed 时外部按下不产生任何变化
        update(&mut app, AppMessage::Panel(PanelMessage::OutsidePointerDown));
        assert!(!app.panel.is_open());

        open_panel(&mut app);
        update(&mut app, AppMessage::Panel(PanelMessage::OutsidePointerDown));
        assert!(!app.panel.is_open());
    }

    #[test]
    fn option_cycling_edits_only_the_focused_field() {
        let mut app = App::new();
        open_panel(&mut app);

        // 聚焦第四行（背景颜色）
        for _ in 0..3 {
            update(&mut app, AppMessage::Panel(PanelMessage::FocusNext));
        }
        update(&mut app, AppMessage::Form(FormMessage::NextOption));

        let draft = app.form.state();
        assert_eq!(draft.background_color, BACKGROUND_COLORS[1]);
        // 其余字段保持默认
        assert_eq!(draft.font_family, default_article_state().font_family);
        assert_eq!(draft.font_size, default_article_state().font_size);

        // 编辑只进入草稿
        assert_eq!(app.form.committed(), default_article_state());
    }

    #[test]
    fn option_cycling_wraps_around() {
        let mut app = App::new();
        open_panel(&mut app);

        // 第一行是字体字段；向前翻一个应回绕到集合末尾
        update(&mut app, AppMessage::Form(FormMessage::PrevOption));
        let options = StyleField::FontFamily.options();
        assert_eq!(app.form.state().font_family, options[options.len() - 1]);
    }

    #[test]
    fn activate_apply_commits_draft() {
        let mut app = App::new();
        open_panel(&mut app);

        for _ in 0..3 {
            update(&mut app, AppMessage::Panel(PanelMessage::FocusNext));
        }
        update(&mut app, AppMessage::Form(FormMessage::NextOption));

        // 聚焦 Применить（最后一行）并激活
        while app.panel.focused < 6 {
            update(&mut app, AppMessage::Panel(PanelMessage::FocusNext));
        }
        update(&mut app, AppMessage::Form(FormMessage::Activate));

        assert_eq!(app.form.committed(), app.form.state());
        assert_eq!(
            app.form.style_vars().bg_color,
            BACKGROUND_COLORS[1].value
        );
    }

    #[test]
    fn activate_reset_restores_defaults() {
        let mut app = App::new();
        open_panel(&mut app);

        update(&mut app, AppMessage::Form(FormMessage::NextOption));
        update(&mut app, AppMessage::Panel(PanelMessage::ClickRow(5)));

        assert_eq!(app.form.state(), default_article_state());
        assert_eq!(app.form.committed(), default_article_state());
    }

    #[test]
    fn click_row_focuses_field_without_activating() {
        let mut app = App::new();
        open_panel(&mut app);

        update(&mut app, AppMessage::Panel(PanelMessage::ClickRow(2)));
        assert_eq!(app.panel.focused, 2);
        assert_eq!(app.form.state(), default_article_state());
    }

    #[test]
    fn form_messages_are_ignored_while_closed() {
        let mut app = App::new();

        update(&mut app, AppMessage::Form(FormMessage::NextOption));
        update(&mut app, AppMessage::Form(FormMessage::Activate));

        assert_eq!(app.form.state(), default_article_state());
        assert_eq!(app.form.committed(), default_article_state());
    }

    #[test]
    fn reopening_panel_resets_focus_to_first_row() {
        let mut app = App::new();
        open_panel(&mut app);
        update(&mut app, AppMessage::Panel(PanelMessage::FocusNext));
        update(&mut app, AppMessage::Panel(PanelMessage::Toggle));

        open_panel(&mut app);
        assert_eq!(app.panel.focused, 0);
    }
}
