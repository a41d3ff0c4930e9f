//! 表单消息处理
//!
//! 字段编辑通过 ArticleState::with_field 构造完整的下一条记录，
//! 再整条传给 ArticleForm::change；Применить/Сбросить 落到
//! ArticleForm::apply / reset。

use crate::message::FormMessage;
use crate::model::{App, FormRow};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    // 面板收起时表单不可见，忽略所有表单消息
    if !app.panel.is_open() {
        return;
    }

    match msg {
        FormMessage::PrevOption => cycle_option(app, -1),
        FormMessage::NextOption => cycle_option(app, 1),
        FormMessage::Activate => activate_focused(app),
    }
}

/// 激活当前聚焦的行（仅按钮行有效果）
pub fn activate_focused(app: &mut App) {
    match app.panel.focused_row() {
        FormRow::Apply => {
            app.form.apply();
            app.set_status("Параметры применены");
        }
        FormRow::Reset => {
            app.form.reset();
            app.set_status("Параметры сброшены");
        }
        FormRow::Field(_) => {}
    }
}

/// 当前字段在固定选项集合内前后翻页（回绕）
fn cycle_option(app: &mut App, step: isize) {
    let FormRow::Field(field) = app.panel.focused_row() else {
        return;
    };

    let options = field.options();
    let current = app.form.state().get(field);
    // 选项集合固定且去重，按 value 一定能找到当前项
    let Some(index) = options.iter().position(|o| *o == current) else {
        log::warn!("current option {:?} not in the fixed set", current.value);
        return;
    };

    let len = options.len() as isize;
    let next = (index as isize + step).rem_euclid(len) as usize;

    let next_state = app.form.state().with_field(field, options[next]);
    app.form.change(next_state);
}
