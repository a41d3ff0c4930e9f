//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app , area);    // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//! }
//!
//! 鼠标命中测试需要知道当前帧的区域，因此每次处理事件前
//! 从终端读取尺寸并传入 Event 层。

use std::time::Duration;

use anyhow::Result;
use ratatui::layout::Rect;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息（附带当前帧区域，用于鼠标命中测试）
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let msg = event::handle_event(event, app, area);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
