//! Article Styler TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 页面容器（Model 层的 `App`）持有两份文章样式状态：
//! 已提交状态投影到文章视图，草稿状态在滑出设置面板中编辑；
//! 「Применить」把草稿复制为已提交，「Сбросить」把两者都恢复默认。
//! 状态契约本身在 article-styler-core 中定义，可脱离终端独立测试。
//!
//!
//! main.rs 的执行：
//!
//!     init_logging()          // 日志写入临时目录下的文件，保持备用屏幕干净
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

/// 初始化文件日志
///
/// TUI 占用了 stdout，日志只能落盘。
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join("article-styler-tui.log");
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        file,
    )?;
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    init_logging()?;

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new();

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 返回结果
    result
}
