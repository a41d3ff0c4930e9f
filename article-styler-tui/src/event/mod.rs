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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件（左键按下做命中判定）
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 全局快捷键（Ctrl+C / Alt+q / Tab），就地处理；
//!                 - 面板展开时，调用 handle_panel_keys 处理
//!                 - 面板收起时，调用 handle_page_keys 处理
//!
//!             当接收到鼠标左键按下时，转入 handle_mouse_event()
//!             按 切换控件 → 面板内部 → 其余区域 的顺序做命中判定：
//!                 切换控件        → Panel(Toggle)
//!                 面板内的行      → Panel(ClickRow(i))
//!                 其余区域        → Panel(OutsidePointerDown)（仅面板展开时）
//!
//!
//!     常用键盘映射（面板展开时）：
//!         Esc         → Panel(Toggle)
//!         ↑/↓ (k/j)   → Panel(FocusPrev / FocusNext)
//!         ←/→         → Form(PrevOption / NextOption)
//!         Enter       → Form(Activate)
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
