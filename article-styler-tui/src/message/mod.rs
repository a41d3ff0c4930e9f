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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages。
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 应用主消息
//!         mod form;           // 表单子消息（字段编辑、Применить/Сбросить）
//!         mod panel;          // 面板子消息（开合、焦点、外部点击）
//!
//!
//! 常用映射：
//!     Tab / 点击切换控件    → Panel(Toggle)
//!     ↑/↓（面板展开时）     → Panel(FocusPrev / FocusNext)
//!     ←/→（聚焦字段时）     → Form(PrevOption / NextOption)
//!     Enter（聚焦按钮时）   → Form(Activate)
//!     面板外指针按下        → Panel(OutsidePointerDown)
//!

mod app;
mod form;
mod panel;

pub use app::AppMessage;
pub use form::FormMessage;
pub use panel::PanelMessage;
