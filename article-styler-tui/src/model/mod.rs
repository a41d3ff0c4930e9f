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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态（页面容器）
//!         mod panel;          // 设置面板状态（可见性 + 表单焦点）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App，即页面容器）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub form: ArticleForm,              // 草稿 + 已提交样式状态（core）
//!             pub panel: PanelState,              // 设置面板状态
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!         }
//!
//!     已提交状态只通过 form.apply() / form.reset() 变更；
//!     View 层读取 form.style_vars() 渲染文章，永远不读草稿。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、面板状态（PanelState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/panel.rs 中定义：
//!
//!         FormRow：面板中的一行（五个字段选择器 + Сбросить + Применить）
//!         PanelState {
//!             visibility: PanelVisibility,    // core 的可见性状态机
//!             focused: usize,                 // 当前聚焦的行
//!         }
//!
//!     数据流：
//!         用户按 Tab 或点击切换控件
//!             ↓
//!         event/handler.rs 返回 Panel(PanelMessage::Toggle)
//!             ↓
//!         update/panel.rs 调用 visibility.toggle()
//!             ↓
//!         view/layout.rs 根据 panel.is_open() 决定是否渲染抽屉
//!

mod app;
mod panel;

pub use app::App;
pub use panel::{FormRow, PanelState};
