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
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! 只读取 Model，不做任何状态修改。
//! 每一轮主循环都整帧重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod layout;         // 主布局 + 切换控件/抽屉的命中区域
//!         mod theme;              // 主题颜色与样式
//!         mod components;         // 抽屉面板、状态栏
//!         mod pages;              // 文章页面
//!
//! 布局（自上而下）：
//!     标题栏（1 行）
//!     内容区：文章占满，面板展开时抽屉覆盖右侧
//!     状态栏（1 行）
//!
//! 命中区域（toggle_rect / drawer_rect / form_row_at）同时被
//! Event 层用来做鼠标判定，保证渲染和点击永远落在同一处。

pub mod layout;

mod components;
mod pages;
mod theme;

pub use layout::render;
