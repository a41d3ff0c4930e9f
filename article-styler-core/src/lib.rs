//! Article Styler Core Library
//!
//! Provides the platform-independent state model for the article style
//! customizer, including:
//! - Fixed style option sets (fonts, sizes, colors, widths)
//! - The draft/committed form state contract (Apply / Reset)
//! - The settings panel visibility state machine
//!
//! This library is designed to be UI-runtime independent: the outside-click
//! listener is abstracted as a scoped resource through the `PointerListener`
//! trait, so the interaction contract can be tested without a terminal or a
//! window system.

pub mod error;
pub mod form;
pub mod options;
pub mod panel;
pub mod types;
pub mod utils;

// Re-export common types
pub use error::{StyleError, StyleResult};
pub use form::ArticleForm;
pub use options::{
    default_article_state, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
pub use panel::{NoopListener, PanelVisibility, PointerListener, VisibilityMode};
pub use types::{ArticleState, StyleField, StyleOption, StyleVars};
pub use utils::css::{parse_hex_color, parse_px};
