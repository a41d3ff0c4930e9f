//! 类型定义模块
//!
//! 定义文章样式的领域类型

mod article_state;
mod option;
mod style_vars;

pub use article_state::{ArticleState, StyleField};
pub use option::StyleOption;
pub use style_vars::StyleVars;
