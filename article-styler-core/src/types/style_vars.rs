//! 样式变量投影

use serde::Serialize;

/// 已提交状态到渲染上下文的投影
///
/// 每个字段对应一个命名样式变量，宿主只读取这里的值，
/// 永远不直接读取表单的草稿状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleVars {
    /// `font-family`
    pub font_family: &'static str,
    /// `font-size`
    pub font_size: &'static str,
    /// `font-color`
    pub font_color: &'static str,
    /// `container-width`
    pub container_width: &'static str,
    /// `bg-color`
    pub bg_color: &'static str,
}

#[cfg(test)]
mod tests {
    use crate::options::default_article_state;

    #[test]
    fn style_vars_serialize_as_named_variables() {
        let vars = default_article_state().style_vars();
        let json = serde_json::to_value(vars).unwrap();

        assert_eq!(json["font_size"], "18px");
        assert_eq!(json["bg_color"], "#FFFFFF");
        assert_eq!(json["container_width"], "1394px");
    }

    #[test]
    fn article_state_serializes_with_option_labels_and_values() {
        let json = serde_json::to_value(default_article_state()).unwrap();

        assert_eq!(json["background_color"]["label"], "Светлый");
        assert_eq!(json["background_color"]["value"], "#FFFFFF");
        assert_eq!(json["font_family"]["label"], "Open Sans");
    }
}
