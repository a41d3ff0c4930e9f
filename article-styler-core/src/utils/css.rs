//! CSS 值解析
//!
//! 选项的 `value` 是 CSS 风格的字符串（`#RRGGBB`、`1394px`）。
//! 前端把它们投影到自己的渲染上下文时在这里解析；
//! 固定配置数据里的坏值应当在启动时暴露，而不是在每次读取处防御。

use crate::error::{StyleError, StyleResult};

/// 解析 `#RRGGBB` 十六进制颜色
pub fn parse_hex_color(value: &str) -> StyleResult<(u8, u8, u8)> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| StyleError::InvalidHexColor(value.to_string()))?;

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StyleError::InvalidHexColor(value.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> StyleResult<u8> {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| StyleError::InvalidHexColor(value.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// 解析 `<number>px` 长度
pub fn parse_px(value: &str) -> StyleResult<u16> {
    value
        .strip_suffix("px")
        .and_then(|n| n.parse::<u16>().ok())
        .ok_or_else(|| StyleError::InvalidPxLength(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#FFFFFF").unwrap(), (255, 255, 255));
        assert_eq!(parse_hex_color("#232426").unwrap(), (0x23, 0x24, 0x26));
        assert_eq!(parse_hex_color("#FD24AF").unwrap(), (0xFD, 0x24, 0xAF));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(
            parse_hex_color("FFFFFF"),
            Err(StyleError::InvalidHexColor(_))
        ));
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn parses_px_lengths() {
        assert_eq!(parse_px("1394px").unwrap(), 1394);
        assert_eq!(parse_px("948px").unwrap(), 948);
        assert!(matches!(
            parse_px("18"),
            Err(StyleError::InvalidPxLength(_))
        ));
        assert!(parse_px("wide").is_err());
    }

    #[test]
    fn every_fixed_color_and_width_parses() {
        use crate::options::{BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS};

        for opt in FONT_COLORS.iter().chain(BACKGROUND_COLORS.iter()) {
            assert!(parse_hex_color(opt.value).is_ok(), "bad color {}", opt.value);
        }
        for opt in &CONTENT_WIDTH_OPTIONS {
            assert!(parse_px(opt.value).is_ok(), "bad width {}", opt.value);
        }
    }
}
