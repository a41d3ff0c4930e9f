//! Unified error type definition

use thiserror::Error;

/// Core layer error type
///
/// Form and panel operations are total and never fail; the only fallible
/// surface is parsing the CSS-flavored option values when a front-end
/// projects them onto its rendering context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Value is not a `#RRGGBB` hex color
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    /// Value is not a `<number>px` length
    #[error("Invalid pixel length: {0}")]
    InvalidPxLength(String),
}

/// Core layer Result type alias
pub type StyleResult<T> = std::result::Result<T, StyleError>;
