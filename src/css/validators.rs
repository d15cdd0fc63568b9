//! Format validators for token values
//!
//! Each predicate trims its input first and then matches a strict grammar.
//! [`FormatKind`] picks the validator that applies to a token from its name.

use std::sync::OnceLock;

use regex::Regex;

use crate::css::constants::{COLOR_FUNCTIONS, COLOR_KEYWORDS, DIMENSION_UNITS, DURATION_UNITS};

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Failed to compile hex color regex"))
}

fn dimension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let units = DIMENSION_UNITS.iter().map(|unit| regex::escape(unit)).collect::<Vec<_>>().join("|");
        Regex::new(&format!(r"^-?(?:\d+(?:\.\d+)?|\.\d+)(?:{})$", units)).expect("Failed to compile dimension regex")
    })
}

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let units = DURATION_UNITS.join("|");
        Regex::new(&format!(r"^(?:\d+(?:\.\d+)?|\.\d+)(?:{})$", units)).expect("Failed to compile duration regex")
    })
}

/// `#rgb` or `#rrggbb`, case-insensitive
pub fn is_valid_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value.trim())
}

/// Optionally negative decimal number directly followed by a length unit
pub fn is_valid_dimension(value: &str) -> bool {
    dimension_regex().is_match(value.trim())
}

/// Non-negative decimal number directly followed by `ms` or `s`
pub fn is_valid_duration(value: &str) -> bool {
    duration_regex().is_match(value.trim())
}

/// The value format a token is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    HexColor,
    Dimension,
    Duration,
}

impl FormatKind {
    /// Choose a format from the category segment of a dotted token name
    /// (the segment after the level). Tokens whose category carries no format
    /// rule return `None`.
    pub fn for_token_name(token_name: &str) -> Option<Self> {
        let mut segments = token_name.split('.').skip(1);
        let category = segments.next()?;
        match category {
            "color" => Some(FormatKind::HexColor),
            "spacing" | "size" | "sizing" | "radius" | "dimension" | "breakpoint" => Some(FormatKind::Dimension),
            "border" if segments.next() == Some("width") => Some(FormatKind::Dimension),
            "duration" | "motion" => Some(FormatKind::Duration),
            _ => None,
        }
    }

    /// Validate a resolved value against this format.
    ///
    /// Besides the strict grammars, colour functions and colour keywords are
    /// valid colours and a bare `0` is a valid dimension.
    pub fn validate(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FormatKind::HexColor => {
                is_valid_hex_color(value)
                    || COLOR_FUNCTIONS.iter().any(|function| value.starts_with(function) && value.ends_with(')'))
                    || COLOR_KEYWORDS.contains(&value)
            }
            FormatKind::Dimension => value == "0" || is_valid_dimension(value),
            FormatKind::Duration => is_valid_duration(value),
        }
    }

    /// Human readable description used in findings
    pub fn describe(self) -> &'static str {
        match self {
            FormatKind::HexColor => "hex color (#rgb or #rrggbb)",
            FormatKind::Dimension => "dimension (number + px, rem, em, %, vh, vw, vmin, vmax)",
            FormatKind::Duration => "duration (non-negative number + ms or s)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::name::token_name_from_css_var;

    #[test]
    fn test_hex_color() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#FFFFFF"));
        assert!(is_valid_hex_color("#2563eb"));
        assert!(is_valid_hex_color("  #ffffff  "));
        assert!(!is_valid_hex_color("#12345"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color("#ff804080"));
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ggg"));
        assert!(!is_valid_hex_color("# fff"));
        assert!(!is_valid_hex_color(""));
    }

    #[test]
    fn test_dimension() {
        assert!(is_valid_dimension("16px"));
        assert!(is_valid_dimension("1.5rem"));
        assert!(is_valid_dimension("-4px"));
        assert!(is_valid_dimension(" 100% "));
        assert!(is_valid_dimension("50vh"));
        assert!(is_valid_dimension("10vw"));
        assert!(is_valid_dimension("2vmin"));
        assert!(is_valid_dimension("2vmax"));
        assert!(is_valid_dimension("0.5em"));
        assert!(is_valid_dimension(".5em"));
        assert!(!is_valid_dimension("16"));
        assert!(!is_valid_dimension("px"));
        assert!(!is_valid_dimension("16 px"));
        assert!(!is_valid_dimension("16pt"));
        assert!(!is_valid_dimension("+4px"));
        assert!(!is_valid_dimension("1.px"));
    }

    #[test]
    fn test_duration() {
        assert!(is_valid_duration("200ms"));
        assert!(is_valid_duration("0.3s"));
        assert!(is_valid_duration(" 1s "));
        assert!(is_valid_duration("0ms"));
        assert!(!is_valid_duration("-200ms"));
        assert!(!is_valid_duration("200"));
        assert!(!is_valid_duration("200 ms"));
        assert!(!is_valid_duration("ms"));
        assert!(!is_valid_duration("2m"));
    }

    #[test]
    fn test_format_kind_for_token_name() {
        assert_eq!(FormatKind::for_token_name("primitive.color.blue.500"), Some(FormatKind::HexColor));
        assert_eq!(FormatKind::for_token_name("core.spacing.md"), Some(FormatKind::Dimension));
        assert_eq!(FormatKind::for_token_name("primitive.duration.fast"), Some(FormatKind::Duration));
        assert_eq!(FormatKind::for_token_name("semantic.font.family"), None);
        assert_eq!(FormatKind::for_token_name("primitive"), None);
    }

    #[test]
    fn test_format_kind_for_border_width() {
        let token_name = token_name_from_css_var("--lufa-primitive-border-width-thin");
        assert_eq!(FormatKind::for_token_name(&token_name), Some(FormatKind::Dimension));
        assert_eq!(FormatKind::for_token_name("primitive.border.style.solid"), None);
        assert_eq!(FormatKind::for_token_name("primitive.border"), None);
    }

    #[test]
    fn test_format_kind_validate_leniencies() {
        assert!(FormatKind::HexColor.validate("rgba(0, 0, 0, 0.5)"));
        assert!(FormatKind::HexColor.validate("transparent"));
        assert!(!FormatKind::HexColor.validate("blue-ish"));
        assert!(FormatKind::Dimension.validate("0"));
        assert!(!FormatKind::Dimension.validate("12"));
        assert!(!FormatKind::Duration.validate("0"));
    }
}
