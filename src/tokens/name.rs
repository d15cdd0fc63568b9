//! Token name codec and level classification
//!
//! Tokens have two spellings: the CSS custom property name used in stylesheets
//! (`--lufa-primitive-color-blue-500`) and the dotted name used by the token
//! files and tooling (`primitive.color.blue.500`).

use std::fmt;

/// Prefix of every design system custom property
pub const LUFA_PREFIX: &str = "--lufa-";

/// Separator between segments of a dotted token name
pub const TOKEN_SEPARATOR: char = '.';

/// Dotted token name for a `--lufa-` custom property name.
///
/// Names without the prefix are outside the codec's contract; the prefix strip
/// is then skipped and only the separator replacement happens.
pub fn token_name_from_css_var(css_var_name: &str) -> String {
    css_var_name
        .strip_prefix(LUFA_PREFIX)
        .unwrap_or(css_var_name)
        .replace('-', ".")
}

/// `--lufa-` custom property name for a dotted token name.
pub fn css_var_name_from_token(token_name: &str) -> String {
    format!("{}{}", LUFA_PREFIX, token_name.replace(TOKEN_SEPARATOR, "-"))
}

/// Whether a custom property name belongs to the design system namespace
pub fn has_lufa_prefix(css_var_name: &str) -> bool {
    css_var_name.starts_with(LUFA_PREFIX)
}

/// Layer of the design system a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenLevel {
    /// Raw values
    Primitive,
    /// Brand-mapped values
    Core,
    /// Intent-based values
    Semantic,
    /// Component-specific values
    Component,
    /// Anything not following the `--lufa-<level>-...` convention
    Unknown,
}

impl TokenLevel {
    /// All levels in bucket order
    pub const ALL: [TokenLevel; 5] = [
        TokenLevel::Primitive,
        TokenLevel::Core,
        TokenLevel::Semantic,
        TokenLevel::Component,
        TokenLevel::Unknown,
    ];

    /// Match a level keyword exactly; anything else is `None`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "primitive" => Some(TokenLevel::Primitive),
            "core" => Some(TokenLevel::Core),
            "semantic" => Some(TokenLevel::Semantic),
            "component" => Some(TokenLevel::Component),
            _ => None,
        }
    }

    /// Classify a custom property name.
    ///
    /// The name must be `--lufa-<level>-<rest>` with a non-empty rest;
    /// `--lufa-core` on its own or `--custom-token` are `Unknown`.
    pub fn from_css_var_name(css_var_name: &str) -> Self {
        css_var_name
            .strip_prefix(LUFA_PREFIX)
            .and_then(|rest| rest.split_once('-'))
            .filter(|(_, tail)| !tail.is_empty())
            .and_then(|(keyword, _)| Self::from_keyword(keyword))
            .unwrap_or(TokenLevel::Unknown)
    }

    /// Classify a dotted token name by its first segment.
    pub fn from_token_name(token_name: &str) -> Self {
        token_name
            .split_once(TOKEN_SEPARATOR)
            .filter(|(_, tail)| !tail.is_empty())
            .and_then(|(keyword, _)| Self::from_keyword(keyword))
            .unwrap_or(TokenLevel::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenLevel::Primitive => "primitive",
            TokenLevel::Core => "core",
            TokenLevel::Semantic => "semantic",
            TokenLevel::Component => "component",
            TokenLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
