//! Themable attribute validation
//!
//! Every token declares whether its value varies between themes. Colours and
//! shadows do; structural values such as spacing or durations do not. The
//! expected value is derived from the token type and compared with the
//! declared attribute.

use crate::report::{Finding, FindingCategory};
use crate::tokens::definitions::TokenDefinition;

/// Which token types are expected to be themable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemableRules {
    pub themable_types: Vec<String>,
}

impl Default for ThemableRules {
    fn default() -> Self {
        Self {
            themable_types: vec!["color".to_string(), "shadow".to_string(), "gradient".to_string()],
        }
    }
}

impl ThemableRules {
    pub fn new(themable_types: Vec<String>) -> Self {
        Self { themable_types }
    }

    /// Expected `themable` value for a token, from its declared type or,
    /// failing that, its category segment. Tokens with neither are structural.
    pub fn expected_themable(&self, definition: &TokenDefinition) -> bool {
        definition
            .effective_type()
            .is_some_and(|token_type| self.themable_types.iter().any(|t| t == token_type))
    }
}

/// Check one definition's themable attribute. `None` means it matches.
pub fn check_themable(definition: &TokenDefinition, rules: &ThemableRules) -> Option<Finding> {
    let expected = rules.expected_themable(definition);
    let message = match definition.themable {
        Some(actual) if actual == expected => return None,
        Some(_) => format!(
            "themable attribute does not match token type '{}'",
            definition.effective_type().unwrap_or("unknown")
        ),
        None => "themable attribute is missing".to_string(),
    };

    let actual = definition
        .themable
        .map(|themable| themable.to_string())
        .unwrap_or_else(|| "missing".to_string());

    Some(
        Finding::error(FindingCategory::Themable, definition.path.clone(), message)
            .with_expected(expected.to_string())
            .with_actual(actual)
            .in_file(&definition.file),
    )
}
