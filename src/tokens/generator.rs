//! CSS variable generation from token definitions

use std::fmt::Write as _;

use serde_json::Value;

use crate::tokens::definitions::TokenDefinition;
use crate::tokens::name::css_var_name_from_token;

/// Render definitions as a `:root` block of custom properties, in input order.
///
/// Aliases (`{core.brand.primary}`) become `var()` references to the aliased
/// token, so the generated stylesheet keeps the layering of the token files.
pub fn generate_css(definitions: &[TokenDefinition]) -> String {
    let mut css = String::from(":root {\n");
    for definition in definitions {
        let _ = writeln!(css, "  {}: {};", definition.css_var_name(), css_value(definition));
    }
    css.push_str("}\n");
    css
}

/// CSS text for a definition's value
pub fn css_value(definition: &TokenDefinition) -> String {
    if let Some(target) = definition.alias_target() {
        return format!("var({})", css_var_name_from_token(target));
    }

    match &definition.value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}
