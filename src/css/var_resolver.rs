//! `var()` reference resolution for custom properties.
//!
//! Only the bare `var(--name)` form is understood. The CSS fallback form
//! `var(--name, fallback)` is not a reference here: it fails detection and is
//! therefore treated as a literal value.
//!
//! - **Resolution**: a reference is followed through the property map until a
//!   literal is reached. Chains may be arbitrarily deep.
//! - **Failure**: an undefined target or a chain that revisits a name (including
//!   direct self reference) resolves to `None`. Nothing here panics or errors.
//!
//! The property map is only read, so separate resolutions are independent and
//! can run in parallel over a shared map.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::css::parser::PropertyMap;

/// Why a property could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The chain reached a name missing from the map
    Undefined(String),
    /// The chain revisited a name already on it
    Circular,
}

/// Status of a property's resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableResolutionStatus {
    /// Resolved to a terminal literal value
    Resolved(String),
    /// Could not be resolved
    Unresolved(UnresolvedReason),
}

fn var_reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*var\(\s*(--[A-Za-z0-9_-]+)\s*\)\s*$").expect("Failed to compile var() regex")
    })
}

/// Check whether `value` is exactly one `var(--name)` reference without a fallback.
pub fn is_css_var_reference(value: &str) -> bool {
    var_reference_regex().is_match(value)
}

/// Extract the referenced name (with its `--`) from a `var(--name)` reference.
pub fn extract_css_var_name(value: &str) -> Option<String> {
    var_reference_regex()
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}

/// Resolve `value` against `properties`, following `var()` chains to a literal.
///
/// Returns `None` for undefined references and cycles.
pub fn resolve_css_var_value(value: &str, properties: &PropertyMap) -> Option<String> {
    match resolve_with_reason(value, properties) {
        VariableResolutionStatus::Resolved(resolved) => Some(resolved),
        VariableResolutionStatus::Unresolved(_) => None,
    }
}

/// Resolve `value` and report why resolution failed, if it did.
pub fn resolve_with_reason(value: &str, properties: &PropertyMap) -> VariableResolutionStatus {
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = value;

    // Iterative walk keeps deep chains off the call stack
    loop {
        let Some(name) = extract_css_var_name(current) else {
            return VariableResolutionStatus::Resolved(current.to_string());
        };

        if !visited.insert(name.clone()) {
            return VariableResolutionStatus::Unresolved(UnresolvedReason::Circular);
        }

        match properties.get(&name) {
            Some(next) => current = next.as_str(),
            None => return VariableResolutionStatus::Unresolved(UnresolvedReason::Undefined(name)),
        }
    }
}

/// Resolve every property in the map.
pub fn resolve_property_map(properties: &PropertyMap) -> HashMap<String, VariableResolutionStatus> {
    properties
        .iter()
        .map(|(name, value)| (name.clone(), resolve_with_reason(value, properties)))
        .collect()
}
