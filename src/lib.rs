//! Lufa Tokens Library
//!
//! Tooling for the Lufa design system tokens: parses generated CSS custom
//! properties, resolves `var()` chains, checks value formats and naming levels,
//! validates the themable attribute of JSON token definitions and generates
//! CSS variables from them.

pub mod config;
pub mod css;
pub mod error;
pub mod logging;
pub mod report;
pub mod tokens;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
