//! CSS custom property handling
//!
//! Provides the text-level pieces of the token tooling:
//! - declaration extraction from raw CSS ([`parser`])
//! - `var()` reference resolution with cycle detection ([`var_resolver`])
//! - value format validation ([`validators`])

pub mod constants;
pub mod parser;
pub mod validators;
pub mod var_resolver;

#[cfg(test)]
mod parser_tests;
