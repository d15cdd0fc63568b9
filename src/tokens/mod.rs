//! Design tokens
//!
//! Token-level concepts layered on top of the CSS handling:
//! - the CSS name / dotted name codec and level classification ([`name`])
//! - grouping of parsed properties by level ([`level`])
//! - JSON token files ([`definitions`]), their themable rules ([`themable`])
//!   and CSS generation from them ([`generator`])

pub mod definitions;
pub mod generator;
pub mod level;
pub mod name;
pub mod themable;
