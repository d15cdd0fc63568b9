//! CSS constants
//!
//! Units, keywords and markers shared by the parser, resolver and validators.

/// Opening marker of a block comment
pub const COMMENT_START: &str = "/*";
/// Closing marker of a block comment
pub const COMMENT_END: &str = "*/";

/// Units accepted by the dimension validator
pub const DIMENSION_UNITS: &[&str] = &["px", "rem", "em", "%", "vh", "vw", "vmin", "vmax"];

/// Units accepted by the duration validator
pub const DURATION_UNITS: &[&str] = &["ms", "s"];

/// Colour functions that are valid colour values without being hex colours
pub const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla("];

/// Colour keywords that are valid colour values without being hex colours
pub const COLOR_KEYWORDS: &[&str] = &["transparent", "currentColor", "inherit"];
