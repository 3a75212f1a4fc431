//! The license shipped next to the fonts.

pub const LICENSE_FILE: &str = "LICENSE.md";

/// SIL Open Font License 1.1, under the copyright of the fonts
pub static OFL: &str = include_str!("../resources/LICENSE.md");
