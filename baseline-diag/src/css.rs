//! The stylesheet that loads the fonts and says where their baselines are.
//!
//! Every baseline becomes a custom property holding its distance from the
//! top of the em box as a fraction of the em, so a page can position guides
//! without knowing the font's units.

use std::{fmt::Write, sync::OnceLock};

use baseline_types::baseline::FontSpec;
use indexmap::IndexMap;
use regex::Regex;

use crate::Error;

pub const STYLESHEET_FILE: &str = "baseline-diagnostic-font.css";

const COMMENT_WIDTH: usize = 80;

/// "BaselineDiagnosticAlphabeticZero" => "baseline-diagnostic-alphabetic-zero"
pub fn kebab_case(name: &str) -> String {
    static BOUNDARIES: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let boundaries = BOUNDARIES
        .get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])|([A-Z])([A-Z][a-z])").unwrap());
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());
    let name = boundaries.replace_all(name, "$1$3-$2$4");
    let name = separators.replace_all(&name, "-");
    name.trim_matches('-').to_lowercase()
}

/// At most four decimals, no trailing zeros.
fn format_fraction(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        v => v.to_string(),
    }
}

/// Where each baseline sits, measured down from the ascent, as a fraction of ascent + descent.
///
/// Ids are listed once, in the order they first appear.
pub fn baseline_fractions(font: &FontSpec) -> Result<IndexMap<&str, f64>, Error> {
    let (Some(ascent), Some(descent)) = (font.position_of("ascent"), font.position_of("descent"))
    else {
        return Err(Error::MissingAscentDescent(font.name.clone()));
    };
    let ascent = ascent as f64;
    let descent = -(descent as f64);

    let mut fractions = IndexMap::new();
    for baseline in font.baselines.iter() {
        fractions
            .entry(baseline.id.as_str())
            .or_insert_with(|| 1.0 - (baseline.position as f64 + descent) / (ascent + descent));
    }
    Ok(fractions)
}

fn write_comment(css: &mut String, text: &str) {
    css.push_str("  /**\n");
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > COMMENT_WIDTH - 5 {
            let _ = writeln!(css, "   * {line}");
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        let _ = writeln!(css, "   * {line}");
    }
    css.push_str("   */\n");
}

pub fn stylesheet(fonts: &[FontSpec]) -> Result<String, Error> {
    let mut css = String::new();
    for font in fonts {
        css.push_str("@font-face {\n");
        if !font.description.trim().is_empty() {
            write_comment(&mut css, &font.description);
        }
        let _ = writeln!(css, "  font-family: \"{}\";", font.name);
        let _ = writeln!(css, "  src: url('./{}.ttf') format('opentype');", font.name);
        css.push_str("}\n\n");
    }

    css.push_str(":root {\n");
    for (i, font) in fonts.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        let prefix = kebab_case(&font.name);
        for (id, fraction) in baseline_fractions(font)? {
            let _ = writeln!(css, "  --{prefix}-{id}: {};", format_fraction(fraction));
        }
    }
    css.push_str("}\n");
    Ok(css)
}
