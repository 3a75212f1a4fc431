//! The diagnostic fonts built by default.

use write_fonts::types::Tag;

use crate::baseline::{
    BaselineSpec, Destination, FontSpec, HheaField, LineStyle, Os2Field,
};

fn os2(field: Os2Field) -> Destination {
    Destination::Os2(field)
}

fn hhea(field: HheaField) -> Destination {
    Destination::Hhea(field)
}

fn base(tag: &[u8; 4]) -> Destination {
    Destination::Base(Tag::new(tag))
}

/// Baselines above the x-middle, identical in both fonts.
fn upper_baselines() -> Vec<BaselineSpec> {
    vec![
        BaselineSpec::new("ascent", 800, os2(Os2Field::TypoAscender)),
        BaselineSpec::new("ascent", 800, hhea(HheaField::Ascent)),
        BaselineSpec::new("ideographic-over", 750, base(b"idtp"))
            .with_label("IDEOGRAPHIC-OVER")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("hanging", 650, base(b"hang"))
            .with_label("HANGING")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("cap-height", 550, os2(Os2Field::CapHeight))
            .with_label("CAP-HEIGHT")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("math", 450, base(b"math"))
            .with_label("MATH")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("central", 350, Destination::None)
            .with_label("CENTRAL")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("em-middle", 300, Destination::None).with_style(LineStyle::DASHED),
        BaselineSpec::new("x-height", 250, os2(Os2Field::XHeight))
            .with_label("X-HEIGHT")
            .with_style(LineStyle::SOLID),
    ]
}

/// Baselines below the alphabetic baseline, identical in both fonts.
fn lower_baselines() -> Vec<BaselineSpec> {
    vec![
        BaselineSpec::new("ideographic-under", -50, base(b"ideo"))
            .with_label("IDEOGRAPHIC-UNDER")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("descent", -200, os2(Os2Field::TypoDescender)),
        BaselineSpec::new("descent", -200, hhea(HheaField::Descent)),
    ]
}

/// Every baseline, with the alphabetic baseline raised to 50.
pub fn baseline_diagnostic() -> FontSpec {
    let mut baselines = upper_baselines();
    baselines.extend([
        BaselineSpec::new("x-middle", 150, Destination::None)
            .with_label("X-MIDDLE")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("alphabetic", 50, base(b"romn"))
            .with_label("ALPHABETIC")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("zero", 0, Destination::None).with_style(LineStyle::DASHED),
    ]);
    baselines.extend(lower_baselines());
    FontSpec {
        name: "BaselineDiagnostic".to_string(),
        description: "Font that can be used for validating baseline alignments. Given the \
            embedded text in the font, this should be used with very large font sizes. There \
            are two glyphs in the font."
            .to_string(),
        baselines,
    }
}

/// Same as [`baseline_diagnostic`] but with the common alphabetic baseline of 0,
/// which moves the x-middle to 125.
pub fn baseline_diagnostic_alphabetic_zero() -> FontSpec {
    let mut baselines = upper_baselines();
    baselines.extend([
        BaselineSpec::new("x-middle", 125, Destination::None)
            .with_label("X-MIDDLE")
            .with_style(LineStyle::SOLID),
        BaselineSpec::new("alphabetic", 0, base(b"romn")).with_style(LineStyle::DASHED),
    ]);
    baselines.extend(lower_baselines());
    FontSpec {
        name: "BaselineDiagnosticAlphabeticZero".to_string(),
        description: "Same as the \"BaselineDiagnostic\" font, but uses the common alphabetic \
            baseline of 0. This also results in the x-middle baseline being at 125."
            .to_string(),
        baselines,
    }
}

pub fn builtin_fonts() -> Vec<FontSpec> {
    vec![baseline_diagnostic(), baseline_diagnostic_alphabetic_zero()]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use crate::baseline::Destination;

    use super::*;

    #[test]
    fn builtins_are_consistent() {
        for font in builtin_fonts() {
            font.validate().unwrap();
        }
    }

    fn table_values(font: &FontSpec) -> HashMap<Destination, i16> {
        font.baselines
            .iter()
            .filter(|b| b.destination != Destination::None)
            .map(|b| (b.destination, b.position))
            .collect()
    }

    #[test]
    fn alphabetic_zero_only_moves_romn() {
        let mut base = table_values(&baseline_diagnostic());
        let zero = table_values(&baseline_diagnostic_alphabetic_zero());
        assert_eq!(Some(50), base.insert(Destination::Base(Tag::new(b"romn")), 0));
        assert_eq!(base, zero);

        assert_eq!(Some(150), baseline_diagnostic().position_of("x-middle"));
        assert_eq!(
            Some(125),
            baseline_diagnostic_alphabetic_zero().position_of("x-middle")
        );
    }
}
