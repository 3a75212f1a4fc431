//! Measures label text against the label font.

use std::borrow::Cow;

use skrifa::{
    instance::{LocationRef, Size},
    outline::OutlineGlyph,
    raw::TableProvider,
    FontRef, MetadataProvider,
};

use crate::error::Error;

/// The font labels are drawn with.
static BUNDLED_LABEL_FONT: &[u8] = include_bytes!("../resources/DejaVuSansMono-Bold.ttf");

/// The bytes of the font used to draw baseline labels.
///
/// Read-only; parsed on demand by whoever needs to measure or draw text.
#[derive(Debug, Clone)]
pub struct LabelFont {
    data: Cow<'static, [u8]>,
}

impl LabelFont {
    /// The monospace bold font shipped with the crate
    pub fn bundled() -> LabelFont {
        LabelFont {
            data: Cow::Borrowed(BUNDLED_LABEL_FONT),
        }
    }

    /// Use some other font, failing if it can't be parsed.
    pub fn new(data: Vec<u8>) -> Result<LabelFont, Error> {
        let font = LabelFont {
            data: Cow::Owned(data),
        };
        font.font_ref()?.head()?;
        Ok(font)
    }

    pub fn font_ref(&self) -> Result<FontRef<'_>, Error> {
        FontRef::new(&self.data).map_err(Error::LabelFont)
    }
}

/// A glyph of measured text.
#[derive(Clone)]
pub struct GlyphMetrics<'a> {
    pub ch: char,
    pub outline: OutlineGlyph<'a>,
    /// Advance in ems
    pub advance: f64,
}

/// The glyphs of a run of text and how wide they are.
#[derive(Clone)]
pub struct TextMetrics<'a> {
    /// Multiply font units by this to get ems
    pub scale: f64,
    /// Extra space between glyphs, in ems
    pub letter_gap: f64,
    pub glyphs: Vec<GlyphMetrics<'a>>,
}

impl TextMetrics<'_> {
    /// Width in ems
    pub fn width(&self) -> f64 {
        if self.glyphs.is_empty() {
            return 0.0;
        }
        self.glyphs.iter().map(|g| g.advance).sum::<f64>()
            + self.letter_gap * (self.glyphs.len() - 1) as f64
    }
}

/// Look up every character of `text` in `font`.
pub fn measure<'a>(font: &FontRef<'a>, text: &str, letter_gap: f64) -> Result<TextMetrics<'a>, Error> {
    let units_per_em = font.head()?.units_per_em() as f64;
    let charmap = font.charmap();
    let glyph_metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());
    let outlines = font.outline_glyphs();

    let glyphs = text
        .chars()
        .map(|ch| {
            let not_found = || Error::GlyphNotFound {
                ch,
                text: text.to_string(),
            };
            let gid = charmap.map(ch).ok_or_else(not_found)?;
            let outline = outlines.get(gid).ok_or_else(not_found)?;
            let advance = glyph_metrics.advance_width(gid).ok_or_else(not_found)? as f64;
            Ok(GlyphMetrics {
                ch,
                outline,
                advance: advance / units_per_em,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(TextMetrics {
        scale: 1.0 / units_per_em,
        letter_gap,
        glyphs,
    })
}

#[cfg(test)]
mod tests {
    use more_asserts::assert_gt;
    use rstest::rstest;

    use super::*;

    fn approx_eq(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_text_has_no_width() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let metrics = measure(&font, "", 0.25).unwrap();
        assert!(metrics.glyphs.is_empty());
        assert_eq!(0.0, metrics.width());
    }

    #[test]
    fn scale_is_reciprocal_of_upem() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let upem = font.head().unwrap().units_per_em() as f64;
        let metrics = measure(&font, "X", 0.0).unwrap();
        approx_eq(1.0 / upem, metrics.scale);
    }

    #[rstest]
    #[case("ALPHABETIC", 0.0)]
    #[case("IDEOGRAPHIC-UNDER", 0.0)]
    #[case("X-HEIGHT", 0.1)]
    #[case("M", 0.5)]
    fn width_is_advances_plus_gaps(#[case] text: &str, #[case] letter_gap: f64) {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let metrics = measure(&font, text, letter_gap).unwrap();

        assert_eq!(text.chars().count(), metrics.glyphs.len());
        let advances: f64 = metrics.glyphs.iter().map(|g| g.advance).sum();
        approx_eq(
            advances + letter_gap * (metrics.glyphs.len() - 1) as f64,
            metrics.width(),
        );
        assert_gt!(metrics.width(), 0.0);
    }

    #[test]
    fn monospace_advances_match() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let metrics = measure(&font, "MI-", 0.0).unwrap();
        let advances: Vec<_> = metrics.glyphs.iter().map(|g| g.advance).collect();
        approx_eq(advances[0], advances[1]);
        approx_eq(advances[0], advances[2]);
    }

    #[test]
    fn iterates_code_points() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        // two bytes in utf-8, one glyph
        let metrics = measure(&font, "É", 0.0).unwrap();
        assert_eq!(vec!['É'], metrics.glyphs.iter().map(|g| g.ch).collect::<Vec<_>>());
    }

    #[test]
    fn unmapped_character_is_an_error() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let result = measure(&font, "AB漢C", 0.0);
        let Err(Error::GlyphNotFound { ch, text }) = result else {
            panic!("Should have failed to find a glyph");
        };
        assert_eq!(('漢', "AB漢C"), (ch, text.as_str()));
    }

    #[test]
    fn garbage_label_font_is_rejected() {
        assert!(LabelFont::new(b"not a font".to_vec()).is_err());
    }
}
