//! Generates a [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2) table.

use baseline_types::{baseline::Os2Field, orchestration::Work, types::Tag};
use log::debug;
use write_fonts::{
    tables::os2::{Os2, SelectionFlags},
    OtRound,
};

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

const REGULAR_WEIGHT: u16 = 400;
const MEDIUM_WIDTH: u16 = 5;

struct Os2Work {}

pub fn create_os2_work() -> Box<BeWork> {
    Box::new(Os2Work {})
}

/// Average of the non-zero advances, as fontTools computes it for OS/2 version 3 and up.
fn x_avg_char_width(context: &Context) -> i16 {
    let (count, total) = context
        .glyph_order
        .iter()
        .map(|gn| context.advance(gn) as u64)
        .filter(|advance| *advance > 0)
        .fold((0_u64, 0_u64), |(count, total), value| {
            (count + 1, total + value)
        });
    if count == 0 {
        return 0;
    }
    (total as f32 / count as f32).ot_round()
}

/// usFirstCharIndex and usLastCharIndex, capped to the BMP.
fn char_index_range(context: &Context) -> (u16, u16) {
    let first = context.char_map.keys().min().map(|c| *c as u32);
    let last = context.char_map.keys().max().map(|c| *c as u32);
    let cap = |v: u32| v.min(0xFFFF) as u16;
    (
        first.map(cap).unwrap_or_default(),
        last.map(cap).unwrap_or_default(),
    )
}

/// Write the positions of the baselines destined for OS/2 into `os2`.
///
/// Later baselines overwrite earlier ones targeting the same field.
fn apply_metrics(os2: &mut Os2, values: impl Iterator<Item = (Os2Field, i16)>) -> Result<(), Error> {
    let mut typo_ascender = None;
    let mut typo_descender = None;
    let mut win_ascent = None;
    let mut win_descent = None;
    for (field, value) in values {
        match field {
            Os2Field::TypoAscender => typo_ascender = Some(value),
            Os2Field::TypoDescender => typo_descender = Some(value),
            Os2Field::TypoLineGap => os2.s_typo_line_gap = value,
            Os2Field::WinAscent => win_ascent = Some(value),
            Os2Field::WinDescent => win_descent = Some(value),
            Os2Field::CapHeight => os2.s_cap_height = Some(value),
            Os2Field::XHeight => os2.sx_height = Some(value),
        }
    }

    let missing = |field: Os2Field| Error::MissingRequiredMetric {
        table: Tag::new(b"OS/2"),
        field: field.name(),
    };
    let typo_ascender = typo_ascender.ok_or_else(|| missing(Os2Field::TypoAscender))?;
    let typo_descender = typo_descender.ok_or_else(|| missing(Os2Field::TypoDescender))?;
    os2.s_typo_ascender = typo_ascender;
    os2.s_typo_descender = typo_descender;

    // usWin* are unsigned, descent is a magnitude below the baseline
    os2.us_win_ascent = win_ascent.unwrap_or(typo_ascender).max(0) as u16;
    os2.us_win_descent = win_descent.unwrap_or(typo_descender).unsigned_abs();
    Ok(())
}

impl Work<Context, Error> for Os2Work {
    fn name(&self) -> &'static str {
        "OS/2"
    }

    /// Generate [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let (us_first_char_index, us_last_char_index) = char_index_range(context);
        let mut os2 = Os2 {
            ach_vend_id: Tag::new(b"NONE"),
            fs_selection: SelectionFlags::REGULAR,
            us_weight_class: REGULAR_WEIGHT,
            us_width_class: MEDIUM_WIDTH,
            x_avg_char_width: x_avg_char_width(context),
            us_first_char_index,
            us_last_char_index,

            // Avoid "field must be present for version 2" caused by default to None
            ul_code_page_range_1: Some(0),
            ul_code_page_range_2: Some(0),
            sx_height: Some(0),
            s_cap_height: Some(0),
            us_default_char: Some(0),
            us_break_char: Some(0),
            us_max_context: Some(0),

            ..Default::default()
        };
        apply_metrics(&mut os2, context.font_spec.os2_values())?;
        debug!(
            "OS/2 typo {}/{}, win {}/{}",
            os2.s_typo_ascender, os2.s_typo_descender, os2.us_win_ascent, os2.us_win_descent
        );

        context.os2.set(os2);
        Ok(())
    }
}
