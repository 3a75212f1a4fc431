//! Generates the [hmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx),
//! [hhea](https://learn.microsoft.com/en-us/typography/opentype/spec/hhea) and
//! [maxp](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp) tables

use std::cmp::{max, min};

use baseline_types::{baseline::HheaField, orchestration::Work, types::Tag};
use log::debug;
use write_fonts::{
    tables::{
        glyf::{Contour, SimpleGlyph},
        hhea::Hhea,
        hmtx::Hmtx,
        maxp::Maxp,
        vmtx::LongMetric,
    },
    types::FWord,
};

use crate::{
    error::Error,
    orchestration::{to_bytes, BeWork, Bytes, Context},
};

struct MetricAndLimitWork {}

pub fn create_metric_and_limit_work() -> Box<BeWork> {
    Box::new(MetricAndLimitWork {})
}

/// Font-wide, or global, limits
#[derive(Debug, Default, PartialEq)]
struct FontLimits {
    min_left_side_bearing: Option<i16>,
    min_right_side_bearing: Option<i16>,
    x_max_extent: Option<i16>,
    advance_width_max: u16,
    max_points: u16,
    max_contours: u16,
}

impl FontLimits {
    fn update(&mut self, advance: u16, glyph: &SimpleGlyph) {
        // min side bearings are only for non-empty glyphs
        if !glyph.contours.is_empty() {
            let bbox = glyph.bbox;
            let left_side_bearing = bbox.x_min;
            let right_side_bearing: i16 = match advance as i32 - bbox.x_max as i32 {
                value if value < i16::MIN as i32 => i16::MIN,
                value if value > i16::MAX as i32 => i16::MAX,
                value => value as i16,
            };
            self.min_left_side_bearing = self
                .min_left_side_bearing
                .map(|v| min(v, left_side_bearing))
                .or(Some(left_side_bearing));
            self.min_right_side_bearing = self
                .min_right_side_bearing
                .map(|v| min(v, right_side_bearing))
                .or(Some(right_side_bearing));
            self.x_max_extent = self
                .x_max_extent
                .map(|v| max(v, bbox.x_max))
                .or(Some(bbox.x_max));
        }
        self.advance_width_max = max(self.advance_width_max, advance);

        let num_points = glyph.contours.iter().map(Contour::len).sum::<usize>();
        let num_contours = glyph.contours.len();
        self.max_points = max(self.max_points, num_points.min(u16::MAX as usize) as u16);
        self.max_contours = max(self.max_contours, num_contours.min(u16::MAX as usize) as u16);
    }
}

/// Splits off the trailing run of equal advances, which hmtx can store as side bearings only.
fn trim_long_metrics(mut long_metrics: Vec<LongMetric>) -> (Vec<LongMetric>, Vec<i16>) {
    let Some(last_advance) = long_metrics.last().map(|m| m.advance) else {
        return (long_metrics, Vec::new());
    };
    let lsb_run = long_metrics
        .iter()
        .rev()
        .take_while(|m| m.advance == last_advance)
        .count();

    // The last metric retained carries the advance that repeats
    let lsbs = long_metrics
        .split_off(long_metrics.len() - (lsb_run - 1))
        .into_iter()
        .map(|metric| metric.side_bearing)
        .collect();
    (long_metrics, lsbs)
}

/// The last baseline targeting `field` wins, as it does for OS/2.
fn hhea_value(context: &Context, field: HheaField) -> Option<i16> {
    context
        .font_spec
        .hhea_values()
        .filter_map(|(f, value)| (f == field).then_some(value))
        .last()
}

fn required_hhea_value(context: &Context, field: HheaField) -> Result<i16, Error> {
    hhea_value(context, field).ok_or(Error::MissingRequiredMetric {
            table: Tag::new(b"hhea"),
            field: field.name(),
        })
}

impl Work<Context, Error> for MetricAndLimitWork {
    fn name(&self) -> &'static str {
        "hmtx/hhea/maxp"
    }

    /// Generate:
    ///
    /// * [hmtx](https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx)
    /// * [hhea](https://learn.microsoft.com/en-us/typography/opentype/spec/hhea)
    /// * [maxp](https://learn.microsoft.com/en-us/typography/opentype/spec/maxp)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let ascender = required_hhea_value(context, HheaField::Ascent)?;
        let descender = required_hhea_value(context, HheaField::Descent)?;
        let line_gap = hhea_value(context, HheaField::LineGap).unwrap_or_default();

        let glyphs = context.glyphs.get();
        let mut limits = FontLimits::default();
        let mut long_metrics = Vec::with_capacity(context.glyph_order.len());
        for glyph_name in context.glyph_order.iter() {
            let Some(glyph) = glyphs.get(glyph_name) else {
                return Err(Error::OutOfBounds {
                    what: "glyph order".into(),
                    value: glyph_name.to_string(),
                });
            };
            let advance = context.advance(glyph_name);
            limits.update(advance, glyph);
            long_metrics.push(LongMetric {
                advance,
                side_bearing: glyph.bbox.x_min,
            });
        }

        let (long_metrics, lsbs) = trim_long_metrics(long_metrics);
        debug!(
            "hmtx has {} long metrics and {} side bearings",
            long_metrics.len(),
            lsbs.len()
        );

        let hhea = Hhea {
            ascender: FWord::new(ascender),
            descender: FWord::new(descender),
            line_gap: FWord::new(line_gap),
            advance_width_max: limits.advance_width_max.into(),
            min_left_side_bearing: limits.min_left_side_bearing.unwrap_or_default().into(),
            min_right_side_bearing: limits.min_right_side_bearing.unwrap_or_default().into(),
            x_max_extent: limits.x_max_extent.unwrap_or_default().into(),
            caret_slope_rise: 1,
            number_of_h_metrics: long_metrics.len().try_into().map_err(|_| {
                Error::OutOfBounds {
                    what: "number_of_h_metrics".into(),
                    value: format!("{}", long_metrics.len()),
                }
            })?,
            ..Default::default()
        };
        context.hhea.set(hhea);

        let hmtx = Hmtx::new(long_metrics, lsbs);
        context.hmtx.set(Bytes::new(to_bytes(&hmtx, "hmtx")?));

        let maxp = Maxp {
            num_glyphs: context.glyph_order.len().try_into().map_err(|_| Error::OutOfBounds {
                what: "num_glyphs".into(),
                value: format!("{}", context.glyph_order.len()),
            })?,
            // maxp computes its version based on whether fields are set, set all of them for 1.0
            max_points: Some(limits.max_points),
            max_contours: Some(limits.max_contours),
            max_composite_points: Some(0),
            max_composite_contours: Some(0),
            max_zones: Some(1),
            max_twilight_points: Some(0),
            max_storage: Some(0),
            max_function_defs: Some(0),
            max_instruction_defs: Some(0),
            max_stack_elements: Some(0),
            max_size_of_instructions: Some(0),
            max_component_elements: Some(0),
            max_component_depth: Some(0),
        };
        context.maxp.set(maxp);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use baseline_types::{
        baseline::{BaselineSpec, Destination, FontSpec, HheaField, Os2Field},
        catalog::baseline_diagnostic,
    };
    use kurbo::BezPath;
    use pretty_assertions::assert_eq;
    use write_fonts::tables::{glyf::SimpleGlyph, vmtx::LongMetric};

    use crate::{glyphs::create_glyph_work, measure::LabelFont, os2::create_os2_work};

    use super::*;

    fn metric(advance: u16, side_bearing: i16) -> LongMetric {
        LongMetric {
            advance,
            side_bearing,
        }
    }

    #[test]
    fn trims_trailing_run() {
        let (long, lsbs) = trim_long_metrics(vec![
            metric(500, 1),
            metric(1000, 2),
            metric(1000, 3),
            metric(1000, 4),
        ]);
        assert_eq!(vec![metric(500, 1), metric(1000, 2)], long);
        assert_eq!(vec![3, 4], lsbs);
    }

    #[test]
    fn nothing_to_trim() {
        let (long, lsbs) = trim_long_metrics(vec![metric(1000, 0), metric(500, 0)]);
        assert_eq!(2, long.len());
        assert!(lsbs.is_empty());

        let (long, lsbs) = trim_long_metrics(Vec::new());
        assert!(long.is_empty() && lsbs.is_empty());
    }

    // advance 0, bbox (-437,611) => (-334, 715)
    #[test]
    fn negative_xmax_does_not_crash() {
        let mut limits = FontLimits::default();
        let glyph = SimpleGlyph::from_bezpath(
            &BezPath::from_svg("M-437,611 L-334,715 L-334,611 Z").unwrap(),
        )
        .unwrap();
        limits.update(0, &glyph);
        assert_eq!(
            (Some(-437), Some(334)),
            (limits.min_left_side_bearing, limits.min_right_side_bearing)
        );
        assert_eq!((3, 1), (limits.max_points, limits.max_contours));
    }

    #[test]
    fn empty_glyphs_have_no_side_bearings() {
        let mut limits = FontLimits::default();
        limits.update(600, &SimpleGlyph::default());
        assert_eq!(
            FontLimits {
                advance_width_max: 600,
                ..Default::default()
            },
            limits
        );
    }

    fn run(spec: FontSpec) -> Result<Context, Error> {
        let context = Context::new(Arc::new(spec), Arc::new(LabelFont::bundled()));
        create_glyph_work().exec(&context)?;
        create_metric_and_limit_work().exec(&context)?;
        Ok(context)
    }

    #[test]
    fn hhea_from_baselines() {
        let context = run(baseline_diagnostic()).unwrap();
        let hhea = context.hhea.get();
        assert_eq!(
            (800, -200, 0),
            (
                hhea.ascender.to_i16(),
                hhea.descender.to_i16(),
                hhea.line_gap.to_i16()
            )
        );
        assert_eq!(1000, hhea.advance_width_max.to_u16());
        assert_eq!(0, hhea.min_left_side_bearing.to_i16());
        assert_eq!(0, hhea.min_right_side_bearing.to_i16());
        assert_eq!(1000, hhea.x_max_extent.to_i16());
        assert_eq!(1, hhea.caret_slope_rise);
        // both advances are 1000 so the second is lsb only
        assert_eq!(1, hhea.number_of_h_metrics);

        let maxp = context.maxp.get();
        assert_eq!(2, maxp.num_glyphs);
        assert_eq!(Some(1), maxp.max_zones);
        assert!(maxp.max_contours.unwrap() > 4);
    }

    #[test]
    fn line_gap_is_optional_but_ascent_is_not() {
        let mut spec = FontSpec {
            name: "Test".into(),
            description: String::new(),
            baselines: vec![
                BaselineSpec::new("ascent", 700, Destination::Hhea(HheaField::Ascent)),
                BaselineSpec::new("descent", -300, Destination::Hhea(HheaField::Descent)),
                BaselineSpec::new("gap", 100, Destination::Hhea(HheaField::LineGap)),
            ],
        };
        let context = run(spec.clone()).unwrap();
        assert_eq!(100, context.hhea.get().line_gap.to_i16());

        spec.baselines.remove(0);
        spec.baselines.push(BaselineSpec::new(
            "ascent",
            700,
            Destination::Os2(Os2Field::TypoAscender),
        ));
        assert!(matches!(
            run(spec),
            Err(Error::MissingRequiredMetric { field: "ascent", .. })
        ));
    }

    #[test]
    fn repeated_field_takes_last_value_in_hhea_and_os2() {
        let mut spec = baseline_diagnostic();
        spec.baselines.extend([
            BaselineSpec::new("top", 900, Destination::Hhea(HheaField::Ascent)),
            BaselineSpec::new("top", 900, Destination::Os2(Os2Field::TypoAscender)),
        ]);
        let context = run(spec).unwrap();
        create_os2_work().exec(&context).unwrap();
        assert_eq!(
            (900, 900),
            (
                context.hhea.get().ascender.to_i16(),
                context.os2.get().s_typo_ascender
            )
        );
    }
}
