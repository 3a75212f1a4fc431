//! Generates a [head](https://learn.microsoft.com/en-us/typography/opentype/spec/head) table.

use std::env;

use baseline_types::orchestration::Work;
use chrono::{DateTime, Utc};
use log::warn;
use write_fonts::{
    tables::{
        glyf::{Bbox, SimpleGlyph},
        head::Head,
    },
    types::{Fixed, LongDateTime},
};

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

struct HeadWork {}

pub fn create_head_work() -> Box<BeWork> {
    Box::new(HeadWork {})
}

/// 1904-01-01T00:00:00Z as a Unix timestamp
const MACINTOSH_EPOCH: i64 = -2082844800;

/// glyf/loca always uses 32-bit offsets
const LONG_LOCA: i16 = 1;

fn timestamp_since_mac_epoch(datetime: DateTime<Utc>) -> i64 {
    datetime.timestamp() - MACINTOSH_EPOCH
}

/// The build time given by `SOURCE_DATE_EPOCH`, if it holds a Unix timestamp.
///
/// See <https://reproducible-builds.org/specs/source-date-epoch/>.
fn source_date_epoch() -> Option<DateTime<Utc>> {
    let value = env::var("SOURCE_DATE_EPOCH").ok()?;
    let date = value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0));
    if date.is_none() {
        warn!("Ignoring SOURCE_DATE_EPOCH={value:?}, using the current time");
    }
    date
}

/// Seconds since the TrueType epoch for created/modified.
fn build_timestamp() -> i64 {
    timestamp_since_mac_epoch(source_date_epoch().unwrap_or_else(Utc::now))
}

/// The union of the bounding boxes of every glyph with an outline.
fn font_bbox<'a>(glyphs: impl Iterator<Item = &'a SimpleGlyph>) -> Bbox {
    glyphs
        .filter(|glyph| !glyph.contours.is_empty())
        .map(|glyph| glyph.bbox)
        .reduce(|acc, bbox| Bbox {
            x_min: acc.x_min.min(bbox.x_min),
            y_min: acc.y_min.min(bbox.y_min),
            x_max: acc.x_max.max(bbox.x_max),
            y_max: acc.y_max.max(bbox.y_max),
        })
        .unwrap_or_default()
}

fn build_head(units_per_em: u16, bbox: Bbox) -> Head {
    let now = LongDateTime::new(build_timestamp());
    Head {
        font_revision: Fixed::from_f64(1.0),
        units_per_em,
        created: now,
        modified: now,
        x_min: bbox.x_min,
        y_min: bbox.y_min,
        x_max: bbox.x_max,
        y_max: bbox.y_max,
        index_to_loc_format: LONG_LOCA,
        ..Default::default()
    }
}

impl Work<Context, Error> for HeadWork {
    fn name(&self) -> &'static str {
        "head"
    }

    /// Generate [head](https://learn.microsoft.com/en-us/typography/opentype/spec/head)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let glyphs = context.glyphs.get();
        let head = build_head(context.units_per_em(), font_bbox(glyphs.values()));
        context.head.set(head);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kurbo::BezPath;
    use more_asserts::assert_ge;
    use pretty_assertions::assert_eq;
    use temp_env;
    use write_fonts::tables::glyf::{Bbox, SimpleGlyph};

    use super::{build_head, font_bbox, timestamp_since_mac_epoch, MACINTOSH_EPOCH};

    fn glyph(svg: &str) -> SimpleGlyph {
        SimpleGlyph::from_bezpath(&BezPath::from_svg(svg).unwrap()).unwrap()
    }

    #[test]
    fn head_fields() {
        let head = build_head(1000, Bbox::default());
        assert_eq!(
            (1000, 1, 1.0),
            (
                head.units_per_em,
                head.index_to_loc_format,
                head.font_revision.to_f64()
            )
        );
    }

    #[test]
    fn dates_default_to_now() {
        temp_env::with_var_unset("SOURCE_DATE_EPOCH", || {
            let before = timestamp_since_mac_epoch(Utc::now());
            let head = build_head(1000, Bbox::default());
            assert_ge!(head.created.as_secs(), before);
            assert_eq!(head.created, head.modified);
        });
    }

    #[test]
    fn dates_from_source_date_epoch() {
        // 2001-09-09T01:46:40Z
        temp_env::with_var("SOURCE_DATE_EPOCH", Some("1000000000"), || {
            let head = build_head(1000, Bbox::default());
            assert_eq!(1000000000 - MACINTOSH_EPOCH, head.created.as_secs());
            assert_eq!(head.created, head.modified);
        });
        // the TrueType epoch itself
        temp_env::with_var("SOURCE_DATE_EPOCH", Some(MACINTOSH_EPOCH.to_string()), || {
            assert_eq!(0, build_head(1000, Bbox::default()).created.as_secs());
        });
    }

    #[test]
    fn unparseable_source_date_epoch_is_ignored() {
        let before = timestamp_since_mac_epoch(Utc::now());
        temp_env::with_var("SOURCE_DATE_EPOCH", Some("yesterday"), || {
            assert_ge!(build_head(1000, Bbox::default()).created.as_secs(), before);
        });
    }

    #[test]
    fn bbox_is_union_of_outlines() {
        let glyphs = [
            glyph("M0,-200 L1000,-200 L1000,800 L0,800 Z"),
            SimpleGlyph::default(),
            glyph("M-50,0 L10,0 L10,900 Z"),
        ];
        assert_eq!(
            Bbox {
                x_min: -50,
                y_min: -200,
                x_max: 1000,
                y_max: 900,
            },
            font_bbox(glyphs.iter())
        );
        assert_eq!(Bbox::default(), font_bbox([SimpleGlyph::default()].iter()));
    }
}
