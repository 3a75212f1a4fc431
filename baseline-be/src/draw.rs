//! Primitive shapes drawn into a glyph outline.
//!
//! Everything is built from closed four point contours so the result is a
//! plain TrueType outline with no curves of its own. Coordinates are font units.

use kurbo::{Affine, BezPath, Point, Rect};
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    FontRef,
};

use crate::{error::Error, measure::measure, pen::TransformPen};

pub const DASH_WIDTH: i32 = 12;
pub const DASH_GAP: i32 = 6;

/// A closed quadrilateral: (x1, y1) → (x2, y1) → (x2, y2) → (x1, y2).
pub fn rectangle(pen: &mut BezPath, x1: f64, y1: f64, x2: f64, y2: f64) {
    pen.move_to((x1, y1));
    pen.line_to((x2, y1));
    pen.line_to((x2, y2));
    pen.line_to((x1, y2));
    pen.close_path();
}

/// A picture frame of `stroke_width` just inside the box (x1, y1) → (x2, y2).
///
/// Top and bottom strips span the full width, the sides fit between them.
pub fn bordered_rectangle(pen: &mut BezPath, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64) {
    rectangle(pen, x1, y1, x2, y1 + stroke_width);
    rectangle(pen, x1, y2 - stroke_width, x2, y2);
    rectangle(pen, x1, y1 + stroke_width, x1 + stroke_width, y2 - stroke_width);
    rectangle(pen, x2 - stroke_width, y1 + stroke_width, x2, y2 - stroke_width);
}

/// A horizontal bar from `start` to `end` centered on `y`.
pub fn solid_line(pen: &mut BezPath, y: f64, start: f64, end: f64, stroke_width: f64) {
    let half = stroke_width / 2.0;
    rectangle(pen, start, y - half, end, y + half);
}

/// Dashes of `dash_width` every `dash_width + gap` units, starting at `start`.
///
/// A dash is only drawn if it starts before `end`; the last one is not clipped.
pub fn dashed_line(
    pen: &mut BezPath,
    y: f64,
    start: f64,
    end: f64,
    stroke_width: f64,
    dash_width: i32,
    gap: i32,
) {
    let period = (dash_width + gap).max(1) as usize;
    for x in (start.round() as i32..end.round() as i32).step_by(period) {
        let x = x as f64;
        solid_line(pen, y, x, x + dash_width as f64, stroke_width);
    }
}

/// How text is placed by [`centered_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font units per em of the label
    pub font_size: f64,
    /// Vertical stretch
    pub scale_y: f64,
    /// Extra space between glyphs, in ems
    pub letter_gap: f64,
    /// Fraction of the text height to shift by, nudging caps to look centered
    pub offset_y: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_size: 50.0,
            scale_y: 1.0,
            letter_gap: 0.0,
            offset_y: -0.1,
        }
    }
}

/// Draw `text` centered on `center`, returning the box it occupies.
pub fn centered_text(
    pen: &mut BezPath,
    font: &FontRef,
    text: &str,
    center: Point,
    style: TextStyle,
) -> Result<Rect, Error> {
    let metrics = measure(font, text, style.letter_gap)?;
    let height = style.font_size * style.scale_y;
    let width = style.font_size * metrics.width();

    let left = center.x - width / 2.0;
    let bottom = center.y - height / 2.0;

    let mut x_pos = left;
    for glyph in metrics.glyphs.iter() {
        let transform = Affine::new([
            style.font_size * metrics.scale,
            0.0,
            0.0,
            style.font_size * style.scale_y * metrics.scale,
            x_pos,
            bottom - height * style.offset_y,
        ]);
        let mut glyph_pen = TransformPen::new(pen, transform);
        glyph
            .outline
            .draw(
                DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
                &mut glyph_pen,
            )
            .map_err(|problem| Error::LabelDrawError {
                ch: glyph.ch,
                problem,
            })?;
        x_pos += style.font_size * (glyph.advance + metrics.letter_gap);
    }

    Ok(Rect::from_origin_size((left, bottom), (width, height)))
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, PathEl, Point, Rect, Shape};
    use pretty_assertions::assert_eq;

    use crate::{
        measure::{measure, LabelFont},
        test_util::rects,
    };

    use super::*;

    #[test]
    fn rectangle_winding() {
        let mut pen = BezPath::new();
        rectangle(&mut pen, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            vec![
                PathEl::MoveTo(Point::new(1.0, 2.0)),
                PathEl::LineTo(Point::new(3.0, 2.0)),
                PathEl::LineTo(Point::new(3.0, 4.0)),
                PathEl::LineTo(Point::new(1.0, 4.0)),
                PathEl::ClosePath,
            ],
            pen.elements().to_vec()
        );
    }

    #[test]
    fn border_strips() {
        let mut pen = BezPath::new();
        bordered_rectangle(&mut pen, 0.0, -200.0, 1000.0, 800.0, 12.0);
        assert_eq!(
            vec![
                Rect::new(0.0, -200.0, 1000.0, -188.0),
                Rect::new(0.0, 788.0, 1000.0, 800.0),
                Rect::new(0.0, -188.0, 12.0, 788.0),
                Rect::new(988.0, -188.0, 1000.0, 788.0),
            ],
            rects(&pen)
        );
    }

    #[test]
    fn border_tiles_the_frame() {
        let (x1, y1, x2, y2, s) = (0.0, -200.0, 1000.0, 800.0, 12.0);
        let mut pen = BezPath::new();
        bordered_rectangle(&mut pen, x1, y1, x2, y2, s);
        let strips = rects(&pen);

        // no overlaps
        for (i, a) in strips.iter().enumerate() {
            for b in strips.iter().skip(i + 1) {
                assert!(a.intersect(*b).area() <= 0.0, "{a:?} overlaps {b:?}");
            }
        }
        // together they cover the box minus the interior
        let covered: f64 = strips.iter().map(|r| r.area()).sum();
        let frame = Rect::new(x1, y1, x2, y2).area()
            - Rect::new(x1 + s, y1 + s, x2 - s, y2 - s).area();
        assert_eq!(frame, covered);
        let union = strips.iter().skip(1).fold(strips[0], |acc, r| acc.union(*r));
        assert_eq!(Rect::new(x1, y1, x2, y2), union);
    }

    #[test]
    fn solid_line_is_centered() {
        let mut pen = BezPath::new();
        solid_line(&mut pen, 50.0, 12.0, 988.0, 12.0);
        assert_eq!(vec![Rect::new(12.0, 44.0, 988.0, 56.0)], rects(&pen));
    }

    #[test]
    fn dashes_every_period() {
        let mut pen = BezPath::new();
        dashed_line(&mut pen, 0.0, 0.0, 100.0, 8.0, DASH_WIDTH, DASH_GAP);
        let dashes = rects(&pen);
        assert_eq!(
            vec![0.0, 18.0, 36.0, 54.0, 72.0, 90.0],
            dashes.iter().map(|r| r.x0).collect::<Vec<_>>()
        );
        assert!(dashes.iter().all(|r| r.width() == 12.0));
        assert!(dashes.iter().all(|r| r.y0 == -4.0 && r.y1 == 4.0));
    }

    #[test]
    fn no_dash_starts_at_end() {
        let mut pen = BezPath::new();
        dashed_line(&mut pen, 0.0, 0.0, 90.0, 8.0, DASH_WIDTH, DASH_GAP);
        assert_eq!(5, rects(&pen).len());
    }

    #[test]
    fn empty_dashed_line() {
        let mut pen = BezPath::new();
        dashed_line(&mut pen, 0.0, 100.0, 100.0, 8.0, DASH_WIDTH, DASH_GAP);
        dashed_line(&mut pen, 0.0, 100.0, 50.0, 8.0, DASH_WIDTH, DASH_GAP);
        assert!(pen.elements().is_empty());
    }

    #[test]
    fn text_is_centered() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let mut pen = BezPath::new();
        let style = TextStyle::default();
        let rect = centered_text(&mut pen, &font, "MATH", Point::new(500.0, 450.0), style).unwrap();

        let width = measure(&font, "MATH", 0.0).unwrap().width() * 50.0;
        assert!((rect.width() - width).abs() < 1e-9);
        assert_eq!(50.0, rect.height());
        assert!((rect.center().x - 500.0).abs() < 1e-9);
        assert_eq!(425.0, rect.y0);
        assert!(!pen.elements().is_empty());

        // the ink lands roughly within the box, lifted by the offset
        let ink = pen.bounding_box();
        assert!(ink.x0 >= rect.x0 - 1.0 && ink.x1 <= rect.x1 + 1.0, "{ink:?} {rect:?}");
        assert!(ink.y0 >= rect.y0 && ink.y1 <= rect.y1 + 10.0, "{ink:?} {rect:?}");
    }

    #[test]
    fn empty_text_draws_nothing() {
        let label_font = LabelFont::bundled();
        let font = label_font.font_ref().unwrap();
        let mut pen = BezPath::new();
        let rect = centered_text(
            &mut pen,
            &font,
            "",
            Point::new(500.0, 0.0),
            TextStyle::default(),
        )
        .unwrap();
        assert_eq!(0.0, rect.width());
        assert_eq!(500.0, rect.x0);
        assert!(pen.elements().is_empty());
    }
}
