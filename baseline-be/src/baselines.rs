//! Draws baselines as labelled horizontal guide lines across the em box.

use baseline_types::baseline::{BaselineSpec, LineStyle, StrokeStyle, BORDER_WIDTH, EM_SIZE};
use kurbo::{BezPath, Point};
use log::trace;
use skrifa::FontRef;

use crate::{
    draw::{centered_text, dashed_line, solid_line, TextStyle, DASH_GAP, DASH_WIDTH},
    error::Error,
};

/// Lines stop this far from the sides of the em box, and from their label.
const MARGIN: f64 = BORDER_WIDTH as f64;

pub fn draw_line(pen: &mut BezPath, y: f64, start: f64, end: f64, style: LineStyle) {
    let stroke_width = style.stroke_width as f64;
    match style.stroke {
        StrokeStyle::Solid => solid_line(pen, y, start, end, stroke_width),
        StrokeStyle::Dashed => dashed_line(pen, y, start, end, stroke_width, DASH_WIDTH, DASH_GAP),
    }
}

/// Draw one baseline; a non-empty label splits the line in two around it.
///
/// Baselines without a style exist only for the metrics tables and draw nothing.
pub fn draw_baseline(pen: &mut BezPath, font: &FontRef, baseline: &BaselineSpec) -> Result<(), Error> {
    let Some(style) = baseline.style else {
        return Ok(());
    };
    let y = baseline.position as f64;
    let em_size = EM_SIZE as f64;
    trace!("Draw {} at {y} with {style:?}", baseline.id);

    match baseline.label.as_deref().filter(|label| !label.is_empty()) {
        Some(label) => {
            let label_box = centered_text(
                pen,
                font,
                label,
                Point::new(em_size / 2.0, y),
                TextStyle::default(),
            )?;
            draw_line(pen, y, MARGIN, label_box.x0 - MARGIN, style);
            draw_line(pen, y, label_box.x1 + MARGIN, em_size - MARGIN, style);
        }
        None => draw_line(pen, y, MARGIN, em_size - MARGIN, style),
    }
    Ok(())
}

/// Draw every baseline, in order.
pub fn draw_baselines(pen: &mut BezPath, font: &FontRef, baselines: &[BaselineSpec]) -> Result<(), Error> {
    for baseline in baselines {
        draw_baseline(pen, font, baseline)?;
    }
    Ok(())
}
