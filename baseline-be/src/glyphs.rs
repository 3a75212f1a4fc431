//! 'glyf' and 'loca' compilation
//!
//! Both glyphs are drawn into a [`BezPath`], converted to TrueType simple
//! glyphs, and then glued together to form the final tables.

use baseline_types::{
    baseline::{BORDER_WIDTH, EM_ASCENT, EM_DESCENT, EM_SIZE},
    orchestration::Work,
    types::GlyphName,
};
use indexmap::IndexMap;
use kurbo::BezPath;
use log::{debug, trace};
use write_fonts::tables::glyf::{Glyph as RawGlyph, SimpleGlyph};

use crate::{
    baselines::draw_baselines,
    draw::bordered_rectangle,
    error::Error,
    orchestration::{to_bytes, BeWork, Context, GlyfLoca, DIAGNOSTIC_GLYPH},
};

/// An empty frame around the em box, the outline of .notdef.
pub fn empty_box() -> BezPath {
    let mut pen = BezPath::new();
    bordered_rectangle(
        &mut pen,
        0.0,
        -EM_DESCENT as f64,
        EM_SIZE as f64,
        EM_ASCENT as f64,
        BORDER_WIDTH as f64,
    );
    pen
}

/// The em box frame with every styled baseline drawn inside.
pub fn diagnostic_box(context: &Context) -> Result<BezPath, Error> {
    let mut pen = empty_box();
    let font = context.label_font.font_ref()?;
    draw_baselines(&mut pen, &font, &context.font_spec.baselines)?;
    Ok(pen)
}

fn to_simple_glyph(glyph_name: &GlyphName, path: &BezPath) -> Result<SimpleGlyph, Error> {
    SimpleGlyph::from_bezpath(path).map_err(|problem| Error::MalformedPath {
        glyph_name: glyph_name.clone(),
        problem,
        context: path.to_svg(),
    })
}

struct GlyphWork {}

pub fn create_glyph_work() -> Box<BeWork> {
    Box::new(GlyphWork {})
}

impl Work<Context, Error> for GlyphWork {
    fn name(&self) -> &'static str {
        "glyphs"
    }

    /// Draw the outline of every glyph
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let mut glyphs = IndexMap::new();
        for glyph_name in context.glyph_order.iter() {
            let path = if glyph_name.as_str() == DIAGNOSTIC_GLYPH {
                diagnostic_box(context)?
            } else {
                empty_box()
            };
            let glyph = to_simple_glyph(glyph_name, &path)?;
            trace!(
                "{glyph_name} has {} contours, bbox {:?}",
                glyph.contours.len(),
                glyph.bbox
            );
            glyphs.insert(glyph_name.clone(), glyph);
        }
        context.glyphs.set(glyphs);
        Ok(())
    }
}

struct GlyfLocaWork {}

pub fn create_glyf_loca_work() -> Box<BeWork> {
    Box::new(GlyfLocaWork {})
}

impl Work<Context, Error> for GlyfLocaWork {
    fn name(&self) -> &'static str {
        "glyf/loca"
    }

    /// Generate [glyf](https://learn.microsoft.com/en-us/typography/opentype/spec/glyf)
    /// and [loca](https://learn.microsoft.com/en-us/typography/opentype/spec/loca).
    ///
    /// We always write a long loca, head.indexToLocFormat must agree.
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let glyphs = context.glyphs.get();

        let mut loca = vec![0u32];
        let mut glyf: Vec<u8> = Vec::new();
        for glyph_name in context.glyph_order.iter() {
            let Some(glyph) = glyphs.get(glyph_name) else {
                return Err(Error::OutOfBounds {
                    what: "glyph order".into(),
                    value: glyph_name.to_string(),
                });
            };
            let mut bytes = to_bytes(&RawGlyph::from(glyph.clone()), glyph_name.as_str())?;
            // keep every glyph 4-byte aligned
            bytes.resize(bytes.len().next_multiple_of(4), 0);
            glyf.extend(bytes);
            loca.push(glyf.len() as u32);
        }
        debug!("glyf is {} bytes for {} glyphs", glyf.len(), loca.len() - 1);

        let raw_loca = loca.iter().flat_map(|offset| offset.to_be_bytes()).collect();
        context.glyf_loca.set(GlyfLoca { glyf, raw_loca });
        Ok(())
    }
}
