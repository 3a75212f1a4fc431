//! Generates a [cmap](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap) table.

use baseline_types::orchestration::Work;
use log::debug;
use write_fonts::{tables::cmap::Cmap, types::GlyphId};

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

struct CmapWork {}

pub fn create_cmap_work() -> Box<BeWork> {
    Box::new(CmapWork {})
}

impl Work<Context, Error> for CmapWork {
    fn name(&self) -> &'static str {
        "cmap"
    }

    /// Generate [cmap](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap)
    ///
    /// Anything not mapped falls back to .notdef.
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let mappings = context
            .char_map
            .iter()
            .map(|(ch, glyph_name)| {
                context
                    .glyph_id(glyph_name)
                    .map(|gid| (*ch, GlyphId::new(gid)))
                    .ok_or_else(|| Error::OutOfBounds {
                        what: "cmap".into(),
                        value: glyph_name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("cmap has {} mappings", mappings.len());

        let cmap = Cmap::from_mappings(mappings).map_err(Error::CmapConflict)?;
        context.cmap.set(cmap);
        Ok(())
    }
}
