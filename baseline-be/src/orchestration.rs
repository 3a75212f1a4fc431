//! Helps coordinate the building of the tables of one font.

use std::sync::Arc;

use baseline_types::{
    baseline::{FontSpec, EM_SIZE},
    orchestration::{ContextItem, Work},
    types::GlyphName,
};
use indexmap::IndexMap;
use write_fonts::{
    tables::{
        base::Base, cmap::Cmap, glyf::SimpleGlyph, head::Head, hhea::Hhea, maxp::Maxp,
        name::Name, os2::Os2, post::Post,
    },
    validate::Validate,
    FontWrite,
};

use crate::{error::Error, measure::LabelFont};

/// The glyph with every baseline drawn
pub const DIAGNOSTIC_GLYPH: &str = "X";

pub type BeWork = dyn Work<Context, Error> + Send + Sync;

/// Binary data that isn't a table we keep typed, e.g. hmtx.
#[derive(Debug, Clone, PartialEq)]
pub struct Bytes {
    buf: Vec<u8>,
}

impl Bytes {
    pub fn new(buf: Vec<u8>) -> Bytes {
        Bytes { buf }
    }

    pub fn get(&self) -> &[u8] {
        &self.buf
    }
}

/// The glued together glyf and loca tables
#[derive(Debug, Clone, PartialEq)]
pub struct GlyfLoca {
    pub glyf: Vec<u8>,
    pub raw_loca: Vec<u8>,
}

/// Everything the work of building one font reads and writes.
///
/// Inputs are fixed when the context is created, every table gets a slot
/// written once by the work that builds it.
pub struct Context {
    pub font_spec: Arc<FontSpec>,
    pub label_font: Arc<LabelFont>,
    pub glyph_order: Vec<GlyphName>,
    /// The single codepoint mappings, in codepoint order
    pub char_map: IndexMap<char, GlyphName>,

    pub glyphs: ContextItem<IndexMap<GlyphName, SimpleGlyph>>,
    pub glyf_loca: ContextItem<GlyfLoca>,
    pub hmtx: ContextItem<Bytes>,
    pub hhea: ContextItem<Hhea>,
    pub maxp: ContextItem<Maxp>,
    pub cmap: ContextItem<Cmap>,
    pub os2: ContextItem<Os2>,
    pub head: ContextItem<Head>,
    pub name: ContextItem<Name>,
    pub post: ContextItem<Post>,
    pub base: ContextItem<Base>,
    pub font: ContextItem<Bytes>,
}

impl Context {
    pub fn new(font_spec: Arc<FontSpec>, label_font: Arc<LabelFont>) -> Context {
        Context {
            font_spec,
            label_font,
            glyph_order: vec![GlyphName::NOTDEF, DIAGNOSTIC_GLYPH.into()],
            char_map: IndexMap::from([('X', DIAGNOSTIC_GLYPH.into())]),
            glyphs: ContextItem::new("glyphs"),
            glyf_loca: ContextItem::new("glyf/loca"),
            hmtx: ContextItem::new("hmtx"),
            hhea: ContextItem::new("hhea"),
            maxp: ContextItem::new("maxp"),
            cmap: ContextItem::new("cmap"),
            os2: ContextItem::new("OS/2"),
            head: ContextItem::new("head"),
            name: ContextItem::new("name"),
            post: ContextItem::new("post"),
            base: ContextItem::new("BASE"),
            font: ContextItem::new("font"),
        }
    }

    pub fn units_per_em(&self) -> u16 {
        EM_SIZE
    }

    /// Every glyph is one em wide
    pub fn advance(&self, _glyph_name: &GlyphName) -> u16 {
        EM_SIZE
    }

    pub fn glyph_id(&self, glyph_name: &GlyphName) -> Option<u32> {
        self.glyph_order
            .iter()
            .position(|gn| gn == glyph_name)
            .map(|idx| idx as u32)
    }

    pub fn get_glyph(&self, glyph_name: &GlyphName) -> Option<SimpleGlyph> {
        self.glyphs.get().get(glyph_name).cloned()
    }
}

pub(crate) fn to_bytes<T>(table: &T, context: &str) -> Result<Vec<u8>, Error>
where
    T: FontWrite + Validate,
{
    write_fonts::dump_table(table).map_err(|e| Error::DumpTableError {
        e,
        context: context.into(),
    })
}
