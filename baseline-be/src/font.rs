//! Merge tables into a font

use baseline_types::{orchestration::Work, types::Tag};
use log::debug;
use write_fonts::FontBuilder;

use crate::{
    error::Error,
    orchestration::{to_bytes, BeWork, Bytes, Context},
};

struct FontWork {}

pub fn create_font_work() -> Box<BeWork> {
    Box::new(FontWork {})
}

/// Every table of a diagnostic font
pub const TABLES_TO_MERGE: &[Tag] = &[
    Tag::new(b"BASE"),
    Tag::new(b"OS/2"),
    Tag::new(b"cmap"),
    Tag::new(b"glyf"),
    Tag::new(b"head"),
    Tag::new(b"hhea"),
    Tag::new(b"hmtx"),
    Tag::new(b"loca"),
    Tag::new(b"maxp"),
    Tag::new(b"name"),
    Tag::new(b"post"),
];

fn bytes_for(context: &Context, tag: Tag) -> Result<Vec<u8>, Error> {
    let context_name = tag.to_string();
    let bytes = match &tag.into_bytes() {
        b"BASE" => to_bytes(&*context.base.get(), &context_name)?,
        b"OS/2" => to_bytes(&*context.os2.get(), &context_name)?,
        b"cmap" => to_bytes(&*context.cmap.get(), &context_name)?,
        b"glyf" => context.glyf_loca.get().glyf.clone(),
        b"head" => to_bytes(&*context.head.get(), &context_name)?,
        b"hhea" => to_bytes(&*context.hhea.get(), &context_name)?,
        b"hmtx" => context.hmtx.get().get().to_vec(),
        b"loca" => context.glyf_loca.get().raw_loca.clone(),
        b"maxp" => to_bytes(&*context.maxp.get(), &context_name)?,
        b"name" => to_bytes(&*context.name.get(), &context_name)?,
        b"post" => to_bytes(&*context.post.get(), &context_name)?,
        _ => {
            return Err(Error::OutOfBounds {
                what: "table".into(),
                value: context_name,
            })
        }
    };
    Ok(bytes)
}

impl Work<Context, Error> for FontWork {
    fn name(&self) -> &'static str {
        "font"
    }

    /// Glue binary tables into a font
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let mut builder = FontBuilder::new();
        for tag in TABLES_TO_MERGE {
            debug!("Grabbing {tag} for final font");
            builder.add_raw(*tag, bytes_for(context, *tag)?);
        }

        let font = builder.build();
        debug!(
            "Assembled {} byte font for {}",
            font.len(),
            context.font_spec.name
        );
        context.font.set(Bytes::new(font));
        Ok(())
    }
}
