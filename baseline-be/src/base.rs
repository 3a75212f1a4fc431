//! Generates a [BASE](https://learn.microsoft.com/en-us/typography/opentype/spec/base) table.
//!
//! Only the horizontal axis is written, with a single default script whose
//! default baseline is the alphabetic one.

use baseline_types::{orchestration::Work, types::Tag};
use log::{debug, warn};
use write_fonts::tables::base::{
    Axis, Base, BaseCoord, BaseScript, BaseScriptList, BaseScriptRecord, BaseTagList, BaseValues,
};

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

/// The baseline used by alphabetic scripts such as Latin, Cyrillic and Greek.
pub const ROMN: Tag = Tag::new(b"romn");
/// The script record that applies when no other matches.
pub const DFLT: Tag = Tag::new(b"DFLT");

struct BaseWork {}

pub fn create_base_work() -> Box<BeWork> {
    Box::new(BaseWork {})
}

/// Tags and coordinates sorted by tag, one entry per tag.
///
/// The first position given for a tag wins.
fn sorted_values(values: impl Iterator<Item = (Tag, i16)>) -> Vec<(Tag, i16)> {
    let mut values: Vec<_> = values.collect();
    values.sort_by_key(|(tag, _)| *tag);
    values.dedup_by(|(tag, position), (kept_tag, kept_position)| {
        if tag != kept_tag {
            return false;
        }
        if position != kept_position {
            warn!("BASE '{tag}' is given at {kept_position} and {position}, using {kept_position}");
        }
        true
    });
    values
}

/// Build a BASE with a horizontal axis from sorted (tag, coordinate) pairs.
pub fn build_base(values: &[(Tag, i16)]) -> Result<Base, Error> {
    let tags: Vec<Tag> = values.iter().map(|(tag, _)| *tag).collect();
    let default_index = tags
        .iter()
        .position(|tag| *tag == ROMN)
        .ok_or(Error::BaselineTagNotFound(ROMN))?;

    let record = BaseScriptRecord::new(
        DFLT,
        BaseScript::new(
            Some(BaseValues::new(
                default_index as u16,
                values
                    .iter()
                    .map(|(_, coord)| BaseCoord::format_1(*coord))
                    .collect(),
            )),
            None,
            Vec::new(),
        ),
    );
    let axis = Axis::new(
        Some(BaseTagList::new(tags)),
        BaseScriptList::new(vec![record]),
    );

    let mut base = Base::default();
    base.horiz_axis = axis.into();
    Ok(base)
}

impl Work<Context, Error> for BaseWork {
    fn name(&self) -> &'static str {
        "BASE"
    }

    /// Generate [BASE](https://learn.microsoft.com/en-us/typography/opentype/spec/base)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let values = sorted_values(context.font_spec.base_values());
        debug!(
            "BASE tags {:?}",
            values.iter().map(|(tag, _)| tag.to_string()).collect::<Vec<_>>()
        );
        context.base.set(build_base(&values)?);
        Ok(())
    }
}
