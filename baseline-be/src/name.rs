//! Generates a [name](https://learn.microsoft.com/en-us/typography/opentype/spec/name) table.

use baseline_types::orchestration::Work;
use write_fonts::{
    tables::name::{Name, NameRecord},
    types::NameId,
    OffsetMarker,
};

use crate::{
    error::Error,
    orchestration::{BeWork, Context},
};

pub const COPYRIGHT: &str = "Copyright (c) 2026, Sajid Anwar";
pub const STYLE_NAME: &str = "Regular";
pub const VERSION: &str = "Version 1.0";

const WINDOWS: u16 = 3;
const UNICODE_BMP: u16 = 1;
const EN_US: u16 = 0x409;

struct NameWork {}

pub fn create_name_work() -> Box<BeWork> {
    Box::new(NameWork {})
}

/// The strings of the name table, ordered by name id.
pub fn names(family_name: &str) -> Vec<(NameId, String)> {
    let full_name = format!("{family_name}-{STYLE_NAME}");
    vec![
        (NameId::COPYRIGHT_NOTICE, COPYRIGHT.to_string()),
        (NameId::FAMILY_NAME, family_name.to_string()),
        (NameId::SUBFAMILY_NAME, STYLE_NAME.to_string()),
        (NameId::UNIQUE_ID, full_name.clone()),
        (NameId::FULL_NAME, full_name.clone()),
        (NameId::VERSION_STRING, VERSION.to_string()),
        (NameId::POSTSCRIPT_NAME, full_name),
    ]
}

impl Work<Context, Error> for NameWork {
    fn name(&self) -> &'static str {
        "name"
    }

    /// Generate [name](https://learn.microsoft.com/en-us/typography/opentype/spec/name)
    fn exec(&self, context: &Context) -> Result<(), Error> {
        let name_records = names(&context.font_spec.name)
            .into_iter()
            .map(|(name_id, value)| NameRecord {
                name_id,
                platform_id: WINDOWS,
                encoding_id: UNICODE_BMP,
                language_id: EN_US,
                string: OffsetMarker::new(value),
            })
            .collect::<Vec<_>>();

        context.name.set(Name::new(name_records.into_iter().collect()));
        Ok(())
    }
}
