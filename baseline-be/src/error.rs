use baseline_types::types::{GlyphName, Tag};
use skrifa::{outline::DrawError, raw::ReadError};
use thiserror::Error;
use write_fonts::tables::{cmap::CmapConflict, glyf::MalformedPath};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read the label font: {0}")]
    LabelFont(#[from] ReadError),
    #[error("'{ch}' of label '{text}' has no glyph in the label font")]
    GlyphNotFound { ch: char, text: String },
    #[error("Unable to draw '{ch}' of the label font: {problem:?}")]
    LabelDrawError { ch: char, problem: DrawError },
    #[error("'{glyph_name}' {problem:?} {context}")]
    MalformedPath {
        glyph_name: GlyphName,
        problem: MalformedPath,
        context: String,
    },
    #[error("{table} requires a value for {field}")]
    MissingRequiredMetric { table: Tag, field: &'static str },
    #[error("BASE has no '{0}' baseline to use as the default")]
    BaselineTagNotFound(Tag),
    #[error("Unable to map characters: {0:?}")]
    CmapConflict(CmapConflict),
    #[error("Generating bytes for {context} failed: {e}")]
    DumpTableError {
        e: write_fonts::error::Error,
        context: String,
    },
    #[error("{what} out of bounds: {value}")]
    OutOfBounds { what: String, value: String },
}
