//! Backend of the baseline diagnostic font build.
//!
//! Draws the diagnostic glyphs and turns a [`FontSpec`](baseline_types::baseline::FontSpec)
//! into binary OpenType tables, one [`Work`](baseline_types::orchestration::Work) per table.
pub mod base;
pub mod baselines;
pub mod cmap;
pub mod draw;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod head;
pub mod measure;
pub mod metrics_and_limits;
pub mod name;
pub mod orchestration;
pub mod os2;
pub mod pen;
pub mod post;
#[cfg(test)]
mod test_util;
