//! The description of a baseline diagnostic font.
//!
//! A font is described by an ordered list of [`BaselineSpec`]s. Each one is a
//! horizontal position in font units that may be drawn into the diagnostic
//! glyph, written into a metrics table, or both.

use std::{collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};
use write_fonts::types::Tag;

use crate::error::Error;

/// Distance from the alphabetic baseline (0) to the top of the em box.
pub const EM_ASCENT: i16 = 800;
/// Distance from the alphabetic baseline (0) to the bottom of the em box.
pub const EM_DESCENT: i16 = 200;
/// Height of the em box, also the advance of every glyph.
pub const EM_SIZE: u16 = (EM_ASCENT + EM_DESCENT) as u16;
/// Thickness of the frame drawn around every glyph.
pub const BORDER_WIDTH: i32 = 12;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
    Dashed,
}

/// How a baseline is drawn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineStyle {
    pub stroke: StrokeStyle,
    pub stroke_width: i32,
}

impl LineStyle {
    pub const SOLID: LineStyle = LineStyle {
        stroke: StrokeStyle::Solid,
        stroke_width: 12,
    };

    pub const DASHED: LineStyle = LineStyle {
        stroke: StrokeStyle::Dashed,
        stroke_width: 8,
    };
}

/// A field of the [OS/2](https://learn.microsoft.com/en-us/typography/opentype/spec/os2)
/// table a baseline position may be written to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Os2Field {
    #[serde(rename = "sTypoAscender")]
    TypoAscender,
    #[serde(rename = "sTypoDescender")]
    TypoDescender,
    #[serde(rename = "sTypoLineGap")]
    TypoLineGap,
    #[serde(rename = "usWinAscent")]
    WinAscent,
    #[serde(rename = "usWinDescent")]
    WinDescent,
    #[serde(rename = "sCapHeight")]
    CapHeight,
    #[serde(rename = "sxHeight")]
    XHeight,
}

impl Os2Field {
    /// The name of the field in the OpenType specification
    pub fn name(&self) -> &'static str {
        match self {
            Os2Field::TypoAscender => "sTypoAscender",
            Os2Field::TypoDescender => "sTypoDescender",
            Os2Field::TypoLineGap => "sTypoLineGap",
            Os2Field::WinAscent => "usWinAscent",
            Os2Field::WinDescent => "usWinDescent",
            Os2Field::CapHeight => "sCapHeight",
            Os2Field::XHeight => "sxHeight",
        }
    }
}

impl Display for Os2Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A field of the [hhea](https://learn.microsoft.com/en-us/typography/opentype/spec/hhea)
/// table a baseline position may be written to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum HheaField {
    Ascent,
    Descent,
    LineGap,
}

impl HheaField {
    pub fn name(&self) -> &'static str {
        match self {
            HheaField::Ascent => "ascent",
            HheaField::Descent => "descent",
            HheaField::LineGap => "lineGap",
        }
    }
}

impl Display for HheaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where, if anywhere, the position of a baseline is recorded in the font.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Only drawn, never written to a table
    #[default]
    None,
    Os2(Os2Field),
    Hhea(HheaField),
    /// A [baseline tag](https://learn.microsoft.com/en-us/typography/opentype/spec/baselinetags)
    /// of the BASE table
    Base(#[serde(with = "crate::serde::tag")] Tag),
}

/// A single baseline of a diagnostic font.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BaselineSpec {
    pub id: String,
    /// Font units, relative to the alphabetic baseline at 0
    pub position: i16,
    /// Written as `destination: { os2: sTypoAscender }`, or `destination: none`
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub destination: Destination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// None means the baseline is not drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
}

impl BaselineSpec {
    pub fn new(id: impl Into<String>, position: i16, destination: Destination) -> Self {
        BaselineSpec {
            id: id.into(),
            position,
            destination,
            label: None,
            style: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Everything needed to build one diagnostic font.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub baselines: Vec<BaselineSpec>,
}

impl FontSpec {
    /// The position of the first baseline with the given id.
    pub fn position_of(&self, id: &str) -> Option<i16> {
        self.baselines
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.position)
    }

    /// Baselines recorded in the OS/2 table, in declaration order.
    pub fn os2_values(&self) -> impl Iterator<Item = (Os2Field, i16)> + '_ {
        self.baselines.iter().filter_map(|b| match b.destination {
            Destination::Os2(field) => Some((field, b.position)),
            _ => None,
        })
    }

    /// Baselines recorded in the hhea table, in declaration order.
    pub fn hhea_values(&self) -> impl Iterator<Item = (HheaField, i16)> + '_ {
        self.baselines.iter().filter_map(|b| match b.destination {
            Destination::Hhea(field) => Some((field, b.position)),
            _ => None,
        })
    }

    /// Baselines recorded in the BASE table, in declaration order.
    pub fn base_values(&self) -> impl Iterator<Item = (Tag, i16)> + '_ {
        self.baselines.iter().filter_map(|b| match b.destination {
            Destination::Base(tag) => Some((tag, b.position)),
            _ => None,
        })
    }

    /// Every entry sharing an id must agree on where that baseline is.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen: HashMap<&str, i16> = HashMap::new();
        for baseline in self.baselines.iter() {
            match seen.get(baseline.id.as_str()) {
                Some(first) if *first != baseline.position => {
                    return Err(Error::InconsistentBaselineValue {
                        font: self.name.clone(),
                        id: baseline.id.clone(),
                        first: *first,
                        second: baseline.position,
                    });
                }
                Some(_) => (),
                None => {
                    seen.insert(baseline.id.as_str(), baseline.position);
                }
            }
        }
        log::debug!(
            "{} has {} consistent baselines ({} distinct)",
            self.name,
            self.baselines.len(),
            seen.len()
        );
        Ok(())
    }
}
