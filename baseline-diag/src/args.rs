//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Build fonts whose glyphs draw their own baselines.
#[derive(Serialize, Deserialize, Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// Where to write the fonts, stylesheet, README and license
    #[arg(short, long)]
    #[clap(default_value = "dist")]
    pub out_dir: PathBuf,

    /// A YAML list of font definitions to build instead of the built-in fonts
    #[arg(short, long)]
    pub fonts: Option<PathBuf>,

    /// A TrueType font to draw labels with instead of the bundled one
    #[arg(long)]
    pub label_font: Option<PathBuf>,
}

impl Args {
    /// Build the built-in fonts into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Args {
        Args {
            out_dir: out_dir.into(),
            fonts: None,
            label_font: None,
        }
    }
}
