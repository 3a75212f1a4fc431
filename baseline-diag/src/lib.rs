//! Builds baseline diagnostic fonts and the files that ship with them.
//!
//! Every font is validated before anything is built, and nothing is written
//! until every font has been built.

mod args;
pub mod css;
mod error;
pub mod license;
pub mod readme;

pub use args::Args;
pub use error::Error;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use baseline_be::{
    base::create_base_work,
    cmap::create_cmap_work,
    font::create_font_work,
    glyphs::{create_glyf_loca_work, create_glyph_work},
    head::create_head_work,
    measure::LabelFont,
    metrics_and_limits::create_metric_and_limit_work,
    name::create_name_work,
    orchestration::{BeWork, Context},
    os2::create_os2_work,
    post::create_post_work,
};
use baseline_types::{baseline::FontSpec, catalog::builtin_fonts};
use log::{debug, info};
use rayon::prelude::*;

pub fn require_dir(dir: &Path) -> Result<PathBuf, Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::ExpectedDirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::FileIo {
            path: dir.to_path_buf(),
            source,
        })?
    }
    debug!("require_dir {:?}", dir);
    Ok(dir.to_path_buf())
}

/// The fonts defined in a YAML file, or the built-in fonts if there is no file.
pub fn load_fonts(definitions: Option<&Path>) -> Result<Vec<FontSpec>, Error> {
    let Some(path) = definitions else {
        return Ok(builtin_fonts());
    };
    let raw = fs::read_to_string(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let fonts: Vec<FontSpec> =
        serde_yaml::from_str(&raw).map_err(|source| Error::BadDefinitions {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Loaded {} font definitions from {path:?}", fonts.len());
    Ok(fonts)
}

pub fn load_label_font(path: Option<&Path>) -> Result<LabelFont, Error> {
    let Some(path) = path else {
        return Ok(LabelFont::bundled());
    };
    let data = fs::read(path).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LabelFont::new(data)?)
}

/// Reject definitions we can't build before any work starts.
pub fn validate(fonts: &[FontSpec]) -> Result<(), Error> {
    if fonts.is_empty() {
        return Err(Error::NoFonts);
    }
    for font in fonts {
        font.validate()?;
    }
    Ok(())
}

/// Work to build one font, in the order it must execute.
pub fn create_workload() -> Vec<Box<BeWork>> {
    vec![
        create_glyph_work(),
        create_glyf_loca_work(),
        create_metric_and_limit_work(),
        create_cmap_work(),
        create_os2_work(),
        create_head_work(),
        create_name_work(),
        create_post_work(),
        create_base_work(),
        create_font_work(),
    ]
}

/// Build the binary font for one definition.
pub fn build_font(font: Arc<FontSpec>, label_font: Arc<LabelFont>) -> Result<Vec<u8>, Error> {
    let context = Context::new(font, label_font);
    for work in create_workload() {
        debug!("Exec {} for {}", work.name(), context.font_spec.name);
        work.exec(&context)?;
    }
    Ok(context.font.get().get().to_vec())
}

/// Build every font; each build is independent so they run in parallel.
pub fn build_fonts(
    fonts: &[FontSpec],
    label_font: Arc<LabelFont>,
) -> Result<Vec<(String, Vec<u8>)>, Error> {
    fonts
        .par_iter()
        .map(|font| {
            let bytes = build_font(Arc::new(font.clone()), label_font.clone())?;
            Ok((font.name.clone(), bytes))
        })
        .collect()
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {path:?}");
    Ok(())
}

/// Build everything `args` asks for, returning the files written.
pub fn run(args: &Args) -> Result<Vec<PathBuf>, Error> {
    let fonts = load_fonts(args.fonts.as_deref())?;
    let label_font = Arc::new(load_label_font(args.label_font.as_deref())?);
    validate(&fonts)?;

    let binaries = build_fonts(&fonts, label_font)?;
    let stylesheet = css::stylesheet(&fonts)?;
    let readme = readme::readme(&fonts);

    let out_dir = require_dir(&args.out_dir)?;
    let mut written = Vec::new();
    for (name, bytes) in binaries {
        let path = out_dir.join(format!("{name}.ttf"));
        write_file(&path, bytes)?;
        written.push(path);
    }
    for (file, contents) in [
        (css::STYLESHEET_FILE, stylesheet.as_str()),
        (readme::README_FILE, readme.as_str()),
        (license::LICENSE_FILE, license::OFL),
    ] {
        let path = out_dir.join(file);
        write_file(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}
