use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' exists but is not a directory")]
    ExpectedDirectory(PathBuf),
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to read font definitions from '{path}': {source}")]
    BadDefinitions {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("No fonts to build")]
    NoFonts,
    #[error("'{0}' needs both an 'ascent' and a 'descent' baseline")]
    MissingAscentDescent(String),
    #[error(transparent)]
    Definition(#[from] baseline_types::error::Error),
    #[error(transparent)]
    Backend(#[from] baseline_be::error::Error),
}
