use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideshowError {
    /// The folder chosen for a scan could not be opened. Nested folders that
    /// fail during the walk are skipped and never produce this error.
    #[error("Unable to open {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No image found, please select a folder containing images.")]
    EmptyCatalog,

    #[error("Unknown interval {0:?}, expected one of 30s, 45s, 60s, 2mn, 5mn")]
    UnknownPreset(String),
}
