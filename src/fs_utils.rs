use std::{
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use walkdir::WalkDir;

use crate::error::SlideshowError;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "bmp", "exif", "gif", "jfif", "jpeg", "jpg", "png", "pbm", "pgm", "ppm", "tiff", "webp",
];

/// Images found under a scan root, plus the number of entries the walk had to
/// skip because they could not be read.
#[derive(Debug, Default)]
pub struct CollectedImages {
    pub files: Vec<PathBuf>,
    pub skipped: usize,
}

pub fn collect_images(root: &Path) -> Result<CollectedImages, SlideshowError> {
    fs::read_dir(root).map_err(|source| SlideshowError::DirectoryUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut collected = CollectedImages::default();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_image_path(entry.path()) {
                    collected.files.push(entry.into_path());
                }
            }
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {err}", root.display());
                collected.skipped += 1;
            }
        }
    }
    Ok(collected)
}

/// Matches the text after the last `.` against the allow-list, ignoring case.
/// Names without a dot or with an empty trailing extension never match.
pub fn is_image(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

pub fn is_image_path(path: &Path) -> bool {
    // Lossy conversion keeps an ASCII extension intact in non UTF-8 names.
    path.file_name()
        .is_some_and(|name| is_image(&name.to_string_lossy()))
}

pub fn folder_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Folder:  {name}")
}
