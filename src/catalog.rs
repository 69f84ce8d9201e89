use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::info;
use rand::Rng;

use crate::{error::SlideshowError, fs_utils::collect_images};

/// Outcome of one folder scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub found: usize,
    pub added: usize,
    pub skipped: usize,
}

/// Pool of discovered image paths that have not been shown in the current
/// session. A path is never stored twice.
#[derive(Debug, Default)]
pub struct Catalog {
    images: IndexSet<PathBuf>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `root` recursively and adds every image it finds. Previously
    /// discovered images stay in place when the root cannot be opened.
    pub fn scan(&mut self, root: &Path) -> Result<ScanSummary, SlideshowError> {
        let collected = collect_images(root)?;
        let found = collected.files.len();
        let before = self.images.len();
        self.images.extend(collected.files);
        let summary = ScanSummary {
            found,
            added: self.images.len() - before,
            skipped: collected.skipped,
        };
        info!(
            "Scanned {}: {} images found, {} new, {} entries skipped",
            root.display(),
            summary.found,
            summary.added,
            summary.skipped
        );
        Ok(summary)
    }

    /// Removes and returns a uniformly chosen image in constant time.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PathBuf, SlideshowError> {
        if self.images.is_empty() {
            return Err(SlideshowError::EmptyCatalog);
        }
        let index = rng.gen_range(0..self.images.len());
        self.images
            .swap_remove_index(index)
            .ok_or(SlideshowError::EmptyCatalog)
    }

    pub fn return_all<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.images.len();
        self.images.extend(paths);
        self.images.len() - before
    }

    pub fn count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.images.contains(path)
    }

    pub fn found_label(&self) -> String {
        format!("Found: {} images", self.count())
    }
}
