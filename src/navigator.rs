//! Shuffle-and-history navigation over a [`Catalog`].
//!
//! Every image of a session lives in exactly one place: the catalog (not yet
//! shown), the history (already shown), or the live slot (drawn and on screen
//! but not committed to the history yet).

use std::path::{Path, PathBuf};

use log::debug;
use rand::Rng;

use crate::{catalog::Catalog, error::SlideshowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to an image already in the history.
    Replayed,
    /// Drew a fresh image from the catalog.
    Drew,
    /// Nothing to move to.
    Stayed,
}

#[derive(Debug, Default)]
pub struct Navigator {
    history: Vec<PathBuf>,
    /// `None` means the live slot is on screen.
    cursor: Option<usize>,
    live: Option<PathBuf>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on a freshly drawn image. Leftovers from an earlier
    /// session are returned to the catalog first.
    pub fn reset_session<R: Rng + ?Sized>(
        &mut self,
        catalog: &mut Catalog,
        rng: &mut R,
    ) -> Result<(), SlideshowError> {
        self.end_session(catalog);
        self.live = Some(catalog.draw_random(rng)?);
        Ok(())
    }

    /// Hands every image of the session back to the catalog and returns how
    /// many were handed back.
    pub fn end_session(&mut self, catalog: &mut Catalog) -> usize {
        let mut returned = catalog.return_all(self.history.drain(..));
        if let Some(live) = self.live.take() {
            returned += catalog.return_all([live]);
        }
        self.cursor = None;
        returned
    }

    /// Moves toward newer images, replaying history before drawing. Fails with
    /// [`SlideshowError::EmptyCatalog`] when a draw is needed and nothing is
    /// left; in that case the state is unchanged.
    pub fn advance_forward<R: Rng + ?Sized>(
        &mut self,
        catalog: &mut Catalog,
        rng: &mut R,
    ) -> Result<Step, SlideshowError> {
        if let Some(index) = self.cursor {
            if index + 1 < self.history.len() {
                self.cursor = Some(index + 1);
                debug!("Replaying history entry {}", index + 1);
                return Ok(Step::Replayed);
            }
        }

        let drawn = catalog.draw_random(rng)?;
        // With a cursor set, the image on screen is already the newest history entry.
        if self.cursor.take().is_none() {
            if let Some(live) = self.live.take() {
                self.history.push(live);
            }
        }
        debug!("Drew {} ({} left)", drawn.display(), catalog.count());
        self.live = Some(drawn);
        Ok(Step::Drew)
    }

    /// Moves toward older images. Never removes anything from the history.
    pub fn advance_backward(&mut self) -> Step {
        if self.cursor.is_none() {
            let Some(live) = self.live.take() else {
                return Step::Stayed;
            };
            self.history.push(live);
            self.cursor = Some(self.history.len() - 1);
        }

        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                debug!("Stepped back to history entry {}", index - 1);
                Step::Replayed
            }
            _ => Step::Stayed,
        }
    }

    pub fn current(&self) -> Option<&Path> {
        match self.cursor {
            Some(index) => self.history.get(index).map(PathBuf::as_path),
            None => self.live.as_deref(),
        }
    }

    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_live(&self) -> bool {
        self.cursor.is_none()
    }

    /// Number of images held by the session, history and live slot together.
    pub fn len(&self) -> usize {
        self.history.len() + usize::from(self.live.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
