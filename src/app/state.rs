use std::{path::Path, time::Instant};

use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    catalog::Catalog,
    error::SlideshowError,
    fs_utils::folder_label,
    navigator::Step,
    session::{Session, SessionEvent},
    timer::IntervalPreset,
};

/// Everything the event handlers mutate. The window layer owns one of these
/// and passes it by reference into each handler.
pub struct AppState {
    pub catalog: Catalog,
    pub session: Option<Session>,
    pub preset: IntervalPreset,
    pub folder_label: String,
    pub found_label: String,
    pub status: String,
    /// Message for the modal error window, if one is open.
    pub error: Option<String>,
    rng: StdRng,
}

impl AppState {
    pub fn new(preset: IntervalPreset) -> Self {
        Self::with_rng(preset, StdRng::from_entropy())
    }

    pub fn with_rng(preset: IntervalPreset, rng: StdRng) -> Self {
        Self {
            catalog: Catalog::new(),
            session: None,
            preset,
            folder_label: String::from("Folder:"),
            found_label: String::from("Found:"),
            status: String::from("Ready"),
            error: None,
            rng,
        }
    }

    pub fn folder_chosen(&mut self, folder: &Path) {
        self.folder_label = folder_label(folder);
        match self.catalog.scan(folder) {
            Ok(summary) => {
                self.status = if summary.skipped > 0 {
                    format!(
                        "Added {} images, {} unreadable entries skipped",
                        summary.added, summary.skipped
                    )
                } else {
                    format!("Added {} images", summary.added)
                };
            }
            Err(err) => {
                error!("{err}");
                self.status = format!("{err}");
                self.error = Some(err.to_string());
            }
        }
        self.found_label = self.catalog.found_label();
    }

    pub fn select_preset(&mut self, preset: IntervalPreset) {
        self.preset = preset;
    }

    /// Returns whether a session is running afterwards.
    pub fn start_session(&mut self, now: Instant) -> bool {
        if self.session.is_some() {
            return true;
        }
        match Session::start(&mut self.catalog, self.preset, &mut self.rng, now) {
            Ok(session) => {
                self.session = Some(session);
                self.status = playback_status(false);
                true
            }
            Err(err) => {
                info!("Session not started: {err}");
                self.error = Some(err.to_string());
                false
            }
        }
    }

    pub fn end_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.end(&mut self.catalog);
        }
        self.found_label = self.catalog.found_label();
        self.status = String::from("Ready");
    }

    pub fn next(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.next(&mut self.catalog, &mut self.rng) {
            Ok(_) => self.status = playback_status(session.is_paused()),
            Err(SlideshowError::EmptyCatalog) => {
                self.status = String::from("Every image has been shown");
            }
            Err(err) => self.status = format!("{err}"),
        }
    }

    pub fn prev(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.status = match session.prev() {
            Step::Stayed => String::from("Already at the first image"),
            Step::Replayed | Step::Drew => playback_status(session.is_paused()),
        };
    }

    pub fn toggle_pause(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let paused = session.toggle_pause();
            self.status = playback_status(paused);
        }
    }

    pub fn tick(&mut self, now: Instant) -> SessionEvent {
        match self.session.as_mut() {
            Some(session) => session.poll(now, &mut self.catalog, &mut self.rng),
            None => SessionEvent::Idle,
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.session.as_ref().and_then(Session::current)
    }

    pub fn is_presenting(&self) -> bool {
        self.session.is_some()
    }
}

fn playback_status(paused: bool) -> String {
    String::from(if paused { "Paused" } else { "Playing" })
}
