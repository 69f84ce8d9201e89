use std::{
    path::Path,
    time::{Duration, Instant},
};

use log::{debug, info};
use rand::Rng;

use crate::{
    catalog::Catalog,
    error::SlideshowError,
    navigator::{Navigator, Step},
    timer::{Countdown, IntervalPreset, Tick, Ticker, TICK_PERIOD},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Idle,
    TimerLabelChanged,
    /// The countdown ran out and a different image is now current.
    AutoAdvanced,
}

/// One presentation: history navigation plus the countdown that drives
/// auto-advance. Ending a session consumes it, so nothing can tick against
/// torn-down state.
#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    countdown: Countdown,
    ticker: Ticker,
}

impl Session {
    /// Draws the first image. Fails with [`SlideshowError::EmptyCatalog`]
    /// without touching the catalog when there is nothing to show.
    pub fn start<R: Rng + ?Sized>(
        catalog: &mut Catalog,
        interval: IntervalPreset,
        rng: &mut R,
        now: Instant,
    ) -> Result<Self, SlideshowError> {
        let mut navigator = Navigator::new();
        navigator.reset_session(catalog, rng)?;
        info!(
            "Session started with a {interval} interval, {} images left to draw",
            catalog.count()
        );
        Ok(Self {
            navigator,
            countdown: Countdown::new(interval),
            ticker: Ticker::start(TICK_PERIOD, now),
        })
    }

    pub fn next<R: Rng + ?Sized>(
        &mut self,
        catalog: &mut Catalog,
        rng: &mut R,
    ) -> Result<Step, SlideshowError> {
        self.countdown.reset();
        self.navigator.advance_forward(catalog, rng)
    }

    pub fn prev(&mut self) -> Step {
        self.countdown.reset();
        self.navigator.advance_backward()
    }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.countdown.toggle_pause();
        debug!("Countdown {}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Runs the countdown tick if the ticker is due. An expired countdown with
    /// nothing left to draw keeps the current image on screen.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        catalog: &mut Catalog,
        rng: &mut R,
    ) -> SessionEvent {
        if !self.ticker.poll(now) {
            return SessionEvent::Idle;
        }
        match self.countdown.tick() {
            Tick::Counting => SessionEvent::Idle,
            Tick::LabelChanged => SessionEvent::TimerLabelChanged,
            Tick::Expired => match self.navigator.advance_forward(catalog, rng) {
                Ok(_) => SessionEvent::AutoAdvanced,
                Err(err) => {
                    debug!("Auto-advance skipped: {err}");
                    SessionEvent::TimerLabelChanged
                }
            },
        }
    }

    /// Stops the ticker and returns every image of the session to the catalog.
    pub fn end(mut self, catalog: &mut Catalog) -> usize {
        self.ticker.cancel();
        let returned = self.navigator.end_session(catalog);
        info!(
            "Session ended, {returned} images returned, catalog holds {}",
            catalog.count()
        );
        returned
    }

    pub fn current(&self) -> Option<&Path> {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_paused(&self) -> bool {
        self.countdown.is_paused()
    }

    pub fn timer_label(&self) -> &str {
        self.countdown.label()
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.ticker.time_until_due(now).unwrap_or(TICK_PERIOD)
    }
}
