use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use crate::error::SlideshowError;

/// Real-time period between two countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);
pub const TICKS_PER_SECOND: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalPreset {
    Secs30,
    Secs45,
    #[default]
    Secs60,
    Mins2,
    Mins5,
}

impl IntervalPreset {
    pub const ALL: [IntervalPreset; 5] = [
        IntervalPreset::Secs30,
        IntervalPreset::Secs45,
        IntervalPreset::Secs60,
        IntervalPreset::Mins2,
        IntervalPreset::Mins5,
    ];

    pub fn seconds(self) -> u32 {
        match self {
            IntervalPreset::Secs30 => 30,
            IntervalPreset::Secs45 => 45,
            IntervalPreset::Secs60 => 60,
            IntervalPreset::Mins2 => 120,
            IntervalPreset::Mins5 => 300,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntervalPreset::Secs30 => "30s",
            IntervalPreset::Secs45 => "45s",
            IntervalPreset::Secs60 => "60s",
            IntervalPreset::Mins2 => "2mn",
            IntervalPreset::Mins5 => "5mn",
        }
    }
}

impl fmt::Display for IntervalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `<digits>s` or `<digits>mn`, as long as the result is one of the presets.
impl FromStr for IntervalPreset {
    type Err = SlideshowError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let unknown = || SlideshowError::UnknownPreset(label.to_string());
        let split = label
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(unknown)?;
        let (digits, suffix) = label.split_at(split);
        let value: u32 = digits.parse().map_err(|_| unknown())?;
        let seconds = match suffix {
            "s" => value,
            "mn" => value.checked_mul(60).ok_or_else(unknown)?,
            _ => return Err(unknown()),
        };
        IntervalPreset::ALL
            .into_iter()
            .find(|preset| preset.seconds() == seconds)
            .ok_or_else(unknown)
    }
}

/// Formats a number of seconds as `HH:MM:SS`.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counting,
    /// The whole-second value shown to the user changed.
    LabelChanged,
    /// The countdown ran out and was reset; the caller should auto-advance.
    Expired,
}

/// Remaining time until auto-advance, counted in tenths of a second.
#[derive(Debug, Clone)]
pub struct Countdown {
    interval_secs: u32,
    remaining_ticks: i64,
    paused: bool,
    label: String,
    label_secs: u64,
}

impl Countdown {
    pub fn new(interval: IntervalPreset) -> Self {
        let mut countdown = Self {
            interval_secs: interval.seconds(),
            remaining_ticks: 0,
            paused: false,
            label: String::new(),
            label_secs: 0,
        };
        countdown.reset();
        countdown
    }

    pub fn reset(&mut self) {
        self.remaining_ticks = i64::from(self.interval_secs) * TICKS_PER_SECOND;
        self.refresh_label();
    }

    pub fn tick(&mut self) -> Tick {
        if !self.paused {
            self.remaining_ticks -= 1;
        }
        if self.remaining_ticks < 0 {
            self.reset();
            return Tick::Expired;
        }
        if self.remaining_ticks % TICKS_PER_SECOND == 0 && self.refresh_label() {
            return Tick::LabelChanged;
        }
        Tick::Counting
    }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    pub fn remaining_ticks(&self) -> i64 {
        self.remaining_ticks
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn refresh_label(&mut self) -> bool {
        let secs = (self.remaining_ticks.max(0) / TICKS_PER_SECOND) as u64;
        if !self.label.is_empty() && secs == self.label_secs {
            return false;
        }
        self.label_secs = secs;
        self.label = format_hms(secs);
        true
    }
}

/// A repeating deadline that is re-armed relative to the moment it fired, so
/// late polls delay later ticks instead of bunching them up.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    /// Fires at most once per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
