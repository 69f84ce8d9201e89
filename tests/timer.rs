use slideshow::timer::*;
use std::time::{Duration, Instant};

#[test]
fn format_hms_pads_every_field() {
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(59), "00:00:59");
    assert_eq!(format_hms(3661), "01:01:01");
    assert_eq!(format_hms(300), "00:05:00");
}

#[test]
fn presets_parse_from_their_labels() {
    for preset in IntervalPreset::ALL {
        assert_eq!(preset.label().parse::<IntervalPreset>().unwrap(), preset);
    }
    assert_eq!("2mn".parse::<IntervalPreset>().unwrap().seconds(), 120);
    assert_eq!("5mn".parse::<IntervalPreset>().unwrap().seconds(), 300);
    assert_eq!(IntervalPreset::default(), IntervalPreset::Secs60);
}

#[test]
fn unknown_presets_are_rejected() {
    for label in ["", "s", "mn", "60", "90s", "60x", "3mn", "1h"] {
        assert!(label.parse::<IntervalPreset>().is_err(), "{label:?} parsed");
    }
}

#[test]
fn countdown_expires_after_full_interval() {
    let mut countdown = Countdown::new(IntervalPreset::Secs30);
    let ticks = 30 * TICKS_PER_SECOND;
    for _ in 0..ticks {
        assert_ne!(countdown.tick(), Tick::Expired);
    }
    assert_eq!(countdown.label(), "00:00:00");
    assert_eq!(countdown.tick(), Tick::Expired);
    assert_eq!(countdown.remaining_ticks(), ticks);
    assert_eq!(countdown.label(), "00:00:30");
}

#[test]
fn countdown_relabels_once_per_second() {
    let mut countdown = Countdown::new(IntervalPreset::Secs45);
    let changes = (0..45 * TICKS_PER_SECOND)
        .filter(|_| countdown.tick() == Tick::LabelChanged)
        .count();
    assert_eq!(changes, 45);
}

#[test]
fn paused_countdown_never_expires() {
    let mut countdown = Countdown::new(IntervalPreset::Secs30);
    assert!(countdown.toggle_pause());
    for _ in 0..1000 {
        assert_eq!(countdown.tick(), Tick::Counting);
    }
    assert!(!countdown.toggle_pause());
    assert_eq!(countdown.tick(), Tick::Counting);
}

#[test]
fn reset_restores_full_interval() {
    let mut countdown = Countdown::new(IntervalPreset::Mins2);
    for _ in 0..55 {
        countdown.tick();
    }
    countdown.reset();
    assert_eq!(countdown.remaining_ticks(), 1200);
    assert_eq!(countdown.label(), "00:02:00");
}

#[test]
fn ticker_rearms_from_the_firing_moment() {
    let start = Instant::now();
    let mut ticker = Ticker::start(TICK_PERIOD, start);
    assert!(!ticker.poll(start));
    assert!(!ticker.poll(start + Duration::from_millis(50)));

    let late = start + Duration::from_millis(350);
    assert!(ticker.poll(late));
    assert!(!ticker.poll(late));
    assert_eq!(ticker.time_until_due(late), Some(TICK_PERIOD));
    assert!(ticker.poll(late + TICK_PERIOD));
}

#[test]
fn cancelled_ticker_stays_silent() {
    let start = Instant::now();
    let mut ticker = Ticker::start(TICK_PERIOD, start);
    ticker.cancel();
    assert!(!ticker.is_armed());
    assert!(!ticker.poll(start + Duration::from_secs(10)));
    assert_eq!(ticker.time_until_due(start), None);
}
