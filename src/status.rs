//! Human-readable status text for the day-progress display.
//!
//! Produces the phase label ("Before sunrise", "Daylight hours", "After sunset")
//! together with a remaining-time sentence, and the `HH:MM` clock labels shown
//! next to the arc.

use chrono::{Duration, Local};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::{
    CLOCK_FORMAT, HOURS_PER_DAY, LABEL_AFTER_SUNSET, LABEL_BEFORE_SUNRISE, LABEL_DAYLIGHT,
    LABEL_UNAVAILABLE, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
};
use crate::day_window::Instant;

/// Where `now` sits relative to the resolved day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhase {
    BeforeSunrise,
    Daylight,
    AfterSunset,
}

impl DayPhase {
    pub fn label(&self) -> &'static str {
        match self {
            DayPhase::BeforeSunrise => LABEL_BEFORE_SUNRISE,
            DayPhase::Daylight => LABEL_DAYLIGHT,
            DayPhase::AfterSunset => LABEL_AFTER_SUNSET,
        }
    }
}

/// Status label plus remaining-time text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// `None` when the window could not be used (neutral status).
    pub phase: Option<DayPhase>,
    pub label: String,
    pub remaining: String,
}

impl StatusLine {
    /// Status shown when the day window is degenerate.
    pub fn neutral() -> Self {
        Self {
            phase: None,
            label: LABEL_UNAVAILABLE.to_string(),
            remaining: String::new(),
        }
    }
}

/// Build the status line for `now` against a resolved window.
///
/// After sunset the next sunrise is approximated as the resolved sunrise plus
/// 24 hours rather than looked up again.
pub fn format(now: Instant, sunrise: Instant, sunset: Instant) -> StatusLine {
    let (phase, target, event) = if now < sunrise {
        (DayPhase::BeforeSunrise, sunrise, "sunrise")
    } else if now > sunset {
        (
            DayPhase::AfterSunset,
            sunrise + Duration::hours(HOURS_PER_DAY),
            "sunrise",
        )
    } else {
        (DayPhase::Daylight, sunset, "sunset")
    };

    let diff_millis = target.signed_duration_since(now).num_milliseconds();
    let (hours, minutes) = split_hours_minutes(diff_millis);

    StatusLine {
        phase: Some(phase),
        label: phase.label().to_string(),
        remaining: format!("{}h {}m until {}", hours, minutes, event),
    }
}

/// Decompose a millisecond span into whole hours and leftover whole minutes.
///
/// Both parts are floored; seconds are dropped.
pub fn split_hours_minutes(millis: i64) -> (i64, i64) {
    let hours = millis.div_euclid(MILLIS_PER_HOUR);
    let minutes = millis.rem_euclid(MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    (hours, minutes)
}

/// Time zone used for the `HH:MM` labels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayZone {
    /// The system's local zone.
    #[default]
    Local,
    /// An explicit IANA zone.
    Named(Tz),
}

impl DisplayZone {
    pub fn name(&self) -> String {
        match self {
            DisplayZone::Local => "local".to_string(),
            DisplayZone::Named(tz) => tz.name().to_string(),
        }
    }
}

/// Zero-padded 24-hour clock label for an instant.
pub fn clock_label(instant: Instant, zone: &DisplayZone) -> String {
    match zone {
        DisplayZone::Local => instant.with_timezone(&Local).format(CLOCK_FORMAT).to_string(),
        DisplayZone::Named(tz) => instant.with_timezone(tz).format(CLOCK_FORMAT).to_string(),
    }
}
