//! Daylight progress calculation.
//!
//! Progress is the fraction of the daylight interval that has elapsed. It is
//! always kept inside [0, 1]: before sunrise it is exactly 0 and after sunset
//! exactly 1, regardless of floating-point noise at the boundaries.

use serde::Serialize;

use crate::day_window::{DayWindow, Instant};
use crate::error::{Result, SunArcError};

const PERCENT_EPSILON: f64 = 1e-9;

/// Fraction of daylight elapsed, guaranteed to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp an arbitrary ratio into a progress value. NaN maps to 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Progress(raw.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage for display, rounded down.
    ///
    /// Representation error is absorbed first so 0.29 reads as 29, not 28.
    pub fn percent(self) -> u8 {
        ((self.0 * 100.0 + PERCENT_EPSILON).floor() as u8).min(100)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::START
    }
}

/// Compute how far through the day `now` is.
///
/// # Arguments
/// * `now` - Current instant
/// * `sunrise` - Resolved sunrise of the day window
/// * `sunset` - Resolved sunset of the day window
///
/// # Returns
/// * `Ok(Progress)` - Clamped progress, 0 at or before sunrise, 1 at or after sunset
/// * `Err(SunArcError::DegenerateWindow)` - If sunset is not after sunrise
pub fn compute(now: Instant, sunrise: Instant, sunset: Instant) -> Result<Progress> {
    let window = DayWindow { sunrise, sunset };
    if window.is_degenerate() {
        return Err(SunArcError::DegenerateWindow { sunrise, sunset });
    }

    if now < sunrise {
        return Ok(Progress::START);
    }
    if now >= sunset {
        return Ok(Progress::END);
    }

    // Windows shorter than a millisecond still divide by at least 1
    let day_millis = window.duration().num_milliseconds().max(1);
    let elapsed_millis = now.signed_duration_since(sunrise).num_milliseconds();
    Ok(Progress::new(elapsed_millis as f64 / day_millis as f64))
}
