//! Resolution of the current day's daylight window.
//!
//! The host reports the *next* rising and the *next* setting of the sun plus
//! whether the sun is currently up. While the sun is up the next rising lies
//! tomorrow, so the window has to be pulled back to today's sunrise. While it
//! is down, a setting that predates the rising belongs to the previous day and
//! is pushed forward instead.

use chrono::{DateTime, Duration, Utc};

use crate::constants::HOURS_PER_DAY;

/// Absolute point in time with millisecond precision.
pub type Instant = DateTime<Utc>;

/// Resolved (sunrise, sunset) pair bounding the current day's daylight.
///
/// Built fresh on every update from raw host data and never mutated.
/// `now` may still fall outside the window; progress clamps that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub sunrise: Instant,
    pub sunset: Instant,
}

impl DayWindow {
    /// Resolve the window around `now` from host-supplied next events.
    ///
    /// # Arguments
    /// * `now` - Current wall-clock instant
    /// * `above_horizon` - Whether the sun is currently up
    /// * `next_rising` - Next sunrise as reported by the host
    /// * `next_setting` - Next sunset as reported by the host
    ///
    /// # Returns
    /// The resolved window. Zero-length windows are returned as-is and
    /// surface later as a degenerate progress computation.
    pub fn resolve(
        now: Instant,
        above_horizon: bool,
        next_rising: Instant,
        next_setting: Instant,
    ) -> Self {
        let one_day = Duration::hours(HOURS_PER_DAY);

        if above_horizon {
            let sunrise = if next_rising > now {
                next_rising - one_day
            } else {
                next_rising
            };
            Self {
                sunrise,
                sunset: next_setting,
            }
        } else {
            let sunset = if next_setting < next_rising {
                next_setting + one_day
            } else {
                next_setting
            };
            Self {
                sunrise: next_rising,
                sunset,
            }
        }
    }

    /// Length of the daylight interval (may be zero or negative for bad data).
    pub fn duration(&self) -> Duration {
        self.sunset.signed_duration_since(self.sunrise)
    }

    pub fn is_degenerate(&self) -> bool {
        self.duration() <= Duration::zero()
    }

    /// Whether `now` lies inside the window, both ends inclusive.
    pub fn contains(&self, now: Instant) -> bool {
        self.sunrise <= now && now <= self.sunset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> Instant {
        Utc.with_ymd_and_hms(2024, 6, 21, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_above_horizon_pulls_future_sunrise_back_one_day() {
        let now = at(12, 0);
        let window = DayWindow::resolve(
            now,
            true,
            now + Duration::hours(2),
            now + Duration::hours(10),
        );

        assert_eq!(window.sunrise, now - Duration::hours(22));
        assert_eq!(window.sunset, now + Duration::hours(10));
    }

    #[test]
    fn test_above_horizon_keeps_past_sunrise() {
        let now = at(12, 0);
        let window = DayWindow::resolve(now, true, at(6, 0), at(18, 0));

        assert_eq!(window.sunrise, at(6, 0));
        assert_eq!(window.sunset, at(18, 0));
        assert!(window.contains(now));
    }

    #[test]
    fn test_above_horizon_sunrise_equal_to_now_is_kept() {
        let now = at(6, 0);
        let window = DayWindow::resolve(now, true, now, at(18, 0));
        assert_eq!(window.sunrise, now);
    }

    #[test]
    fn test_below_horizon_pushes_stale_sunset_forward() {
        // Early morning: next rising is today 06:00, setting reported as yesterday 18:00
        let now = at(4, 0);
        let stale_sunset = at(18, 0) - Duration::days(1);
        let window = DayWindow::resolve(now, false, at(6, 0), stale_sunset);

        assert_eq!(window.sunrise, at(6, 0));
        assert_eq!(window.sunset, at(18, 0));
        assert!(!window.contains(now));
    }

    #[test]
    fn test_below_horizon_ordered_pair_unchanged() {
        let now = at(4, 0);
        let window = DayWindow::resolve(now, false, at(6, 0), at(18, 0));
        assert_eq!(window, DayWindow { sunrise: at(6, 0), sunset: at(18, 0) });
    }

    #[test]
    fn test_equal_events_yield_degenerate_window() {
        let now = at(4, 0);
        let window = DayWindow::resolve(now, false, at(6, 0), at(6, 0));
        assert!(window.is_degenerate());
        assert_eq!(window.duration(), Duration::zero());
    }

    #[test]
    fn test_duration_of_regular_day() {
        let window = DayWindow { sunrise: at(6, 0), sunset: at(18, 30) };
        assert_eq!(window.duration(), Duration::minutes(12 * 60 + 30));
        assert!(!window.is_degenerate());
    }
}
