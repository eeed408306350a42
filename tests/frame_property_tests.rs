use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use std::f64::consts::PI;

use sunarc::{ArcSpec, DayWindow, Instant, Progress, progress, status};

const TOLERANCE: f64 = 1e-9;

fn base() -> Instant {
    Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap()
}

/// Day windows between 1 minute and 23 hours long, starting anywhere in the day
fn window_strategy() -> impl Strategy<Value = (Instant, Instant)> {
    (0i64..86_400_000, 60_000i64..82_800_000).prop_map(|(start_ms, len_ms)| {
        let sunrise = base() + Duration::milliseconds(start_ms);
        (sunrise, sunrise + Duration::milliseconds(len_ms))
    })
}

/// Arcs with positive radius anywhere on a reasonable canvas
fn arc_strategy() -> impl Strategy<Value = ArcSpec> {
    (-500.0f64..500.0, 1.0f64..1000.0, -500.0f64..500.0)
        .prop_map(|(x, width, y)| ArcSpec::new(x, x + width, y).unwrap())
}

proptest! {
    #[test]
    fn test_progress_always_clamped(
        (sunrise, sunset) in window_strategy(),
        offset_ms in -172_800_000i64..172_800_000,
    ) {
        let now = sunrise + Duration::milliseconds(offset_ms);
        let p = progress::compute(now, sunrise, sunset).unwrap().value();
        prop_assert!((0.0..=1.0).contains(&p));

        if now < sunrise {
            prop_assert_eq!(p, 0.0);
        }
        if now > sunset {
            prop_assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn test_progress_is_monotonic(
        (sunrise, sunset) in window_strategy(),
        a in -86_400_000i64..172_800_000,
        step in 0i64..86_400_000,
    ) {
        let earlier = sunrise + Duration::milliseconds(a);
        let later = earlier + Duration::milliseconds(step);
        let p1 = progress::compute(earlier, sunrise, sunset).unwrap();
        let p2 = progress::compute(later, sunrise, sunset).unwrap();
        prop_assert!(p1 <= p2);
    }

    #[test]
    fn test_progress_new_clamps_any_input(raw in proptest::num::f64::ANY) {
        let v = Progress::new(raw).value();
        prop_assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn test_dash_plus_gap_is_arc_length(arc in arc_strategy(), p in 0.0f64..=1.0) {
        let path = arc.active_path(Progress::new(p));
        let expected = PI * arc.radius();
        prop_assert!((path.dash + path.gap - expected).abs() < TOLERANCE * expected.max(1.0));
    }

    #[test]
    fn test_sun_marker_stays_on_arc(arc in arc_strategy(), p in 0.0f64..=1.0) {
        let sun = arc.sun_position(Progress::new(p));
        let center = arc.center();
        let distance = ((sun.x - center.x).powi(2) + (sun.y - center.y).powi(2)).sqrt();

        prop_assert!((distance - arc.radius()).abs() < 1e-6 * arc.radius().max(1.0));
        // Never below the baseline
        prop_assert!(sun.y <= center.y + 1e-9);
    }

    #[test]
    fn test_marker_key_points(arc in arc_strategy()) {
        let check = |p: f64, expected: sunarc::Point| {
            let sun = arc.sun_position(Progress::new(p));
            (sun.x - expected.x).abs() < 1e-6 && (sun.y - expected.y).abs() < 1e-6
        };
        prop_assert!(check(0.0, arc.sunrise_point()));
        prop_assert!(check(0.5, arc.apex()));
        prop_assert!(check(1.0, arc.sunset_point()));
    }

    #[test]
    fn test_above_horizon_window_contains_now(
        now_ms in 0i64..86_400_000,
        to_setting_ms in 1i64..86_400_000,
        to_rising_ms in 1i64..86_400_000,
    ) {
        let now = base() + Duration::milliseconds(now_ms);
        let window = DayWindow::resolve(
            now,
            true,
            now + Duration::milliseconds(to_rising_ms),
            now + Duration::milliseconds(to_setting_ms),
        );
        prop_assert!(window.sunrise < now);
        prop_assert_eq!(window.sunset, now + Duration::milliseconds(to_setting_ms));
    }

    #[test]
    fn test_remaining_text_shape(
        (sunrise, sunset) in window_strategy(),
        offset_ms in -43_200_000i64..86_400_000,
    ) {
        let now = sunrise + Duration::milliseconds(offset_ms);
        let line = status::format(now, sunrise, sunset);
        let ends_ok = line.remaining.ends_with("until sunrise") || line.remaining.ends_with("until sunset");
        prop_assert!(ends_ok);
        prop_assert!(!line.remaining.starts_with('-'));
    }
}
