//! Per-tick render frame assembly.
//!
//! A [`RenderFrame`] is the declarative output of one update: everything a
//! renderer needs to draw the arc, the sun and the status text. It is built
//! from a sun state snapshot and discarded after the next tick.

use serde::Serialize;

use crate::arc::{ArcSpec, Point, RaySegment, RaySpec, sun_ray_endpoints};
use crate::celestial::SunState;
use crate::day_window::{DayWindow, Instant};
use crate::logger::Log;
use crate::progress::{self, Progress};
use crate::status::{self, DayPhase, DisplayZone, StatusLine, clock_label};

/// Fixed drawing parameters shared by every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameLayout {
    pub arc: ArcSpec,
    pub rays: RaySpec,
    pub zone: DisplayZone,
}

/// Output bundle for one update tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub progress: Progress,
    pub phase: Option<DayPhase>,
    pub arc_path: String,
    pub dash_array: String,
    pub dash: f64,
    pub gap: f64,
    pub sun: Point,
    pub rays: Vec<RaySegment>,
    pub current_time: String,
    pub sunrise_time: String,
    pub sunset_time: String,
    pub status: String,
    pub remaining: String,
}

impl RenderFrame {
    /// Build a frame for `now` from a sun state snapshot.
    ///
    /// A degenerate day window (sunset not after sunrise) is logged and
    /// rendered with progress 0 and a neutral status rather than failing.
    pub fn build(now: Instant, sun: &SunState, layout: &FrameLayout) -> Self {
        let window = DayWindow::resolve(now, sun.above_horizon, sun.next_rising, sun.next_setting);

        let (progress, status_line) = match progress::compute(now, window.sunrise, window.sunset) {
            Ok(progress) => (
                progress,
                status::format(now, window.sunrise, window.sunset),
            ),
            Err(e) => {
                Log::log_warning(&format!("{}", e));
                (Progress::START, StatusLine::neutral())
            }
        };

        let active = layout.arc.active_path(progress);

        Self {
            progress,
            phase: status_line.phase,
            dash_array: active.dash_array(),
            arc_path: active.command,
            dash: active.dash,
            gap: active.gap,
            sun: layout.arc.sun_position(progress),
            rays: sun_ray_endpoints(&layout.rays),
            current_time: clock_label(now, &layout.zone),
            sunrise_time: clock_label(window.sunrise, &layout.zone),
            sunset_time: clock_label(window.sunset, &layout.zone),
            status: status_line.label,
            remaining: status_line.remaining,
        }
    }

    /// Convert to a compact JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Convert to pretty JSON for human-readable output.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
