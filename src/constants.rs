//! Application constants and default values for sunarc.
//!
//! This module contains the arc geometry defaults, configuration limits,
//! and time constants used throughout the application.

use crate::config::SourceKind;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_SOURCE: SourceKind = SourceKind::Entity;
pub const DEFAULT_UPDATE_INTERVAL: u64 = 60; // seconds - one refresh per minute
pub const DEFAULT_SUNRISE_X: f64 = 50.0; // left end of the arc
pub const DEFAULT_SUNSET_X: f64 = 350.0; // right end of the arc
pub const DEFAULT_BASELINE_Y: f64 = 200.0; // horizon line shared by both ends
pub const DEFAULT_RAY_COUNT: u32 = 8;
pub const DEFAULT_RAY_INNER_RADIUS: f64 = 16.0;
pub const DEFAULT_RAY_OUTER_RADIUS: f64 = 24.0;

// ═══ Validation Limits ═══

// Update interval limits
pub const MINIMUM_UPDATE_INTERVAL: u64 = 10; // seconds
pub const MAXIMUM_UPDATE_INTERVAL: u64 = 3600; // seconds (hourly refresh at most)

// Ray limits
pub const MAXIMUM_RAY_COUNT: u32 = 64;

// ═══ SVG Canvas ═══
// The default geometry fits inside this view box with room for labels

pub const SVG_WIDTH: u32 = 400;
pub const SVG_HEIGHT: u32 = 240;
pub const SUN_MARKER_RADIUS: f64 = 12.0;
pub const ENDPOINT_MARKER_RADIUS: f64 = 8.0;

// ═══ Status Text ═══

pub const LABEL_BEFORE_SUNRISE: &str = "Before sunrise";
pub const LABEL_DAYLIGHT: &str = "Daylight hours";
pub const LABEL_AFTER_SUNSET: &str = "After sunset";
pub const LABEL_UNAVAILABLE: &str = "Sun times unavailable";
pub const CLOCK_FORMAT: &str = "%H:%M"; // zero-padded 24-hour

// ═══ Time Arithmetic ═══

pub const MILLIS_PER_MINUTE: i64 = 60 * 1000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const HOURS_PER_DAY: i64 = 24;

// ═══ Operational Timing Constants ═══

pub const CHECK_INTERVAL_SECS: u64 = 1; // How often to check the running flag during sleep

// ═══ User Interface Constants ═══

pub const PROGRESS_BAR_WIDTH: usize = 30; // Characters width for progress bar display

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
