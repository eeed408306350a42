//! Error types for the day-progress core.
//!
//! The pure computations (window resolution, progress, geometry, status) report
//! failures through [`SunArcError`]. Outer layers that touch files or the clock
//! wrap these in `anyhow` with context.

use chrono::{DateTime, Utc};
use std::fmt;

/// Result type alias for the pure core.
pub type Result<T> = std::result::Result<T, SunArcError>;

/// Errors that can occur while turning sun times into a render frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SunArcError {
    /// The resolved day has zero or negative length.
    ///
    /// This is a data-quality condition from upstream; callers substitute a
    /// progress of 0 and a neutral status.
    DegenerateWindow {
        /// Resolved sunrise instant.
        sunrise: DateTime<Utc>,
        /// Resolved sunset instant.
        sunset: DateTime<Utc>,
    },
    /// The arc endpoints do not describe a left-to-right semicircle.
    InvalidArc {
        /// Requested sunrise-side x coordinate.
        sunrise_x: f64,
        /// Requested sunset-side x coordinate.
        sunset_x: f64,
    },
    /// The sun ray parameters cannot produce visible segments.
    InvalidRays {
        /// Requested number of rays.
        count: u32,
        /// Requested inner radius.
        inner_radius: f64,
        /// Requested outer radius.
        outer_radius: f64,
    },
}

impl fmt::Display for SunArcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateWindow { sunrise, sunset } => write!(
                f,
                "degenerate day window: sunset {} is not after sunrise {}",
                sunset.to_rfc3339(),
                sunrise.to_rfc3339()
            ),
            Self::InvalidArc {
                sunrise_x,
                sunset_x,
            } => write!(
                f,
                "invalid arc: sunset x ({sunset_x}) must be finite and greater than sunrise x ({sunrise_x})"
            ),
            Self::InvalidRays {
                count,
                inner_radius,
                outer_radius,
            } => write!(
                f,
                "invalid sun rays: count {count}, inner radius {inner_radius}, outer radius {outer_radius} \
                 (need count > 0 and 0 <= inner <= outer)"
            ),
        }
    }
}

impl std::error::Error for SunArcError {}
