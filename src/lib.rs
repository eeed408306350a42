//! # Sunarc
//!
//! Day-progress arc: turns the current time and a day's sunrise/sunset into a
//! clamped progress ratio, arc geometry for drawing it, a sun marker position
//! and a human-readable status line.
//!
//! ## Architecture
//!
//! - **day_window**: Resolves today's sunrise/sunset from host "next event" data
//! - **progress**: Clamped daylight progress calculation
//! - **arc**: Semicircle geometry, dash split, sun marker and rays
//! - **status**: Phase labels, remaining-time text and `HH:MM` labels
//! - **frame**: Composes the above into a per-tick `RenderFrame`
//! - **celestial**: Sun state sources (entity JSON file, solar calculation)
//! - **driver**: Timer loop producing frames until stopped
//! - **svg** / **display**: Frame renderers (SVG document, terminal)
//! - **config**: TOML configuration loading and validation
//! - **logger**: Structured logging with visual formatting

pub mod arc;
pub mod args;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod day_window;
pub mod display;
pub mod driver;
pub mod error;
pub mod frame;
pub mod logger;
pub mod progress;
pub mod status;
pub mod svg;

// Re-export important types for easier access
pub use arc::{ActivePath, ArcSpec, Point, RaySegment, RaySpec, sun_ray_endpoints};
pub use celestial::{CelestialSource, EntityFileSource, GeoSource, SunState};
pub use config::Config;
pub use day_window::{DayWindow, Instant};
pub use driver::{Clock, Driver, SystemClock};
pub use error::SunArcError;
pub use frame::{FrameLayout, RenderFrame};
pub use logger::{Log, LogLevel};
pub use progress::Progress;
pub use status::{DayPhase, DisplayZone, StatusLine};
