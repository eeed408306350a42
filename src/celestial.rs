//! Sources of celestial state: whether the sun is up and when it next rises and sets.
//!
//! The frame builder never reads the sky itself. Each update it asks a
//! [`CelestialSource`] for a [`SunState`] snapshot. Two sources exist:
//!
//! - [`EntityFileSource`] reads a home-automation `sun.sun` entity exported as
//!   JSON (`state` plus `next_rising`/`next_setting` attributes).
//! - [`GeoSource`] computes the same values from coordinates using the
//!   `sunrise` crate.
//!
//! A source returns `Ok(None)` when state is simply not available for this tick
//! (file missing, entity unavailable, polar day or night). No frame is produced
//! in that case and the display keeps its last frame.

use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::config::{Config, SourceKind};
use crate::day_window::Instant;
use crate::logger::Log;

const STATE_ABOVE_HORIZON: &str = "above_horizon";
const STATE_BELOW_HORIZON: &str = "below_horizon";

/// Raw per-update celestial snapshot as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunState {
    pub above_horizon: bool,
    pub next_rising: Instant,
    pub next_setting: Instant,
}

/// Provider of sun state for a given moment.
#[cfg_attr(test, mockall::automock)]
pub trait CelestialSource {
    /// Current sun state, or `None` when the host has nothing to offer.
    fn sun_state(&self, now: Instant) -> Result<Option<SunState>>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Build the source selected in the configuration.
pub fn source_from_config(config: &Config) -> Result<Box<dyn CelestialSource>> {
    match config.source.unwrap_or(crate::constants::DEFAULT_SOURCE) {
        SourceKind::Entity => {
            let path = config
                .entity_file
                .as_ref()
                .context("The entity source requires 'entity_file' in the configuration")?;
            Ok(Box::new(EntityFileSource::new(path)))
        }
        SourceKind::Geo => match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => Ok(Box::new(GeoSource::new(lat, lon)?)),
            _ => anyhow::bail!("The geo source requires 'latitude' and 'longitude'"),
        },
    }
}

// ═══ Entity file source ═══

#[derive(Debug, Deserialize)]
struct EntitySnapshot {
    state: String,
    #[serde(default)]
    attributes: EntityAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct EntityAttributes {
    next_rising: Option<Instant>,
    next_setting: Option<Instant>,
}

/// Reads a `sun.sun` entity snapshot from a JSON file on every update.
#[derive(Debug, Clone)]
pub struct EntityFileSource {
    path: PathBuf,
}

impl EntityFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse an entity snapshot from JSON text.
    ///
    /// # Returns
    /// - `Ok(Some(SunState))` for a usable entity
    /// - `Ok(None)` if the entity is unavailable or lacks its attributes
    /// - `Err` if the JSON or its timestamps cannot be parsed
    pub fn parse(content: &str) -> Result<Option<SunState>> {
        let snapshot: EntitySnapshot =
            serde_json::from_str(content).context("Failed to parse sun entity JSON")?;

        let above_horizon = match snapshot.state.as_str() {
            STATE_ABOVE_HORIZON => true,
            STATE_BELOW_HORIZON => false,
            "unavailable" | "unknown" => return Ok(None),
            other => anyhow::bail!(
                "Unexpected sun entity state '{}' (expected '{}' or '{}')",
                other,
                STATE_ABOVE_HORIZON,
                STATE_BELOW_HORIZON
            ),
        };

        match (
            snapshot.attributes.next_rising,
            snapshot.attributes.next_setting,
        ) {
            (Some(next_rising), Some(next_setting)) => Ok(Some(SunState {
                above_horizon,
                next_rising,
                next_setting,
            })),
            _ => Ok(None),
        }
    }
}

impl CelestialSource for EntityFileSource {
    fn sun_state(&self, _now: Instant) -> Result<Option<SunState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read sun entity from {}", self.path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid sun entity in {}", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("sun entity file {}", self.path.display())
    }
}

// ═══ Geographic source ═══

/// Computes sun events for fixed coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GeoSource {
    latitude: f64,
    longitude: f64,
}

impl GeoSource {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            anyhow::bail!(
                "Invalid latitude: {}. Must be between -90 and 90 degrees",
                latitude
            );
        }
        if !(-180.0..=180.0).contains(&longitude) {
            anyhow::bail!(
                "Invalid longitude: {}. Must be between -180 and 180 degrees",
                longitude
            );
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Earliest occurrence of the event strictly after `now`.
    ///
    /// Searches the day before through two days after `now` (UTC dates), which
    /// covers every time zone offset.
    fn next_event(&self, now: Instant, rising: bool) -> Result<Option<Instant>> {
        if Coordinates::new(self.latitude, self.longitude).is_none() {
            anyhow::bail!("Failed to create coordinates");
        }
        let today = now.date_naive();

        let next = (-1..=2)
            .filter_map(|offset| today.checked_add_signed(Duration::days(offset)))
            .filter_map(|date| {
                let coord = Coordinates::new(self.latitude, self.longitude)?;
                let event = if rising {
                    SolarEvent::Sunrise
                } else {
                    SolarEvent::Sunset
                };
                Some(SolarDay::new(coord, date).event_time(event))
            })
            .filter(|time| *time > now)
            .min();

        Ok(next)
    }
}

impl CelestialSource for GeoSource {
    fn sun_state(&self, now: Instant) -> Result<Option<SunState>> {
        let next_rising = self.next_event(now, true)?;
        let next_setting = self.next_event(now, false)?;

        match (next_rising, next_setting) {
            (Some(next_rising), Some(next_setting)) => Ok(Some(SunState {
                above_horizon: next_setting < next_rising,
                next_rising,
                next_setting,
            })),
            _ => {
                Log::log_debug("No sunrise or sunset in range (polar day or night)");
                Ok(None)
            }
        }
    }

    fn describe(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "solar calculation for {:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}
