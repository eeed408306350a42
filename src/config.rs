//! Configuration system for sunarc with validation and private coordinates.
//!
//! Settings live in `sunarc.toml` under the user's configuration directory
//! (`$XDG_CONFIG_HOME/sunarc/sunarc.toml`). A commented default file is created
//! on first run.
//!
//! ```toml
//! # Where sun state comes from
//! source = "entity"                 # "entity" or "geo"
//! entity_file = "/home/me/.config/sunarc/sun.json"
//! latitude = 52.5200                # Only used by the geo source
//! longitude = 13.4050
//!
//! # Display
//! timezone = "Europe/Berlin"        # Omit for the system zone
//! update_interval = 60              # Seconds between frames
//! svg_output = "/tmp/sunarc.svg"    # Optional SVG written every frame
//!
//! # Arc geometry
//! sunrise_x = 50.0
//! sunset_x = 350.0
//! baseline_y = 200.0
//! ray_count = 8
//! ray_inner_radius = 16.0
//! ray_outer_radius = 24.0
//! ```
//!
//! An optional `geo.toml` beside the main file overrides `latitude` and
//! `longitude`, so the main file can be shared without revealing a location.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::arc::{ArcSpec, RaySpec};
use crate::constants::*;
use crate::frame::FrameLayout;
use crate::logger::Log;
use crate::status::DisplayZone;

const CONFIG_DIR_NAME: &str = "sunarc";
const CONFIG_FILE_NAME: &str = "sunarc.toml";
const GEO_FILE_NAME: &str = "geo.toml";
const DEFAULT_ENTITY_FILE_NAME: &str = "sun.json";

/// Private coordinates file contents.
#[derive(Debug, Deserialize, Clone)]
struct GeoConfig {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Where sun state is read from.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A JSON export of a home-automation `sun.sun` entity.
    Entity,
    /// Solar calculation from `latitude`/`longitude`.
    Geo,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Entity => "entity",
            SourceKind::Geo => "geo",
        }
    }
}

/// Configuration structure for sunarc settings.
///
/// Every field is optional in the file; `load_from_path` fills in defaults
/// for the ones that have them.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub source: Option<SourceKind>,
    pub entity_file: Option<PathBuf>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,     // IANA name, e.g. "America/Chicago"
    pub update_interval: Option<u64>, // seconds
    pub sunrise_x: Option<f64>,
    pub sunset_x: Option<f64>,
    pub baseline_y: Option<f64>,
    pub ray_count: Option<u32>,
    pub ray_inner_radius: Option<f64>,
    pub ray_outer_radius: Option<f64>,
    pub svg_output: Option<PathBuf>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Path of the geo.toml that sits next to a given config file.
    pub fn geo_path_for(config_path: &Path) -> Result<PathBuf> {
        match config_path.parent() {
            Some(parent) => Ok(parent.join(GEO_FILE_NAME)),
            None => anyhow::bail!("Could not determine geo.toml path from config path"),
        }
    }

    /// Write a commented default configuration to `path`.
    ///
    /// The default reads a `sun.json` entity export from the same directory.
    pub fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let entity_file = path
            .parent()
            .map(|dir| dir.join(DEFAULT_ENTITY_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTITY_FILE_NAME));

        let content = ConfigBuilder::new()
            .add_section("Sun state source")
            .add_setting(
                "source",
                &format!("\"{}\"", DEFAULT_SOURCE.as_str()),
                "\"entity\" (JSON sun entity) or \"geo\" (solar calculation)",
            )
            .add_setting(
                "entity_file",
                &format!("\"{}\"", entity_file.display()),
                "Sun entity JSON export, re-read every update",
            )
            .add_section("Display")
            .add_setting(
                "update_interval",
                &DEFAULT_UPDATE_INTERVAL.to_string(),
                &format!(
                    "Seconds between frames ({}-{})",
                    MINIMUM_UPDATE_INTERVAL, MAXIMUM_UPDATE_INTERVAL
                ),
            )
            .add_section("Arc geometry")
            .add_setting(
                "sunrise_x",
                &format!("{:.1}", DEFAULT_SUNRISE_X),
                "Left end of the arc",
            )
            .add_setting(
                "sunset_x",
                &format!("{:.1}", DEFAULT_SUNSET_X),
                "Right end of the arc",
            )
            .add_setting(
                "baseline_y",
                &format!("{:.1}", DEFAULT_BASELINE_Y),
                "Horizon line of both ends",
            )
            .add_setting(
                "ray_count",
                &DEFAULT_RAY_COUNT.to_string(),
                "Rays drawn around the sun",
            )
            .add_setting(
                "ray_inner_radius",
                &format!("{:.1}", DEFAULT_RAY_INNER_RADIUS),
                "Ray start distance from the sun center",
            )
            .add_setting(
                "ray_outer_radius",
                &format!("{:.1}", DEFAULT_RAY_OUTER_RADIUS),
                "Ray end distance from the sun center",
            )
            .build();

        fs::write(path, content).context("Failed to write default config file")?;
        Ok(())
    }

    fn apply_defaults_and_validate_fields(config: &mut Config) -> Result<()> {
        if config.source.is_none() {
            config.source = Some(DEFAULT_SOURCE);
        }

        if let Some(interval) = config.update_interval {
            if !(MINIMUM_UPDATE_INTERVAL..=MAXIMUM_UPDATE_INTERVAL).contains(&interval) {
                anyhow::bail!(
                    "Update interval must be between {} and {} seconds",
                    MINIMUM_UPDATE_INTERVAL,
                    MAXIMUM_UPDATE_INTERVAL
                );
            }
        } else {
            config.update_interval = Some(DEFAULT_UPDATE_INTERVAL);
        }

        config.sunrise_x.get_or_insert(DEFAULT_SUNRISE_X);
        config.sunset_x.get_or_insert(DEFAULT_SUNSET_X);
        config.baseline_y.get_or_insert(DEFAULT_BASELINE_Y);
        config.ray_count.get_or_insert(DEFAULT_RAY_COUNT);
        config.ray_inner_radius.get_or_insert(DEFAULT_RAY_INNER_RADIUS);
        config.ray_outer_radius.get_or_insert(DEFAULT_RAY_OUTER_RADIUS);

        if let Some(count) = config.ray_count {
            if count > MAXIMUM_RAY_COUNT {
                anyhow::bail!("Ray count must be at most {}", MAXIMUM_RAY_COUNT);
            }
        }

        if let Some(lat) = config.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                anyhow::bail!("Latitude must be between -90 and 90 degrees (got {})", lat);
            }
        }

        if let Some(lon) = config.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!(
                    "Longitude must be between -180 and 180 degrees (got {})",
                    lon
                );
            }
        }

        Ok(())
    }

    /// Load and validate a configuration file without creating it.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Self::load_geo_override_from_path(&mut config, path)?;
        Self::apply_defaults_and_validate_fields(&mut config)?;
        validate_config(&config)?;

        Ok(config)
    }

    /// Apply coordinates from a geo.toml next to `config_path`, if present.
    ///
    /// A malformed geo.toml is reported and ignored.
    fn load_geo_override_from_path(config: &mut Config, config_path: &Path) -> Result<()> {
        let geo_path = Self::geo_path_for(config_path)?;
        if !geo_path.exists() {
            return Ok(());
        }

        match fs::read_to_string(&geo_path) {
            Ok(content) => match toml::from_str::<GeoConfig>(&content) {
                Ok(geo) => {
                    if let Some(lat) = geo.latitude {
                        config.latitude = Some(lat);
                    }
                    if let Some(lon) = geo.longitude {
                        config.longitude = Some(lon);
                    }
                }
                Err(e) => {
                    Log::log_warning(&format!(
                        "Failed to parse {}: {}. Using coordinates from main config.",
                        geo_path.display(),
                        e
                    ));
                }
            },
            Err(e) => {
                Log::log_warning(&format!(
                    "Failed to read {}: {}. Using coordinates from main config.",
                    geo_path.display(),
                    e
                ));
            }
        }

        Ok(())
    }

    /// Load the user configuration, creating a default file if none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)
                .context("Failed to create default config during load")?;
            Log::log_indented(&format!(
                "Created default configuration at {}",
                config_path.display()
            ));
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    pub fn display_zone(&self) -> Result<DisplayZone> {
        match self.timezone.as_deref() {
            None => Ok(DisplayZone::Local),
            Some(name) => name
                .parse::<Tz>()
                .map(DisplayZone::Named)
                .map_err(|e| anyhow::anyhow!("Unknown timezone '{}': {}", name, e)),
        }
    }

    /// Drawing parameters for the frame builder.
    pub fn layout(&self) -> Result<FrameLayout> {
        let arc = ArcSpec::new(
            self.sunrise_x.unwrap_or(DEFAULT_SUNRISE_X),
            self.sunset_x.unwrap_or(DEFAULT_SUNSET_X),
            self.baseline_y.unwrap_or(DEFAULT_BASELINE_Y),
        )?;
        let rays = RaySpec::new(
            self.ray_count.unwrap_or(DEFAULT_RAY_COUNT),
            self.ray_inner_radius.unwrap_or(DEFAULT_RAY_INNER_RADIUS),
            self.ray_outer_radius.unwrap_or(DEFAULT_RAY_OUTER_RADIUS),
        )?;
        Ok(FrameLayout {
            arc,
            rays,
            zone: self.display_zone()?,
        })
    }

    pub fn log_config(&self, config_path: &Path) {
        Log::log_block_start(&format!(
            "Loaded configuration from {}",
            config_path.display()
        ));

        let source = self.source.unwrap_or(DEFAULT_SOURCE);
        Log::log_indented(&format!("Source: {}", source.as_str()));
        match source {
            SourceKind::Entity => {
                if let Some(ref path) = self.entity_file {
                    Log::log_indented(&format!("Entity file: {}", path.display()));
                }
            }
            SourceKind::Geo => {
                if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
                    let lat_dir = if lat >= 0.0 { "N" } else { "S" };
                    let lon_dir = if lon >= 0.0 { "E" } else { "W" };
                    Log::log_indented(&format!(
                        "Location: {:.4}°{}, {:.4}°{}",
                        lat.abs(),
                        lat_dir,
                        lon.abs(),
                        lon_dir
                    ));
                }
            }
        }

        match self.display_zone() {
            Ok(zone) => Log::log_indented(&format!("Timezone: {}", zone.name())),
            Err(e) => Log::log_warning(&format!("{}", e)),
        }
        Log::log_indented(&format!(
            "Update interval: {} seconds",
            self.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL)
        ));
        if let Some(ref svg) = self.svg_output {
            Log::log_indented(&format!("SVG output: {}", svg.display()));
        }
    }
}

/// Cross-field validation run after defaults are applied.
pub fn validate_config(config: &Config) -> Result<()> {
    match config.source.unwrap_or(DEFAULT_SOURCE) {
        SourceKind::Entity => {
            if config.entity_file.is_none() {
                anyhow::bail!("source = \"entity\" requires 'entity_file' to be set");
            }
        }
        SourceKind::Geo => {
            if config.latitude.is_none() || config.longitude.is_none() {
                anyhow::bail!(
                    "source = \"geo\" requires both 'latitude' and 'longitude' (in sunarc.toml or geo.toml)"
                );
            }
        }
    }

    config
        .layout()
        .context("Invalid arc geometry or timezone in configuration")?;

    Ok(())
}

/// Builder for aligned, commented TOML output.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{}]", title)));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{} = {}", key, value),
            comment: format!("# {}", comment),
        });
        self
    }

    fn build(self) -> String {
        let width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut lines = Vec::new();
        for (i, entry) in self.entries.into_iter().enumerate() {
            match entry {
                ConfigEntry::Section(title) => {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    lines.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    lines.push(format!("{:<width$}{}", line, comment, width = width));
                }
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
