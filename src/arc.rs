//! Arc geometry for the day-progress visualization.
//!
//! The arc is a fixed semicircle over a horizontal baseline: it starts at the
//! sunrise point on the left, rises through the apex above the center, and
//! ends at the sunset point on the right. Progress never changes the path
//! itself; the active portion is expressed as a dash/gap split along the full
//! arc, and the sun marker is placed at the matching angle.

use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::{
    DEFAULT_BASELINE_Y, DEFAULT_RAY_COUNT, DEFAULT_RAY_INNER_RADIUS, DEFAULT_RAY_OUTER_RADIUS,
    DEFAULT_SUNRISE_X, DEFAULT_SUNSET_X,
};
use crate::error::{Result, SunArcError};
use crate::progress::Progress;

/// A point in drawing coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A single sun ray, relative to the sun marker's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaySegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Path data and dash split for the active (elapsed) part of the arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePath {
    /// Path command in `M x y A rx ry rot large-arc sweep x y` form.
    pub command: String,
    pub dash: f64,
    pub gap: f64,
}

impl ActivePath {
    /// Dash pattern as two space-separated numbers.
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.dash, self.gap)
    }
}

/// Static semicircle geometry, fixed for the lifetime of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    sunrise_x: f64,
    sunset_x: f64,
    baseline_y: f64,
}

impl Default for ArcSpec {
    fn default() -> Self {
        Self {
            sunrise_x: DEFAULT_SUNRISE_X,
            sunset_x: DEFAULT_SUNSET_X,
            baseline_y: DEFAULT_BASELINE_Y,
        }
    }
}

impl ArcSpec {
    /// Build an arc between two points on the same baseline.
    ///
    /// # Arguments
    /// * `sunrise_x` - Left endpoint (progress 0)
    /// * `sunset_x` - Right endpoint (progress 1), must be strictly greater
    /// * `baseline_y` - Shared y coordinate of both endpoints and the center
    pub fn new(sunrise_x: f64, sunset_x: f64, baseline_y: f64) -> Result<Self> {
        let finite = sunrise_x.is_finite() && sunset_x.is_finite() && baseline_y.is_finite();
        if !finite || sunset_x <= sunrise_x {
            return Err(SunArcError::InvalidArc {
                sunrise_x,
                sunset_x,
            });
        }
        Ok(Self {
            sunrise_x,
            sunset_x,
            baseline_y,
        })
    }

    pub fn radius(&self) -> f64 {
        (self.sunset_x - self.sunrise_x) / 2.0
    }

    pub fn center(&self) -> Point {
        Point {
            x: (self.sunrise_x + self.sunset_x) / 2.0,
            y: self.baseline_y,
        }
    }

    pub fn sunrise_point(&self) -> Point {
        Point {
            x: self.sunrise_x,
            y: self.baseline_y,
        }
    }

    pub fn sunset_point(&self) -> Point {
        Point {
            x: self.sunset_x,
            y: self.baseline_y,
        }
    }

    /// Topmost point of the arc, reached at progress 0.5.
    pub fn apex(&self) -> Point {
        let center = self.center();
        Point {
            x: center.x,
            y: center.y - self.radius(),
        }
    }

    /// Half circumference of the circle the arc belongs to.
    pub fn length(&self) -> f64 {
        PI * self.radius()
    }

    /// The static backdrop arc the active arc is drawn over.
    pub fn background_path(&self) -> String {
        self.arc_command(0, self.sunset_point())
    }

    /// Path and dash split for the elapsed portion of the day.
    ///
    /// At progress 0 the path collapses to the sunrise point and the whole
    /// length is gap. Otherwise the full arc is emitted and only the dash
    /// length tracks progress.
    pub fn active_path(&self, progress: Progress) -> ActivePath {
        let length = self.length();

        if progress == Progress::START {
            return ActivePath {
                command: self.arc_command(0, self.sunrise_point()),
                dash: 0.0,
                gap: length,
            };
        }

        let p = progress.value();
        ActivePath {
            command: self.arc_command(1, self.sunset_point()),
            dash: length * p,
            gap: length * (1.0 - p),
        }
    }

    /// Sun marker position on the arc for the given progress.
    pub fn sun_position(&self, progress: Progress) -> Point {
        let angle = PI * progress.value();
        let center = self.center();
        let radius = self.radius();
        Point {
            x: center.x - radius * angle.cos(),
            y: center.y - radius * angle.sin(),
        }
    }

    fn arc_command(&self, large_arc: u8, end: Point) -> String {
        let start = self.sunrise_point();
        let r = self.radius();
        format!(
            "M {} {} A {} {} 0 {} 1 {} {}",
            start.x, start.y, r, r, large_arc, end.x, end.y
        )
    }
}

/// Ray layout around the sun marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySpec {
    count: u32,
    inner_radius: f64,
    outer_radius: f64,
}

impl Default for RaySpec {
    fn default() -> Self {
        Self {
            count: DEFAULT_RAY_COUNT,
            inner_radius: DEFAULT_RAY_INNER_RADIUS,
            outer_radius: DEFAULT_RAY_OUTER_RADIUS,
        }
    }
}

impl RaySpec {
    pub fn new(count: u32, inner_radius: f64, outer_radius: f64) -> Result<Self> {
        let valid = count > 0
            && inner_radius.is_finite()
            && outer_radius.is_finite()
            && inner_radius >= 0.0
            && inner_radius <= outer_radius;
        if !valid {
            return Err(SunArcError::InvalidRays {
                count,
                inner_radius,
                outer_radius,
            });
        }
        Ok(Self {
            count,
            inner_radius,
            outer_radius,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Line segments radiating evenly from the sun marker center.
///
/// Independent of progress; the first ray points along +x.
pub fn sun_ray_endpoints(rays: &RaySpec) -> Vec<RaySegment> {
    (0..rays.count)
        .map(|i| {
            let angle = f64::from(i) * 2.0 * PI / f64::from(rays.count);
            let (sin, cos) = angle.sin_cos();
            RaySegment {
                x1: cos * rays.inner_radius,
                y1: sin * rays.inner_radius,
                x2: cos * rays.outer_radius,
                y2: sin * rays.outer_radius,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::{TEST_EPSILON, TEST_RADIUS};

    fn assert_point_near(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < TEST_EPSILON && (actual.y - expected.y).abs() < TEST_EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_default_geometry() {
        let arc = ArcSpec::default();
        assert_eq!(arc.radius(), TEST_RADIUS);
        assert_eq!(arc.center(), Point { x: 200.0, y: 200.0 });
        assert_eq!(arc.apex(), Point { x: 200.0, y: 50.0 });
        assert!((arc.length() - 471.238_898_038_469).abs() < 1e-9);
    }

    #[test]
    fn test_zero_progress_path_collapses_to_sunrise() {
        let arc = ArcSpec::default();
        let path = arc.active_path(Progress::START);

        assert_eq!(path.command, "M 50 200 A 150 150 0 0 1 50 200");
        assert_eq!(path.dash, 0.0);
        assert_eq!(path.gap, arc.length());
    }

    #[test]
    fn test_nonzero_progress_uses_full_arc() {
        let arc = ArcSpec::default();
        let quarter = arc.active_path(Progress::new(0.25));
        let full = arc.active_path(Progress::END);

        assert_eq!(quarter.command, "M 50 200 A 150 150 0 1 1 350 200");
        assert_eq!(quarter.command, full.command);
        assert!((quarter.dash - arc.length() * 0.25).abs() < TEST_EPSILON);
        assert!(full.gap.abs() < TEST_EPSILON);
    }

    #[test]
    fn test_dash_array_format() {
        let path = ActivePath {
            command: String::new(),
            dash: 117.5,
            gap: 353.75,
        };
        assert_eq!(path.dash_array(), "117.5 353.75");
    }

    #[test]
    fn test_background_path() {
        assert_eq!(
            ArcSpec::default().background_path(),
            "M 50 200 A 150 150 0 0 1 350 200"
        );
    }

    #[test]
    fn test_sun_traces_the_arc() {
        let arc = ArcSpec::default();
        assert_point_near(arc.sun_position(Progress::START), arc.sunrise_point());
        assert_point_near(arc.sun_position(Progress::new(0.5)), arc.apex());
        assert_point_near(arc.sun_position(Progress::END), arc.sunset_point());
    }

    #[test]
    fn test_custom_arc_geometry() {
        let arc = ArcSpec::new(0.0, 100.0, 80.0).unwrap();
        assert_eq!(arc.radius(), 50.0);
        assert_eq!(arc.apex(), Point { x: 50.0, y: 30.0 });
        assert_eq!(arc.background_path(), "M 0 80 A 50 50 0 0 1 100 80");
    }

    #[test]
    fn test_invalid_arc_rejected() {
        assert!(ArcSpec::new(350.0, 50.0, 200.0).is_err());
        assert!(ArcSpec::new(50.0, 50.0, 200.0).is_err());
        assert!(ArcSpec::new(f64::NAN, 350.0, 200.0).is_err());
    }

    #[test]
    fn test_eight_rays_evenly_spaced() {
        let rays = sun_ray_endpoints(&RaySpec::default());
        assert_eq!(rays.len(), 8);

        // First ray along +x, third straight down (+y in drawing coordinates)
        assert!((rays[0].x1 - 16.0).abs() < TEST_EPSILON);
        assert!((rays[0].x2 - 24.0).abs() < TEST_EPSILON);
        assert!(rays[0].y1.abs() < TEST_EPSILON);
        assert!((rays[2].y2 - 24.0).abs() < TEST_EPSILON);
        assert!((rays[4].x1 + 16.0).abs() < TEST_EPSILON);

        for ray in &rays {
            let inner = (ray.x1 * ray.x1 + ray.y1 * ray.y1).sqrt();
            let outer = (ray.x2 * ray.x2 + ray.y2 * ray.y2).sqrt();
            assert!((inner - 16.0).abs() < TEST_EPSILON);
            assert!((outer - 24.0).abs() < TEST_EPSILON);
        }
    }

    #[test]
    fn test_invalid_rays_rejected() {
        assert!(RaySpec::new(0, 16.0, 24.0).is_err());
        assert!(RaySpec::new(8, 30.0, 24.0).is_err());
        assert!(RaySpec::new(8, -1.0, 24.0).is_err());
        assert_eq!(RaySpec::new(4, 0.0, 10.0).unwrap().count(), 4);
    }
}
