//! SVG rendering of a frame.
//!
//! Produces a self-contained document: a faint background arc, the active arc
//! revealed through its dash pattern, the sun with its rays at the marker
//! position, endpoint markers with sunrise/sunset labels, and the current time.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::arc::ArcSpec;
use crate::constants::{ENDPOINT_MARKER_RADIUS, SUN_MARKER_RADIUS, SVG_HEIGHT, SVG_WIDTH};
use crate::frame::RenderFrame;

const SUN_COLOR: &str = "#FFD700";
const SUNRISE_COLOR: &str = "#FF6B35";
const SUNSET_COLOR: &str = "#764BA2";
const TRACK_COLOR: &str = "#E0E0E0";
const LABEL_OFFSET: f64 = 25.0;

/// Render a frame as an SVG document.
pub fn render_svg(frame: &RenderFrame, arc: &ArcSpec) -> String {
    let mut svg = String::new();
    let sunrise = arc.sunrise_point();
    let sunset = arc.sunset_point();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = SVG_WIDTH,
        h = SVG_HEIGHT
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" stroke="{}" stroke-width="4" fill="none" opacity="0.3"/>"#,
        arc.background_path(),
        TRACK_COLOR
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" stroke="{}" stroke-width="6" fill="none" stroke-linecap="round" stroke-dasharray="{}"/>"#,
        frame.arc_path, SUN_COLOR, frame.dash_array
    );

    let _ = writeln!(
        svg,
        r#"  <g transform="translate({}, {})">"#,
        frame.sun.x, frame.sun.y
    );
    let _ = writeln!(
        svg,
        r#"    <circle r="{}" fill="{}"/>"#,
        SUN_MARKER_RADIUS, SUN_COLOR
    );
    for ray in &frame.rays {
        let _ = writeln!(
            svg,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2" stroke-linecap="round"/>"#,
            ray.x1, ray.y1, ray.x2, ray.y2, SUN_COLOR
        );
    }
    let _ = writeln!(svg, "  </g>");

    for (point, color, label) in [
        (sunrise, SUNRISE_COLOR, &frame.sunrise_time),
        (sunset, SUNSET_COLOR, &frame.sunset_time),
    ] {
        let _ = writeln!(
            svg,
            r#"  <g transform="translate({}, {})">"#,
            point.x, point.y
        );
        let _ = writeln!(
            svg,
            r#"    <circle r="{}" fill="{}" opacity="0.7"/>"#,
            ENDPOINT_MARKER_RADIUS, color
        );
        let _ = writeln!(
            svg,
            r#"    <text x="0" y="{}" text-anchor="middle" font-size="12">{}</text>"#,
            LABEL_OFFSET,
            escape_text(label)
        );
        let _ = writeln!(svg, "  </g>");
    }

    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="30" text-anchor="middle" font-size="18">{}</text>"#,
        SVG_WIDTH / 2,
        escape_text(&frame.current_time)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" text-anchor="middle" font-size="14">{} · {}</text>"#,
        SVG_WIDTH / 2,
        SVG_HEIGHT - 5,
        escape_text(&frame.status),
        escape_text(&frame.remaining)
    );
    svg.push_str("</svg>\n");
    svg
}

/// Write the rendered frame to `path`.
pub fn write_svg(path: &Path, frame: &RenderFrame, arc: &ArcSpec) -> Result<()> {
    fs::write(path, render_svg(frame, arc))
        .with_context(|| format!("Failed to write SVG to {}", path.display()))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
