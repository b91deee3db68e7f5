//! SVG rendering of a tour.
//!
//! The solver's only obligation is the final tour/cost pair; this
//! module turns that pair into a standalone SVG artifact for quick
//! visual inspection.

use crate::error::TspResult;
use crate::instance::TspInstance;
use std::fmt::Write as _;
use std::path::Path;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 40.0;

/// Render the tour as a standalone SVG document.
///
/// The cycle is drawn as a closed polygon over the city coordinates,
/// scaled into a fixed viewport, with a dot per city.
#[must_use]
pub fn render_svg(instance: &TspInstance, tour: &[usize]) -> String {
    let (min_x, max_x, min_y, max_y) = bounds(&instance.coords);
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    let project = |(x, y): (f64, f64)| -> (f64, f64) {
        let px = MARGIN + (x - min_x) / span_x * (WIDTH - 2.0 * MARGIN);
        // SVG y grows downward
        let py = HEIGHT - MARGIN - (y - min_y) / span_y * (HEIGHT - 2.0 * MARGIN);
        (px, py)
    };

    let mut points = String::new();
    for &city in tour {
        let (px, py) = project(instance.coords[city]);
        let _ = write!(points, "{px:.2},{py:.2} ");
    }

    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">
  <rect width="{WIDTH}" height="{HEIGHT}" fill="#fafafa"/>
  <text x="{x}" y="24" text-anchor="middle" style="font: bold 16px monospace; fill: #333;">{name}: {n} cities</text>
  <polygon points="{points}" fill="none" stroke="#2060c0" stroke-width="1.5"/>
"##,
        x = WIDTH / 2.0,
        name = instance.name,
        n = instance.num_cities(),
        points = points.trim_end(),
    );

    for &(x, y) in &instance.coords {
        let (px, py) = project((x, y));
        let _ = writeln!(
            svg,
            r##"  <circle cx="{px:.2}" cy="{py:.2}" r="3" fill="#d04437"/>"##
        );
    }
    svg.push_str("</svg>\n");

    svg
}

/// Render the tour and write it to `path`.
pub fn save_svg(path: &Path, instance: &TspInstance, tour: &[usize]) -> TspResult<()> {
    std::fs::write(path, render_svg(instance, tour))?;
    Ok(())
}

fn bounds(coords: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in coords {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (min_x, max_x, min_y, max_y)
}
