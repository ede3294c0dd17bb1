//! Command handlers for the `icurve` CLI.
//!
//! These functions do the work behind the non-GUI subcommands and return
//! printable text or images; `main` decides where the output goes.

use std::fmt::Write;

use anyhow::{Result, bail};
use image::RgbaImage;
use interpcurve::{Bounds, ControlPoints, CurveEvaluator, Point, mode::MODES};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::render::{StrokeOptions, render_curve_image};

/// Smallest image side `render` accepts.
pub const MIN_IMAGE_SIZE: u32 = 16;
/// Largest image side `render` accepts.
pub const MAX_IMAGE_SIZE: u32 = 8192;
/// Largest stroke width or marker size in pixels.
pub const MAX_MARK_SIZE: u32 = 64;

/// Evaluate `points` and format every vertex as an `x,y` line.
pub fn sample(points: &[Point], evaluator: &CurveEvaluator) -> Result<String> {
    let curve = evaluator.evaluate(points)?;
    debug!(
        "sampled {} vertices from {} points ({})",
        curve.len(),
        points.len(),
        evaluator.mode
    );
    let mut out = String::with_capacity(curve.len() * 16);
    for p in &curve {
        writeln!(out, "{},{}", p.x, p.y)?;
    }
    Ok(out)
}

/// Parameters for the `render` subcommand.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest {
    /// Interpolation settings.
    pub evaluator: CurveEvaluator,
    /// Number of random control points.
    pub points: usize,
    /// Seed for reproducible placement; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Square image side in pixels.
    pub size: u32,
    /// Stroke styling.
    pub stroke: StrokeOptions,
}

/// Place random control points in the unit square and rasterise their curve.
pub fn render(request: &RenderRequest) -> Result<RgbaImage> {
    if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&request.size) {
        bail!(
            "image size must be within {MIN_IMAGE_SIZE}..={MAX_IMAGE_SIZE} pixels, got {}",
            request.size
        );
    }
    let stroke = request.stroke;
    if stroke.line_width > MAX_MARK_SIZE || stroke.handle_size > MAX_MARK_SIZE {
        bail!(
            "line width and handle size must be at most {MAX_MARK_SIZE} pixels, got {} and {}",
            stroke.line_width,
            stroke.handle_size
        );
    }
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bounds = Bounds::default();
    let control = ControlPoints::random(request.points, bounds, &mut rng)?;
    let curve = request.evaluator.evaluate(&control)?;
    info!(
        "rendering {} points as {} at {}px",
        control.len(),
        request.evaluator.mode,
        request.size
    );
    Ok(render_curve_image(
        request.size,
        bounds,
        &control,
        &curve,
        request.stroke,
    ))
}

/// One line per mode: key, label and description.
pub fn list_modes() -> String {
    let mut out = String::from("Supported modes (key - label - description):\n");
    for entry in MODES {
        out.push_str(&format!(
            "- {} - {} - {}\n",
            entry.key, entry.display, entry.info
        ));
    }
    out
}
