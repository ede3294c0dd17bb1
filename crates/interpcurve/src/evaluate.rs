//! Curve evaluation: control points in, polyline vertices out.

use crate::{
    error::{Error, Result},
    interp,
    mode::CurveMode,
    point::Point,
};

/// Default number of samples per segment, matching the demo's subdivision count.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;

/// Largest vertex count a single evaluation may produce.
pub const MAX_OUTPUT_LEN: usize = 1 << 24;

/// Tangent shaping for [`CurveMode::Hermite`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HermiteParams {
    /// Tangent scale in `[-1, 1]`; `1` flattens tangents, `-1` doubles them.
    pub tension: f64,
    /// Incoming/outgoing weighting in `[-1, 1]`; positive favours the incoming secant.
    pub bias: f64,
}

impl HermiteParams {
    /// Build validated parameters.
    pub fn new(tension: f64, bias: f64) -> Result<Self> {
        let params = Self { tension, bias };
        params.validate()?;
        Ok(params)
    }

    /// Check both values are finite and within `[-1, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("tension", self.tension), ("bias", self.bias)] {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(Error::invalid(format!(
                    "hermite {name} must be within [-1, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Evaluation settings bundled as a reusable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEvaluator {
    /// Interpolation mode.
    pub mode: CurveMode,
    /// Samples produced for each pair of consecutive control points.
    pub samples_per_segment: usize,
    /// Tangent shaping used when `mode` is Hermite.
    pub hermite: HermiteParams,
}

impl Default for CurveEvaluator {
    fn default() -> Self {
        Self::new(CurveMode::default())
    }
}

impl CurveEvaluator {
    /// Evaluator for `mode` with default sampling and Hermite parameters.
    pub fn new(mode: CurveMode) -> Self {
        Self {
            mode,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            hermite: HermiteParams::default(),
        }
    }

    /// Replace the per-segment sample count.
    pub fn with_samples(mut self, samples_per_segment: usize) -> Self {
        self.samples_per_segment = samples_per_segment;
        self
    }

    /// Replace the Hermite parameters.
    pub fn with_hermite(mut self, hermite: HermiteParams) -> Self {
        self.hermite = hermite;
        self
    }

    /// Number of vertices produced for `point_count` control points.
    ///
    /// Fails when the count overflows or exceeds [`MAX_OUTPUT_LEN`].
    pub fn output_len(&self, point_count: usize) -> Result<usize> {
        point_count
            .saturating_sub(1)
            .checked_mul(self.samples_per_segment)
            .and_then(|n| n.checked_add(1))
            .filter(|&n| n <= MAX_OUTPUT_LEN)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "{point_count} points at {} samples each exceeds {MAX_OUTPUT_LEN} vertices",
                    self.samples_per_segment
                ))
            })
    }

    /// Evaluate the curve through `points`.
    ///
    /// The output starts at `points[0]`, ends at the last point, and holds
    /// `samples_per_segment` vertices per segment (the last of which is the
    /// segment's end point, copied exactly).
    pub fn evaluate(&self, points: &[Point]) -> Result<Vec<Point>> {
        if points.len() < 2 {
            return Err(Error::invalid(format!(
                "at least 2 control points are required, got {}",
                points.len()
            )));
        }
        if self.samples_per_segment == 0 {
            return Err(Error::invalid("samples per segment must be at least 1"));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::invalid(format!("control point {p} is not finite")));
        }

        let mut out = Vec::with_capacity(self.output_len(points.len())?);
        out.push(points[0]);
        match self.mode {
            CurveMode::Linear => {
                sample_segments(points, self.samples_per_segment, &mut out, |_, p0, p1, t| {
                    interp::lerp(p0.y, p1.y, t)
                })
            }
            CurveMode::SmoothStep => {
                sample_segments(points, self.samples_per_segment, &mut out, |_, p0, p1, t| {
                    interp::lerp(p0.y, p1.y, interp::smooth_step(t))
                })
            }
            CurveMode::Hermite => {
                self.hermite.validate()?;
                let slopes = hermite_tangents(points, self.hermite);
                sample_segments(points, self.samples_per_segment, &mut out, |i, p0, p1, t| {
                    // Slopes are dy/dx; the basis runs in t, so scale by the width.
                    let width = p1.x - p0.x;
                    interp::hermite(p0.y, slopes[i] * width, p1.y, slopes[i + 1] * width, t)
                })
            }
        }
        Ok(out)
    }
}

/// Evaluate `points` with `mode` using default Hermite parameters.
pub fn evaluate(
    points: &[Point],
    mode: CurveMode,
    samples_per_segment: usize,
) -> Result<Vec<Point>> {
    CurveEvaluator::new(mode)
        .with_samples(samples_per_segment)
        .evaluate(points)
}

/// Walk every segment and push its samples; `y_at(segment, p0, p1, t)` supplies `y`.
///
/// `x` is always linear in `t`, and the final sample of each segment is the
/// segment's end point itself so control points come through bit-exact.
fn sample_segments<F>(points: &[Point], samples: usize, out: &mut Vec<Point>, y_at: F)
where
    F: Fn(usize, &Point, &Point, f64) -> f64,
{
    let step = 1.0 / samples as f64;
    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (&pair[0], &pair[1]);
        for k in 1..samples {
            let t = k as f64 * step;
            out.push(Point::new(interp::lerp(p0.x, p1.x, t), y_at(i, p0, p1, t)));
        }
        out.push(*p1);
    }
}

/// Secant slope `dy/dx` from `a` to `b`; zero across a vertical step.
fn secant(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    if dx > 0.0 { (b.y - a.y) / dx } else { 0.0 }
}

/// Per-point Hermite tangents as slopes `dy/dx`.
///
/// Each tangent blends the incoming and outgoing secant slopes, so unevenly
/// spaced points still join with a continuous slope and collinear points give
/// a straight line. The sequence ends lack a neighbour on one side; a reflected
/// phantom stands in, which reduces to the one-sided secant.
pub fn hermite_tangents(points: &[Point], params: HermiteParams) -> Vec<f64> {
    let secants: Vec<f64> = points.windows(2).map(|w| secant(&w[0], &w[1])).collect();
    let Some((&first, &last)) = secants.first().zip(secants.last()) else {
        return vec![0.0; points.len()];
    };
    (0..points.len())
        .map(|i| {
            let incoming = if i == 0 { first } else { secants[i - 1] };
            let outgoing = secants.get(i).copied().unwrap_or(last);
            interp::hermite_tangent(incoming, outgoing, params.tension, params.bias)
        })
        .collect()
}
