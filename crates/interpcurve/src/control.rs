//! Ordered, draggable control points.

use std::ops::Deref;

use rand::Rng;
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Default number of control points in the static demo.
pub const DEFAULT_POINT_COUNT: usize = 6;

/// Rectangle that control points are confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Leftmost allowed `x`.
    pub x_min: f64,
    /// Rightmost allowed `x`.
    pub x_max: f64,
    /// Lowest allowed `y`.
    pub y_min: f64,
    /// Highest allowed `y`.
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl Bounds {
    /// Build validated bounds; every limit must be finite and `min <= max`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min > x_max || y_min > y_max {
            return Err(Error::invalid(format!("invalid bounds {bounds:?}")));
        }
        Ok(bounds)
    }

    /// Height of the vertical band.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when `p` lies inside (edges included).
    pub fn contains(&self, p: &Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Random `y` inside the band.
    pub fn random_y<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.y_min + rng.r#gen::<f64>() * self.height()
    }
}

/// Which coordinates a drag may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragAxis {
    /// Only `y` follows the pointer.
    #[default]
    Vertical,
    /// Both coordinates follow the pointer; `x` stays between the neighbours.
    Free,
}

/// The ordered control-point sequence of a session.
///
/// Invariants: at least two points, `x` non-decreasing, every point inside
/// [`Bounds`]. The count and order never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    /// Points, left to right.
    points: SmallVec<[Point; 16]>,
    /// Confinement rectangle.
    bounds: Bounds,
}

impl ControlPoints {
    /// Validate and wrap an ordered point sequence.
    pub fn new(points: impl IntoIterator<Item = Point>, bounds: Bounds) -> Result<Self> {
        let points: SmallVec<[Point; 16]> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(Error::invalid(format!(
                "at least 2 control points are required, got {}",
                points.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !bounds.contains(p)) {
            return Err(Error::invalid(format!("control point {p} lies outside {bounds:?}")));
        }
        if let Some(i) = points.windows(2).position(|w| w[1].x < w[0].x) {
            return Err(Error::invalid(format!(
                "control points must be ordered by x: point {} is left of point {}",
                i + 1,
                i
            )));
        }
        Ok(Self { points, bounds })
    }

    /// `count` points spread across the bounds with random heights.
    ///
    /// Point `i` sits at `x_min + (i + 1) · width / (count + 1)`, leaving equal
    /// gaps at both edges.
    pub fn random<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Result<Self> {
        let points: Vec<Point> = evenly_spaced_x(count, bounds.x_min, bounds.x_max)
            .map(|x| Point::new(x, bounds.random_y(rng)))
            .collect();
        Self::new(points, bounds)
    }

    /// The confinement rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move point `index` towards `target`, clamped to the bounds and, for
    /// [`DragAxis::Free`], to its neighbours' `x`. Returns the new position.
    ///
    /// A non-finite `target` is rejected and leaves the point where it was.
    pub fn drag(&mut self, index: usize, target: Point, axis: DragAxis) -> Result<Point> {
        let len = self.points.len();
        if index >= len {
            return Err(Error::invalid(format!(
                "control point index {index} out of range (have {len})"
            )));
        }
        if !target.is_finite() {
            return Err(Error::invalid(format!("drag target {target} is not finite")));
        }
        let b = self.bounds;
        let mut p = self.points[index];
        p.y = target.y.clamp(b.y_min, b.y_max);
        if axis == DragAxis::Free {
            let lo = if index == 0 { b.x_min } else { self.points[index - 1].x };
            let hi = if index + 1 == len {
                b.x_max
            } else {
                self.points[index + 1].x
            };
            p.x = target.x.clamp(lo, hi);
        }
        self.points[index] = p;
        Ok(p)
    }

    /// Give every point a fresh random height; `x` is untouched.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bounds = self.bounds;
        for p in &mut self.points {
            p.y = bounds.random_y(rng);
        }
    }
}

impl Deref for ControlPoints {
    type Target = [Point];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

/// `count` x positions evenly spread strictly inside `[x_min, x_max]`.
pub fn evenly_spaced_x(count: usize, x_min: f64, x_max: f64) -> impl Iterator<Item = f64> {
    let gap = (x_max - x_min) / (count + 1) as f64;
    (0..count).map(move |i| x_min + (i + 1) as f64 * gap)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn three() -> Result<ControlPoints> {
        ControlPoints::new(
            [
                Point::new(0.25, 0.5),
                Point::new(0.5, 0.5),
                Point::new(0.75, 0.5),
            ],
            Bounds::default(),
        )
    }

    #[test]
    fn construction_checks() {
        let b = Bounds::default();
        assert!(ControlPoints::new([Point::new(0.5, 0.5)], b).is_err());
        assert!(ControlPoints::new([Point::new(0.6, 0.5), Point::new(0.4, 0.5)], b).is_err());
        assert!(ControlPoints::new([Point::new(0.4, 0.5), Point::new(0.6, 1.5)], b).is_err());
        assert!(ControlPoints::new([Point::new(0.4, 0.5), Point::new(0.4, 0.2)], b).is_ok());
        assert!(Bounds::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn random_placement() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let cp = ControlPoints::random(DEFAULT_POINT_COUNT, Bounds::default(), &mut rng)?;
        assert_eq!(cp.len(), DEFAULT_POINT_COUNT);
        let xs: Vec<f64> = cp.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = evenly_spaced_x(6, 0.0, 1.0).collect();
        assert_eq!(xs, expected);
        assert!((xs[0] - 1.0 / 7.0).abs() < 1e-12);
        assert!(cp.iter().all(|p| (0.0..=1.0).contains(&p.y)));
        Ok(())
    }

    #[test]
    fn vertical_drag_clamps_to_band() -> Result<()> {
        let mut cp = three()?;
        let p = cp.drag(1, Point::new(0.9, 1.7), DragAxis::Vertical)?;
        assert_eq!(p, Point::new(0.5, 1.0));
        let p = cp.drag(1, Point::new(0.1, -3.0), DragAxis::Vertical)?;
        assert_eq!(p, Point::new(0.5, 0.0));
        assert_eq!(cp[1], p);
        Ok(())
    }

    #[test]
    fn free_drag_respects_neighbours() -> Result<()> {
        let mut cp = three()?;
        assert_eq!(cp.drag(1, Point::new(0.9, 0.2), DragAxis::Free)?.x, 0.75);
        assert_eq!(cp.drag(1, Point::new(0.0, 0.2), DragAxis::Free)?.x, 0.25);
        assert_eq!(cp.drag(0, Point::new(-1.0, 0.2), DragAxis::Free)?.x, 0.0);
        assert_eq!(cp.drag(2, Point::new(2.0, 0.2), DragAxis::Free)?.x, 1.0);
        assert!(cp.windows(2).all(|w| w[0].x <= w[1].x));
        Ok(())
    }

    #[test]
    fn drag_out_of_range_is_invalid() -> Result<()> {
        let mut cp = three()?;
        assert!(matches!(
            cp.drag(3, Point::default(), DragAxis::Vertical),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn non_finite_targets_are_ignored() -> Result<()> {
        let mut cp = three()?;
        for bad in [
            Point::new(f64::NAN, 0.2),
            Point::new(0.5, f64::NAN),
            Point::new(f64::INFINITY, 0.2),
        ] {
            assert!(matches!(
                cp.drag(1, bad, DragAxis::Free),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(cp, three()?);
        // Neighbours still clamp against a finite x.
        assert_eq!(cp.drag(0, Point::new(0.9, 0.2), DragAxis::Free)?.x, 0.5);
        Ok(())
    }

    #[test]
    fn randomise_keeps_x() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cp = three()?;
        let before: Vec<f64> = cp.iter().map(|p| p.x).collect();
        cp.randomise(&mut rng);
        let after: Vec<f64> = cp.iter().map(|p| p.x).collect();
        assert_eq!(before, after);
        assert!(cp.iter().all(|p| cp.bounds().contains(p)));
        Ok(())
    }
}
