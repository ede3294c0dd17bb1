//! Clipping polylines to a horizontal display window.

use crate::point::Point;

/// Segments narrower than this are treated as vertical and never cut.
pub const VERTICAL_EPSILON: f64 = 1e-3;

/// Clip the segment `p0 → p1` to `x0 ≤ x ≤ x1`.
///
/// Returns `None` when the segment lies wholly outside the window. An end that
/// sticks out is moved to the boundary along the segment, so its `x` is exactly
/// `x0` or `x1`. Near-vertical segments are returned whole.
pub fn clip_segment(p0: Point, p1: Point, x0: f64, x1: f64) -> Option<[Point; 2]> {
    if x0 > x1 || p0.x.max(p1.x) < x0 || p0.x.min(p1.x) > x1 {
        return None;
    }
    let dx = p1.x - p0.x;
    if dx.abs() <= VERTICAL_EPSILON {
        return Some([p0, p1]);
    }
    // Pin x afterwards so the cut lands exactly on the boundary.
    let at = |x: f64| Point {
        x,
        ..p0.lerp(&p1, (x - p0.x) / dx)
    };
    let inside = |p: Point| {
        if p.x < x0 {
            at(x0)
        } else if p.x > x1 {
            at(x1)
        } else {
            p
        }
    };
    Some([inside(p0), inside(p1)])
}

/// Clip every segment of `samples` to `x0 ≤ x ≤ x1`, dropping the ones outside.
pub fn clip_polyline(samples: &[Point], x0: f64, x1: f64) -> Vec<[Point; 2]> {
    samples
        .windows(2)
        .filter_map(|w| clip_segment(w[0], w[1], x0, x1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_is_untouched() {
        let (a, b) = (Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!(clip_segment(a, b, 0.0, 4.0), Some([a, b]));
    }

    #[test]
    fn outside_is_dropped() {
        let (a, b) = (Point::new(-3.0, 1.0), Point::new(-1.0, 3.0));
        assert_eq!(clip_segment(a, b, 0.0, 4.0), None);
        assert_eq!(clip_segment(a, b, 4.0, 0.0), None);
        let (c, d) = (Point::new(5.0, 1.0), Point::new(7.0, 3.0));
        assert_eq!(clip_segment(c, d, 0.0, 4.0), None);
    }

    #[test]
    fn crossing_is_cut_at_the_boundary() {
        let (a, b) = (Point::new(-2.0, 0.0), Point::new(2.0, 4.0));
        assert_eq!(
            clip_segment(a, b, 0.0, 1.0),
            Some([Point::new(0.0, 2.0), Point::new(1.0, 3.0)])
        );
        let reversed = clip_segment(b, a, 0.0, 1.0);
        assert_eq!(reversed, Some([Point::new(1.0, 3.0), Point::new(0.0, 2.0)]));
    }

    #[test]
    fn near_vertical_kept_whole() {
        let (a, b) = (Point::new(0.9995, 0.0), Point::new(1.0004, 5.0));
        assert_eq!(clip_segment(a, b, 0.0, 1.0), Some([a, b]));
    }

    #[test]
    fn polyline() {
        let pts: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, (i % 2) as f64)).collect();
        let clipped = clip_polyline(&pts, 2.5, 6.5);
        assert_eq!(clipped.len(), 5);
        assert_eq!(clipped[0][0], Point::new(2.5, 0.5));
        assert_eq!(clipped[4][1], Point::new(6.5, 0.5));
        assert!(clipped.iter().flatten().all(|p| (2.5..=6.5).contains(&p.x)));
    }
}
