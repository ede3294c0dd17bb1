//! Property-based tests for curve evaluation.
//!
//! Every mode must pass through its control points exactly, and each mode has
//! its own shape guarantee: straight segments, flat ends, or a continuous slope.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use interpcurve::{
    CurveEvaluator, CurveMode, HermiteParams, Point, evaluate, evaluate::hermite_tangents,
    interp::lerp,
};
use proptest::prelude::*;

/// Control points with strictly increasing `x` and `y` in `[-1, 1]`.
fn control_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.01f64..2.0, -1.0f64..1.0), 2..12).prop_map(|raw| {
        let mut x = 0.0;
        raw.into_iter()
            .map(|(gap, y)| {
                x += gap;
                Point::new(x, y)
            })
            .collect()
    })
}

/// Like [`control_points`] but with gaps of at least 0.05, so finite
/// differences over 10 000 samples per segment stay accurate.
fn spread_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.05f64..2.0, -1.0f64..1.0), 3..10).prop_map(|raw| {
        let mut x = 0.0;
        raw.into_iter()
            .map(|(gap, y)| {
                x += gap;
                Point::new(x, y)
            })
            .collect()
    })
}

fn any_mode() -> impl Strategy<Value = CurveMode> {
    prop_oneof![
        Just(CurveMode::Linear),
        Just(CurveMode::SmoothStep),
        Just(CurveMode::Hermite),
    ]
}

fn hermite_params() -> impl Strategy<Value = HermiteParams> {
    (-1.0f64..=1.0, -1.0f64..=1.0).prop_map(|(tension, bias)| HermiteParams { tension, bias })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn passes_through_every_control_point(
        points in control_points(),
        mode in any_mode(),
        params in hermite_params(),
        samples in 1usize..40,
    ) {
        let out = CurveEvaluator::new(mode)
            .with_samples(samples)
            .with_hermite(params)
            .evaluate(&points)
            .expect("valid input");
        prop_assert_eq!(out.len(), (points.len() - 1) * samples + 1);
        prop_assert_eq!(out.first(), points.first());
        prop_assert_eq!(out.last(), points.last());
        for (i, p) in points.iter().enumerate() {
            prop_assert_eq!(out[i * samples], *p);
        }
        for w in out.windows(2) {
            prop_assert!(w[1].x >= w[0].x - 1e-12, "x went backwards: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn linear_matches_lerp(points in control_points(), samples in 1usize..40) {
        let out = evaluate(&points, CurveMode::Linear, samples).expect("valid input");
        for (i, pair) in points.windows(2).enumerate() {
            for k in 0..=samples {
                let t = k as f64 / samples as f64;
                let y = out[i * samples + k].y;
                prop_assert!((y - lerp(pair[0].y, pair[1].y, t)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn smooth_step_is_flat_at_control_points(points in control_points()) {
        let samples = 1000;
        let out = evaluate(&points, CurveMode::SmoothStep, samples).expect("valid input");
        let h = 1.0 / samples as f64;
        for i in 0..points.len() - 1 {
            let start = i * samples;
            let end = start + samples;
            let d0 = (out[start + 1].y - out[start].y) / h;
            let d1 = (out[end].y - out[end - 1].y) / h;
            prop_assert!(d0.abs() < 1e-2, "slope {d0} at start of segment {i}");
            prop_assert!(d1.abs() < 1e-2, "slope {d1} at end of segment {i}");
        }
    }

    #[test]
    fn hermite_slope_is_continuous(points in spread_points(), params in hermite_params()) {
        let samples = 10_000;
        let out = CurveEvaluator::new(CurveMode::Hermite)
            .with_samples(samples)
            .with_hermite(params)
            .evaluate(&points)
            .expect("valid input");
        let slopes = hermite_tangents(&points, params);
        let slope = |a: Point, b: Point| (b.y - a.y) / (b.x - a.x);
        for i in 1..points.len() - 1 {
            let at = i * samples;
            let left = slope(out[at - 1], out[at]);
            let right = slope(out[at], out[at + 1]);
            let tolerance = 0.05 * (1.0 + slopes[i].abs());
            prop_assert!((left - slopes[i]).abs() < tolerance, "left {left} vs {}", slopes[i]);
            prop_assert!((right - slopes[i]).abs() < tolerance, "right {right} vs {}", slopes[i]);
        }
    }

    #[test]
    fn hermite_keeps_collinear_points_straight(
        points in spread_points(),
        slope in -3.0f64..3.0,
        bias in -1.0f64..=1.0,
        samples in 1usize..40,
    ) {
        let line: Vec<Point> = points.iter().map(|p| Point::new(p.x, slope * p.x)).collect();
        let out = CurveEvaluator::new(CurveMode::Hermite)
            .with_samples(samples)
            .with_hermite(HermiteParams { tension: 0.0, bias })
            .evaluate(&line)
            .expect("valid input");
        for p in &out {
            prop_assert!((p.y - slope * p.x).abs() < 1e-9, "{p} is off the line");
        }
    }

    #[test]
    fn two_point_hermite_equals_linear(
        a in -1.0f64..1.0,
        b in -1.0f64..1.0,
        width in 0.01f64..10.0,
        samples in 1usize..40,
    ) {
        let points = [Point::new(0.0, a), Point::new(width, b)];
        let hermite = evaluate(&points, CurveMode::Hermite, samples).expect("valid input");
        let linear = evaluate(&points, CurveMode::Linear, samples).expect("valid input");
        for (h, l) in hermite.iter().zip(&linear) {
            prop_assert_eq!(h.x, l.x);
            prop_assert!((h.y - l.y).abs() < 1e-9);
        }
    }
}
