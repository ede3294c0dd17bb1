//! Minimal Hermite example: evaluate a curve and print its vertices.

use std::error::Error;

use interpcurve::{CurveEvaluator, CurveMode, HermiteParams, Point};

fn main() -> Result<(), Box<dyn Error>> {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 1.0),
        Point::new(3.0, 3.0),
    ];

    let curve = CurveEvaluator::new(CurveMode::Hermite)
        .with_samples(4)
        .with_hermite(HermiteParams::new(0.0, 0.0)?)
        .evaluate(&points)?;
    println!("{} vertices through {} points", curve.len(), points.len());
    for p in &curve {
        println!("{p}");
    }

    assert_eq!(curve.first(), points.first());
    assert_eq!(curve.last(), points.last());

    Ok(())
}
