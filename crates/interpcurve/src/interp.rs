//! Scalar interpolation formulas.
//!
//! Everything here is a pure function of its arguments. The curve evaluator
//! picks one of these per segment.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Smooth-step ease `3t² − 2t³`: `s(0)=0`, `s(1)=1`, `s'(0)=s'(1)=0`.
#[inline]
pub fn smooth_step(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// The four cubic Hermite basis polynomials `[h00, h10, h01, h11]` at `t`.
#[inline]
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// Cubic Hermite value for endpoint values `y0`, `y1` and tangents `m0`, `m1`.
#[inline]
pub fn hermite(y0: f64, m0: f64, y1: f64, m1: f64, t: f64) -> f64 {
    let [h00, h10, h01, h11] = hermite_basis(t);
    h00 * y0 + h10 * m0 + h01 * y1 + h11 * m1
}

/// Tangent blended from the `incoming` and `outgoing` secants, scaled by
/// `tension` and skewed by `bias`.
///
/// With zero tension and bias this is the Catmull-Rom average of the two.
#[inline]
pub fn hermite_tangent(incoming: f64, outgoing: f64, tension: f64, bias: f64) -> f64 {
    let scale = (1.0 - tension) / 2.0;
    incoming * (1.0 + bias) * scale + outgoing * (1.0 - bias) * scale
}
