//! Interpolating curves through draggable control points.
//!
//! The core is [`evaluate`]: an ordered run of control points plus a
//! [`CurveMode`] turns into the polyline vertices that approximate the curve.
//! The rest of the crate holds the state the interactive demos keep around it:
//! validated control points, a per-session drag model and the scrolling window
//! used by the dynamic demo.
//!
//! # Supported Modes
//!
//! - Linear
//! - Smooth step (`3t² − 2t³` per segment)
//! - Hermite (Catmull-Rom tangents with tension and bias)

/// Clipping polylines to a display window.
pub mod clip;
/// Validated, draggable control points.
pub mod control;
/// Error types used across the crate.
pub mod error;
/// Curve evaluation.
pub mod evaluate;
/// Scalar interpolation formulas.
pub mod interp;
/// Interpolation modes and their registry.
pub mod mode;
/// Two-dimensional points.
pub mod point;
/// Scrolling control-point window.
pub mod scroll;
/// Per-session interactive state.
pub mod session;

pub use crate::{
    control::{Bounds, ControlPoints, DragAxis},
    error::{Error, Result},
    evaluate::{CurveEvaluator, HermiteParams, evaluate},
    mode::CurveMode,
    point::Point,
    scroll::{ScrollConfig, ScrollDirection, Scroller},
    session::Session,
};
