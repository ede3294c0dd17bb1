//! Per-session state for the static demo.
//!
//! The GUI owns one [`Session`] and hands it to its update and draw code every
//! frame. Nothing here touches the screen: pointer positions arrive already
//! converted to curve space.

use log::{debug, info};
use rand::Rng;

use crate::{
    control::{Bounds, ControlPoints, DragAxis},
    error::{Error, Result},
    evaluate::{CurveEvaluator, HermiteParams},
    mode::CurveMode,
    point::Point,
};

/// Control points, curve settings and the drag in progress.
#[derive(Debug, Clone)]
pub struct Session {
    /// The draggable points.
    points: ControlPoints,
    /// Mode, sampling and Hermite settings.
    evaluator: CurveEvaluator,
    /// Which axes a drag may move.
    drag_axis: DragAxis,
    /// Index of the point currently being dragged.
    active: Option<usize>,
}

impl Session {
    /// Start a session over existing points.
    pub fn new(points: ControlPoints, mode: CurveMode) -> Self {
        Self {
            points,
            evaluator: CurveEvaluator::new(mode),
            drag_axis: DragAxis::default(),
            active: None,
        }
    }

    /// Start a session with `count` randomly placed points inside `bounds`.
    pub fn random<R: Rng + ?Sized>(
        count: usize,
        bounds: Bounds,
        mode: CurveMode,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self::new(ControlPoints::random(count, bounds, rng)?, mode))
    }

    /// Allow or forbid horizontal dragging.
    pub fn with_drag_axis(mut self, axis: DragAxis) -> Self {
        self.drag_axis = axis;
        self
    }

    /// Current control points.
    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// Current evaluation settings.
    pub fn evaluator(&self) -> &CurveEvaluator {
        &self.evaluator
    }

    /// Current interpolation mode.
    pub fn mode(&self) -> CurveMode {
        self.evaluator.mode
    }

    /// Axis constraint applied to drags.
    pub fn drag_axis(&self) -> DragAxis {
        self.drag_axis
    }

    /// Switch to `mode`.
    pub fn set_mode(&mut self, mode: CurveMode) {
        if self.evaluator.mode != mode {
            info!("curve mode: {} -> {}", self.evaluator.mode, mode);
            self.evaluator.mode = mode;
        }
    }

    /// Advance to the next mode and return it.
    pub fn cycle_mode(&mut self) -> CurveMode {
        self.set_mode(self.mode().next());
        self.mode()
    }

    /// Current Hermite parameters.
    pub fn hermite(&self) -> HermiteParams {
        self.evaluator.hermite
    }

    /// Replace the Hermite parameters after validating them.
    pub fn set_hermite(&mut self, params: HermiteParams) -> Result<()> {
        params.validate()?;
        self.evaluator.hermite = params;
        Ok(())
    }

    /// Replace the per-segment sample count.
    pub fn set_samples_per_segment(&mut self, samples: usize) -> Result<()> {
        if samples == 0 {
            return Err(Error::invalid("samples per segment must be at least 1"));
        }
        self.evaluator.samples_per_segment = samples;
        Ok(())
    }

    /// Give every point a new random height.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        info!("randomising {} control points", self.points.len());
        self.points.randomise(rng);
    }

    /// Start dragging point `index`.
    pub fn begin_drag(&mut self, index: usize) -> Result<()> {
        if index >= self.points.len() {
            return Err(Error::invalid(format!(
                "control point index {index} out of range (have {})",
                self.points.len()
            )));
        }
        debug!("drag start: point {index}");
        self.active = Some(index);
        Ok(())
    }

    /// Move the dragged point towards `target`; `None` when no drag is active.
    pub fn drag_to(&mut self, target: Point) -> Option<Point> {
        let index = self.active?;
        self.points.drag(index, target, self.drag_axis).ok()
    }

    /// Finish the current drag, returning the released index.
    pub fn end_drag(&mut self) -> Option<usize> {
        let released = self.active.take();
        if let Some(index) = released {
            debug!("drag end: point {index}");
        }
        released
    }

    /// Index of the point being dragged, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Evaluate the curve for the current state.
    pub fn curve(&self) -> Result<Vec<Point>> {
        self.evaluator.evaluate(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn session() -> Result<Session> {
        let mut rng = StdRng::seed_from_u64(11);
        Session::random(4, Bounds::default(), CurveMode::Hermite, &mut rng)
    }

    #[test]
    fn drag_lifecycle() -> Result<()> {
        let mut s = session()?;
        assert_eq!(s.drag_to(Point::new(0.0, 0.5)), None);

        s.begin_drag(2)?;
        assert_eq!(s.active(), Some(2));
        let x = s.points()[2].x;
        assert_eq!(s.drag_to(Point::new(0.0, 0.9)), Some(Point::new(x, 0.9)));
        assert_eq!(s.points()[2].y, 0.9);
        assert_eq!(s.end_drag(), Some(2));
        assert_eq!(s.end_drag(), None);

        assert!(s.begin_drag(4).is_err());
        Ok(())
    }

    #[test]
    fn curve_tracks_drags() -> Result<()> {
        let mut s = session()?;
        s.begin_drag(0)?;
        s.drag_to(Point::new(0.0, 0.25));
        s.end_drag();
        let curve = s.curve()?;
        assert_eq!(curve[0], s.points()[0]);
        assert_eq!(curve[0].y, 0.25);
        assert_eq!(curve.len(), s.evaluator().output_len(4)?);
        Ok(())
    }

    #[test]
    fn mode_cycling_and_settings() -> Result<()> {
        let mut s = session()?;
        assert_eq!(s.cycle_mode(), CurveMode::Linear);
        assert_eq!(s.cycle_mode(), CurveMode::SmoothStep);
        s.set_mode(CurveMode::Hermite);
        assert_eq!(s.mode(), CurveMode::Hermite);

        assert!(s.set_hermite(HermiteParams { tension: 0.5, bias: -0.3 }).is_ok());
        assert!(s.set_hermite(HermiteParams { tension: 2.0, bias: 0.0 }).is_err());
        assert_eq!(s.hermite().tension, 0.5);

        assert!(s.set_samples_per_segment(0).is_err());
        s.set_samples_per_segment(1)?;
        assert_eq!(s.curve()?.as_slice(), &s.points()[..]);
        Ok(())
    }

    #[test]
    fn free_drag_axis() -> Result<()> {
        let mut s = session()?.with_drag_axis(DragAxis::Free);
        s.begin_drag(1)?;
        let moved = s.drag_to(Point::new(0.0, 0.5)).map(|p| p.x);
        assert_eq!(moved, Some(s.points()[0].x));
        Ok(())
    }
}
