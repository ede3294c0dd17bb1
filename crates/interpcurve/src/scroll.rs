//! The scrolling window behind the dynamic demo.
//!
//! A fixed number of control points slide sideways across a display window.
//! Time is quantised into sub-steps: every [`SUBDIVISIONS`] sub-steps the
//! window has moved by one section, so a fresh random point enters on one side
//! and the oldest one falls off the other.

use log::trace;
use rand::Rng;
use smallvec::SmallVec;

use crate::{
    control::Bounds,
    error::{Error, Result},
    point::Point,
};

/// Sections visible inside the display window.
pub const DISPLAY_SECTIONS: usize = 6;
/// Hidden sections kept on each side so tangents at the edges have neighbours.
pub const MARGIN_SECTIONS: usize = 2;
/// Total control points held by a [`Scroller`].
pub const POINT_COUNT: usize = DISPLAY_SECTIONS + 2 * MARGIN_SECTIONS + 1;
/// Sub-steps per section.
pub const SUBDIVISIONS: usize = 20;

/// Slowest and fastest scroll period, in seconds per display width.
pub const PERIOD_RANGE: (f64, f64) = (1.0, 5.0);
/// Highest tick rate.
pub const MAX_UPDATES_PER_SECOND: u32 = 60;

/// Which way the points travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// New points enter on the left.
    Backward,
    /// Frozen in place.
    Stopped,
    /// New points enter on the right.
    #[default]
    Forward,
}

impl ScrollDirection {
    /// `-1`, `0` or `+1`.
    pub fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Stopped => 0,
            Self::Forward => 1,
        }
    }

    /// Inverse of [`Self::sign`].
    pub fn from_sign(sign: i32) -> Result<Self> {
        match sign {
            -1 => Ok(Self::Backward),
            0 => Ok(Self::Stopped),
            1 => Ok(Self::Forward),
            other => Err(Error::invalid(format!(
                "scroll direction must be -1, 0 or 1, got {other}"
            ))),
        }
    }
}

/// User-adjustable scrolling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Seconds for the curve to travel one display width.
    pub period: f64,
    /// Travel direction.
    pub direction: ScrollDirection,
    /// Ticks per second; zero pauses scrolling.
    pub updates_per_second: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            period: 3.0,
            direction: ScrollDirection::Forward,
            updates_per_second: 30,
        }
    }
}

impl ScrollConfig {
    /// Check the period and tick rate are in range.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = PERIOD_RANGE;
        if !self.period.is_finite() || !(lo..=hi).contains(&self.period) {
            return Err(Error::invalid(format!(
                "scroll period must be within [{lo}, {hi}] seconds, got {}",
                self.period
            )));
        }
        if self.updates_per_second > MAX_UPDATES_PER_SECOND {
            return Err(Error::invalid(format!(
                "updates per second must be at most {MAX_UPDATES_PER_SECOND}, got {}",
                self.updates_per_second
            )));
        }
        Ok(())
    }

    /// Duration of one sub-step.
    pub fn step_period(&self) -> f64 {
        self.period / (SUBDIVISIONS * DISPLAY_SECTIONS) as f64
    }
}

/// Fixed-length window of scrolling control points.
#[derive(Debug, Clone)]
pub struct Scroller {
    /// Heights, left to right; always [`POINT_COUNT`] long.
    ys: SmallVec<[f64; 16]>,
    /// Vertical band new heights are drawn from.
    band: Bounds,
    /// Current parameters.
    config: ScrollConfig,
    /// Signed time accumulated inside the current section.
    elapsed: f64,
    /// Sub-step within the current section, `0..=SUBDIVISIONS`.
    step: usize,
    /// Frame time gathered since the last tick.
    clock: f64,
}

impl Scroller {
    /// A scroller with random heights inside `band`.
    pub fn new<R: Rng + ?Sized>(config: ScrollConfig, band: Bounds, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let ys = (0..POINT_COUNT).map(|_| band.random_y(rng)).collect();
        Ok(Self {
            ys,
            band,
            config,
            elapsed: 0.0,
            step: 0,
            clock: 0.0,
        })
    }

    /// Current parameters.
    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    /// Replace the parameters; the scroll position is kept.
    pub fn set_config(&mut self, config: ScrollConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current control-point heights, left to right.
    pub fn heights(&self) -> &[f64] {
        &self.ys
    }

    /// Current sub-step within the section.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Fraction of a section the points have travelled, in `[0, 1]`.
    pub fn offset(&self) -> f64 {
        self.step as f64 / SUBDIVISIONS as f64
    }

    /// Advance by `dt` seconds of scroll time.
    ///
    /// Returns the side a new point entered on, if a section boundary was
    /// crossed. At most one point enters per tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) -> Option<ScrollDirection> {
        self.elapsed += dt * f64::from(self.config.direction.sign());
        let step = (self.elapsed / self.config.step_period()).floor();
        if step >= SUBDIVISIONS as f64 {
            self.step = 0;
            self.elapsed = 0.0;
            self.push(ScrollDirection::Forward, rng);
            Some(ScrollDirection::Forward)
        } else if step < 0.0 {
            self.step = SUBDIVISIONS;
            self.elapsed = SUBDIVISIONS as f64 * self.config.step_period();
            self.push(ScrollDirection::Backward, rng);
            Some(ScrollDirection::Backward)
        } else {
            self.step = step as usize;
            None
        }
    }

    /// Feed `frame_dt` seconds of wall time and tick when the update interval
    /// has elapsed. Returns whether a tick ran.
    pub fn advance<R: Rng + ?Sized>(&mut self, frame_dt: f64, rng: &mut R) -> bool {
        if self.config.updates_per_second == 0 {
            return false;
        }
        self.clock += frame_dt;
        if self.clock < 1.0 / f64::from(self.config.updates_per_second) {
            return false;
        }
        let dt = std::mem::take(&mut self.clock);
        self.tick(dt, rng);
        true
    }

    /// Give every point a fresh random height.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let band = self.band;
        for y in &mut self.ys {
            *y = band.random_y(rng);
        }
    }

    /// Control points positioned for a display window spanning `x0..x1`.
    ///
    /// One section is `w = (x1 − x0) / DISPLAY_SECTIONS`; point `k` sits at
    /// `x0 − w − w·offset + k·w`.
    pub fn layout(&self, x0: f64, x1: f64) -> Vec<Point> {
        let w = (x1 - x0) / DISPLAY_SECTIONS as f64;
        let start = x0 - w - w * self.offset();
        self.ys
            .iter()
            .enumerate()
            .map(|(k, &y)| Point::new(start + k as f64 * w, y))
            .collect()
    }

    /// Insert a random point on the `side` end and drop one from the other.
    fn push<R: Rng + ?Sized>(&mut self, side: ScrollDirection, rng: &mut R) {
        let y = self.band.random_y(rng);
        match side {
            ScrollDirection::Forward => {
                self.ys.remove(0);
                self.ys.push(y);
            }
            ScrollDirection::Backward => {
                self.ys.pop();
                self.ys.insert(0, y);
            }
            ScrollDirection::Stopped => return,
        }
        trace!("scroller: pushed y={y:.3} ({side:?})");
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn scroller(direction: ScrollDirection) -> (Scroller, StdRng) {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ScrollConfig {
            direction,
            ..ScrollConfig::default()
        };
        let s = Scroller::new(config, Bounds::default(), &mut rng).expect("valid config");
        (s, rng)
    }

    #[test]
    fn point_count() {
        assert_eq!(POINT_COUNT, 11);
        let (s, _) = scroller(ScrollDirection::Forward);
        assert_eq!(s.heights().len(), POINT_COUNT);
    }

    #[test]
    fn forward_cycle_pushes_right() {
        let (mut s, mut rng) = scroller(ScrollDirection::Forward);
        let before = s.heights().to_vec();
        // 3 s period over 6 sections of 20 sub-steps: 25 ms per sub-step.
        assert_eq!(s.tick(0.026, &mut rng), None);
        assert_eq!(s.step(), 1);
        assert_eq!(s.tick(0.49, &mut rng), Some(ScrollDirection::Forward));
        assert_eq!(s.step(), 0);
        let after = s.heights();
        assert_eq!(after.len(), POINT_COUNT);
        assert_eq!(&after[..POINT_COUNT - 1], &before[1..]);
    }

    #[test]
    fn backward_cycle_pushes_left() {
        let (mut s, mut rng) = scroller(ScrollDirection::Backward);
        let before = s.heights().to_vec();
        assert_eq!(s.tick(0.001, &mut rng), Some(ScrollDirection::Backward));
        assert_eq!(s.step(), SUBDIVISIONS);
        let after = s.heights().to_vec();
        assert_eq!(&after[1..], &before[..POINT_COUNT - 1]);

        assert_eq!(s.tick(0.026, &mut rng), None);
        assert_eq!(s.step(), SUBDIVISIONS - 2);
    }

    #[test]
    fn stopped_never_moves() {
        let (mut s, mut rng) = scroller(ScrollDirection::Stopped);
        let before = s.heights().to_vec();
        for _ in 0..100 {
            assert_eq!(s.tick(1.0, &mut rng), None);
        }
        assert_eq!(s.heights(), before.as_slice());
        assert_eq!(s.step(), 0);
    }

    #[test]
    fn layout_spacing() {
        let (s, _) = scroller(ScrollDirection::Forward);
        let pts = s.layout(0.0, 6.0);
        assert_eq!(pts.len(), POINT_COUNT);
        assert_eq!(pts[0].x, -1.0);
        assert_eq!(pts[POINT_COUNT - 1].x, 9.0);
        assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn layout_follows_offset() {
        let (mut s, mut rng) = scroller(ScrollDirection::Forward);
        s.tick(0.26, &mut rng);
        assert_eq!(s.step(), 10);
        let pts = s.layout(0.0, 6.0);
        assert_eq!(pts[0].x, -1.5);
    }

    #[test]
    fn advance_throttles() {
        let (mut s, mut rng) = scroller(ScrollDirection::Forward);
        assert!(!s.advance(0.01, &mut rng));
        assert!(s.advance(0.03, &mut rng));
        assert_eq!(s.step(), 1);

        let paused = ScrollConfig {
            updates_per_second: 0,
            ..s.config()
        };
        s.set_config(paused).expect("valid config");
        assert!(!s.advance(10.0, &mut rng));
    }

    #[test]
    fn config_validation() {
        let mut c = ScrollConfig::default();
        assert!(c.validate().is_ok());
        c.period = 0.5;
        assert!(c.validate().is_err());
        c.period = 5.0;
        c.updates_per_second = 61;
        assert!(c.validate().is_err());
        assert!(ScrollDirection::from_sign(2).is_err());
        assert_eq!(ScrollDirection::from_sign(-1).map(ScrollDirection::sign), Ok(-1));
    }
}
