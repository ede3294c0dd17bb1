//! Mapping between curve space and the screen, plus handle hit-testing.

use egui::{Pos2, Rect};
use interpcurve::{Bounds, Point};

use crate::theme;

/// Maps curve-space points (y up) into a screen rectangle (y down) and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Screen rectangle the bounds are stretched over.
    rect: Rect,
    /// Curve-space rectangle shown in `rect`.
    bounds: Bounds,
}

impl CanvasTransform {
    /// Stretch `bounds` over `rect`.
    pub fn new(rect: Rect, bounds: Bounds) -> Self {
        Self { rect, bounds }
    }

    /// Screen rectangle of the curve area.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Curve-space point to screen position.
    pub fn to_screen(&self, p: Point) -> Pos2 {
        let b = &self.bounds;
        let fx = (p.x - b.x_min) / span(b.x_min, b.x_max);
        let fy = (p.y - b.y_min) / span(b.y_min, b.y_max);
        Pos2::new(
            self.rect.min.x + fx as f32 * self.rect.width(),
            self.rect.max.y - fy as f32 * self.rect.height(),
        )
    }

    /// Screen position to curve-space point.
    pub fn to_model(&self, pos: Pos2) -> Point {
        let b = &self.bounds;
        let fx = f64::from((pos.x - self.rect.min.x) / self.rect.width().max(f32::EPSILON));
        let fy = f64::from((self.rect.max.y - pos.y) / self.rect.height().max(f32::EPSILON));
        Point::new(
            b.x_min + fx * (b.x_max - b.x_min),
            b.y_min + fy * (b.y_max - b.y_min),
        )
    }
}

/// Extent of `lo..hi`, never zero.
fn span(lo: f64, hi: f64) -> f64 {
    let s = hi - lo;
    if s > 0.0 { s } else { 1.0 }
}

/// Curve area inside the pane: `available` minus the theme margin, but never
/// smaller than the theme minimum.
pub fn curve_area(available: Rect) -> Rect {
    let margin = theme::canvas::MARGIN;
    let min = theme::canvas::MIN_SIZE;
    let width = (available.width() - 2.0 * margin).max(min);
    let height = (available.height() - 2.0 * margin).max(min);
    Rect::from_center_size(available.center(), egui::vec2(width, height))
}

/// Index of the handle nearest `pointer` among those strictly within `radius`.
pub fn pick_handle(handles: &[Pos2], pointer: Pos2, radius: f32) -> Option<usize> {
    handles
        .iter()
        .enumerate()
        .map(|(i, h)| (i, h.distance(pointer)))
        .filter(|&(_, d)| d < radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(
            Rect::from_min_max(Pos2::new(10.0, 20.0), Pos2::new(110.0, 220.0)),
            Bounds::default(),
        )
    }

    #[test]
    fn corners_map_with_y_flipped() {
        let t = transform();
        assert_eq!(t.to_screen(Point::new(0.0, 0.0)), Pos2::new(10.0, 220.0));
        assert_eq!(t.to_screen(Point::new(1.0, 1.0)), Pos2::new(110.0, 20.0));
        assert_eq!(t.to_screen(Point::new(0.5, 0.25)), Pos2::new(60.0, 170.0));
    }

    #[test]
    fn screen_round_trip() {
        let t = transform();
        let p = t.to_model(Pos2::new(35.0, 70.0));
        assert!((p.x - 0.25).abs() < 1e-6);
        assert!((p.y - 0.75).abs() < 1e-6);
        assert_eq!(t.to_screen(p), Pos2::new(35.0, 70.0));
    }

    #[test]
    fn picks_nearest_within_radius() {
        let handles = [
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(14.0, 0.0),
        ];
        assert_eq!(pick_handle(&handles, Pos2::new(1.0, 1.0), 8.0), Some(0));
        assert_eq!(pick_handle(&handles, Pos2::new(12.5, 0.0), 8.0), Some(2));
        assert_eq!(pick_handle(&handles, Pos2::new(11.0, 0.0), 8.0), Some(1));
        assert_eq!(pick_handle(&handles, Pos2::new(40.0, 40.0), 8.0), None);
        // The radius is exclusive.
        assert_eq!(pick_handle(&handles, Pos2::new(0.0, 8.0), 8.0), None);
        assert_eq!(pick_handle(&[], Pos2::ZERO, 8.0), None);
    }

    #[test]
    fn curve_area_respects_minimum() {
        let tiny = Rect::from_min_max(Pos2::ZERO, Pos2::new(50.0, 50.0));
        let area = curve_area(tiny);
        assert_eq!(area.width(), theme::canvas::MIN_SIZE);
        let big = Rect::from_min_max(Pos2::ZERO, Pos2::new(400.0, 300.0));
        assert_eq!(curve_area(big).width(), 400.0 - 2.0 * theme::canvas::MARGIN);
    }
}
