//! Rasterising a curve and its control points into an image.
//!
//! Curve space is mapped onto a square image with the `y` axis pointing up, so
//! the picture matches what the GUI shows.

use image::{Rgba, RgbaImage};
use interpcurve::{Bounds, Point};

/// Colors used when rendering a curve image.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Curve stroke.
    pub curve: Rgba<u8>,
    /// Control-point markers.
    pub handle: Rgba<u8>,
    /// Background fill.
    pub background: Rgba<u8>,
}

/// Stroke and marker sizes plus colors.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Curve stroke width in pixels.
    pub line_width: u32,
    /// Side of the square drawn at each control point, in pixels; 0 hides them.
    pub handle_size: u32,
    /// Colors for curve, handles and background.
    pub palette: Palette,
}

/// Affine map from curve space to pixel space.
#[derive(Clone, Copy, Debug)]
struct PixelFrame {
    /// Curve-space rectangle being shown.
    bounds: Bounds,
    /// Blank border in pixels.
    margin: f64,
    /// Side of the drawable square in pixels.
    inner: f64,
}

impl PixelFrame {
    /// Frame for a `size`-pixel square image, leaving room for the widest mark.
    fn new(size: u32, bounds: Bounds, stroke: &StrokeOptions) -> Self {
        let widest = stroke.line_width.max(stroke.handle_size);
        let margin = 10_u32.saturating_add(widest / 2);
        let inner = f64::from(size.saturating_sub(margin.saturating_mul(2))).max(1.0);
        Self {
            bounds,
            margin: f64::from(margin),
            inner,
        }
    }

    /// Pixel coordinates of `p`; degenerate bounds collapse onto the margin.
    fn to_pixel(self, p: Point) -> (i64, i64) {
        let b = self.bounds;
        let unit = |v: f64, lo: f64, hi: f64| if hi > lo { (v - lo) / (hi - lo) } else { 0.0 };
        let x = self.margin + unit(p.x, b.x_min, b.x_max) * self.inner;
        let y = self.margin + (1.0 - unit(p.y, b.y_min, b.y_max)) * self.inner;
        (x.round() as i64, y.round() as i64)
    }
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
        && x < img.width()
        && y < img.height()
    {
        img.put_pixel(x, y, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let lo = (i64::from(size) - 1) / 2;
    let hi = i64::from(size) / 2;
    for y in cy - lo..=cy + hi {
        for x in cx - lo..=cx + hi {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Bresenham line from `from` to `to`, stamping a `width`-pixel square at each step.
fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), col: Rgba<u8>, width: u32) {
    let ((mut x, mut y), (x1, y1)) = (from, to);
    let dx = (x1 - x).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let dy = -(y1 - y).abs();
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x, y, width, col);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Render a `size×size` image of the polyline `samples` with a marker on each
/// of `control`, both given in the curve space described by `bounds`.
pub fn render_curve_image(
    size: u32,
    bounds: Bounds,
    control: &[Point],
    samples: &[Point],
    stroke: StrokeOptions,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, stroke.palette.background);
    let frame = PixelFrame::new(size, bounds, &stroke);
    let width = stroke.line_width.max(1);

    for pair in samples.windows(2) {
        draw_line(
            &mut img,
            frame.to_pixel(pair[0]),
            frame.to_pixel(pair[1]),
            stroke.palette.curve,
            width,
        );
    }

    if stroke.handle_size > 0 {
        for p in control {
            let (x, y) = frame.to_pixel(*p);
            stamp_square(&mut img, x, y, stroke.handle_size, stroke.palette.handle);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVE: Rgba<u8> = Rgba([1, 2, 3, 255]);
    const HANDLE: Rgba<u8> = Rgba([200, 10, 10, 255]);
    const BG: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn stroke(handle_size: u32) -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            handle_size,
            palette: Palette {
                curve: CURVE,
                handle: HANDLE,
                background: BG,
            },
        }
    }

    #[test]
    fn diagonal_runs_bottom_left_to_top_right() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        // margin 10 + 5/2 = 12, inner 40
        let img = render_curve_image(64, Bounds::default(), &line, &line, stroke(5));

        assert_eq!(img.get_pixel(32, 32), &CURVE);
        assert_eq!(img.get_pixel(12, 52), &HANDLE);
        assert_eq!(img.get_pixel(52, 12), &HANDLE);
        assert_eq!(img.get_pixel(12, 12), &BG);
        assert_eq!(img.get_pixel(0, 0), &BG);
    }

    #[test]
    fn hidden_handles_leave_curve_visible() {
        let line = [Point::new(0.0, 0.5), Point::new(1.0, 0.5)];
        let img = render_curve_image(64, Bounds::default(), &line, &line, stroke(0));
        // margin 10, inner 44: y = 10 + 22
        assert_eq!(img.get_pixel(10, 32), &CURVE);
        assert_eq!(img.get_pixel(54, 32), &CURVE);
        assert!(img.pixels().all(|p| *p != HANDLE));
    }

    #[test]
    fn marks_near_the_edge_are_clipped() {
        let mut img = RgbaImage::from_pixel(4, 4, BG);
        stamp_square(&mut img, 0, 0, 5, CURVE);
        draw_line(&mut img, (-3, 3), (8, 3), CURVE, 1);
        assert_eq!(img.get_pixel(2, 2), &CURVE);
        assert_eq!(img.get_pixel(3, 3), &CURVE);
        assert_eq!(img.get_pixel(3, 0), &BG);
    }

    #[test]
    fn flat_bounds_do_not_divide_by_zero() {
        let bounds = Bounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.5,
            y_max: 0.5,
        };
        let frame = PixelFrame::new(64, bounds, &stroke(0));
        assert_eq!(frame.to_pixel(Point::new(1.0, 0.5)), (54, 54));
    }
}
