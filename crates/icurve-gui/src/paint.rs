use egui::{
    Align2, FontId, Painter, Pos2,
    epaint::{PathShape, Stroke},
};
use interpcurve::{CurveMode, Point};

use crate::{HandleStyle, RenderSettings, canvas::CanvasTransform, theme};

/// Fill the whole pane with the canvas background and outline the curve area.
pub fn draw_background(painter: &Painter, transform: &CanvasTransform) {
    painter.rect_filled(painter.clip_rect(), 0.0, theme::CANVAS_BACKGROUND);
    painter.rect_stroke(
        transform.rect(),
        0.0,
        Stroke::new(1.0, theme::GUIDE),
        egui::StrokeKind::Outside,
    );
}

/// "Curve: <label>" centred above the curve area.
pub fn draw_mode_label(painter: &Painter, transform: &CanvasTransform, mode: CurveMode) {
    let rect = transform.rect();
    painter.text(
        egui::pos2(rect.center().x, rect.min.y - theme::canvas::LABEL_OFFSET),
        Align2::CENTER_BOTTOM,
        format!("Curve: {}", mode.label()),
        FontId::proportional(theme::font_size::LABEL),
        theme::TEXT_PRIMARY,
    );
}

/// Draw an evaluated curve as one polyline.
pub fn draw_curve(
    painter: &Painter,
    transform: &CanvasTransform,
    samples: &[Point],
    settings: &RenderSettings,
) {
    if settings.curve_opacity <= 0.0 || samples.len() < 2 {
        return;
    }
    let color = theme::curve_color(settings.curve_opacity);
    let screen: Vec<Pos2> = samples.iter().map(|p| transform.to_screen(*p)).collect();
    if settings.show_samples {
        draw_sample_dots(painter, &screen, color);
    }
    painter.add(PathShape::line(screen, Stroke::new(settings.line_width, color)));
}

/// Draw already clipped curve segments.
pub fn draw_segments(
    painter: &Painter,
    transform: &CanvasTransform,
    segments: &[[Point; 2]],
    settings: &RenderSettings,
) {
    if settings.curve_opacity <= 0.0 {
        return;
    }
    let color = theme::curve_color(settings.curve_opacity);
    let stroke = Stroke::new(settings.line_width, color);
    for [a, b] in segments {
        painter.line_segment([transform.to_screen(*a), transform.to_screen(*b)], stroke);
    }
    if settings.show_samples {
        let ends: Vec<Pos2> = segments
            .iter()
            .map(|[_, b]| transform.to_screen(*b))
            .collect();
        draw_sample_dots(painter, &ends, color);
    }
}

/// Small dots at each vertex.
fn draw_sample_dots(painter: &Painter, screen: &[Pos2], color: egui::Color32) {
    for &pos in screen {
        painter.circle_filled(pos, theme::canvas::SAMPLE_DOT_RADIUS, color);
    }
}

/// Draw control-point handles; the `active` one uses the opposite style.
pub fn draw_handles(
    painter: &Painter,
    handles: &[Pos2],
    active: Option<usize>,
    style: HandleStyle,
) {
    let color = theme::handle_color();
    let radius = theme::canvas::HANDLE_RADIUS;
    for (i, &pos) in handles.iter().enumerate() {
        let style = if active == Some(i) {
            style.toggled()
        } else {
            style
        };
        match style {
            HandleStyle::Filled => {
                painter.circle_filled(pos, radius, color);
            }
            HandleStyle::Outline => {
                let stroke = Stroke::new(theme::canvas::HANDLE_OUTLINE_WIDTH, color);
                painter.circle_stroke(pos, radius, stroke);
            }
        }
    }
}
