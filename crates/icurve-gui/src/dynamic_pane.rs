use egui::{self, Pos2, Slider};
use interpcurve::{
    Bounds, CurveEvaluator, CurveMode, HermiteParams, ScrollDirection, Scroller,
    clip::clip_polyline,
    scroll::{MAX_UPDATES_PER_SECOND, PERIOD_RANGE},
};
use log::{error, info};
use rand::Rng;

use super::widgets::{self, CurveAction};
use crate::{
    AppState, RenderSettings,
    canvas::{self, CanvasTransform},
    paint, theme,
};

/// Model behind the dynamic pane.
#[derive(Debug, Clone)]
pub struct DynamicPane {
    /// Scrolling control points.
    scroller: Scroller,
    /// Mode and Hermite settings for the visible curve.
    evaluator: CurveEvaluator,
    /// Scrolling halted by the pause button.
    paused: bool,
}

impl DynamicPane {
    /// Wrap a scroller, drawing its curve in `mode`.
    pub fn new(scroller: Scroller, mode: CurveMode) -> Self {
        Self {
            scroller,
            evaluator: CurveEvaluator::new(mode),
            paused: false,
        }
    }

    /// The scrolling model.
    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Current interpolation mode.
    pub fn mode(&self) -> CurveMode {
        self.evaluator.mode
    }

    /// Switch to `mode`.
    pub fn set_mode(&mut self, mode: CurveMode) {
        if self.evaluator.mode != mode {
            info!("dynamic curve mode: {} -> {}", self.evaluator.mode, mode);
            self.evaluator.mode = mode;
        }
    }

    /// Replace the Hermite parameters after validating them.
    pub fn set_hermite(&mut self, params: HermiteParams) -> interpcurve::Result<()> {
        params.validate()?;
        self.evaluator.hermite = params;
        Ok(())
    }

    /// Whether the pause button is engaged.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Engage or release the pause button.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// True while the points are actually moving.
    pub fn is_scrolling(&self) -> bool {
        let config = self.scroller.config();
        !self.paused
            && config.updates_per_second > 0
            && config.direction != ScrollDirection::Stopped
    }

    /// Feed `dt` seconds of frame time to the scroller unless paused.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) {
        if !self.paused {
            self.scroller.advance(dt, rng);
        }
    }

    /// Control points laid out over the unit display window.
    pub fn points(&self) -> Vec<interpcurve::Point> {
        self.scroller.layout(0.0, 1.0)
    }

    /// Visible curve segments, clipped to the unit display window.
    pub fn visible_segments(&self) -> interpcurve::Result<Vec<[interpcurve::Point; 2]>> {
        let samples = self.evaluator.evaluate(&self.points())?;
        Ok(clip_polyline(&samples, 0.0, 1.0))
    }
}

/// Render the dynamic pane: control bar plus the scrolling curve.
pub fn show_dynamic_pane<R: Rng + ?Sized>(
    ui: &mut egui::Ui,
    app_state: &mut AppState,
    pane: &mut DynamicPane,
    settings: &mut RenderSettings,
    rng: &mut R,
) {
    egui::Frame::new()
        .inner_margin(egui::Margin {
            left: theme::control_bar::PADDING_HORIZONTAL as i8,
            right: theme::control_bar::PADDING_HORIZONTAL as i8,
            top: theme::control_bar::PADDING_VERTICAL as i8,
            bottom: theme::control_bar::PADDING_VERTICAL as i8,
        })
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                match widgets::curve_controls(ui, pane.mode(), "dynamic_mode") {
                    CurveAction::SetMode(mode) => pane.set_mode(mode),
                    CurveAction::Randomise => {
                        info!("randomising scrolling points");
                        pane.scroller.randomise(rng);
                    }
                    CurveAction::None => {}
                }

                if let Some(params) =
                    widgets::hermite_controls(ui, pane.mode(), pane.evaluator.hermite)
                    && let Err(e) = pane.set_hermite(params)
                {
                    error!("rejected hermite parameters: {e}");
                }

                ui.separator();
                scroll_controls(ui, pane);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::settings_dropdown(
                        ui,
                        &mut app_state.settings_dropdown_open,
                        &mut app_state.settings_dropdown_pos,
                        settings,
                    );
                    ui.add_space(theme::spacing::SMALL);
                    widgets::pause_play_button(ui, &mut pane.paused);
                });
            });
        });

    ui.separator();

    draw_dynamic_canvas(ui, pane, settings);
}

/// Speed, direction and update-rate sliders.
fn scroll_controls(ui: &mut egui::Ui, pane: &mut DynamicPane) {
    let mut config = pane.scroller.config();
    let mut sign = config.direction.sign();
    let (lo, hi) = PERIOD_RANGE;

    let mut changed = widgets::bar_slider(
        ui,
        "Speed:",
        Slider::new(&mut config.period, lo..=hi)
            .step_by(0.25)
            .suffix(" s"),
    );
    changed |= widgets::bar_slider(ui, "Direction:", Slider::new(&mut sign, -1..=1));
    changed |= widgets::bar_slider(
        ui,
        "Updates:",
        Slider::new(&mut config.updates_per_second, 0..=MAX_UPDATES_PER_SECOND)
            .step_by(5.0)
            .suffix("/s"),
    );
    if !changed {
        return;
    }

    match ScrollDirection::from_sign(sign) {
        Ok(direction) => config.direction = direction,
        Err(e) => error!("{e}"),
    }
    if let Err(e) = pane.scroller.set_config(config) {
        error!("rejected scroll settings: {e}");
    }
}

/// Paint the display window, the clipped curve and the visible handles.
fn draw_dynamic_canvas(ui: &mut egui::Ui, pane: &DynamicPane, settings: &RenderSettings) {
    let available = ui.available_rect_before_wrap();
    ui.allocate_rect(available, egui::Sense::hover());
    let transform = CanvasTransform::new(canvas::curve_area(available), Bounds::default());

    let painter = ui.painter_at(available);
    paint::draw_background(&painter, &transform);
    paint::draw_mode_label(&painter, &transform, pane.mode());

    match pane.visible_segments() {
        Ok(segments) => paint::draw_segments(&painter, &transform, &segments, settings),
        Err(e) => error!("curve evaluation failed: {e}"),
    }

    let handles: Vec<Pos2> = pane
        .points()
        .into_iter()
        .filter(|p| (0.0..=1.0).contains(&p.x))
        .map(|p| transform.to_screen(p))
        .collect();
    paint::draw_handles(&painter, &handles, None, settings.handle_style);
}
