use egui::{self, Pos2};
use interpcurve::Session;
use log::error;
use rand::Rng;

use super::widgets::{self, CurveAction};
use crate::{
    AppState, RenderSettings,
    canvas::{self, CanvasTransform, pick_handle},
    paint, theme,
};

/// Render the static pane: control bar plus the draggable curve canvas.
pub fn show_static_pane<R: Rng + ?Sized>(
    ui: &mut egui::Ui,
    app_state: &mut AppState,
    session: &mut Session,
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
            ui.horizontal(|ui| {
                match widgets::curve_controls(ui, session.mode(), "static_mode") {
                    CurveAction::SetMode(mode) => session.set_mode(mode),
                    CurveAction::Randomise => session.randomise(rng),
                    CurveAction::None => {}
                }

                if let Some(params) =
                    widgets::hermite_controls(ui, session.mode(), session.hermite())
                    && let Err(e) = session.set_hermite(params)
                {
                    error!("rejected hermite parameters: {e}");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::settings_dropdown(
                        ui,
                        &mut app_state.settings_dropdown_open,
                        &mut app_state.settings_dropdown_pos,
                        settings,
                    );
                });
            });
        });

    ui.separator();

    app_state.static_canvas = Some(draw_static_canvas(ui, session, settings));
}

/// Handle pointer interaction and paint the curve with its handles, returning
/// the mapping used for this frame.
fn draw_static_canvas(
    ui: &mut egui::Ui,
    session: &mut Session,
    settings: &RenderSettings,
) -> CanvasTransform {
    let available = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(available, egui::Sense::click_and_drag());
    let transform = CanvasTransform::new(canvas::curve_area(available), session.points().bounds());

    handle_pointer(ui, &response, &transform, session);

    let painter = ui.painter_at(available);
    paint::draw_background(&painter, &transform);
    paint::draw_mode_label(&painter, &transform, session.mode());

    match session.curve() {
        Ok(curve) => paint::draw_curve(&painter, &transform, &curve, settings),
        Err(e) => error!("curve evaluation failed: {e}"),
    }

    let handles = handle_positions(session, &transform);
    paint::draw_handles(&painter, &handles, session.active(), settings.handle_style);
    transform
}

/// Screen positions of every control point.
fn handle_positions(session: &Session, transform: &CanvasTransform) -> Vec<Pos2> {
    session
        .points()
        .iter()
        .map(|p| transform.to_screen(*p))
        .collect()
}

/// Press grabs the handle under the pointer, moving drags it, release lets go.
fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    transform: &CanvasTransform,
    session: &mut Session,
) {
    let (pressed, down, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if pressed
        && response.contains_pointer()
        && let Some(pos) = pos
        && let Some(index) =
            pick_handle(&handle_positions(session, transform), pos, theme::canvas::PICK_RADIUS)
        && let Err(e) = session.begin_drag(index)
    {
        error!("could not grab handle {index}: {e}");
    }

    if down
        && session.active().is_some()
        && let Some(pos) = pos
    {
        session.drag_to(transform.to_model(pos));
    }

    if released || !down {
        session.end_drag();
    }
}
