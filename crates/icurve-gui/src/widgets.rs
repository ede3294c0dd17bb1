use egui::{
    self, Response, Slider,
    epaint::{Shadow, Stroke},
};
use interpcurve::{CurveMode, HermiteParams, mode::MODES};

use crate::{HandleStyle, RenderSettings, theme};

/// Add a slider with themed rail and fill colors for better visibility.
pub fn themed_slider(ui: &mut egui::Ui, slider: Slider<'_>) -> Response {
    let old_noninteractive_bg = ui.visuals().widgets.noninteractive.bg_fill;
    let old_inactive_bg = ui.visuals().widgets.inactive.bg_fill;
    let old_inactive_fg = ui.visuals().widgets.inactive.fg_stroke.color;

    ui.visuals_mut().widgets.noninteractive.bg_fill = theme::SLIDER_RAIL;
    ui.visuals_mut().widgets.inactive.bg_fill = theme::SLIDER_RAIL;
    ui.visuals_mut().widgets.inactive.fg_stroke.color = theme::SLIDER_FILL;

    let response = ui.add(slider);

    ui.visuals_mut().widgets.noninteractive.bg_fill = old_noninteractive_bg;
    ui.visuals_mut().widgets.inactive.bg_fill = old_inactive_bg;
    ui.visuals_mut().widgets.inactive.fg_stroke.color = old_inactive_fg;

    response
}

/// Checkbox with a distinct neon-backed card for better contrast.
pub fn neon_checkbox(ui: &mut egui::Ui, checked: &mut bool, label: &str) -> Response {
    let fill = if *checked {
        theme::TOGGLE_BG_ACTIVE
    } else {
        theme::TOGGLE_BG
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(egui::Margin::symmetric(8, 6))
        .corner_radius(egui::CornerRadius::same(3))
        .show(ui, |ui| ui.checkbox(checked, label))
        .inner
}

/// Minimal heading used inside settings sections.
fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .strong()
            .color(theme::TEXT_HEADING)
            .size(theme::font_size::LABEL),
    );
}

/// Small dim label used in front of control-bar widgets.
pub fn bar_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::font_size::INFO)
            .color(theme::TEXT_DIM),
    );
}

/// Labelled compact slider for the control bar; returns true when the value changed.
pub fn bar_slider(ui: &mut egui::Ui, label: &str, slider: Slider<'_>) -> bool {
    bar_label(ui, label);
    ui.spacing_mut().slider_width = theme::control_bar::SLIDER_WIDTH;
    themed_slider(ui, slider).changed()
}

/// Slider row that shows a fixed-width value label to prevent layout jitter.
fn slider_row_with_value(
    ui: &mut egui::Ui,
    label: &str,
    slider: Slider<'_>,
    value: impl Into<String>,
) -> Response {
    const LABEL_WIDTH: f32 = 74.0;
    const VALUE_WIDTH: f32 = 56.0;

    ui.horizontal(|ui| {
        ui.add_sized(
            [LABEL_WIDTH, 0.0],
            egui::Label::new(
                egui::RichText::new(label)
                    .color(theme::TEXT_BODY)
                    .size(theme::font_size::LABEL),
            ),
        );

        let slider_width = (ui.available_width() - VALUE_WIDTH - theme::spacing::SMALL).max(80.0);
        let response = ui.add_sized([slider_width, 0.0], slider.show_value(false));

        ui.add_space(theme::spacing::SMALL);
        ui.add_sized(
            [VALUE_WIDTH, 0.0],
            egui::Label::new(
                egui::RichText::new(value.into())
                    .monospace()
                    .color(theme::TEXT_SECONDARY),
            ),
        );

        response
    })
    .inner
}

/// Curve mode combo box; each entry shows its description on hover.
///
/// Returns the newly chosen mode, if the user picked a different one.
pub fn mode_selector_combo(
    ui: &mut egui::Ui,
    current: CurveMode,
    id_salt: &str,
) -> Option<CurveMode> {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for entry in MODES {
                ui.selectable_value(&mut selected, entry.mode, entry.display)
                    .on_hover_text(entry.info);
            }
        });
    (selected != current).then_some(selected)
}

/// Mode combo plus the "Change Curve Type" and "Randomise" buttons.
pub fn curve_controls(ui: &mut egui::Ui, mode: CurveMode, id_salt: &str) -> CurveAction {
    bar_label(ui, "Curve:");
    let mut action = match mode_selector_combo(ui, mode, id_salt) {
        Some(m) => CurveAction::SetMode(m),
        None => CurveAction::None,
    };
    if ui.button("Change Curve Type").clicked() {
        action = CurveAction::SetMode(mode.next());
    }
    if ui.button("Randomise").clicked() {
        action = CurveAction::Randomise;
    }
    action
}

/// What the user asked for through [`curve_controls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveAction {
    /// Nothing this frame.
    None,
    /// Switch to another mode.
    SetMode(CurveMode),
    /// Draw new random heights.
    Randomise,
}

/// Tension and bias sliders, shown only for Hermite curves.
///
/// Returns the edited parameters when either slider moved.
pub fn hermite_controls(
    ui: &mut egui::Ui,
    mode: CurveMode,
    params: HermiteParams,
) -> Option<HermiteParams> {
    if mode != CurveMode::Hermite {
        return None;
    }
    let mut edited = params;
    ui.separator();
    let tension = bar_slider(
        ui,
        "Tension:",
        Slider::new(&mut edited.tension, -1.0..=1.0).step_by(0.1),
    );
    let bias = bar_slider(
        ui,
        "Bias:",
        Slider::new(&mut edited.bias, -1.0..=1.0).step_by(0.1),
    );
    (tension || bias).then_some(edited)
}

/// Common pause/play button widget
pub fn pause_play_button(ui: &mut egui::Ui, paused: &mut bool) -> bool {
    let (fill, border, glyph) = if *paused {
        (theme::BUTTON_PLAY, theme::TEXT_LINK, "▶")
    } else {
        (theme::BUTTON_PAUSE, theme::TEXT_HEADING, "⏸")
    };

    let clicked = ui
        .add(
            egui::Button::new(
                egui::RichText::new(glyph)
                    .color(theme::TEXT_PRIMARY)
                    .size(theme::font_size::TITLE),
            )
            .min_size(egui::vec2(34.0, 28.0))
            .fill(fill)
            .stroke(Stroke::new(1.5, border)),
        )
        .clicked();

    if clicked {
        *paused = !*paused;
    }

    clicked
}

/// Render the settings panel content (called from within the dropdown frame).
fn settings_panel_content(ui: &mut egui::Ui, settings: &mut RenderSettings) {
    // Logarithmic opacity slider constant - maps opacity (0.01 to 1.0) to log scale (0 to 100)
    const LOG_MIN: f32 = -4.605;

    ui.spacing_mut().item_spacing.y = theme::spacing::MEDIUM - 2.0;

    section_header(ui, "Curve");

    let mut log_value = if settings.curve_opacity <= 0.0 {
        0.0
    } else {
        ((settings.curve_opacity.ln() - LOG_MIN) / (0.0 - LOG_MIN)) * 100.0
    };
    let opacity_value = settings.curve_opacity;
    let response = slider_row_with_value(
        ui,
        "Opacity",
        Slider::new(&mut log_value, 0.0..=100.0).step_by(1.0),
        format!("{:>4.0}%", opacity_value * 100.0),
    );
    if response.changed() {
        settings.curve_opacity = if log_value <= 0.0 {
            0.0
        } else {
            (LOG_MIN + (log_value / 100.0) * (0.0 - LOG_MIN)).exp()
        };
    }

    let (lo, hi) = theme::canvas::LINE_WIDTH_RANGE;
    let width_value = settings.line_width;
    slider_row_with_value(
        ui,
        "Width",
        Slider::new(&mut settings.line_width, lo..=hi).step_by(0.5),
        format!("{width_value:>4.1}px"),
    );

    neon_checkbox(ui, &mut settings.show_samples, "Sample points");

    ui.add_space(theme::spacing::MEDIUM - 2.0);
    ui.add(egui::Separator::default().spacing(theme::spacing::SMALL));

    section_header(ui, "Handles");
    ui.horizontal(|ui| {
        ui.selectable_value(&mut settings.handle_style, HandleStyle::Filled, "Filled");
        ui.selectable_value(&mut settings.handle_style, HandleStyle::Outline, "Outline");
    });
}

/// Settings dropdown widget that appears as an overlay.
pub fn settings_dropdown(
    ui: &mut egui::Ui,
    settings_open: &mut bool,
    settings_pos: &mut Option<egui::Pos2>,
    settings: &mut RenderSettings,
) {
    let button_response = ui.button("⚙");
    if button_response.clicked() {
        *settings_open = !*settings_open;
        if *settings_open {
            *settings_pos = None; // force re-anchor on open
        }
    }

    if !*settings_open {
        *settings_pos = None;
        return;
    }

    let button_rect = button_response.rect;
    let anchor_pos = settings_pos.get_or_insert_with(|| {
        egui::pos2(
            button_rect.max.x + theme::popup::SETTINGS_OFFSET_X,
            button_rect.max.y + theme::popup::SETTINGS_OFFSET_Y,
        )
    });

    let area_response = egui::Area::new(egui::Id::new("settings_dropdown"))
        .movable(false)
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::RIGHT_TOP)
        .constrain_to(ui.ctx().content_rect())
        .fixed_pos(*anchor_pos)
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(theme::SETTINGS_PANEL_BG)
                .stroke(Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::same(theme::popup::SETTINGS_MARGIN))
                .corner_radius(egui::CornerRadius::same(theme::popup::CORNER_RADIUS))
                .shadow(Shadow {
                    offset: theme::shadow::OFFSET,
                    blur: theme::shadow::BLUR,
                    spread: theme::shadow::SPREAD,
                    color: egui::Color32::from_rgba_unmultiplied(
                        theme::accent_color::R,
                        theme::accent_color::G,
                        theme::accent_color::B,
                        theme::POPUP_SHADOW_ALPHA,
                    ),
                })
                .show(ui, |ui| {
                    ui.set_width(theme::popup::SETTINGS_WIDTH);
                    ui.set_min_width(theme::popup::SETTINGS_WIDTH);
                    ui.vertical(|ui| settings_panel_content(ui, settings));
                });
        });

    // Close dropdown if user clicks outside
    let pointer_pos = ui.input(|i| i.pointer.interact_pos());
    if ui.input(|i| i.pointer.primary_clicked())
        && let Some(pos) = pointer_pos
    {
        let inside_dropdown = area_response.response.rect.contains(pos);
        let inside_button = button_response.rect.contains(pos);
        if !inside_dropdown && !inside_button {
            *settings_open = false;
            *settings_pos = None;
        }
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        *settings_open = false;
        *settings_pos = None;
    }
}
