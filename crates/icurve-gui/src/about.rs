use std::sync::OnceLock;

use egui::epaint::Shadow;
use egui_commonmark::CommonMarkViewer;
use interpcurve::mode::MODES;

use crate::{APP_NAME, theme};

/// Show the modal About dialog; Escape, the close button or a click on the
/// backdrop clears `about_open`.
pub fn show_about_dialog(
    ctx: &egui::Context,
    about_open: &mut bool,
    cache: &mut egui_commonmark::CommonMarkCache,
) {
    let frame = egui::Frame::popup(&ctx.style()).shadow(Shadow {
        offset: theme::shadow::OFFSET,
        blur: theme::shadow::BLUR,
        spread: theme::shadow::SPREAD,
        color: egui::Color32::from_black_alpha(theme::DIALOG_SHADOW_ALPHA),
    });

    let mut close_clicked = false;
    let modal = egui::Modal::new(egui::Id::new("about_dialog"))
        .backdrop_color(egui::Color32::from_black_alpha(theme::MODAL_DIM_ALPHA))
        .frame(frame)
        .show(ctx, |ui| {
            let (width, height) = theme::window::ABOUT_DIALOG_SIZE;
            ui.set_width(width);
            ui.set_max_height(height);
            close_clicked = header(ui);

            ui.add_space(theme::spacing::LARGE);
            ui.add(egui::Separator::default().spacing(12.0));
            ui.add_space(theme::spacing::MEDIUM);

            egui::ScrollArea::vertical()
                .max_height(theme::window::ABOUT_SCROLL_HEIGHT)
                .show(ui, |ui| {
                    ui.visuals_mut().override_text_color = Some(theme::TEXT_BODY);
                    CommonMarkViewer::new().show(ui, cache, about_content());
                });
        });

    if close_clicked || modal.should_close() {
        *about_open = false;
    }
}

/// Title, tagline and version; returns true when the close button was clicked.
fn header(ui: &mut egui::Ui) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(APP_NAME)
                    .size(theme::font_size::HEADING_LARGE)
                    .color(theme::TEXT_HEADING)
                    .strong(),
            );
            ui.label(
                egui::RichText::new("Interpolating curve playground")
                    .size(theme::font_size::LABEL)
                    .color(theme::TEXT_SECONDARY),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            clicked = ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("×").size(theme::font_size::CLOSE_BUTTON),
                    )
                    .fill(egui::Color32::TRANSPARENT)
                    .frame(false),
                )
                .clicked();
            ui.label(
                egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .size(theme::font_size::VERSION)
                    .color(theme::TEXT_DIM),
            );
        });
    });
    clicked
}

/// Opening paragraph of the About text.
const ABOUT_INTRO: &str = "Drag the handles and watch a curve follow them. Every curve \
passes through its control points; the mode decides what happens in between.";

/// Control reference appended after the mode list.
const ABOUT_CONTROLS: &str = r#"
*Tension* scales the Hermite tangents (1 flattens them) and *Bias* leans them
towards the incoming or the outgoing neighbour.

The **Static** tab holds a fixed set of handles. The **Dynamic** tab scrolls an
endless curve past a window: *Speed* is the seconds per window width,
*Direction* picks the side new points enter from, and *Updates* sets the tick
rate (0 pauses).

Press **Escape** to close this dialog.

---

*Built with Rust & egui.*
"#;

/// Markdown content buffer built once for the About dialog.
static ABOUT_CONTENT: OnceLock<String> = OnceLock::new();

/// Return the About markdown, building the mode list on first use.
fn about_content() -> &'static str {
    ABOUT_CONTENT
        .get_or_init(|| {
            let modes: String = MODES
                .iter()
                .map(|e| format!("- **{}**: {}\n", e.display, e.info))
                .collect();
            format!("## Welcome to {APP_NAME}\n\n{ABOUT_INTRO}\n\n{modes}{ABOUT_CONTROLS}")
        })
        .as_str()
}
