//! Centralized theme constants for the icurve GUI.
//!
//! Colors, sizes and spacing used by the panes and widgets live here so the
//! visual presentation can be tuned in one place.
//!
//! # Theme: "Neon Grid"
//!
//! Electric cyan draws the curve, ultraviolet magenta marks the control-point
//! handles, and everything sits on an inky midnight background.

use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================

/// Inky midnight background that lets neon colors pop.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0x06, 0x08, 0x14);

/// Panel/UI background, a hair brighter than the canvas.
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0x0b, 0x0f, 0x22);

/// Curve color (electric cyan).
pub mod curve_color {
    /// Red component.
    pub const R: u8 = 0x1f;
    /// Green component.
    pub const G: u8 = 0xf2;
    /// Blue component.
    pub const B: u8 = 0xff;
}

/// Handle/accent color (ultraviolet magenta).
pub mod accent_color {
    /// Red component.
    pub const R: u8 = 0xff;
    /// Green component.
    pub const G: u8 = 0x4d;
    /// Blue component.
    pub const B: u8 = 0xf6;
}

/// Primary text color.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe6, 0xed, 0xff);

/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9f, 0xb4, 0xe5);

/// Body text color.
pub const TEXT_BODY: Color32 = Color32::from_rgb(0xcb, 0xd7, 0xff);

/// Dim text color.
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x69, 0x73, 0x92);

/// Heading color.
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0xff, 0x5a, 0xf1);

/// Link color.
pub const TEXT_LINK: Color32 = Color32::from_rgb(0x55, 0xf0, 0xff);

/// Widget background color.
pub const WIDGET_BACKGROUND: Color32 = Color32::from_rgb(0x16, 0x14, 0x28);

/// Widget background when hovered.
pub const WIDGET_HOVERED: Color32 = Color32::from_rgb(0x23, 0x20, 0x38);

/// Widget background when active/pressed.
pub const WIDGET_ACTIVE: Color32 = Color32::from_rgb(0x2f, 0x28, 0x4e);

/// Toggle background for idle checkboxes.
pub const TOGGLE_BG: Color32 = Color32::from_rgb(0x1c, 0x1a, 0x32);

/// Toggle background when checked.
pub const TOGGLE_BG_ACTIVE: Color32 = Color32::from_rgb(0x28, 0x22, 0x4b);

/// Settings panel fill.
pub const SETTINGS_PANEL_BG: Color32 = Color32::from_rgba_premultiplied(0x16, 0x14, 0x28, 250);

/// Selected/highlighted state.
pub const SELECTION: Color32 = Color32::from_rgb(0x25, 0x1e, 0x3a);

/// Border/separator color.
pub const BORDER: Color32 = Color32::from_rgb(0x38, 0x35, 0x57);

/// Slider rail color.
pub const SLIDER_RAIL: Color32 = Color32::from_rgb(0x2a, 0x27, 0x40);

/// Slider fill color, mirroring the curve.
pub const SLIDER_FILL: Color32 = Color32::from_rgb(0x29, 0xf0, 0xff);

/// Play button color.
pub const BUTTON_PLAY: Color32 = Color32::from_rgb(0x0f, 0x6e, 0xa8);

/// Pause button color.
pub const BUTTON_PAUSE: Color32 = Color32::from_rgb(0x4a, 0x14, 0x63);

/// Vertical band and display window outline.
pub const GUIDE: Color32 = Color32::from_rgb(0x1d, 0x1b, 0x36);

/// Dimming overlay for modal backgrounds.
pub const MODAL_DIM_ALPHA: u8 = 180;

/// Shadow color alpha for popups and dropdowns.
pub const POPUP_SHADOW_ALPHA: u8 = 140;

/// Shadow color alpha for the About dialog.
pub const DIALOG_SHADOW_ALPHA: u8 = 160;

// =============================================================================
// FONTS & TEXT
// =============================================================================

/// Font sizes used throughout the application.
pub mod font_size {
    /// Title text in the menu bar.
    pub const TITLE: f32 = 18.0;

    /// Large heading text in the About dialog.
    pub const HEADING_LARGE: f32 = 28.0;

    /// Close button text.
    pub const CLOSE_BUTTON: f32 = 18.0;

    /// Standard label text.
    pub const LABEL: f32 = 14.0;

    /// Small info text.
    pub const INFO: f32 = 13.0;

    /// Version text.
    pub const VERSION: f32 = 12.0;
}

// =============================================================================
// SPACING & LAYOUT
// =============================================================================

/// Spacing values used throughout the UI.
pub mod spacing {
    /// Small space.
    pub const SMALL: f32 = 4.0;

    /// Medium space.
    pub const MEDIUM: f32 = 8.0;

    /// Large space.
    pub const LARGE: f32 = 16.0;
}

/// Menu bar styling constants.
pub mod menu_bar {
    /// Vertical padding for the top menu bar.
    pub const PADDING_VERTICAL: f32 = 6.0;

    /// Horizontal padding for the top menu bar.
    pub const PADDING_HORIZONTAL: f32 = 12.0;

    /// Space after the title before tabs.
    pub const TITLE_SPACING: f32 = 16.0;

    /// Space between tab items.
    pub const TAB_SPACING: f32 = 4.0;

    /// Padding around the About button.
    pub const BUTTON_PADDING: f32 = 8.0;

    /// Tab label size.
    pub const TAB_TEXT_SIZE: f32 = 15.0;
}

/// Control bar (secondary toolbar) styling constants.
pub mod control_bar {
    /// Vertical padding for the control bar.
    pub const PADDING_VERTICAL: f32 = 4.0;

    /// Horizontal padding for the control bar.
    pub const PADDING_HORIZONTAL: f32 = 8.0;

    /// Width of the compact sliders in the bar.
    pub const SLIDER_WIDTH: f32 = 90.0;
}

/// Window and dialog dimensions.
pub mod window {
    /// Default window size.
    pub const DEFAULT_SIZE: [f32; 2] = [900.0, 600.0];

    /// About dialog size.
    pub const ABOUT_DIALOG_SIZE: (f32, f32) = (550.0, 450.0);

    /// About dialog content scroll area max height.
    pub const ABOUT_SCROLL_HEIGHT: f32 = 300.0;
}

/// Popup and dropdown dimensions.
pub mod popup {
    /// Settings dropdown inner margin.
    pub const SETTINGS_MARGIN: i8 = 10;

    /// Settings dropdown width.
    pub const SETTINGS_WIDTH: f32 = 220.0;

    /// Horizontal offset between the anchor button and the panel.
    pub const SETTINGS_OFFSET_X: f32 = 28.0;

    /// Vertical offset for settings dropdown from button.
    pub const SETTINGS_OFFSET_Y: f32 = 4.0;

    /// Corner radius for popup frames.
    pub const CORNER_RADIUS: u8 = 2;
}

/// Shadow parameters for UI elements.
pub mod shadow {
    /// Shadow offset (x, y).
    pub const OFFSET: [i8; 2] = [1, 2];

    /// Shadow blur radius.
    pub const BLUR: u8 = 6;

    /// Shadow spread.
    pub const SPREAD: u8 = 0;
}

// =============================================================================
// CANVAS
// =============================================================================

/// Curve canvas rendering parameters.
pub mod canvas {
    /// Margin between the pane edge and the curve area.
    pub const MARGIN: f32 = 40.0;

    /// Minimum size of the curve area on either axis.
    pub const MIN_SIZE: f32 = 120.0;

    /// Default curve line width.
    pub const LINE_WIDTH: f32 = 2.0;

    /// Line width range offered in the settings dropdown.
    pub const LINE_WIDTH_RANGE: (f32, f32) = (1.0, 6.0);

    /// Radius of a control-point handle.
    pub const HANDLE_RADIUS: f32 = 4.0;

    /// Pointer distance within which a handle can be grabbed.
    pub const PICK_RADIUS: f32 = 8.0;

    /// Stroke width of an outlined handle.
    pub const HANDLE_OUTLINE_WIDTH: f32 = 1.5;

    /// Radius of the optional sample dots.
    pub const SAMPLE_DOT_RADIUS: f32 = 1.5;

    /// Space above the curve area for the "Curve:" label.
    pub const LABEL_OFFSET: f32 = 18.0;
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Curve color with opacity applied.
#[inline]
pub fn curve_color(opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        curve_color::R,
        curve_color::G,
        curve_color::B,
        (255.0 * opacity.clamp(0.0, 1.0)) as u8,
    )
}

/// Opaque handle color.
#[inline]
pub fn handle_color() -> Color32 {
    Color32::from_rgb(accent_color::R, accent_color::G, accent_color::B)
}

// =============================================================================
// EGUI VISUALS CONFIGURATION
// =============================================================================

/// Configure egui visuals with the neon theme.
pub fn configure_visuals(ctx: &egui::Context) {
    use egui::{Visuals, epaint::Shadow};

    let mut visuals = Visuals::dark();

    visuals.window_fill = PANEL_BACKGROUND;
    visuals.panel_fill = PANEL_BACKGROUND;
    visuals.extreme_bg_color = CANVAS_BACKGROUND;
    visuals.faint_bg_color = WIDGET_BACKGROUND;
    visuals.override_text_color = Some(TEXT_BODY);

    visuals.widgets.noninteractive.bg_fill = WIDGET_BACKGROUND;
    visuals.widgets.noninteractive.fg_stroke.color = TEXT_BODY;
    visuals.widgets.noninteractive.bg_stroke.color = BORDER;

    visuals.widgets.inactive.bg_fill = WIDGET_BACKGROUND;
    visuals.widgets.inactive.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.inactive.bg_stroke.color = BORDER;

    visuals.widgets.hovered.bg_fill = WIDGET_HOVERED;
    visuals.widgets.hovered.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.hovered.bg_stroke.color = TEXT_SECONDARY;

    visuals.widgets.active.bg_fill = WIDGET_ACTIVE;
    visuals.widgets.active.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.active.bg_stroke.color = TEXT_PRIMARY;

    visuals.widgets.open.bg_fill = WIDGET_ACTIVE;
    visuals.widgets.open.fg_stroke.color = TEXT_PRIMARY;
    visuals.widgets.open.bg_stroke.color = TEXT_PRIMARY;

    visuals.selection.bg_fill = SELECTION;
    visuals.selection.stroke.color = TEXT_HEADING;
    visuals.hyperlink_color = TEXT_LINK;
    visuals.warn_fg_color = TEXT_HEADING;
    visuals.slider_trailing_fill = true;

    visuals.window_corner_radius = egui::CornerRadius::same(2);
    visuals.menu_corner_radius = egui::CornerRadius::same(2);
    visuals.window_stroke.color = BORDER;

    visuals.popup_shadow = Shadow {
        offset: [1, 2],
        blur: 10,
        spread: 0,
        color: Color32::from_rgba_unmultiplied(0xff, 0x5a, 0xf1, 110),
    };

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.indent = 16.0;
    ctx.set_style(style);
}
