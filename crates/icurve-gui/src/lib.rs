//! GUI application for dragging control points through interpolating curves,
//! built on egui/eframe.

use anyhow::Result;
use interpcurve::{
    Bounds, CurveMode, DragAxis, ScrollConfig, Scroller, Session, control::DEFAULT_POINT_COUNT,
};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

/// Canonical application name used across the GUI.
pub const APP_NAME: &str = "icurve";

/// Primary repository URL for the application.
pub const APP_REPO_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Represents the currently active view pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Fixed control points the user drags.
    #[default]
    Static,
    /// Control points scrolling across a display window.
    Dynamic,
}

/// How control-point handles are drawn when idle; a dragged handle uses the other style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleStyle {
    /// Solid disc.
    #[default]
    Filled,
    /// Circle outline.
    Outline,
}

impl HandleStyle {
    /// The opposite style.
    pub fn toggled(self) -> Self {
        match self {
            Self::Filled => Self::Outline,
            Self::Outline => Self::Filled,
        }
    }
}

/// Launch configuration for the GUI.
#[derive(Debug, Clone)]
pub struct GuiOptions {
    /// Pane shown at startup.
    pub pane: Pane,
    /// Initial mode of the static pane.
    pub static_mode: CurveMode,
    /// Initial mode of the dynamic pane.
    pub dynamic_mode: CurveMode,
    /// Number of control points in the static pane.
    pub points: usize,
    /// Whether static handles may also move horizontally.
    pub drag_axis: DragAxis,
    /// Seed for reproducible placement; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Initial scrolling parameters of the dynamic pane.
    pub scroll: ScrollConfig,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            pane: Pane::Static,
            static_mode: CurveMode::Hermite,
            dynamic_mode: CurveMode::Linear,
            points: DEFAULT_POINT_COUNT,
            drag_axis: DragAxis::Vertical,
            seed: None,
            scroll: ScrollConfig::default(),
        }
    }
}

/// About dialog contents and helpers.
pub mod about;
/// Screen mapping and handle hit-testing.
pub mod canvas;
/// The scrolling pane.
pub mod dynamic_pane;
/// Painting helpers shared by both panes.
pub mod paint;
/// The draggable pane.
pub mod static_pane;
/// Centralized theme constants (colors, spacing, sizes).
pub mod theme;
/// Reusable GUI widgets.
pub mod widgets;

use dynamic_pane::{DynamicPane, show_dynamic_pane};
use static_pane::show_static_pane;

/// Rendering style shared between the panes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Opacity of the curve (0.0–1.0).
    pub curve_opacity: f32,
    /// Curve stroke width in pixels.
    pub line_width: f32,
    /// Draw a dot at every evaluated vertex.
    pub show_samples: bool,
    /// Idle handle style.
    pub handle_style: HandleStyle,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            curve_opacity: 1.0,
            line_width: theme::canvas::LINE_WIDTH,
            show_samples: false,
            handle_style: HandleStyle::Filled,
        }
    }
}

/// Mutable UI state that is not part of either curve model.
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently selected pane.
    pub current_pane: Pane,
    /// Whether the settings dropdown is currently open.
    pub settings_dropdown_open: bool,
    /// Persisted position for the settings dropdown to avoid frame-to-frame jitter.
    pub settings_dropdown_pos: Option<egui::Pos2>,
    /// Whether the About dialog is currently open.
    pub about_open: bool,
    /// Curve-area mapping of the static pane as of the last frame.
    pub static_canvas: Option<canvas::CanvasTransform>,
}

/// Root eframe application.
pub struct IcurveApp {
    /// Static pane model.
    session: Session,
    /// Dynamic pane model.
    dynamic: DynamicPane,
    /// UI state shared across panes.
    app_state: AppState,
    /// Rendering style shared across panes.
    settings: RenderSettings,
    /// Source of random heights.
    rng: StdRng,
    /// Last frame time used to compute deltas.
    last_time: Option<f64>,
    /// CommonMark cache for the About dialog.
    commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl IcurveApp {
    /// Build both pane models from `options`.
    pub fn new(options: GuiOptions) -> interpcurve::Result<Self> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Session::random(
            options.points,
            Bounds::default(),
            options.static_mode,
            &mut rng,
        )?
        .with_drag_axis(options.drag_axis);
        let scroller = Scroller::new(options.scroll, Bounds::default(), &mut rng)?;
        let dynamic = DynamicPane::new(scroller, options.dynamic_mode);

        Ok(Self {
            session,
            dynamic,
            app_state: AppState {
                current_pane: options.pane,
                ..AppState::default()
            },
            settings: RenderSettings::default(),
            rng,
            last_time: None,
            commonmark_cache: Default::default(),
        })
    }

    /// The static pane's session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The dynamic pane's model.
    pub fn dynamic(&self) -> &DynamicPane {
        &self.dynamic
    }

    /// Currently shown pane.
    pub fn pane(&self) -> Pane {
        self.app_state.current_pane
    }

    /// Switch panes.
    pub fn set_pane(&mut self, pane: Pane) {
        self.app_state.current_pane = pane;
    }

    /// Curve-area mapping of the static pane as last drawn; `None` before
    /// the static pane has been shown.
    pub fn static_canvas(&self) -> Option<canvas::CanvasTransform> {
        self.app_state.static_canvas
    }

    /// Render the top menu bar with title, tabs, and About button.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar")
            .frame(egui::Frame::new().inner_margin(egui::Margin {
                left: theme::menu_bar::PADDING_HORIZONTAL as i8,
                right: theme::menu_bar::PADDING_HORIZONTAL as i8,
                top: theme::menu_bar::PADDING_VERTICAL as i8,
                bottom: theme::menu_bar::PADDING_VERTICAL as i8,
            }))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .link(
                            egui::RichText::new(APP_NAME)
                                .size(theme::font_size::TITLE)
                                .strong()
                                .color(theme::TEXT_HEADING),
                        )
                        .clicked()
                        && let Err(e) = webbrowser::open(APP_REPO_URL)
                    {
                        log::warn!("failed to open browser: {e}");
                    }

                    ui.add_space(theme::menu_bar::TITLE_SPACING);

                    for (pane, label) in [(Pane::Static, "Static"), (Pane::Dynamic, "Dynamic")] {
                        if ui
                            .selectable_label(
                                self.app_state.current_pane == pane,
                                egui::RichText::new(label).size(theme::menu_bar::TAB_TEXT_SIZE),
                            )
                            .clicked()
                        {
                            self.app_state.current_pane = pane;
                        }
                        ui.add_space(theme::menu_bar::TAB_SPACING);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(theme::menu_bar::BUTTON_PADDING);
                        if ui.button("About").clicked() {
                            self.app_state.about_open = !self.app_state.about_open;
                        }
                    });
                });
            });
    }

    /// Advance `dt` seconds and draw one frame.
    pub fn frame(&mut self, ctx: &egui::Context, dt: f64) {
        if self.app_state.current_pane == Pane::Dynamic {
            self.dynamic.advance(dt, &mut self.rng);
            if self.dynamic.is_scrolling() {
                ctx.request_repaint();
            }
        }

        self.show_menu_bar(ctx);

        if self.app_state.about_open {
            about::show_about_dialog(
                ctx,
                &mut self.app_state.about_open,
                &mut self.commonmark_cache,
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.app_state.current_pane {
            Pane::Static => show_static_pane(
                ui,
                &mut self.app_state,
                &mut self.session,
                &mut self.settings,
                &mut self.rng,
            ),
            Pane::Dynamic => show_dynamic_pane(
                ui,
                &mut self.app_state,
                &mut self.dynamic,
                &mut self.settings,
                &mut self.rng,
            ),
        });
    }
}

impl eframe::App for IcurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let dt = self.last_time.map_or(0.0, |prev| (now - prev).max(0.0));
        self.last_time = Some(now);
        self.frame(ctx, dt);
    }
}

/// Launch the native GUI application with default options.
pub fn gui() -> Result<()> {
    gui_with_options(GuiOptions::default())
}

/// Launch the native GUI with custom options.
pub fn gui_with_options(options: GuiOptions) -> Result<()> {
    info!(
        "launching {APP_NAME} gui: pane={:?} points={} static={} dynamic={} seed={:?}",
        options.pane, options.points, options.static_mode, options.dynamic_mode, options.seed
    );
    let app = IcurveApp::new(options)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::window::DEFAULT_SIZE)
            .with_title(format!("{APP_NAME} gui")),
        ..Default::default()
    };

    eframe::run_native(
        &format!("{APP_NAME} gui"),
        native_options,
        Box::new(move |cc| {
            theme::configure_visuals(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
