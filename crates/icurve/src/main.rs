//! Command‑line entry point for the `icurve` tool.
//!
//! Provides subcommands to open the static or dynamic GUI pane, print sampled
//! curves, render curves to images, and list the interpolation modes.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colornames::Color;
use icurve_gui::{GuiOptions, Pane};
use image::{Rgba, RgbaImage};
use interpcurve::{
    CurveEvaluator, CurveMode, DragAxis, HermiteParams, Point, ScrollConfig, ScrollDirection,
    control::DEFAULT_POINT_COUNT, evaluate::DEFAULT_SAMPLES_PER_SEGMENT, mode::MODE_KEYS,
};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// Rasterising curves into images.
mod render;

use crate::render::{Palette, StrokeOptions};

/// Parse a mode key or label.
fn parse_mode(s: &str) -> Result<CurveMode, String> {
    s.parse::<CurveMode>().map_err(|e| e.to_string())
}

/// Parse an `X,Y` pair into a point.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("point '{s}' must be in X,Y form"))?;
    let coord = |label: &str, v: &str| -> Result<f64, String> {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid {label} coordinate '{v}' in point '{s}'"))
    };
    Ok(Point::new(coord("x", x)?, coord("y", y)?))
}

/// Parse `#`-optional hex (RGB, RGBA, RRGGBB, RRGGBBAA) into a color.
fn parse_hex(input: &str) -> Option<Rgba<u8>> {
    let raw = input.strip_prefix('#').unwrap_or(input);
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&raw[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).ok();
    let channels: Vec<u8> = match raw.len() {
        3 | 4 => (0..raw.len())
            .map(|i| digit(i).map(|v| v * 17))
            .collect::<Option<_>>()?,
        6 | 8 => (0..raw.len())
            .step_by(2)
            .map(pair)
            .collect::<Option<_>>()?,
        _ => return None,
    };
    let alpha = channels.get(3).copied().unwrap_or(0xff);
    Some(Rgba([channels[0], channels[1], channels[2], alpha]))
}

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    let trimmed = input.trim();
    if let Some(rgba) = parse_hex(trimmed) {
        return Ok(rgba);
    }
    let color: Color = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha, leading '#' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "icurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `icurve` tool.
enum Commands {
    #[command(about = "Open the GUI with draggable control points")]
    /// Open the static pane.
    Static {
        #[arg(short = 'm', long = "mode", default_value = "hermite", value_parser = parse_mode,
              help = &format!("Curve mode (options: {})", MODE_KEYS.join(", ")))]
        /// Initial curve mode.
        mode: CurveMode,

        #[arg(short = 'p', long = "points", default_value_t = DEFAULT_POINT_COUNT,
              help = "Number of control points")]
        /// Number of control points.
        points: usize,

        #[arg(long = "seed", help = "Seed for reproducible point placement")]
        /// Optional RNG seed.
        seed: Option<u64>,

        #[arg(long = "free-drag", help = "Let handles move horizontally between their neighbours")]
        /// Allow horizontal dragging.
        free_drag: bool,
    },

    #[command(about = "Open the GUI with control points scrolling past a window")]
    /// Open the dynamic pane.
    Dynamic {
        #[arg(short = 'm', long = "mode", default_value = "linear", value_parser = parse_mode,
              help = &format!("Curve mode (options: {})", MODE_KEYS.join(", ")))]
        /// Initial curve mode.
        mode: CurveMode,

        #[arg(long = "seed", help = "Seed for reproducible point heights")]
        /// Optional RNG seed.
        seed: Option<u64>,

        #[arg(long = "period", default_value_t = 3.0, help = "Seconds to cross the window (1-5)")]
        /// Scroll period in seconds.
        period: f64,

        #[arg(long = "direction", default_value_t = 1, allow_negative_numbers = true,
              value_parser = clap::value_parser!(i32).range(-1..=1),
              help = "Scroll direction: 1 forward, -1 backward, 0 stopped")]
        /// Scroll direction sign.
        direction: i32,

        #[arg(long = "updates", default_value_t = 30, help = "Scroll ticks per second (0-60)")]
        /// Tick rate.
        updates: u32,
    },

    #[command(about = "Print the sampled curve through the given points as x,y lines")]
    /// Evaluate a curve and print its vertices.
    Sample {
        #[arg(short = 'm', long = "mode", value_parser = parse_mode,
              help = &format!("Curve mode (options: {})", MODE_KEYS.join(", ")))]
        /// Curve mode.
        mode: CurveMode,

        #[arg(short = 's', long = "samples", default_value_t = DEFAULT_SAMPLES_PER_SEGMENT,
              help = "Samples per segment")]
        /// Samples per segment.
        samples: usize,

        #[arg(long = "tension", default_value_t = 0.0, allow_negative_numbers = true,
              help = "Hermite tension in [-1, 1]")]
        /// Hermite tension.
        tension: f64,

        #[arg(long = "bias", default_value_t = 0.0, allow_negative_numbers = true,
              help = "Hermite bias in [-1, 1]")]
        /// Hermite bias.
        bias: f64,

        #[arg(value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true,
              help = "Control points, ordered by x")]
        /// Control points.
        points: Vec<Point>,
    },

    #[command(about = "Render a random curve to an image")]
    /// Render random control points and their curve.
    Render {
        #[arg(short = 'm', long = "mode", default_value = "hermite", value_parser = parse_mode,
              help = &format!("Curve mode (options: {})", MODE_KEYS.join(", ")))]
        /// Curve mode.
        mode: CurveMode,

        #[arg(short = 'p', long = "points", default_value_t = DEFAULT_POINT_COUNT,
              help = "Number of control points")]
        /// Number of control points.
        points: usize,

        #[arg(long = "seed", help = "Seed for reproducible point placement")]
        /// Optional RNG seed.
        seed: Option<u64>,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 512,
            value_parser = clap::value_parser!(u32)
                .range(i64::from(cmd::MIN_IMAGE_SIZE)..=i64::from(cmd::MAX_IMAGE_SIZE)),
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 2,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(cmd::MAX_MARK_SIZE)),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "handle-size",
            value_name = "PIXELS",
            default_value_t = 7,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(cmd::MAX_MARK_SIZE)),
            help = "Side of the control-point markers (0 hides them)"
        )]
        /// Marker size for control points.
        handle_size: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#8080ff",
            value_name = "HEX",
            help = "Curve color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "handle",
            value_parser = parse_rgba_color,
            default_value = "#e4572e",
            value_name = "HEX",
            help = "Control-point marker color (name or hex)"
        )]
        /// Marker color.
        handle: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "HEX",
            help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the image.
        background: Rgba<u8>,

        #[arg(help = "Optional output file path; opens a viewer when omitted")]
        /// Optional output file path (launches a viewer when not provided).
        output: Option<PathBuf>,
    },

    #[command(name = "list-modes", about = "List supported curve modes")]
    /// List the interpolation modes.
    ListModes,
}

/// Map the `-v` count to a log level; `RUST_LOG` still takes precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => exit_with(e),
    }
}

/// Print `e` to stderr and exit non-zero.
fn exit_with<E: Display>(e: E) -> ! {
    eprintln!("{e}");
    process::exit(1);
}

/// Save an image to disk or show it in an egui viewer when no path is given.
fn deliver_image(image: RgbaImage, output: Option<&Path>, window_title: &str) -> Result<()> {
    if let Some(path) = output {
        image.save(path)?;
    } else {
        println!("No output file provided; opening viewer (close the window to finish)...");
        egui_img::view_image(window_title, image)?;
    }

    Ok(())
}

/// Handle the `sample` subcommand.
fn handle_sample(
    mode: CurveMode,
    samples: usize,
    hermite: (f64, f64),
    points: &[Point],
) -> Result<()> {
    let evaluator = CurveEvaluator::new(mode)
        .with_samples(samples)
        .with_hermite(HermiteParams::new(hermite.0, hermite.1)?);
    print!("{}", cmd::sample(points, &evaluator)?);
    Ok(())
}

/// Handle the `render` subcommand.
fn handle_render(request: &cmd::RenderRequest, output: Option<&Path>) -> Result<()> {
    let image = cmd::render(request)?;
    deliver_image(
        image,
        output,
        &format!("render: {}", request.evaluator.mode.key()),
    )
}

/// Handle the `dynamic` subcommand.
fn handle_dynamic(
    mode: CurveMode,
    seed: Option<u64>,
    period: f64,
    direction: i32,
    updates: u32,
) -> Result<()> {
    let scroll = ScrollConfig {
        period,
        direction: ScrollDirection::from_sign(direction)?,
        updates_per_second: updates,
    };
    icurve_gui::gui_with_options(GuiOptions {
        pane: Pane::Dynamic,
        dynamic_mode: mode,
        seed,
        scroll,
        ..GuiOptions::default()
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Static {
            mode,
            points,
            seed,
            free_drag,
        } => report_ok(
            icurve_gui::gui_with_options(GuiOptions {
                pane: Pane::Static,
                static_mode: mode,
                points,
                seed,
                drag_axis: if free_drag {
                    DragAxis::Free
                } else {
                    DragAxis::Vertical
                },
                ..GuiOptions::default()
            }),
            "OK!",
        ),
        Commands::Dynamic {
            mode,
            seed,
            period,
            direction,
            updates,
        } => report_ok(handle_dynamic(mode, seed, period, direction, updates), "OK!"),
        Commands::Sample {
            mode,
            samples,
            tension,
            bias,
            points,
        } => {
            if let Err(e) = handle_sample(mode, samples, (tension, bias), &points) {
                exit_with(e);
            }
        }
        Commands::Render {
            mode,
            points,
            seed,
            size,
            line_width,
            handle_size,
            foreground,
            handle,
            background,
            output,
        } => report_ok(
            handle_render(
                &cmd::RenderRequest {
                    evaluator: CurveEvaluator::new(mode),
                    points,
                    seed,
                    size,
                    stroke: StrokeOptions {
                        line_width,
                        handle_size,
                        palette: Palette {
                            curve: foreground,
                            handle,
                            background,
                        },
                    },
                },
                output.as_deref(),
            ),
            "OK!",
        ),
        Commands::ListModes => print!("{}", cmd::list_modes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("1.5,-2").unwrap(), Point::new(1.5, -2.0));
        assert_eq!(parse_point(" 3 , 4 ").unwrap(), Point::new(3.0, 4.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("inf,2").is_err());
    }

    #[test]
    fn parses_colors() {
        assert_eq!(parse_rgba_color("#fff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_rgba_color("8080ff80").unwrap(), Rgba([0x80, 0x80, 0xff, 0x80]));
        assert_eq!(parse_rgba_color("f008").unwrap(), Rgba([255, 0, 0, 0x88]));
        assert_eq!(parse_rgba_color("red").unwrap(), Rgba([255, 0, 0, 255]));
        assert!(parse_rgba_color("#12345").is_err());
        assert!(parse_rgba_color("notacolor").is_err());
    }

    #[test]
    fn rejects_unknown_modes() {
        assert_eq!(parse_mode("smoothstep").unwrap(), CurveMode::SmoothStep);
        assert!(parse_mode("bezier").unwrap_err().contains("linear, smoothstep, hermite"));
    }
}
