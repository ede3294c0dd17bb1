//! A tiny eframe viewer for an [`image::RgbaImage`].
//!
//! The window shows the image at its natural size (scrolling when it does not
//! fit) with a file-name field and a button that writes the pixels out as PNG.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Result;
use image::RgbaImage;
use log::{info, warn};

/// Encode `image` as an 8-bit RGBA PNG at `path`.
pub fn save_png(path: &Path, image: &RgbaImage) -> Result<()> {
    use png::{BitDepth, ColorType, Encoder};

    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Default file name offered by the save field, derived from the window title.
fn default_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "image.png".to_string()
    } else {
        format!("{stem}.png")
    }
}

/// Viewer state.
struct ImageViewer {
    /// Source pixels, kept for saving.
    image: RgbaImage,
    /// Uploaded texture, created on the first frame.
    texture: Option<egui::TextureHandle>,
    /// Contents of the file-name field.
    save_path: String,
    /// Outcome of the last save attempt.
    status: Option<String>,
}

impl ImageViewer {
    /// Wrap `image`, proposing a file name based on `title`.
    fn new(title: &str, image: RgbaImage) -> Self {
        Self {
            image,
            texture: None,
            save_path: default_file_name(title),
            status: None,
        }
    }

    /// Write the image to the path in the text field and record the outcome.
    fn save(&mut self) {
        let path = PathBuf::from(self.save_path.trim());
        self.status = Some(match save_png(&path, &self.image) {
            Ok(()) => {
                info!("saved {}", path.display());
                format!("Saved {}", path.display())
            }
            Err(e) => {
                warn!("could not save {}: {e}", path.display());
                format!("Save failed: {e}")
            }
        });
    }
}

impl eframe::App for ImageViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let image = &self.image;
        let texture = self.texture.get_or_insert_with(|| {
            let size = [image.width() as usize, image.height() as usize];
            let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            ctx.load_texture("image", pixels, egui::TextureOptions::NEAREST)
        });
        let texture_id = texture.id();
        let texture_size = texture.size_vec2();

        egui::TopBottomPanel::bottom("save_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.text_edit_singleline(&mut self.save_path);
                if ui.button("Save PNG").clicked() {
                    self.save();
                }
                if let Some(status) = &self.status {
                    ui.label(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.image((texture_id, texture_size));
            });
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Open a window titled `title` showing `image`; returns when it is closed.
pub fn view_image(title: &str, image: RgbaImage) -> Result<()> {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w.clamp(200.0, 1200.0), (h + 40.0).clamp(200.0, 900.0)])
            .with_title(title),
        ..Default::default()
    };

    let app = ImageViewer::new(title, image);
    eframe::run_native(title, native_options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}
