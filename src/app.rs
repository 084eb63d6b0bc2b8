use eframe::egui;
use image::DynamicImage;
use std::path::PathBuf;
use web_time::Instant;

use crate::image_io;
use crate::pipeline;
use crate::sampler::{AddressMode, FilterMode, Sampler, SourceImage};
use crate::settings::{EffectPreset, GlitchSettings};

/// Long-edge cap for the interactive preview; saving always re-renders at
/// full resolution.
const PREVIEW_MAX_DIM: u32 = 512;

pub struct GlitchApp {
    source_image: Option<DynamicImage>,
    source_path: Option<PathBuf>,
    preview_source: Option<SourceImage>,
    preview_texture: Option<egui::TextureHandle>,
    preview_width: usize,
    preview_height: usize,
    settings: GlitchSettings,
    preset: EffectPreset,
    sampler: Sampler,
    animate: bool,
    started: Instant,
    scrub_time: f32,
    needs_render: bool,
    render_time_ms: f64,
}

impl GlitchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let preset = EffectPreset::Broadcast;
        Self {
            source_image: None,
            source_path: None,
            preview_source: None,
            preview_texture: None,
            preview_width: 0,
            preview_height: 0,
            settings: preset.settings(),
            preset,
            sampler: Sampler::default(),
            animate: true,
            started: Instant::now(),
            scrub_time: 0.0,
            needs_render: false,
            render_time_ms: 0.0,
        }
    }

    fn frame_time(&self) -> f32 {
        if self.animate {
            self.started.elapsed().as_secs_f32()
        } else {
            self.scrub_time
        }
    }

    fn open_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "tiff", "tif", "bmp", "webp"])
            .pick_file()
        {
            match image_io::load_image(&path) {
                Ok(img) => {
                    let preview = image_io::resize_for_preview(&img, PREVIEW_MAX_DIM);
                    log::info!(
                        "loaded {} ({}x{}, preview {}x{})",
                        path.display(),
                        img.width(),
                        img.height(),
                        preview.width(),
                        preview.height()
                    );
                    self.preview_source = Some(SourceImage::from_rgba(&preview));
                    self.source_image = Some(img);
                    self.source_path = Some(path);
                    self.needs_render = true;
                }
                Err(e) => {
                    log::error!("{e}");
                }
            }
        }
    }

    fn save_frame(&self) {
        let Some(source) = &self.source_image else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .save_file()
        {
            let full = SourceImage::from_rgba(&source.to_rgba8());
            let (w, h, bytes) = pipeline::render(
                &full,
                &self.sampler,
                &self.settings.sanitized(),
                self.frame_time(),
            );
            let img = image::RgbaImage::from_raw(w as u32, h as u32, bytes)
                .expect("frame buffer matches its dimensions");
            if let Err(e) = image_io::save_image(&img, &path) {
                log::error!("{e}");
            }
        }
    }

    fn render_preview(&mut self, ctx: &egui::Context) {
        if let Some(preview) = &self.preview_source {
            let start = std::time::Instant::now();
            let (w, h, bytes) = pipeline::render(
                preview,
                &self.sampler,
                &self.settings.sanitized(),
                self.frame_time(),
            );
            self.render_time_ms = start.elapsed().as_secs_f64() * 1000.0;
            self.preview_width = w;
            self.preview_height = h;

            let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], &bytes);
            self.preview_texture =
                Some(ctx.load_texture("preview", color_image, egui::TextureOptions::NEAREST));
        }
    }
}

impl eframe::App for GlitchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: file operations, preset selection, clock toggle
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    self.open_image();
                }
                if ui.button("Save Frame").clicked() {
                    self.save_frame();
                }
                ui.separator();

                ui.label("Preset:");
                egui::ComboBox::from_id_salt("effect_preset")
                    .selected_text(self.preset.name())
                    .show_ui(ui, |ui| {
                        for &preset in EffectPreset::ALL {
                            if ui
                                .selectable_value(&mut self.preset, preset, preset.name())
                                .clicked()
                                && preset != EffectPreset::Custom
                            {
                                self.settings = preset.settings();
                                self.needs_render = true;
                            }
                        }
                    });

                ui.separator();
                ui.checkbox(&mut self.animate, "Animate");

                ui.separator();
                if self.source_path.is_some() {
                    ui.label(format!(
                        "{}x{} | {:.0}ms",
                        self.preview_width, self.preview_height, self.render_time_ms
                    ));
                }
            });
        });

        // Left panel: controls
        egui::SidePanel::left("controls")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut changed = false;
                    changed |= ui_shake(ui, &mut self.settings);
                    changed |= ui_color_split(ui, &mut self.settings);
                    changed |= ui_blend(ui, &mut self.settings);
                    if changed {
                        self.preset = EffectPreset::Custom;
                    }

                    changed |= ui_sampling(ui, &mut self.sampler);
                    if !self.animate {
                        changed |= ui_clock(ui, &mut self.scrub_time);
                    }

                    if changed {
                        self.needs_render = true;
                    }
                });
            });

        // An animated preview re-renders every frame; a paused one only on change.
        if self.preview_source.is_some() && (self.animate || self.needs_render) {
            self.render_preview(ctx);
            self.needs_render = false;
            if self.animate {
                ctx.request_repaint();
            }
        }

        // Central panel: image preview
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.preview_texture {
                let available = ui.available_size();
                let img_w = self.preview_width as f32;
                let img_h = self.preview_height as f32;
                let scale = f32::min(available.x / img_w, available.y / img_h).min(2.0);
                let display_size = egui::vec2(img_w * scale, img_h * scale);
                ui.centered_and_justified(|ui| {
                    ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Open an image to begin");
                });
            }
        });
    }
}

// --- UI Section Builders ---

fn ui_shake(ui: &mut egui::Ui, settings: &mut GlitchSettings) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Shake")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut settings.shake_power, 0.0..=0.5).text("Power"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.shake_rate, 0.0..=1.0).text("Rate"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.shake_speed, 0.0..=40.0).text("Speed"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.shake_block_size, 1.0..=128.0)
                        .logarithmic(true)
                        .text("Block Size"),
                )
                .changed();
        });
    changed
}

fn ui_color_split(ui: &mut egui::Ui, settings: &mut GlitchSettings) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Color Split")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.shake_color_rate, -0.1..=0.1)
                        .text("Split Width"),
                )
                .changed();
        });
    changed
}

fn ui_blend(ui: &mut egui::Ui, settings: &mut GlitchSettings) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Blend")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut settings.intensity, 0.0..=1.0).text("Intensity"))
                .changed();
        });
    changed
}

fn ui_sampling(ui: &mut egui::Ui, sampler: &mut Sampler) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Sampling")
        .default_open(false)
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt("address_mode")
                .selected_text(sampler.address.name())
                .show_ui(ui, |ui| {
                    for &mode in AddressMode::ALL {
                        changed |= ui
                            .selectable_value(&mut sampler.address, mode, mode.name())
                            .clicked();
                    }
                });
            egui::ComboBox::from_id_salt("filter_mode")
                .selected_text(sampler.filter.name())
                .show_ui(ui, |ui| {
                    for &mode in FilterMode::ALL {
                        changed |= ui
                            .selectable_value(&mut sampler.filter, mode, mode.name())
                            .clicked();
                    }
                });
        });
    changed
}

fn ui_clock(ui: &mut egui::Ui, scrub_time: &mut f32) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Clock")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(egui::Slider::new(scrub_time, 0.0..=120.0).text("Time (s)"))
                .changed();
        });
    changed
}
