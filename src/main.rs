mod app;
mod effect;
mod image_io;
mod pipeline;
mod sampler;
mod settings;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Screen Glitch"),
        ..Default::default()
    };

    eframe::run_native(
        "Screen Glitch",
        options,
        Box::new(|cc| Ok(Box::new(app::GlitchApp::new(cc)))),
    )
}
