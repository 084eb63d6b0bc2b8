use image::{DynamicImage, GenericImageView, RgbaImage};
use std::path::Path;

pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to load image: {e}"))
}

/// Downscale to fit within `max_dim` on the long edge, preserving aspect
/// ratio, so the animated preview stays interactive on large inputs.
/// Images already within the limit pass through unscaled.
pub fn resize_for_preview(img: &DynamicImage, max_dim: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w <= max_dim && h <= max_dim {
        return img.to_rgba8();
    }
    let scale = f64::min(max_dim as f64 / w as f64, max_dim as f64 / h as f64);
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    img.resize_exact(new_w, new_h, image::imageops::FilterType::Lanczos3)
        .to_rgba8()
}

pub fn save_image(img: &RgbaImage, path: &Path) -> Result<(), String> {
    img.save(path).map_err(|e| format!("Failed to save image: {e}"))
}
