use rayon::prelude::*;

use crate::effect::transform;
use crate::sampler::{Sampler, SourceImage};
use crate::settings::GlitchSettings;

/// Run the shake/aberration filter over the full output grid.
/// Returns the frame as (width, height, rgba_bytes).
///
/// Every pixel is an independent invocation of the transform over the same
/// immutable inputs, so rows are mapped in parallel with no coordination.
/// Channels are clamped to [0, 1] only here, at the byte-encode step; the
/// transform hands over unclamped floats.
pub fn render(
    source: &SourceImage,
    sampler: &Sampler,
    settings: &GlitchSettings,
    time: f32,
) -> (usize, usize, Vec<u8>) {
    let width = source.width();
    let height = source.height();
    let mut bytes = vec![0u8; width * height * 4];

    bytes
        .par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f32 + 0.5) / height as f32;
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                let u = (x as f32 + 0.5) / width as f32;
                let color = transform::shade(settings, time, source, sampler, [u, v]);
                for (byte, channel) in out.iter_mut().zip(color) {
                    *byte = (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
                }
            }
        });

    (width, height, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{AddressMode, FilterMode};

    fn checker_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let on = (x + y) % 2 == 0;
                bytes.extend_from_slice(if on {
                    &[200, 40, 90, 255]
                } else {
                    &[10, 220, 160, 128]
                });
            }
        }
        bytes
    }

    #[test]
    fn zero_intensity_frame_reproduces_the_source() {
        let width = 8;
        let height = 8;
        let img = image::RgbaImage::from_raw(width, height, checker_bytes(width, height)).unwrap();
        let source = SourceImage::from_rgba(&img);
        let sampler = Sampler::default();
        let settings = GlitchSettings::from_intensity(0.0);

        let (w, h, bytes) = render(&source, &sampler, &settings, 42.0);
        assert_eq!((w, h), (width as usize, height as usize));
        assert_eq!(bytes, img.into_raw());
    }

    #[test]
    fn output_dimensions_follow_the_source() {
        let img = image::RgbaImage::new(7, 3);
        let source = SourceImage::from_rgba(&img);
        let (w, h, bytes) = render(
            &source,
            &Sampler::default(),
            &GlitchSettings::default(),
            0.0,
        );
        assert_eq!((w, h), (7, 3));
        assert_eq!(bytes.len(), 7 * 3 * 4);
    }

    #[test]
    fn overbright_channels_clamp_at_encode() {
        let source = SourceImage::from_pixels(1, 1, vec![[2.0, -0.5, 0.5, 1.0]]);
        let sampler = Sampler {
            address: AddressMode::ClampToEdge,
            filter: FilterMode::Nearest,
        };
        let settings = GlitchSettings::from_intensity(0.0);
        let (_, _, bytes) = render(&source, &sampler, &settings, 0.0);
        assert_eq!(bytes, vec![255, 0, 128, 255]);
    }

    #[test]
    fn rows_in_the_same_band_shift_together() {
        // Vertical stripes make every row identical, so two rows that share
        // a band must come out byte-for-byte equal after displacement.
        let width = 16u32;
        let height = 8u32;
        let mut img = image::RgbaImage::new(width, height);
        for (x, _y, p) in img.enumerate_pixels_mut() {
            let v = ((x * 16) % 256) as u8;
            *p = image::Rgba([v, v, v, 255]);
        }
        let source = SourceImage::from_rgba(&img);
        let sampler = Sampler {
            address: AddressMode::Repeat,
            filter: FilterMode::Nearest,
        };
        let settings = GlitchSettings {
            shake_block_size: 2.0,
            shake_power: 0.4,
            intensity: 1.0,
            ..GlitchSettings::default()
        };

        let (w, _, bytes) = render(&source, &sampler, &settings, 1.25);
        let row = |y: usize| &bytes[y * w * 4..(y + 1) * w * 4];
        // Rows 0..4 fall in the first of two bands, rows 4..8 in the second.
        assert_eq!(row(0), row(3));
        assert_eq!(row(4), row(7));
    }
}
