use crate::sampler::{Sampler, SourceImage};
use crate::settings::GlitchSettings;

use super::noise;

/// Horizontal displacement for the band containing `v` at `time`.
///
/// The v-coordinate is quantized to `shake_block_size` bands so every pixel
/// in a band shares one offset, producing coherent glitch bars instead of
/// per-pixel noise. Time advances the seed continuously, the band keeps it
/// stable within a frame. A zero block size divides by zero here and the
/// resulting NaN/Inf flows through unguarded; keeping the parameters sane is
/// the configuration layer's job.
pub fn band_offset(settings: &GlitchSettings, time: f32, v: f32) -> f32 {
    let band = (v * settings.shake_block_size).floor() / settings.shake_block_size;
    let r = noise::random(band + time);
    (r - 0.5) * settings.shake_power * settings.intensity
}

/// Produce one output pixel of the shake/aberration filter.
///
/// Pure function of its inputs: displaces the sampling coordinate
/// horizontally by the band offset, then splits red and blue to
/// mirror-opposite horizontal offsets and blends them back over the base
/// sample by `intensity`. Green and alpha always come from the un-shifted
/// base sample. Colors are combined as-is, never clamped.
pub fn shade(
    settings: &GlitchSettings,
    time: f32,
    image: &SourceImage,
    sampler: &Sampler,
    uv: [f32; 2],
) -> [f32; 4] {
    let offset_x = band_offset(settings, time, uv[1]);
    let fixed_uv = [uv[0] + offset_x, uv[1]];

    let base = sampler.sample(image, fixed_uv);
    let red = sampler.sample(image, [fixed_uv[0] + settings.shake_color_rate, fixed_uv[1]])[0];
    let blue = sampler.sample(image, [fixed_uv[0] - settings.shake_color_rate, fixed_uv[1]])[2];

    [
        lerp(base[0], red, settings.intensity),
        base[1],
        lerp(base[2], blue, settings.intensity),
        base[3],
    ]
}

// Exact at both endpoints: t = 0 returns a, t = 1 returns b.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
