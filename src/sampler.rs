use image::RgbaImage;

/// Source image for the filter: an RGBA float grid addressed by
/// normalized coordinates through a [`Sampler`].
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<[f32; 4]>,
}

impl SourceImage {
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let pixels = img
            .pixels()
            .map(|p| p.0.map(|c| f32::from(c) / 255.0))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    #[allow(dead_code)]
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<[f32; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel(&self, x: usize, y: usize) -> [f32; 4] {
        self.pixels[y * self.width + x]
    }
}

/// How coordinates outside [0, 1) resolve to texels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddressMode {
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

impl AddressMode {
    pub const ALL: &[AddressMode] = &[
        AddressMode::ClampToEdge,
        AddressMode::Repeat,
        AddressMode::MirrorRepeat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AddressMode::ClampToEdge => "Clamp to Edge",
            AddressMode::Repeat => "Repeat",
            AddressMode::MirrorRepeat => "Mirror Repeat",
        }
    }

    fn resolve(self, index: i64, len: usize) -> usize {
        let len = len as i64;
        let resolved = match self {
            AddressMode::ClampToEdge => index.clamp(0, len - 1),
            AddressMode::Repeat => index.rem_euclid(len),
            AddressMode::MirrorRepeat => {
                let m = index.rem_euclid(2 * len);
                if m < len { m } else { 2 * len - 1 - m }
            }
        };
        resolved as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

impl FilterMode {
    pub const ALL: &[FilterMode] = &[FilterMode::Nearest, FilterMode::Linear];

    pub fn name(self) -> &'static str {
        match self {
            FilterMode::Nearest => "Nearest",
            FilterMode::Linear => "Linear",
        }
    }
}

/// Sampling policy for a [`SourceImage`]: addressing of out-of-range
/// coordinates plus texel filtering. Reads are `&self` over immutable
/// data, so one sampler can serve every pixel of a frame concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    pub address: AddressMode,
    pub filter: FilterMode,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            address: AddressMode::ClampToEdge,
            filter: FilterMode::Linear,
        }
    }
}

impl Sampler {
    /// Sample at a normalized coordinate. Texel centers sit at
    /// `(i + 0.5) / len`; non-finite coordinates saturate into range
    /// rather than panicking.
    pub fn sample(&self, image: &SourceImage, uv: [f32; 2]) -> [f32; 4] {
        match self.filter {
            FilterMode::Nearest => {
                let x = self
                    .address
                    .resolve((uv[0] * image.width as f32).floor() as i64, image.width);
                let y = self
                    .address
                    .resolve((uv[1] * image.height as f32).floor() as i64, image.height);
                image.texel(x, y)
            }
            FilterMode::Linear => {
                let px = uv[0] * image.width as f32 - 0.5;
                let py = uv[1] * image.height as f32 - 0.5;
                let fx = px - px.floor();
                let fy = py - py.floor();
                let x0 = px.floor() as i64;
                let y0 = py.floor() as i64;

                let x = [
                    self.address.resolve(x0, image.width),
                    self.address.resolve(x0 + 1, image.width),
                ];
                let y = [
                    self.address.resolve(y0, image.height),
                    self.address.resolve(y0 + 1, image.height),
                ];

                let mut out = [0.0f32; 4];
                for (c, channel) in out.iter_mut().enumerate() {
                    let top = image.texel(x[0], y[0])[c] * (1.0 - fx) + image.texel(x[1], y[0])[c] * fx;
                    let bottom =
                        image.texel(x[0], y[1])[c] * (1.0 - fx) + image.texel(x[1], y[1])[c] * fx;
                    *channel = top * (1.0 - fy) + bottom * fy;
                }
                out
            }
        }
    }
}
