/// Parameters for the shake/aberration filter, rebuilt each frame by the
/// configuration surface and read-only inside the filter.
///
/// `shake_rate` and `shake_speed` are carried for compatibility with the
/// original parameter block; no formula consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchSettings {
    pub shake_power: f32,
    pub shake_rate: f32,
    pub shake_speed: f32,
    pub shake_block_size: f32,
    pub shake_color_rate: f32,
    pub intensity: f32,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self {
            shake_power: 0.03,
            shake_rate: 0.5,
            shake_speed: 5.0,
            shake_block_size: 30.5,
            shake_color_rate: 0.01,
            intensity: 0.5,
        }
    }
}

/// Smallest block size the configuration surface lets through.
pub const MIN_BLOCK_SIZE: f32 = 1.0;

impl GlitchSettings {
    pub fn from_intensity(intensity: f32) -> Self {
        Self {
            intensity,
            ..Default::default()
        }
    }

    /// Clamp fields into usable ranges before handing them to the filter.
    /// A zero block size would divide by zero in the band quantization and
    /// poison the whole frame with NaN; the transform itself never guards,
    /// so the configuration layer does it here.
    pub fn sanitized(self) -> Self {
        Self {
            shake_block_size: if self.shake_block_size >= MIN_BLOCK_SIZE {
                self.shake_block_size
            } else {
                MIN_BLOCK_SIZE
            },
            intensity: self.intensity.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Named parameter sets for the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectPreset {
    Off,
    Subtle,
    VhsWobble,
    Broadcast,
    Meltdown,
    Custom,
}

impl EffectPreset {
    pub const ALL: &[EffectPreset] = &[
        EffectPreset::Off,
        EffectPreset::Subtle,
        EffectPreset::VhsWobble,
        EffectPreset::Broadcast,
        EffectPreset::Meltdown,
        EffectPreset::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectPreset::Off => "Off",
            EffectPreset::Subtle => "Subtle",
            EffectPreset::VhsWobble => "VHS Wobble",
            EffectPreset::Broadcast => "Broadcast",
            EffectPreset::Meltdown => "Meltdown",
            EffectPreset::Custom => "Custom",
        }
    }

    pub fn settings(self) -> GlitchSettings {
        match self {
            EffectPreset::Off => GlitchSettings::from_intensity(0.0),
            EffectPreset::Subtle => GlitchSettings {
                shake_power: 0.01,
                shake_rate: 0.2,
                shake_speed: 5.0,
                shake_block_size: 64.0,
                shake_color_rate: 0.004,
                intensity: 0.3,
            },
            EffectPreset::VhsWobble => GlitchSettings {
                shake_power: 0.02,
                shake_rate: 0.4,
                shake_speed: 8.0,
                shake_block_size: 12.0,
                shake_color_rate: 0.008,
                intensity: 0.6,
            },
            EffectPreset::Broadcast => GlitchSettings::default(),
            EffectPreset::Meltdown => GlitchSettings {
                shake_power: 0.12,
                shake_rate: 0.9,
                shake_speed: 20.0,
                shake_block_size: 6.0,
                shake_color_rate: 0.03,
                intensity: 1.0,
            },
            EffectPreset::Custom => GlitchSettings::default(),
        }
    }
}
