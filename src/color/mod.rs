//! Color representation and intensity scaling

mod palette;

use smart_leds::RGB8;

pub use palette::*;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale the brightness of a color
///
/// Each channel is multiplied by `intensity` and rounded to the nearest
/// integer. Intensity is clamped to `[0.0, 1.0]`, `NaN` is treated as zero.
pub fn scale(color: Rgb, intensity: f32) -> Rgb {
    let intensity = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };

    Rgb {
        r: scale_channel(color.r, intensity),
        g: scale_channel(color.g, intensity),
        b: scale_channel(color.b, intensity),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, intensity: f32) -> u8 {
    libm::roundf(f32::from(value) * intensity).clamp(0.0, 255.0) as u8
}
