//! Named colors

use super::{Rgb, rgb_from_u32};

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_9600);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_2800);
pub const TEAL: Rgb = rgb_from_u32(0x00_FF78);
pub const CYAN: Rgb = rgb_from_u32(0x00_FFFF);
pub const PURPLE: Rgb = rgb_from_u32(0xB4_00FF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF_0014);
pub const GOLD: Rgb = rgb_from_u32(0xFF_DE1E);
pub const PINK: Rgb = rgb_from_u32(0xF2_5AFF);
pub const AQUA: Rgb = rgb_from_u32(0x32_FFFF);
pub const JADE: Rgb = rgb_from_u32(0x00_FF28);
pub const AMBER: Rgb = rgb_from_u32(0xFF_6400);
pub const OLD_LACE: Rgb = rgb_from_u32(0xFD_F5E6);

/// Red washed out towards white, used for the comet head on a red strip
pub const DILUTED_RED: Rgb = rgb_from_u32(0xFF_4040);
