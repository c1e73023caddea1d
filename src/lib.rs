#![no_std]

pub mod animation;
pub mod color;
pub mod dome;
pub mod error;
pub mod output;
pub mod runner;
pub mod target;

pub use animation::{
    Animation, AnimationGroup, Comet, CometConfig, Direction, MAX_SECONDS, Pulse, PulseConfig,
    Tickable,
};
pub use dome::{DomeAnimations, DomeBuffers};
pub use error::{Error, Parameter};
pub use output::{Show, SmartLedsOutput, Strip};
pub use runner::Runner;
pub use target::{PixelBuffer, PixelStorage, PixelTarget};

pub use color::{Rgb, scale};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Pixel buffers are flushed through it once per loop iteration.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
