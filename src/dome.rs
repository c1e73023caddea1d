//! Dome lighting: two breathing eyes and a bouncing comet on the ladder strip
//!
//! Buffers are created once (typically in a `static`), then
//! [`DomeBuffers::animations`] builds the group that drives them.

use crate::animation::{Animation, AnimationGroup, Comet, CometConfig, Pulse, PulseConfig};
use crate::color::{BLUE, DILUTED_RED, RED, scale};
use crate::error::Error;
use crate::target::PixelBuffer;

/// Pixels in each eye ring
pub const EYE_LEDS: usize = 7;
/// Pixels on the physical ladder strip
pub const LADDER_LEDS: usize = 16;
/// First ladder pixel driven by the comet, the ones before it are hidden
pub const LADDER_START: usize = 2;
/// Pixels in the periscope
pub const PERISCOPE_LEDS: usize = 1;

/// Number of animations in the dome group
pub const DOME_ANIMATIONS: usize = 3;

pub type DomeAnimations<'a> = AnimationGroup<Animation<'a>, DOME_ANIMATIONS>;

/// Physical pixel buffers of the dome
pub struct DomeBuffers {
    pub eye_right: PixelBuffer<EYE_LEDS>,
    pub eye_left: PixelBuffer<EYE_LEDS>,
    pub ladder: PixelBuffer<LADDER_LEDS>,
    /// Not animated, kept dark
    pub periscope: PixelBuffer<PERISCOPE_LEDS>,
}

impl DomeBuffers {
    pub const fn new() -> Self {
        Self {
            eye_right: PixelBuffer::new(),
            eye_left: PixelBuffer::new(),
            ladder: PixelBuffer::new(),
            periscope: PixelBuffer::new(),
        }
    }

    /// Build the dome animation group over these buffers
    pub fn animations(&self) -> Result<DomeAnimations<'_>, Error> {
        let ladder = self
            .ladder
            .target()
            .subset(LADDER_START, LADDER_LEDS - LADDER_START)?;

        let comet = Comet::new(ladder, &ladder_comet_config())?;
        let right = Pulse::new(self.eye_right.target(), &eye_pulse_config())?;
        let left = Pulse::new(self.eye_left.target(), &eye_pulse_config())?;

        Ok(AnimationGroup::from_members([
            comet.into(),
            right.into(),
            left.into(),
        ]))
    }
}

impl Default for DomeBuffers {
    fn default() -> Self {
        Self::new()
    }
}

/// Dim red strip with a slightly brighter, paler head sweeping back and forth
pub fn ladder_comet_config() -> CometConfig {
    CometConfig {
        speed: 1.0 / 16.0,
        color: scale(DILUTED_RED, 0.1),
        background_color: scale(RED, 0.1),
        tail_length: 4,
        bounce: true,
        ..CometConfig::default()
    }
}

/// Slow blue breathing, five seconds per breath
pub fn eye_pulse_config() -> PulseConfig {
    PulseConfig {
        speed: 0.01,
        color: BLUE,
        period: 5.0,
        breath: 0.0,
        min_intensity: 0.01,
        max_intensity: 0.3,
    }
}
