//! Timed animations
//!
//! Every animation is a small state machine advanced by [`Tickable::tick`].
//! A tick first checks whether the animation's step interval has elapsed and
//! advances the state if it has, then renders the current state into the
//! animation's [`PixelTarget`]. Rendering happens on *every* tick, not only
//! on steps, so the target is re-asserted even if something else wrote to it
//! in between.
//!
//! Variants are stored in the [`Animation`] enum to avoid heap allocations.

mod comet;
mod group;
mod pulse;

use embassy_time::{Duration, Instant};

pub use comet::{Comet, CometConfig, Direction};
pub use group::AnimationGroup;
pub use pulse::{Pulse, PulseConfig};

use crate::color::Rgb;
use crate::error::{Error, Parameter};
use crate::target::PixelTarget;

/// Anything the driver loop can advance
pub trait Tickable {
    /// Advance to `now` and render
    fn tick(&mut self, now: Instant);

    /// Return to the initial state
    fn reset(&mut self);

    /// Stop reacting to ticks until [`Tickable::resume`] is called
    fn freeze(&mut self);

    /// Continue after [`Tickable::freeze`]
    ///
    /// Step timing restarts at the next tick, so the time spent frozen
    /// does not produce a jump.
    fn resume(&mut self);

    /// Fill the pixels this animation draws into
    fn fill(&mut self, color: Rgb);

    /// Number of completed animation cycles
    fn cycle_count(&self) -> u32;
}

/// Animation slot - enum containing all animation variants
#[derive(Debug, Clone)]
pub enum Animation<'a> {
    /// Moving head with a fading tail
    Comet(Comet<'a>),
    /// Uniform breathing brightness
    Pulse(Pulse<'a>),
}

impl<'a> Animation<'a> {
    /// The view this animation draws into
    pub fn target(&self) -> &PixelTarget<'a> {
        match self {
            Self::Comet(comet) => comet.target(),
            Self::Pulse(pulse) => pulse.target(),
        }
    }
}

impl<'a> From<Comet<'a>> for Animation<'a> {
    fn from(comet: Comet<'a>) -> Self {
        Self::Comet(comet)
    }
}

impl<'a> From<Pulse<'a>> for Animation<'a> {
    fn from(pulse: Pulse<'a>) -> Self {
        Self::Pulse(pulse)
    }
}

impl Tickable for Animation<'_> {
    fn tick(&mut self, now: Instant) {
        match self {
            Self::Comet(comet) => comet.tick(now),
            Self::Pulse(pulse) => pulse.tick(now),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Comet(comet) => comet.reset(),
            Self::Pulse(pulse) => pulse.reset(),
        }
    }

    fn freeze(&mut self) {
        match self {
            Self::Comet(comet) => comet.freeze(),
            Self::Pulse(pulse) => pulse.freeze(),
        }
    }

    fn resume(&mut self) {
        match self {
            Self::Comet(comet) => comet.resume(),
            Self::Pulse(pulse) => pulse.resume(),
        }
    }

    fn fill(&mut self, color: Rgb) {
        match self {
            Self::Comet(comet) => comet.fill(color),
            Self::Pulse(pulse) => pulse.fill(color),
        }
    }

    fn cycle_count(&self) -> u32 {
        match self {
            Self::Comet(comet) => comet.cycle_count(),
            Self::Pulse(pulse) => pulse.cycle_count(),
        }
    }
}

/// Gate that opens once per step interval
#[derive(Debug, Clone)]
pub(crate) struct StepTimer {
    interval: Duration,
    last_step: Option<Instant>,
}

impl StepTimer {
    pub(crate) const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
        }
    }

    /// Returns `true` if a step is due at `now`
    ///
    /// The first call after creation or [`StepTimer::restart`] only records
    /// the reference time.
    pub(crate) fn is_due(&mut self, now: Instant) -> bool {
        let Some(last_step) = self.last_step else {
            self.last_step = Some(now);
            return false;
        };
        let due = now
            .checked_duration_since(last_step)
            .is_some_and(|elapsed| elapsed >= self.interval);
        if due {
            self.last_step = Some(now);
        }
        due
    }

    pub(crate) fn restart(&mut self) {
        self.last_step = None;
    }

    pub(crate) const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Longest time, in seconds, accepted for any animation timing
pub const MAX_SECONDS: f32 = 1_000_000.0;

/// Convert a time in seconds into a tick duration
///
/// Fails with `parameter` unless `seconds` is positive (or zero when
/// `allow_zero` is set) and no more than [`MAX_SECONDS`]. NaN is rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn duration_from_secs(
    seconds: f32,
    parameter: Parameter,
    allow_zero: bool,
) -> Result<Duration, Error> {
    let above_zero = if allow_zero {
        seconds >= 0.0
    } else {
        seconds > 0.0
    };
    let in_range = above_zero && seconds <= MAX_SECONDS;
    if !in_range {
        return Err(Error::InvalidParameter(parameter));
    }
    let micros = libm::roundf(seconds * 1_000_000.0) as u64;
    if micros == 0 && !allow_zero {
        return Err(Error::InvalidParameter(parameter));
    }
    Ok(Duration::from_micros(micros))
}
