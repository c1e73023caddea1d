//! Pulse animation
//!
//! Fills the whole target with one color whose intensity ramps linearly
//! between a minimum and a maximum. One rise plus one fall takes `period`
//! seconds; an optional `breath` holds the peak before falling again.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{StepTimer, Tickable, duration_from_secs};
use crate::color::{Rgb, WHITE, scale};
use crate::error::{Error, Parameter};
use crate::target::PixelTarget;

/// Configuration for a pulse
#[derive(Debug, Clone)]
pub struct PulseConfig {
    /// Seconds between intensity steps
    pub speed: f32,
    /// Color at full intensity
    pub color: Rgb,
    /// Seconds for one rise and fall
    pub period: f32,
    /// Seconds to hold the peak, zero to turn straight back
    pub breath: f32,
    /// Lowest intensity (0.0-1.0)
    pub min_intensity: f32,
    /// Highest intensity (0.0-1.0)
    pub max_intensity: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            speed: 0.01,
            color: WHITE,
            period: 5.0,
            breath: 0.0,
            min_intensity: 0.0,
            max_intensity: 1.0,
        }
    }
}

/// Pulse animation state
///
/// The ramp is tracked as an integer step index, so the intensity lands
/// exactly on both bounds regardless of float rounding.
#[derive(Debug, Clone)]
pub struct Pulse<'a> {
    target: PixelTarget<'a>,
    timer: StepTimer,
    color: Rgb,
    breath: Option<Duration>,
    min_intensity: f32,
    max_intensity: f32,
    /// Steps from minimum to maximum
    steps: u32,

    phase: u32,
    rising: bool,
    hold_until: Option<Instant>,
    intensity: f32,
    cycles: u32,
    frozen: bool,
}

impl<'a> Pulse<'a> {
    /// Create a new pulse drawing into `target`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(target: PixelTarget<'a>, config: &PulseConfig) -> Result<Self, Error> {
        let interval = duration_from_secs(config.speed, Parameter::Speed, false)?;
        duration_from_secs(config.period, Parameter::Period, false)?;
        let breath = duration_from_secs(config.breath, Parameter::Breath, true)?;

        let (min_intensity, max_intensity) = (config.min_intensity, config.max_intensity);
        if min_intensity.is_nan() || max_intensity.is_nan() || min_intensity > max_intensity {
            return Err(Error::InvalidParameter(Parameter::IntensityRange));
        }

        let half_period = config.period / 2.0;
        let steps = libm::roundf(half_period / config.speed).clamp(1.0, u32::MAX as f32) as u32;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Pulse.new] {} px, {} steps of {} us, intensity {}..{}",
            target.len(),
            steps,
            interval.as_micros(),
            min_intensity,
            max_intensity
        );

        let mut pulse = Self {
            target,
            timer: StepTimer::new(interval),
            color: config.color,
            breath: (breath.as_ticks() > 0).then_some(breath),
            min_intensity: min_intensity.clamp(0.0, 1.0),
            max_intensity: max_intensity.clamp(0.0, 1.0),
            steps,
            phase: 0,
            rising: true,
            hold_until: None,
            intensity: 0.0,
            cycles: 0,
            frozen: false,
        };
        pulse.reset();
        Ok(pulse)
    }

    /// Current intensity (within `[min_intensity, max_intensity]`)
    pub const fn intensity(&self) -> f32 {
        self.intensity
    }

    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    /// Returns `true` while the peak is being held
    pub const fn is_holding(&self) -> bool {
        self.hold_until.is_some()
    }

    /// Number of steps between the minimum and the maximum
    pub const fn steps_per_ramp(&self) -> u32 {
        self.steps
    }

    /// Time between intensity steps
    pub const fn speed(&self) -> Duration {
        self.timer.interval()
    }

    pub const fn min_intensity(&self) -> f32 {
        self.min_intensity
    }

    pub const fn max_intensity(&self) -> f32 {
        self.max_intensity
    }

    pub const fn target(&self) -> &PixelTarget<'a> {
        &self.target
    }

    #[allow(clippy::cast_precision_loss)]
    fn intensity_at(&self, phase: u32) -> f32 {
        if phase == 0 {
            self.min_intensity
        } else if phase >= self.steps {
            self.max_intensity
        } else {
            let progress = phase as f32 / self.steps as f32;
            (self.min_intensity + (self.max_intensity - self.min_intensity) * progress)
                .clamp(self.min_intensity, self.max_intensity)
        }
    }

    fn step(&mut self, now: Instant) {
        if let Some(until) = self.hold_until {
            if now < until {
                return;
            }
            self.hold_until = None;
        }

        if self.rising {
            self.phase += 1;
            if self.phase >= self.steps {
                self.phase = self.steps;
                self.rising = false;
                if let Some(breath) = self.breath {
                    self.hold_until = Some(now.checked_add(breath).unwrap_or(Instant::MAX));
                    #[cfg(feature = "esp32-log")]
                    println!("[Pulse.step] holding peak for {} us", breath.as_micros());
                }
            }
        } else {
            self.phase = self.phase.saturating_sub(1);
            if self.phase == 0 {
                self.rising = true;
                self.cycles = self.cycles.wrapping_add(1);
            }
        }

        self.intensity = self.intensity_at(self.phase);
    }

    fn render(&self) {
        self.target.fill(scale(self.color, self.intensity));
    }
}

impl Tickable for Pulse<'_> {
    fn tick(&mut self, now: Instant) {
        if self.frozen {
            return;
        }
        if self.timer.is_due(now) {
            self.step(now);
        }
        self.render();
    }

    fn reset(&mut self) {
        self.phase = 0;
        self.rising = true;
        self.hold_until = None;
        self.intensity = self.min_intensity;
        self.cycles = 0;
        self.timer.restart();
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn resume(&mut self) {
        self.frozen = false;
        self.timer.restart();
    }

    fn fill(&mut self, color: Rgb) {
        self.target.fill(color);
    }

    fn cycle_count(&self) -> u32 {
        self.cycles
    }
}
