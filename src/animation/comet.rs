//! Comet animation
//!
//! A bright head moving along the target one pixel per step, followed by a
//! tail that fades linearly to black. At the ends of the target the head
//! either wraps around or, with `bounce`, turns back.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{StepTimer, Tickable, duration_from_secs};
use crate::color::{BLACK, Rgb, WHITE, scale};
use crate::error::{Error, Parameter};
use crate::target::PixelTarget;

/// Direction of the comet head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices
    Forward,
    /// Towards lower indices
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Configuration for a comet
#[derive(Debug, Clone)]
pub struct CometConfig {
    /// Seconds between head steps
    pub speed: f32,
    /// Head color
    pub color: Rgb,
    /// Color of every pixel not covered by the comet
    pub background_color: Rgb,
    /// Number of tail pixels behind the head
    pub tail_length: usize,
    /// Turn back at the ends instead of wrapping
    pub bounce: bool,
    /// Start at the last pixel moving backwards
    pub reverse: bool,
    /// Let the tail wrap around the ends instead of clipping it
    pub ring: bool,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            color: WHITE,
            background_color: BLACK,
            tail_length: 4,
            bounce: false,
            reverse: false,
            ring: false,
        }
    }
}

/// Comet animation state
#[derive(Debug, Clone)]
pub struct Comet<'a> {
    target: PixelTarget<'a>,
    timer: StepTimer,
    color: Rgb,
    background_color: Rgb,
    tail_length: usize,
    bounce: bool,
    reverse: bool,
    ring: bool,

    position: usize,
    direction: Direction,
    cycles: u32,
    frozen: bool,
}

impl<'a> Comet<'a> {
    /// Create a new comet drawing into `target`
    pub fn new(target: PixelTarget<'a>, config: &CometConfig) -> Result<Self, Error> {
        let interval = duration_from_secs(config.speed, Parameter::Speed, false)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Comet.new] {} px, step {} us, tail {}, bounce {}",
            target.len(),
            interval.as_micros(),
            config.tail_length,
            config.bounce
        );

        let mut comet = Self {
            target,
            timer: StepTimer::new(interval),
            color: config.color,
            background_color: config.background_color,
            tail_length: config.tail_length,
            bounce: config.bounce,
            reverse: config.reverse,
            ring: config.ring,
            position: 0,
            direction: Direction::Forward,
            cycles: 0,
            frozen: false,
        };
        comet.reset();
        Ok(comet)
    }

    /// Index of the head within the target
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Time between head steps
    pub const fn speed(&self) -> Duration {
        self.timer.interval()
    }

    pub const fn tail_length(&self) -> usize {
        self.tail_length
    }

    pub const fn target(&self) -> &PixelTarget<'a> {
        &self.target
    }

    const fn initial_direction(&self) -> Direction {
        if self.reverse {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Move the head by one pixel
    fn step(&mut self) {
        let len = self.target.len();
        if len == 0 {
            return;
        }
        let last = len - 1;

        match self.direction {
            Direction::Forward if self.position < last => self.position += 1,
            Direction::Backward if self.position > 0 => self.position -= 1,
            _ if self.bounce => {
                self.direction = self.direction.reversed();
                if self.direction == self.initial_direction() {
                    self.cycles = self.cycles.wrapping_add(1);
                }
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Comet.step] bounce at {}, now {:?}",
                    self.position, self.direction
                );
            }
            Direction::Forward => {
                self.position = 0;
                self.cycles = self.cycles.wrapping_add(1);
            }
            Direction::Backward => {
                self.position = last;
                self.cycles = self.cycles.wrapping_add(1);
            }
        }
    }

    /// Index of the tail pixel `offset` pixels behind the head
    fn tail_index(&self, offset: usize) -> Option<usize> {
        let len = self.target.len();
        let index = match self.direction {
            Direction::Forward => self.position.checked_sub(offset),
            Direction::Backward => Some(self.position + offset).filter(|&i| i < len),
        };
        if index.is_some() || !self.ring {
            return index;
        }
        Some(match self.direction {
            Direction::Forward => (self.position + len - offset % len) % len,
            Direction::Backward => (self.position + offset) % len,
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self) {
        self.target.fill(self.background_color);
        if self.target.is_empty() {
            return;
        }

        // Tail end first so the head always wins when a ring tail overlaps it
        for offset in (0..=self.tail_length).rev() {
            let Some(index) = self.tail_index(offset) else {
                continue;
            };
            let intensity = if self.tail_length == 0 {
                1.0
            } else {
                1.0 - offset as f32 / self.tail_length as f32
            };
            self.target.set(index, scale(self.color, intensity));
        }
    }
}

impl Tickable for Comet<'_> {
    fn tick(&mut self, now: Instant) {
        if self.frozen {
            return;
        }
        if self.timer.is_due(now) {
            self.step();
        }
        self.render();
    }

    fn reset(&mut self) {
        self.direction = self.initial_direction();
        self.position = match self.direction {
            Direction::Forward => 0,
            Direction::Backward => self.target.len().saturating_sub(1),
        };
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
