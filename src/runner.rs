//! Driver loop
//!
//! Samples the clock, ticks the root animation and flushes the outputs,
//! forever. There is no frame-rate cap: each animation gates its own steps
//! by its speed, so the loop simply re-enters as soon as a frame is out.

use embassy_time::Instant;

use crate::animation::Tickable;
use crate::output::Show;

/// Cooperative animation loop
///
/// # Usage
///
/// ```ignore
/// let buffers = DomeBuffers::new();
/// let animations = buffers.animations()?;
/// let outputs = (Strip::new(&buffers.eye_right, right_driver), /* ... */);
///
/// Runner::new(animations, outputs).run()
/// ```
pub struct Runner<A: Tickable, S: Show> {
    animation: A,
    outputs: S,
}

impl<A: Tickable, S: Show> Runner<A, S> {
    pub const fn new(animation: A, outputs: S) -> Self {
        Self { animation, outputs }
    }

    /// Process one loop iteration
    ///
    /// Ticks the animation at `now`, then pushes every output.
    pub fn step(&mut self, now: Instant) {
        self.animation.tick(now);
        self.outputs.show();
    }

    /// Run the loop for the lifetime of the program
    pub fn run(&mut self) -> ! {
        loop {
            self.step(Instant::now());
        }
    }

    pub const fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn outputs_mut(&mut self) -> &mut S {
        &mut self.outputs
    }
}
