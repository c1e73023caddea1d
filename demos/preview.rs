//! Terminal preview of the dome lighting
//!
//! Draws every strip as a row of true-color blocks. Run with
//! `cargo run --example preview`.

use std::fmt::Write as _;
use std::io::Write as _;
use std::thread;
use std::time::Duration as StdDuration;

use myrtio_light_animation::{DomeBuffers, Error, Instant, OutputDriver, Rgb, Runner, Strip};

/// Terminal colors are far less bright than LEDs, lift dim pixels
const PREVIEW_GAIN: u16 = 3;

/// Pause between loop iterations so the preview does not spin a core
const PREVIEW_FRAME_PAUSE: StdDuration = StdDuration::from_millis(5);

static BUFFERS: DomeBuffers = DomeBuffers::new();

/// Output driver rendering one strip on a fixed terminal row
struct TerminalRow {
    row: u16,
    label: &'static str,
}

impl TerminalRow {
    const fn new(row: u16, label: &'static str) -> Self {
        Self { row, label }
    }
}

fn boost(channel: u8) -> u8 {
    u8::try_from((u16::from(channel) * PREVIEW_GAIN).min(255)).unwrap_or(u8::MAX)
}

impl OutputDriver for TerminalRow {
    fn write(&mut self, colors: &[Rgb]) {
        let mut line = format!("\x1b[{};1H{:>10} ", self.row, self.label);
        for color in colors {
            let _ = write!(
                line,
                "\x1b[38;2;{};{};{}m\u{2588}\u{2588}",
                boost(color.r),
                boost(color.g),
                boost(color.b)
            );
        }
        line.push_str("\x1b[0m");

        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
        let _ = stdout.flush();
    }
}

fn main() -> Result<(), Error> {
    let animations = BUFFERS.animations()?;
    let outputs = (
        Strip::new(&BUFFERS.eye_right, TerminalRow::new(2, "eye right")),
        Strip::new(&BUFFERS.eye_left, TerminalRow::new(3, "eye left")),
        Strip::new(&BUFFERS.ladder, TerminalRow::new(4, "ladder")),
        Strip::new(&BUFFERS.periscope, TerminalRow::new(5, "periscope")),
    );

    let _ = std::io::stdout().lock().write_all(b"\x1b[2J");

    let mut runner = Runner::new(animations, outputs);
    loop {
        runner.step(Instant::now());
        thread::sleep(PREVIEW_FRAME_PAUSE);
    }
}
