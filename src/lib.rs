//! Decorative terminal text animations.
//!
//! `voidfx` ships two animations:
//!
//! *   a **wave** that sweeps a sinusoidal highlight back and forth over a line of
//!     text, narrowing towards the center ([`animations::wave`]), and
//! *   a **void** that spirals the text into a black hole, explodes and fades out
//!     ([`animations::void`]).
//!
//! Both run synchronously on the calling thread at a fixed frame rate, and both hide
//! the cursor while they run and show it again on every way out.
//!
//! # Example
//! ```rust ,no_run
//! use voidfx::{run_void_animation, run_wave_animation, AnimationStatus};
//!
//! let text = "to stare off into the distance";
//! if run_wave_animation(text, 0.025, 2.0).unwrap() == AnimationStatus::Completed {
//!     run_void_animation(text, 6.0).unwrap();
//! }
//! ```
//!
//! For anything other than stdout, build a [`Stage`](stage::Stage) and call
//! [`WaveRenderer::run`](animations::wave::WaveRenderer::run) or
//! [`VoidRenderer::run`](animations::void::VoidRenderer::run) directly.

use crossterm::execute;
use std::fmt;
use std::io;
use std::io::stdout;

pub mod animations;
pub mod config;
pub mod cursor;
pub mod interrupt;
pub mod rendering;
pub mod stage;
pub mod util;

#[cfg(test)]
mod testing;

use crate::animations::void::VoidRenderer;
use crate::animations::wave::WaveRenderer;
use crate::config::{VoidConfig, WaveConfig};
use crate::stage::Stage;

/// Information about the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
}

impl Canvas {
    /// Used when the terminal cannot tell us its size.
    pub const FALLBACK: Canvas = Canvas::new(80, 24);

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// The center cell, rounded toward the top left.
    pub fn center(&self) -> (i64, i64) {
        ((self.width / 2) as i64, (self.height / 2) as i64)
    }

    /// Returns whether the signed cell `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && self.contains_cell(x as usize, y as usize)
    }

    /// Returns whether the cell `(x, y)` lies on the canvas.
    pub fn contains_cell(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The part of `text` that fits on a row when it starts at column `x`.
    ///
    /// Characters past the right edge are cut off; nothing wraps.
    pub fn clip_to_row<'t>(&self, x: usize, text: &'t str) -> &'t str {
        let room = self.width.saturating_sub(x);
        match text.char_indices().nth(room) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// How far the explosion may reach. Negative on tiny canvases.
    pub fn max_explosion_radius(&self) -> i64 {
        (self.width / 2).min(self.height) as i64 - 5
    }
}

/// Why an animation refused to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The wave needs at least [`MIN_TEXT_LEN`](animations::wave::MIN_TEXT_LEN) characters.
    TextTooShort,
    /// There is nothing for the void to consume.
    EmptyText,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TextTooShort => write!(f, "text shorter than 10 characters"),
            RejectReason::EmptyText => write!(f, "empty text"),
        }
    }
}

/// The outcome of an animation call that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Every frame was rendered.
    Completed,
    /// The input was refused up front and nothing was drawn.
    Rejected(RejectReason),
}

/// Runs the wave-highlight sweep on stdout.
///
/// Ctrl-C stops the sweep at the end of the current frame with an
/// [`io::ErrorKind::Interrupted`] error.
pub fn run_wave_animation(text: &str, delay: f64, wave_speed: f64) -> io::Result<AnimationStatus> {
    let mut stage = Stage::stdout(interrupt::sigint()?);
    WaveRenderer::new(WaveConfig { delay, wave_speed }).run(&mut stage, text)
}

/// Runs the black hole animation on stdout, with a spiral phase of `duration` seconds.
///
/// Ctrl-C stops the animation at the end of the current frame with an
/// [`io::ErrorKind::Interrupted`] error.
pub fn run_void_animation(text: &str, duration: f64) -> io::Result<AnimationStatus> {
    let mut stage = Stage::stdout(interrupt::sigint()?);
    VoidRenderer::new(VoidConfig::with_duration(duration)).run(
        &mut stage,
        text,
        &mut rand::thread_rng(),
    )
}

/// Installs a panic handler that shows the cursor before panicking.
///
/// The animations restore the cursor on unwinding by themselves; this covers panics
/// elsewhere in a binary, and `panic = "abort"` builds.
pub fn install_panic_handler() {
    let old_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |pinfo| {
        let _ = execute!(stdout(), crossterm::cursor::Show);
        old_hook(pinfo);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_bounds() {
        let canvas = Canvas::new(80, 24);
        assert_eq!(canvas.center(), (40, 12));
        assert!(canvas.contains(0, 0));
        assert!(canvas.contains(79, 23));
        assert!(!canvas.contains(80, 0));
        assert!(!canvas.contains(0, 24));
        assert!(!canvas.contains(-1, 5));
        assert_eq!(canvas.max_explosion_radius(), 19);
        assert_eq!(Canvas::new(6, 3).max_explosion_radius(), -2);
    }

    #[test]
    fn test_clip_to_row() {
        let canvas = Canvas::new(20, 10);
        assert_eq!(canvas.clip_to_row(15, "abcdefghij"), "abcde");
        assert_eq!(canvas.clip_to_row(0, "abcdefghij"), "abcdefghij");
        assert_eq!(canvas.clip_to_row(10, "abcdefghij"), "abcdefghij");
        assert_eq!(canvas.clip_to_row(19, "·ab"), "·");
        assert_eq!(canvas.clip_to_row(20, "abc"), "");
        assert_eq!(canvas.clip_to_row(25, "abc"), "");
    }

    #[test]
    fn test_reject_reason_messages() {
        assert_eq!(
            RejectReason::TextTooShort.to_string(),
            "text shorter than 10 characters"
        );
        assert_eq!(RejectReason::EmptyText.to_string(), "empty text");
    }
}
