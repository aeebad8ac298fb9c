//! Wave-highlight sweep.
//!
//! A highlight sweeps from left to right over a window of the text, then back
//! from right to left. After each such cycle the window loses one character on
//! either side, until it collapses onto the center of the text. The brightness of
//! each highlighted character follows a sine over its relative position in the
//! sweep.
//!
//! The first and last characters are never highlighted.

use crate::config::WaveConfig;
use crate::cursor::CursorGuard;
use crate::rendering::color::Color;
use crate::rendering::pixel::Pixel;
use crate::rendering::renderer::Renderer;
use crate::stage::Stage;
use crate::util::frameclock::{FrameClock, Sleeper};
use crate::{AnimationStatus, RejectReason};
use std::f64::consts::PI;
use std::io;

/// Texts shorter than this are rejected.
pub const MIN_TEXT_LEN: usize = 10;

/// The sub-range of the text that is eligible for highlighting.
///
/// Positions are character indices. The window is half-open, `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationWindow {
    pub start: usize,
    pub end: usize,
}

impl AnimationWindow {
    /// The initial window for a text of `len` characters: everything but the two ends.
    pub fn new(len: usize) -> Self {
        Self {
            start: 1,
            end: len.saturating_sub(1),
        }
    }

    /// Whether there is anything left to sweep.
    pub fn is_open(&self) -> bool {
        self.start < self.end
    }

    /// Drops one character on either side.
    pub fn narrow(&mut self) {
        self.start += 1;
        self.end -= 1;
    }
}

/// Number of forward/backward cycles the sweep runs for a text of `len` characters.
pub fn cycle_count(len: usize) -> usize {
    len.saturating_sub(1) / 2
}

/// Brightness of a highlighted character, in `[0, 1]`.
///
/// `wave_pos` is the character's relative position in the sweep, `0.0` at the
/// trailing end and `1.0` at the leading edge.
pub fn wave_intensity(wave_pos: f64, wave_speed: f64) -> f64 {
    (wave_pos * PI * wave_speed).sin() * 0.5 + 0.5
}

/// The three highlight levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveTier {
    Bright,
    Medium,
    Dim,
}

impl WaveTier {
    /// Buckets an intensity. The bounds are exclusive, so exactly `0.7` is medium
    /// and exactly `0.4` is dim.
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity > 0.7 {
            WaveTier::Bright
        } else if intensity > 0.4 {
            WaveTier::Medium
        } else {
            WaveTier::Dim
        }
    }

    /// Black text on a background that gets paler as the tier gets dimmer.
    pub fn pixel(self, c: char) -> Pixel {
        let bg = match self {
            WaveTier::Bright => Color::Yellow,
            WaveTier::Medium => Color::BrightYellow,
            WaveTier::Dim => Color::BrightWhite,
        };
        Pixel::new(c).with_color(Color::Black).with_bg_color(bg)
    }
}

fn highlight(c: char, wave_pos: f64, wave_speed: f64) -> Pixel {
    WaveTier::from_intensity(wave_intensity(wave_pos, wave_speed)).pixel(c)
}

/// The line for a left-to-right frame whose leading edge is at `i`.
///
/// Highlights `window.start..=i`, brightest at the leading edge for a wave speed of one.
pub fn forward_frame(text: &[char], window: AnimationWindow, i: usize, wave_speed: f64) -> Vec<Pixel> {
    let span = i.saturating_sub(window.start).max(1) as f64;
    text.iter()
        .enumerate()
        .map(|(pos, &c)| {
            if window.start <= pos && pos <= i {
                highlight(c, (pos - window.start) as f64 / span, wave_speed)
            } else {
                Pixel::new(c)
            }
        })
        .collect()
}

/// The line for a right-to-left frame whose leading edge is at `i`.
///
/// Highlights `i..window.end`, measured from the far (right) end of the window.
pub fn backward_frame(text: &[char], window: AnimationWindow, i: usize, wave_speed: f64) -> Vec<Pixel> {
    let last = window.end - 1;
    let span = last.saturating_sub(i).max(1) as f64;
    text.iter()
        .enumerate()
        .map(|(pos, &c)| {
            if i <= pos && pos < window.end {
                highlight(c, (last - pos) as f64 / span, wave_speed)
            } else {
                Pixel::new(c)
            }
        })
        .collect()
}

/// Renders the wave-highlight sweep.
#[derive(Clone, Debug, Default)]
pub struct WaveRenderer {
    config: WaveConfig,
}

impl WaveRenderer {
    pub fn new(config: WaveConfig) -> Self {
        Self { config }
    }

    /// Runs the sweep on the current terminal line and leaves the plain text behind.
    ///
    /// Texts shorter than [`MIN_TEXT_LEN`] characters are rejected without touching
    /// the terminal.
    pub fn run<R: Renderer, S: Sleeper>(
        &self,
        stage: &mut Stage<R, S>,
        text: &str,
    ) -> io::Result<AnimationStatus> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < MIN_TEXT_LEN {
            log::debug!("wave rejected: {} characters", chars.len());
            return Ok(AnimationStatus::Rejected(RejectReason::TextTooShort));
        }

        let Stage {
            renderer,
            sleeper,
            interrupt,
        } = stage;
        let mut renderer = CursorGuard::hide(renderer)?;
        let mut clock = FrameClock::new(self.config.frame_time(), sleeper, interrupt);
        let wave_speed = self.config.wave_speed;

        let mut window = AnimationWindow::new(chars.len());
        let mut cycles = 0;
        while window.is_open() {
            for i in window.start..window.end {
                clock.start_frame();
                renderer.render_line(&forward_frame(&chars, window, i, wave_speed))?;
                renderer.flush()?;
                clock.end_frame()?;
            }
            for i in (window.start..window.end).rev() {
                clock.start_frame();
                renderer.render_line(&backward_frame(&chars, window, i, wave_speed))?;
                renderer.flush()?;
                clock.end_frame()?;
            }
            window.narrow();
            cycles += 1;
        }

        let plain: Vec<Pixel> = chars.iter().copied().map(Pixel::new).collect();
        renderer.render_line(&plain)?;
        renderer.end_line()?;
        renderer.flush()?;

        log::debug!("wave done: {cycles} cycles, {} frames", clock.frames());
        Ok(AnimationStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;
    use crate::interrupt::Interrupt;
    use crate::testing::{RecordingRenderer, RecordingSleeper, RenderEvent};
    use std::time::Duration;

    fn stage() -> Stage<RecordingRenderer, RecordingSleeper> {
        Stage::new(
            RecordingRenderer::new(Canvas::FALLBACK),
            RecordingSleeper::new(),
            Interrupt::new(),
        )
    }

    fn fast(wave_speed: f64) -> WaveRenderer {
        WaveRenderer::new(WaveConfig {
            delay: 0.0,
            wave_speed,
        })
    }

    fn highlighted(line: &[Pixel]) -> Vec<usize> {
        line.iter()
            .enumerate()
            .filter(|(_, p)| !p.style.is_plain())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_short_text_is_rejected_without_writes() {
        for text in ["", "a", "abcdefghi", "ünïcødé!!"] {
            let mut stage = stage();
            let status = fast(1.0).run(&mut stage, text).unwrap();
            assert_eq!(status, AnimationStatus::Rejected(RejectReason::TextTooShort));
            assert!(stage.renderer().events.is_empty());
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        let mut stage = stage();
        let status = fast(1.0).run(&mut stage, "éééééééééé").unwrap();
        assert_eq!(status, AnimationStatus::Completed);
    }

    #[test]
    fn test_window_shrinks_symmetrically() {
        for n in 10..40 {
            let mut window = AnimationWindow::new(n);
            let mut k = 0;
            while window.is_open() {
                assert_eq!(window, AnimationWindow { start: 1 + k, end: n - 1 - k });
                assert_eq!(window.start - 1, n - 1 - window.end);
                window.narrow();
                k += 1;
            }
            assert_eq!(k, cycle_count(n));
            if n % 2 == 0 {
                assert_eq!(k, (n - 2) / 2);
            }
        }
    }

    #[test]
    fn test_tier_boundaries_are_exclusive() {
        assert_eq!(WaveTier::from_intensity(1.0), WaveTier::Bright);
        assert_eq!(WaveTier::from_intensity(0.7000001), WaveTier::Bright);
        assert_eq!(WaveTier::from_intensity(0.7), WaveTier::Medium);
        assert_eq!(WaveTier::from_intensity(0.4000001), WaveTier::Medium);
        assert_eq!(WaveTier::from_intensity(0.4), WaveTier::Dim);
        assert_eq!(WaveTier::from_intensity(0.0), WaveTier::Dim);
    }

    #[test]
    fn test_flat_wave_is_medium() {
        assert_eq!(wave_intensity(0.3, 0.0), 0.5);
        let text: Vec<char> = "abcdefghij".chars().collect();
        let line = forward_frame(&text, AnimationWindow::new(10), 8, 0.0);
        for p in &line[1..=8] {
            assert_eq!(*p, WaveTier::Medium.pixel(p.c));
        }
    }

    #[test]
    fn test_forward_frame_highlights_up_to_leading_edge() {
        let text: Vec<char> = "abcdefghij".chars().collect();
        let window = AnimationWindow::new(text.len());
        let line = forward_frame(&text, window, 4, 1.0);
        assert_eq!(highlighted(&line), vec![1, 2, 3, 4]);
        // a single-cell sweep divides by one, not zero
        let line = forward_frame(&text, window, 1, 1.0);
        assert_eq!(highlighted(&line), vec![1]);
        assert_eq!(line[1], WaveTier::Medium.pixel('b'));
    }

    #[test]
    fn test_backward_frame_highlights_from_leading_edge_to_window_end() {
        let text: Vec<char> = "abcdefghij".chars().collect();
        let window = AnimationWindow { start: 2, end: 8 };
        let line = backward_frame(&text, window, 5, 1.0);
        assert_eq!(highlighted(&line), vec![5, 6, 7]);
        // wave_pos 0.5 in the middle of the sweep is the brightest point for speed 1
        assert_eq!(line[6], WaveTier::Bright.pixel('g'));
        assert_eq!(line[7], WaveTier::Medium.pixel('h'));
    }

    #[test]
    fn test_ten_characters_run_four_cycles_and_end_plain() {
        let mut stage = stage();
        let status = fast(1.0).run(&mut stage, "abcdefghij").unwrap();
        assert_eq!(status, AnimationStatus::Completed);

        let renderer = stage.renderer();
        let lines = renderer.lines();
        // windows 8, 6, 4, 2 wide, swept twice each, plus the final plain line
        assert_eq!(lines.len(), 2 * (8 + 6 + 4 + 2) + 1);
        assert!(lines.iter().all(|l| l == "abcdefghij"));

        let last_line = renderer
            .events
            .iter()
            .rev()
            .find_map(|e| match e {
                RenderEvent::Line(cells) => Some(cells.clone()),
                _ => None,
            })
            .unwrap();
        assert!(last_line.iter().all(|p| p.style.is_plain()));
        assert_eq!(renderer.count(|e| *e == RenderEvent::EndLine), 1);
        assert_eq!(renderer.events[0], RenderEvent::CursorVisible(false));
        assert!(renderer.cursor_restored_last());
    }

    #[test]
    fn test_highlight_never_touches_the_ends() {
        let mut stage = stage();
        fast(3.0).run(&mut stage, "to stare off into the distance").unwrap();
        let n = 30;
        for event in &stage.renderer().events {
            if let RenderEvent::Line(cells) = event {
                assert!(cells[0].style.is_plain());
                assert!(cells[n - 1].style.is_plain());
            }
        }
    }

    #[test]
    fn test_sleeps_once_per_frame_within_delay() {
        let mut stage = Stage::new(
            RecordingRenderer::new(Canvas::FALLBACK),
            RecordingSleeper::new(),
            Interrupt::new(),
        );
        let renderer = WaveRenderer::new(WaveConfig {
            delay: 0.01,
            wave_speed: 2.0,
        });
        renderer.run(&mut stage, "abcdefghij").unwrap();
        let (_, sleeper, _) = stage.into_parts();
        assert_eq!(sleeper.sleeps.len(), 40);
        assert!(sleeper.sleeps.iter().all(|d| *d <= Duration::from_millis(10)));
    }

    #[test]
    fn test_interrupt_restores_cursor_at_any_frame() {
        for frame in 1..=40 {
            let interrupt = Interrupt::new();
            let mut stage = Stage::new(
                RecordingRenderer::new(Canvas::FALLBACK),
                RecordingSleeper::interrupting_after(frame, interrupt.clone()),
                interrupt,
            );
            let err = fast(1.0).run(&mut stage, "abcdefghij").unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::Interrupted);
            let renderer = stage.renderer();
            assert_eq!(renderer.lines().len(), frame);
            assert!(renderer.cursor_restored_last());
        }
    }

    #[test]
    fn test_cleared_interrupt_lets_the_next_run_finish() {
        let mut stage = stage();
        stage.interrupt().trigger();
        let err = fast(1.0).run(&mut stage, "abcdefghij").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
        // the flag is only polled after a frame, so one line got out
        assert_eq!(stage.renderer().lines().len(), 1);

        stage.interrupt().reset();
        let status = fast(1.0).run(&mut stage, "abcdefghij").unwrap();
        assert_eq!(status, AnimationStatus::Completed);
        assert_eq!(stage.renderer().lines().len(), 1 + 41);
    }
}
