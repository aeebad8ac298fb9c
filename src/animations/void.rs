//! The black hole.
//!
//! Three phases run back to back at the same frame rate:
//!
//! 1.  **Spiral**: a spiral of points winds inward while the text orbits the center
//!     and loses characters from its end.
//! 2.  **Explosion**: three concentric rings of particles expand from the center,
//!     with random sparks thrown in between.
//! 3.  **Fade**: fewer and fewer faint particles linger around the center.
//!
//! Finally the screen is cleared and a completion message is printed in the middle.
//!
//! Positions are computed as signed cells, truncated toward zero, and anything that
//! lands outside the canvas is dropped. Nothing is clamped to the edges.

use crate::animations::glyphs::{
    FADE_CHAR, RING_SETS, SPARK_CHARS, SPARK_COLORS, SPIRAL_BRIGHT, SPIRAL_DOT, SPIRAL_LIGHT,
};
use crate::config::VoidConfig;
use crate::cursor::CursorGuard;
use crate::rendering::color::Color;
use crate::rendering::pixel::{Pixel, Style};
use crate::rendering::renderer::Renderer;
use crate::stage::Stage;
use crate::util::frameclock::{FrameClock, Sleeper};
use crate::{AnimationStatus, Canvas, RejectReason};
use rand::Rng;
use std::f64::consts::TAU;
use std::io;

/// Number of points drawn along the spiral each frame.
pub const SPIRAL_POINTS: usize = 100;
/// Radius of the text's orbit at the start of the spiral phase.
pub const TEXT_ORBIT_RADIUS: f64 = 15.0;
/// Distance between two explosion rings.
pub const RING_SPACING: f64 = 3.0;
/// Sparks thrown on the first explosion frame; decays linearly to zero.
pub const MAX_SPARKS: f64 = 20.0;
/// Particles on the first fade frame; decays linearly to zero.
pub const MAX_FADE_PARTICLES: f64 = 50.0;

/// Frames rendered by each phase of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseFrames {
    pub spiral: usize,
    pub explosion: usize,
    pub fade: usize,
}

/// Projects polar coordinates around `center` onto the cell grid.
///
/// `flatten` squashes the vertical axis, since terminal cells are about twice as
/// tall as they are wide.
fn project(center: (i64, i64), radius: f64, angle: f64, flatten: f64) -> (i64, i64) {
    let x = center.0 as f64 + radius * angle.cos();
    let y = center.1 as f64 + radius * angle.sin() * flatten;
    (x as i64, y as i64)
}

fn plot<R: Renderer + ?Sized>(
    renderer: &mut R,
    canvas: Canvas,
    (x, y): (i64, i64),
    pixel: Pixel,
) -> io::Result<()> {
    if canvas.contains(x, y) {
        renderer.render_pixel(x as usize, y as usize, pixel)?;
    }
    Ok(())
}

fn pick<T: Copy, G: Rng + ?Sized>(rng: &mut G, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Uniform integer offset in `low..=high`, or `None` if the range is inverted.
fn offset<G: Rng + ?Sized>(rng: &mut G, low: i64, high: i64) -> Option<i64> {
    (low <= high).then(|| rng.gen_range(low..=high))
}

/// The glyph of a spiral point at the given distance from the center.
pub fn spiral_pixel(radius: f64) -> Pixel {
    let intensity = 1.0 - radius / 50.0;
    if intensity > 0.8 {
        Pixel::new(SPIRAL_BRIGHT).with_color(Color::Yellow)
    } else if intensity > 0.5 {
        Pixel::new(SPIRAL_LIGHT).with_color(Color::White)
    } else {
        Pixel::new(SPIRAL_DOT)
    }
}

/// Renders the black hole animation.
#[derive(Clone, Debug, Default)]
pub struct VoidRenderer {
    config: VoidConfig,
}

impl VoidRenderer {
    pub fn new(config: VoidConfig) -> Self {
        Self { config }
    }

    /// Runs all three phases and the completion screen.
    ///
    /// The canvas size is read from the stage's renderer once, up front. Empty text
    /// is rejected without touching the terminal. `rng` drives the explosion and the
    /// fade; pass a seeded generator for a reproducible run.
    pub fn run<R: Renderer, S: Sleeper, G: Rng + ?Sized>(
        &self,
        stage: &mut Stage<R, S>,
        text: &str,
        rng: &mut G,
    ) -> io::Result<AnimationStatus> {
        if text.is_empty() {
            log::debug!("void rejected: empty text");
            return Ok(AnimationStatus::Rejected(RejectReason::EmptyText));
        }
        let chars: Vec<char> = text.chars().collect();

        let Stage {
            renderer,
            sleeper,
            interrupt,
        } = stage;
        let canvas = renderer.canvas();
        let mut renderer = CursorGuard::hide(renderer)?;
        let mut clock = FrameClock::new_from_rate_per_second(self.config.fps, sleeper, interrupt);

        let frames = PhaseFrames {
            spiral: self.spiral(&mut *renderer, &mut clock, canvas, &chars)?,
            explosion: self.explosion(&mut *renderer, &mut clock, canvas, rng)?,
            fade: self.fade(&mut *renderer, &mut clock, canvas, rng)?,
        };
        self.complete(&mut *renderer, canvas)?;

        log::debug!("void done on {}x{}: {frames:?}", canvas.width, canvas.height);
        Ok(AnimationStatus::Completed)
    }

    /// Phase 1: the spiral swallows the text.
    pub(crate) fn spiral<R: Renderer + ?Sized, S: Sleeper + ?Sized>(
        &self,
        renderer: &mut R,
        clock: &mut FrameClock<'_, S>,
        canvas: Canvas,
        text: &[char],
    ) -> io::Result<usize> {
        let frame_count = self.config.spiral_frame_count();
        let center = canvas.center();

        for frame in 0..frame_count {
            clock.start_frame();
            renderer.clear()?;
            let f = frame as f64;
            let progress = f / frame_count as f64;

            for i in 0..SPIRAL_POINTS {
                let i = i as f64;
                let t = i * 0.3 + f * 0.2;
                let r = i * 0.5 * (1.0 - progress * 0.8);
                if r > 0.0 {
                    plot(renderer, canvas, project(center, r, t, 0.5), spiral_pixel(r))?;
                }
            }

            let chars_remaining = (text.len() as f64 * (1.0 - progress)) as usize;
            if chars_remaining > 0 {
                let remaining: String = text[..chars_remaining].iter().collect();
                let radius = TEXT_ORBIT_RADIUS * (1.0 - progress);
                let angle = f * 0.3;
                // center the remaining text on its orbit position
                let x = center.0 as f64 + radius * angle.cos() - (chars_remaining / 2) as f64;
                let y = center.1 as f64 + radius * angle.sin() * 0.5;
                let (x, y) = (x as i64, y as i64);
                if canvas.contains(x, y) {
                    let style = if progress > 0.7 {
                        Style::new().dimmed()
                    } else {
                        Style::new()
                    };
                    let visible = canvas.clip_to_row(x as usize, &remaining);
                    renderer.render_str(x as usize, y as usize, visible, style)?;
                }
            }

            renderer.flush()?;
            clock.end_frame()?;
        }
        Ok(frame_count)
    }

    /// Phase 2: rings and sparks fly outward.
    pub(crate) fn explosion<R: Renderer + ?Sized, S: Sleeper + ?Sized, G: Rng + ?Sized>(
        &self,
        renderer: &mut R,
        clock: &mut FrameClock<'_, S>,
        canvas: Canvas,
        rng: &mut G,
    ) -> io::Result<usize> {
        let frame_count = self.config.explosion_frame_count();
        let center = canvas.center();
        let max_radius = canvas.max_explosion_radius() as f64;

        for frame in 0..frame_count {
            clock.start_frame();
            renderer.clear()?;
            let progress = frame as f64 / frame_count as f64;
            let current_radius = progress * max_radius;

            for (ring, (glyphs, color)) in RING_SETS.iter().enumerate() {
                let ring_radius = current_radius - ring as f64 * RING_SPACING;
                if ring_radius <= 0.0 {
                    continue;
                }
                let particles = (ring_radius * 8.0) as usize;
                for i in 0..particles {
                    let angle = (i as f64 / particles as f64) * TAU;
                    let radius = ring_radius + rng.gen_range(-0.3..=0.3);
                    let pos = project(center, radius, angle, 0.6);
                    if canvas.contains(pos.0, pos.1) {
                        let pixel = Pixel::new(pick(rng, *glyphs)).with_color(*color);
                        plot(renderer, canvas, pos, pixel)?;
                    }
                }
            }

            let sparks = (MAX_SPARKS * (1.0 - progress)) as usize;
            let spread_x = (current_radius * 1.5) as i64;
            let spread_y = (current_radius * 0.8) as i64;
            for _ in 0..sparks {
                let (Some(dx), Some(dy)) = (
                    offset(rng, -spread_x, spread_x),
                    offset(rng, -spread_y, spread_y),
                ) else {
                    break;
                };
                let pos = (center.0 + dx, center.1 + dy);
                if canvas.contains(pos.0, pos.1) {
                    let pixel = Pixel::new(pick(rng, SPARK_CHARS)).with_color(pick(rng, SPARK_COLORS));
                    plot(renderer, canvas, pos, pixel)?;
                }
            }

            renderer.flush()?;
            clock.end_frame()?;
        }
        Ok(frame_count)
    }

    /// Phase 3: the ashes settle.
    pub(crate) fn fade<R: Renderer + ?Sized, S: Sleeper + ?Sized, G: Rng + ?Sized>(
        &self,
        renderer: &mut R,
        clock: &mut FrameClock<'_, S>,
        canvas: Canvas,
        rng: &mut G,
    ) -> io::Result<usize> {
        let frame_count = self.config.fade_frames;
        let center = canvas.center();
        let max_radius = canvas.max_explosion_radius();
        // floor division, so an odd radius leans one cell toward the top left
        let (low_x, high_x) = ((-max_radius).div_euclid(2), max_radius.div_euclid(2));
        let (low_y, high_y) = ((-max_radius).div_euclid(3), max_radius.div_euclid(3));

        for frame in 0..frame_count {
            clock.start_frame();
            renderer.clear()?;
            let progress = frame as f64 / frame_count as f64;
            let particles = (MAX_FADE_PARTICLES * (1.0 - progress)) as usize;

            for _ in 0..particles {
                let (Some(dx), Some(dy)) = (offset(rng, low_x, high_x), offset(rng, low_y, high_y))
                else {
                    break;
                };
                plot(
                    renderer,
                    canvas,
                    (center.0 + dx, center.1 + dy),
                    Pixel::new(FADE_CHAR).dimmed(),
                )?;
            }

            renderer.flush()?;
            clock.end_frame()?;
        }
        Ok(frame_count)
    }

    /// Clears the screen, centers the completion message and parks the cursor on the last line.
    pub(crate) fn complete<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        canvas: Canvas,
    ) -> io::Result<()> {
        renderer.clear()?;
        let message = &self.config.completion_message;
        let (cx, cy) = canvas.center();
        let x = cx - (message.chars().count() / 2) as i64;
        if canvas.contains(x, cy) {
            let visible = canvas.clip_to_row(x as usize, message);
            renderer.render_str(x as usize, cy as usize, visible, Style::new().dimmed())?;
        }
        renderer.move_cursor(0, canvas.height.saturating_sub(1))?;
        renderer.flush()
    }
}
