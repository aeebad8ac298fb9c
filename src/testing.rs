//! Test doubles shared by the unit tests.

use crate::Canvas;
use crate::interrupt::Interrupt;
use crate::rendering::pixel::{Pixel, Style};
use crate::rendering::renderer::Renderer;
use crate::util::frameclock::Sleeper;
use std::io;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum RenderEvent {
    CursorVisible(bool),
    Clear,
    Pixel { x: usize, y: usize, pixel: Pixel },
    Str { x: usize, y: usize, text: String, style: Style },
    Line(Vec<Pixel>),
    EndLine,
    MoveCursor { x: usize, y: usize },
    Flush,
}

/// Records every call instead of drawing. Performs no bounds checks, so tests can
/// see exactly what the animations asked for.
pub struct RecordingRenderer {
    pub canvas: Canvas,
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            events: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// The last visibility change is a show, followed by nothing but a flush.
    pub fn cursor_restored_last(&self) -> bool {
        let tail: Vec<&RenderEvent> = self
            .events
            .iter()
            .rev()
            .skip_while(|e| **e == RenderEvent::Flush)
            .collect();
        tail.first() == Some(&&RenderEvent::CursorVisible(true))
    }

    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Line(cells) => Some(cells.iter().map(|p| p.c).collect()),
                _ => None,
            })
            .collect()
    }

    /// All positioned coordinates, pixels and text starts alike.
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Pixel { x, y, .. } | RenderEvent::Str { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.events.push(RenderEvent::CursorVisible(visible));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(RenderEvent::Clear);
        Ok(())
    }

    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> io::Result<()> {
        self.events.push(RenderEvent::Pixel { x, y, pixel });
        Ok(())
    }

    fn render_str(&mut self, x: usize, y: usize, text: &str, style: Style) -> io::Result<()> {
        self.events.push(RenderEvent::Str {
            x,
            y,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn render_line(&mut self, cells: &[Pixel]) -> io::Result<()> {
        self.events.push(RenderEvent::Line(cells.to_vec()));
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.events.push(RenderEvent::EndLine);
        Ok(())
    }

    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.events.push(RenderEvent::MoveCursor { x, y });
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.events.push(RenderEvent::Flush);
        Ok(())
    }
}

/// Never blocks. Remembers what it was asked to sleep, and can trip an interrupt
/// after a given number of frames.
#[derive(Default)]
pub struct RecordingSleeper {
    pub sleeps: Vec<Duration>,
    trip: Option<(usize, Interrupt)>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupting_after(frames: usize, interrupt: Interrupt) -> Self {
        Self {
            sleeps: Vec::new(),
            trip: Some((frames, interrupt)),
        }
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        if let Some((frames, interrupt)) = &self.trip {
            if self.sleeps.len() >= *frames {
                interrupt.trigger();
            }
        }
    }
}
