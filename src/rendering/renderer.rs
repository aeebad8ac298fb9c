//! Rendering logic and the `Renderer` trait.
//!
//! This module defines the core rendering abstractions for `voidfx`:
//!
//! *   [`Renderer`] trait: Defines the interface for rendering operations,
//!     abstracting away the underlying rendering backend.
//! *   [`TerminalRenderer`] struct: A concrete implementation of the `Renderer` trait
//!     that renders to a terminal using the `crossterm` library.
//!
//! Unlike a buffered display, every call is serialized straight into the sink as
//! cursor-positioned SGR writes. Nothing reaches the terminal until
//! [`Renderer::flush`] is called, which the animations do once per frame.

use crate::Canvas;
use crate::rendering::pixel::{Pixel, Style};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use std::io;
use std::io::{Stdout, Write, stdout};

/// Trait for rendering operations.
///
/// Coordinates are 0-indexed, starting from the top-left corner of the canvas.
/// Callers are expected to only pass coordinates inside [`Renderer::canvas`];
/// implementations drop anything else.
pub trait Renderer {
    /// The size of the surface being drawn on.
    fn canvas(&self) -> Canvas;

    /// Shows or hides the terminal cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Erases the whole canvas and homes the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Renders a single pixel at the specified coordinates.
    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> io::Result<()>;

    /// Renders a run of text starting at the specified coordinates.
    ///
    /// Only the start cell is positioned; the text continues to the right from there
    /// and implementations cut it off at the right edge of the canvas.
    fn render_str(&mut self, x: usize, y: usize, text: &str, style: Style) -> io::Result<()>;

    /// Returns to the start of the current line and overwrites it with `cells`.
    fn render_line(&mut self, cells: &[Pixel]) -> io::Result<()>;

    /// Ends the current line.
    fn end_line(&mut self) -> io::Result<()>;

    /// Moves the cursor without drawing anything.
    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()>;

    /// Flushes the rendered output to the target.
    ///
    /// This function should be called after rendering all pixels for a frame to
    /// actually display the changes on the terminal (or other rendering target).
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn canvas(&self) -> Canvas {
        (**self).canvas()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> io::Result<()> {
        (**self).render_pixel(x, y, pixel)
    }

    fn render_str(&mut self, x: usize, y: usize, text: &str, style: Style) -> io::Result<()> {
        (**self).render_str(x, y, text, style)
    }

    fn render_line(&mut self, cells: &[Pixel]) -> io::Result<()> {
        (**self).render_line(cells)
    }

    fn end_line(&mut self) -> io::Result<()> {
        (**self).end_line()
    }

    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        (**self).move_cursor(x, y)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Concrete `Renderer` implementation that renders to a terminal using `crossterm`.
///
/// The sink can be any writer, which allows rendering to `stdout`, files, or in-memory buffers.
pub struct TerminalRenderer<W: Write> {
    canvas: Canvas,
    sink: W,
}

impl TerminalRenderer<Stdout> {
    /// Creates a renderer for `stdout`, sized to the current terminal.
    ///
    /// Falls back to [`Canvas::FALLBACK`] if the terminal size cannot be determined,
    /// e.g. when stdout is not a tty.
    pub fn stdout() -> Self {
        let canvas = match terminal::size() {
            Ok((width, height)) => Canvas::new(width as usize, height as usize),
            Err(err) => {
                log::warn!(
                    "could not query terminal size ({err}), assuming {}x{}",
                    Canvas::FALLBACK.width,
                    Canvas::FALLBACK.height
                );
                Canvas::FALLBACK
            }
        };
        Self::new_with_sink(canvas, stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a new `TerminalRenderer` with a custom output sink.
    pub fn new_with_sink(canvas: Canvas, sink: W) -> Self {
        Self { canvas, sink }
    }

    /// Consumes the renderer and returns the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Queues `text` wrapped in the escape sequences for `style`.
    ///
    /// Plain text is printed bare; styled text is always followed by a full SGR reset
    /// so that no attribute leaks into the next write.
    fn queue_styled(&mut self, text: impl std::fmt::Display, style: Style) -> io::Result<()> {
        if style.is_plain() {
            return queue!(self.sink, Print(text));
        }
        if style.dim {
            queue!(self.sink, SetAttribute(Attribute::Dim))?;
        }
        if let Some(color) = style.bg_color.to_crossterm() {
            queue!(self.sink, SetBackgroundColor(color))?;
        }
        if let Some(color) = style.color.to_crossterm() {
            queue!(self.sink, SetForegroundColor(color))?;
        }
        queue!(self.sink, Print(text), SetAttribute(Attribute::Reset))
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.sink, cursor::Show)
        } else {
            queue!(self.sink, cursor::Hide)
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.sink,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> io::Result<()> {
        if !self.canvas.contains_cell(x, y) {
            return Ok(());
        }
        queue!(self.sink, cursor::MoveTo(x as u16, y as u16))?;
        self.queue_styled(pixel.c, pixel.style)
    }

    fn render_str(&mut self, x: usize, y: usize, text: &str, style: Style) -> io::Result<()> {
        let text = self.canvas.clip_to_row(x, text);
        if text.is_empty() || !self.canvas.contains_cell(x, y) {
            return Ok(());
        }
        queue!(self.sink, cursor::MoveTo(x as u16, y as u16))?;
        self.queue_styled(text, style)
    }

    fn render_line(&mut self, cells: &[Pixel]) -> io::Result<()> {
        queue!(self.sink, Print('\r'))?;
        for cell in cells {
            self.queue_styled(cell.c, cell.style)?;
        }
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        queue!(self.sink, Print('\n'))
    }

    fn move_cursor(&mut self, x: usize, y: usize) -> io::Result<()> {
        let x = x.min(u16::MAX as usize) as u16;
        let y = y.min(u16::MAX as usize) as u16;
        queue!(self.sink, cursor::MoveTo(x, y))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
