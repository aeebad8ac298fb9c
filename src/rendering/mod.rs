//! Rendering module for terminal-based output.
//!
//! **Sub-modules:**
//!
//! *   [`color`](crate::rendering::color): Defines the [`Color`](color::Color) palette.
//! *   [`pixel`](crate::rendering::pixel): Defines [`Pixel`](pixel::Pixel) and [`Style`](pixel::Style), the basic units of rendering.
//! *   [`renderer`](crate::rendering::renderer): Defines the [`Renderer`](renderer::Renderer) trait and the `crossterm` backed [`TerminalRenderer`](renderer::TerminalRenderer).
//!
//! **Rendering Process (Simplified):**
//!
//! 1.  Create a `TerminalRenderer` (which manages the terminal output).
//! 2.  Per frame, call `Renderer::clear()` and draw with `render_pixel()`, `render_str()` or `render_line()`.
//! 3.  Call `Renderer::flush()` to push the frame to the terminal.

pub mod color;
pub mod pixel;
pub mod renderer;
