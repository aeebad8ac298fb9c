//! Pixel representation for terminal rendering.
//!
//! This module defines the [`Style`] and [`Pixel`] structs. A `Pixel` is a single
//! character cell: one glyph plus the SGR attributes it is printed with.
//!
//! Animations never store pixels between frames; they build them, hand them to a
//! [`Renderer`](crate::rendering::renderer::Renderer) and forget them.

use crate::rendering::color::Color;

/// The SGR attributes a glyph or a run of text is printed with.
///
/// # Example
///
/// ```rust
/// use voidfx::rendering::color::Color;
/// use voidfx::rendering::pixel::Style;
///
/// let highlight = Style::new().with_color(Color::Black).with_bg_color(Color::Yellow);
/// assert!(!highlight.is_plain());
/// assert!(Style::new().is_plain());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// The foreground color.
    pub color: Color,
    /// The background color.
    pub bg_color: Color,
    /// Whether the faint attribute (SGR 2) is set.
    pub dim: bool,
}

impl Style {
    /// Creates a plain style that leaves every attribute at the terminal default.
    pub const fn new() -> Self {
        Self {
            color: Color::Default,
            bg_color: Color::Default,
            dim: false,
        }
    }

    /// Returns a copy of `self` with a new foreground color.
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Returns a copy of `self` with a new background color.
    pub const fn with_bg_color(self, bg_color: Color) -> Self {
        Self { bg_color, ..self }
    }

    /// Returns a copy of `self` with the faint attribute set.
    pub const fn dimmed(self) -> Self {
        Self { dim: true, ..self }
    }

    /// Returns true if printing with this style needs no escape sequences at all.
    pub fn is_plain(&self) -> bool {
        !self.color.is_set() && !self.bg_color.is_set() && !self.dim
    }
}

/// Represents a single pixel (character) for terminal rendering.
///
/// # Defaults
///
/// A `Pixel` created with [`Pixel::new`] uses the plain [`Style`], i.e. it is printed
/// exactly as the bare character.
///
/// # Example
///
/// ```rust
/// use voidfx::rendering::color::Color;
/// use voidfx::rendering::pixel::Pixel;
///
/// let star = Pixel::new('*').with_color(Color::Yellow);
/// let faded = Pixel::new('·').dimmed();
///
/// assert_eq!(star.style.color, Color::Yellow);
/// assert!(faded.style.dim);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// The character to be displayed.
    pub c: char,
    /// The attributes the character is printed with.
    pub style: Style,
}

impl Pixel {
    /// Creates a new unstyled `Pixel`.
    pub const fn new(c: char) -> Self {
        Self {
            c,
            style: Style::new(),
        }
    }

    /// Creates a new `Pixel` with the same character and background color as `self`, but with a new foreground color.
    pub const fn with_color(self, color: Color) -> Self {
        Self {
            c: self.c,
            style: self.style.with_color(color),
        }
    }

    /// Creates a new `Pixel` with the same character and foreground color as `self`, but with a new background color.
    pub const fn with_bg_color(self, bg_color: Color) -> Self {
        Self {
            c: self.c,
            style: self.style.with_bg_color(bg_color),
        }
    }

    /// Creates a new `Pixel` with the faint attribute set.
    pub const fn dimmed(self) -> Self {
        Self {
            c: self.c,
            style: self.style.dimmed(),
        }
    }
}
