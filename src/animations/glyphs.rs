//! Glyph and color sets for the black hole animation.

use crate::rendering::color::Color;

/// Spiral point close to the center.
pub const SPIRAL_BRIGHT: char = '*';
/// Spiral point halfway out.
pub const SPIRAL_LIGHT: char = '·';
/// Spiral point on the outer arms.
pub const SPIRAL_DOT: char = '.';

/// Explosion rings, innermost first: the glyphs of each ring and the color it burns in.
pub const RING_SETS: [(&[char], Color); 3] = [
    (&['*', '✦', '✧', '●'], Color::BrightRed),
    (&['*', '·', '○', '+'], Color::BrightYellow),
    (&['·', '.', '°', '˙'], Color::BrightWhite),
];

/// Characters used for the stray sparks of the explosion.
pub const SPARK_CHARS: &[char] = &['*', '·', '+', '˙'];

/// Colors a spark can take.
pub const SPARK_COLORS: &[Color] = &[Color::BrightRed, Color::BrightYellow, Color::BrightWhite];

/// The ash left behind during the fade-out.
pub const FADE_CHAR: char = '·';
