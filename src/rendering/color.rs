//! Color representation for terminal rendering.

/// The palette the animations draw with.
///
/// These are slots of the terminal's 16-color theme rather than RGB values, so the
/// user's theme decides the exact shade. `crossterm` addresses them through the
/// 256-color index, e.g. `ESC[38;5;0m` for a black foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Use the terminal's default color.
    #[default]
    Default,
    /// Theme slot 0.
    Black,
    /// Theme slot 3.
    Yellow,
    /// Theme slot 7.
    White,
    /// Theme slot 9.
    BrightRed,
    /// Theme slot 11.
    BrightYellow,
    /// Theme slot 15.
    BrightWhite,
}

impl Color {
    /// Returns the `crossterm` color for this palette entry, or `None` for [`Color::Default`].
    pub fn to_crossterm(self) -> Option<crossterm::style::Color> {
        use crossterm::style::Color as Ct;
        // crossterm names the dim half of the palette "Dark*" and the bright half plainly.
        match self {
            Color::Default => None,
            Color::Black => Some(Ct::Black),
            Color::Yellow => Some(Ct::DarkYellow),
            Color::White => Some(Ct::Grey),
            Color::BrightRed => Some(Ct::Red),
            Color::BrightYellow => Some(Ct::Yellow),
            Color::BrightWhite => Some(Ct::White),
        }
    }

    /// Returns whether the color differs from the terminal default.
    pub fn is_set(self) -> bool {
        self != Color::Default
    }
}
