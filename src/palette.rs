//! The fixed ANSI color palette used to tell chat participants apart.

use serde::{Deserialize, Serialize};

/// One of the eight ANSI foreground colors a participant can be shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorName {
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Pink,
    Cyan,
    White,
}

/// Every supported color, in palette order.
pub const PALETTE: [ColorName; 8] = [
    ColorName::Gray,
    ColorName::Red,
    ColorName::Green,
    ColorName::Yellow,
    ColorName::Blue,
    ColorName::Pink,
    ColorName::Cyan,
    ColorName::White,
];

/// Order in which unclaimed colors are handed out to participants without a
/// usable preference. Gray goes last since notices are drawn in it.
pub const FILL_ORDER: [ColorName; 8] = [
    ColorName::Red,
    ColorName::Green,
    ColorName::Yellow,
    ColorName::Blue,
    ColorName::Pink,
    ColorName::Cyan,
    ColorName::White,
    ColorName::Gray,
];

/// Shared by every participant once the palette is exhausted, and by senders
/// with no assignment.
pub const FALLBACK_COLOR: ColorName = ColorName::White;

/// Color of timestamps and omission notices.
pub const NOTICE_COLOR: ColorName = ColorName::Gray;

impl ColorName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Pink => "Pink",
            Self::Cyan => "Cyan",
            Self::White => "White",
        }
    }

    /// ANSI SGR foreground code.
    #[must_use]
    pub fn ansi_code(self) -> u8 {
        match self {
            Self::Gray => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Pink => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// Looks up a palette entry by the game's color name, ignoring case and
    /// surrounding whitespace. Game colors without an ANSI equivalent
    /// (`Teal`, `Orange`, ...) return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        PALETTE
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
    }
}

/// Wraps `s` in the ANSI escape sequence for `color`.
#[must_use]
pub fn colorize(s: &str, color: ColorName) -> String {
    format!("\u{1b}[0;{}m{s}\u{1b}[0m", color.ansi_code())
}

#[cfg(test)]
#[path = "palette_test.rs"]
mod tests;
