//! Terminal color palette
//!
//! Maps symbolic color keys onto ANSI escape sequences. Sequences are emitted
//! directly rather than through `colored`'s global switch so the pipeline's
//! own `use_colors` decision is the only one that applies.

use colored::Color;

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";

/// Symbolic color names used by the formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
}

impl ColorKey {
    pub fn color(&self) -> Color {
        match self {
            ColorKey::Red => Color::Red,
            ColorKey::Green => Color::Green,
            ColorKey::Yellow => Color::Yellow,
            ColorKey::Blue => Color::Blue,
            ColorKey::Magenta => Color::Magenta,
            ColorKey::Cyan => Color::Cyan,
            ColorKey::BrightRed => Color::BrightRed,
            ColorKey::BrightGreen => Color::BrightGreen,
            ColorKey::BrightYellow => Color::BrightYellow,
            ColorKey::BrightBlue => Color::BrightBlue,
            ColorKey::BrightMagenta => Color::BrightMagenta,
            ColorKey::BrightCyan => Color::BrightCyan,
        }
    }

    /// Foreground escape sequence, e.g. `\x1b[31m` for red
    pub fn escape(&self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }
}

/// Colors a context name may be assigned. Red is left out so contexts never
/// look like errors.
const CONTEXT_COLORS: [ColorKey; 8] = [
    ColorKey::Cyan,
    ColorKey::Magenta,
    ColorKey::Blue,
    ColorKey::Yellow,
    ColorKey::BrightCyan,
    ColorKey::BrightMagenta,
    ColorKey::BrightBlue,
    ColorKey::BrightYellow,
];

pub struct ColorPalette;

impl ColorPalette {
    /// Wrap `text` in the escape sequence for `key` followed by a reset
    pub fn paint(text: &str, key: ColorKey) -> String {
        format!("{}{}{}", key.escape(), text, RESET)
    }

    pub fn dim(text: &str) -> String {
        format!("{}{}{}", DIM, text, RESET)
    }

    /// Stable color for a context name.
    ///
    /// Uses a fixed string hash so the same context gets the same color across
    /// runs and builds.
    pub fn context_color(context: &str) -> ColorKey {
        let hash = context
            .chars()
            .fold(0u32, |h, c| h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as u32));
        CONTEXT_COLORS[(hash as usize) % CONTEXT_COLORS.len()]
    }
}

/// Remove ANSI CSI sequences (`ESC [ ... letter`) from `text`
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
