//! Per-color and per-style convenience helpers.
//!
//! Each helper is equivalent to the [`colorize`](crate::colorize) call
//! with the single corresponding argument. They go through the reserved
//! code paths, which cannot fail, so they return `String` directly.

use crate::color::AnsiColor;
use crate::paint::wrap;
use crate::style::TextStyle;

fn fg(text: &str, color: AnsiColor) -> String {
    wrap(text, &[color.fg_code()])
}

fn styled(text: &str, style: TextStyle) -> String {
    wrap(text, &[style.code()])
}

/// Renders `text` with a black foreground.
pub fn black(text: &str) -> String {
    fg(text, AnsiColor::Black)
}

/// Renders `text` with a red foreground.
pub fn red(text: &str) -> String {
    fg(text, AnsiColor::Red)
}

/// Renders `text` with a green foreground.
pub fn green(text: &str) -> String {
    fg(text, AnsiColor::Green)
}

/// Renders `text` with a yellow foreground.
pub fn yellow(text: &str) -> String {
    fg(text, AnsiColor::Yellow)
}

/// Renders `text` with a blue foreground.
pub fn blue(text: &str) -> String {
    fg(text, AnsiColor::Blue)
}

/// Renders `text` with a magenta foreground.
pub fn magenta(text: &str) -> String {
    fg(text, AnsiColor::Magenta)
}

/// Renders `text` with a cyan foreground.
pub fn cyan(text: &str) -> String {
    fg(text, AnsiColor::Cyan)
}

/// Renders `text` with a white foreground.
pub fn white(text: &str) -> String {
    fg(text, AnsiColor::White)
}

/// Renders `text` with a bright black (gray) foreground.
pub fn bright_black(text: &str) -> String {
    fg(text, AnsiColor::BrightBlack)
}

/// Renders `text` with a bright red foreground.
pub fn bright_red(text: &str) -> String {
    fg(text, AnsiColor::BrightRed)
}

/// Renders `text` with a bright green foreground.
pub fn bright_green(text: &str) -> String {
    fg(text, AnsiColor::BrightGreen)
}

/// Renders `text` with a bright yellow foreground.
pub fn bright_yellow(text: &str) -> String {
    fg(text, AnsiColor::BrightYellow)
}

/// Renders `text` with a bright blue foreground.
pub fn bright_blue(text: &str) -> String {
    fg(text, AnsiColor::BrightBlue)
}

/// Renders `text` with a bright magenta foreground.
pub fn bright_magenta(text: &str) -> String {
    fg(text, AnsiColor::BrightMagenta)
}

/// Renders `text` with a bright cyan foreground.
pub fn bright_cyan(text: &str) -> String {
    fg(text, AnsiColor::BrightCyan)
}

/// Renders `text` with a bright white foreground.
pub fn bright_white(text: &str) -> String {
    fg(text, AnsiColor::BrightWhite)
}

/// Renders `text` in bold.
pub fn bold(text: &str) -> String {
    styled(text, TextStyle::Bold)
}

/// Renders `text` dimmed.
pub fn dim(text: &str) -> String {
    styled(text, TextStyle::Dim)
}

/// Renders `text` in italics.
pub fn italic(text: &str) -> String {
    styled(text, TextStyle::Italic)
}

/// Renders `text` underlined.
pub fn underline(text: &str) -> String {
    styled(text, TextStyle::Underline)
}

/// Renders `text` blinking.
pub fn blink(text: &str) -> String {
    styled(text, TextStyle::Blink)
}

/// Renders `text` with foreground and background swapped.
pub fn reverse(text: &str) -> String {
    styled(text, TextStyle::Reverse)
}

/// Renders `text` hidden.
pub fn hidden(text: &str) -> String {
    styled(text, TextStyle::Hidden)
}

/// Renders `text` struck through.
pub fn strikethrough(text: &str) -> String {
    styled(text, TextStyle::Strikethrough)
}
