//! # ansitint - ANSI color and style for terminal text
//!
//! `ansitint` renders plain text wrapped in ANSI SGR escape sequences
//! (foreground color, background color, text styles) and strips such
//! sequences back out. It is meant for command-line tools that want
//! colorized output without managing escape codes by hand.
//!
//! ## Core Concepts
//!
//! - [`colorize`]: single entry point taking text plus optional
//!   foreground, background, and style specifications
//! - [`ColorSpec`]: a color given as a name (ANSI, CSS, hex, `rgb(...)`,
//!   or `default`), a 0-255 palette index, or a literal RGB triple
//! - [`StyleSpec`]: one style token or a `+`-joined compound such as
//!   `"bold+underline"`
//! - [`Painter`]: partial application; pre-bind some arguments and reuse
//! - [`strip_colors`]: remove every SGR sequence from a string
//!
//! ## Quick Start
//!
//! ```rust
//! use ansitint::colorize;
//!
//! let plain = colorize("my string", Some("blue".into()), None, None).unwrap();
//! assert_eq!(plain, "\x1b[34mmy string\x1b[0m");
//!
//! let fancy = colorize(
//!     "some text",
//!     Some("red".into()),
//!     Some("yellow".into()),
//!     Some("underline".into()),
//! ).unwrap();
//! assert_eq!(fancy, "\x1b[31;43;4msome text\x1b[0m");
//! ```
//!
//! ## Color Resolution
//!
//! The 16 reserved ANSI names (`red`, ..., `bright_white`) resolve to
//! their dedicated terminal codes, so the exact shade follows the user's
//! terminal theme. Every other accepted form resolves to a concrete
//! value:
//!
//! ```rust
//! use ansitint::colorize;
//!
//! // Reserved name: dedicated code.
//! assert_eq!(
//!     colorize("RED", Some("red".into()), None, None).unwrap(),
//!     "\x1b[31mRED\x1b[0m"
//! );
//! // CSS name: truecolor.
//! assert_eq!(
//!     colorize("ORANGE", Some("orange".into()), None, None).unwrap(),
//!     "\x1b[38;2;255;165;0mORANGE\x1b[0m"
//! );
//! // Palette index: 8-bit color.
//! assert_eq!(
//!     colorize("RED", Some(1.into()), None, None).unwrap(),
//!     "\x1b[38;5;1mRED\x1b[0m"
//! );
//! ```
//!
//! ## Partial Application
//!
//! ```rust
//! use ansitint::Painter;
//!
//! let important = Painter::new().fg("red").style("bold+underline");
//! assert_eq!(
//!     important.paint("very important").unwrap(),
//!     "\x1b[31;1;4mvery important\x1b[0m"
//! );
//! ```

pub mod color;
pub mod error;
pub mod paint;
pub mod palette;
pub mod shortcuts;
pub mod style;

// Error type
pub use error::{ColorError, Result};

// Color specs and resolution
pub use color::{AnsiColor, ColorSpec, Role};

// Named-color table and string parsers
pub use palette::{named_rgb, parse_color, parse_hex, parse_rgb_function, Rgb};

// Styles
pub use style::{StyleSpec, TextStyle};

// Compositor
pub use paint::{colorize, strip_colors, visible_width, Painter};

// Convenience helpers
pub use shortcuts::{
    black, blink, blue, bold, bright_black, bright_blue, bright_cyan, bright_green,
    bright_magenta, bright_red, bright_white, bright_yellow, cyan, dim, green, hidden, italic,
    magenta, red, reverse, strikethrough, underline, white, yellow,
};
