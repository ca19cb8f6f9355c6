//! Color specifications and their resolution to ANSI SGR parameters.
//!
//! A [`ColorSpec`] captures a raw color value in any of the accepted
//! shapes:
//!
//! - Named: `red`, `bright_red`, `orange`, `#ffdab9`, `rgb(255, 218, 185)`,
//!   or the literal token `default`
//! - 256-color palette index: `0` through `255`
//! - Literal RGB triple: `(255, 165, 0)`
//!
//! Validation is deferred to [`resolve`](ColorSpec::resolve), which turns
//! the spec into the SGR parameters for a given [`Role`]. The 16 reserved
//! ANSI names resolve to the dedicated codes (30-37/90-97 foreground,
//! 40-47/100-107 background) and never go through the RGB table; every
//! other name resolves to a truecolor `38;2;R;G;B` / `48;2;R;G;B`
//! fragment.

use crate::error::{ColorError, Result};
use crate::palette::{parse_color, Rgb};

/// Which half of the SGR code space a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Foreground,
    Background,
}

impl Role {
    /// SGR code for the terminal's default color.
    fn default_code(self) -> u8 {
        match self {
            Role::Foreground => 39,
            Role::Background => 49,
        }
    }

    /// Introducer for extended (palette or truecolor) sequences.
    fn extended_code(self) -> u8 {
        match self {
            Role::Foreground => 38,
            Role::Background => 48,
        }
    }
}

/// The 16 colors terminals address with dedicated SGR codes.
///
/// These are reserved names: resolving one emits its fixed code and never
/// consults the RGB table, so the on-screen color is whatever the user's
/// terminal theme assigns to that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// All 16 reserved colors, in code order.
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Parses a reserved color name (lowercase), including the `bright_`
    /// prefixed high-intensity variants.
    pub fn from_name(name: &str) -> Option<Self> {
        let (base, bright) = match name.strip_prefix("bright_") {
            Some(rest) => (rest, true),
            None => (name, false),
        };
        let index = match base {
            "black" => 0,
            "red" => 1,
            "green" => 2,
            "yellow" => 3,
            "blue" => 4,
            "magenta" => 5,
            "cyan" => 6,
            "white" => 7,
            _ => return None,
        };
        Some(Self::ALL[index + if bright { 8 } else { 0 }])
    }

    /// The canonical name (`red`, `bright_red`, ...).
    pub fn name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::BrightBlack => "bright_black",
            AnsiColor::BrightRed => "bright_red",
            AnsiColor::BrightGreen => "bright_green",
            AnsiColor::BrightYellow => "bright_yellow",
            AnsiColor::BrightBlue => "bright_blue",
            AnsiColor::BrightMagenta => "bright_magenta",
            AnsiColor::BrightCyan => "bright_cyan",
            AnsiColor::BrightWhite => "bright_white",
        }
    }

    /// Foreground SGR code (30-37, 90-97).
    pub fn fg_code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
            AnsiColor::BrightBlack => 90,
            AnsiColor::BrightRed => 91,
            AnsiColor::BrightGreen => 92,
            AnsiColor::BrightYellow => 93,
            AnsiColor::BrightBlue => 94,
            AnsiColor::BrightMagenta => 95,
            AnsiColor::BrightCyan => 96,
            AnsiColor::BrightWhite => 97,
        }
    }

    /// Background SGR code (40-47, 100-107).
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    fn code(self, role: Role) -> u8 {
        match role {
            Role::Foreground => self.fg_code(),
            Role::Background => self.bg_code(),
        }
    }
}

/// A raw color value, as accepted by the compositor.
///
/// Construction never fails; range and format checks happen in
/// [`resolve`](ColorSpec::resolve) so that a whole `colorize` call either
/// produces output or reports the specific error.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// A color name: reserved ANSI name, CSS name, hex string,
    /// `rgb(...)` string, or the literal token `default`.
    Named(String),
    /// 256-color palette index.
    Index(i64),
    /// Numeric input that arrived as floating point. Resolves like
    /// [`Index`](ColorSpec::Index) when integral, and fails otherwise.
    Float(f64),
    /// Literal RGB triple.
    Rgb(i64, i64, i64),
}

impl ColorSpec {
    /// Resolves this spec to SGR parameters for the given role.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ansitint::{ColorSpec, Role};
    ///
    /// let spec = ColorSpec::from("orange");
    /// assert_eq!(spec.resolve(Role::Foreground).unwrap(), vec![38, 2, 255, 165, 0]);
    ///
    /// let spec = ColorSpec::from("red");
    /// assert_eq!(spec.resolve(Role::Background).unwrap(), vec![41]);
    /// ```
    pub fn resolve(&self, role: Role) -> Result<Vec<u8>> {
        match self {
            ColorSpec::Named(name) => resolve_name(name, role),
            ColorSpec::Index(n) => {
                if (0..=255).contains(n) {
                    Ok(vec![role.extended_code(), 5, *n as u8])
                } else {
                    Err(ColorError::InvalidColorIndex(*n as f64))
                }
            }
            ColorSpec::Float(x) => {
                if x.fract() == 0.0 && (0.0..=255.0).contains(x) {
                    Ok(vec![role.extended_code(), 5, *x as u8])
                } else {
                    Err(ColorError::InvalidColorIndex(*x))
                }
            }
            ColorSpec::Rgb(r, g, b) => {
                let mut params = vec![role.extended_code(), 2];
                for component in [*r, *g, *b] {
                    if !(0..=255).contains(&component) {
                        return Err(ColorError::InvalidColorComponent(component));
                    }
                    params.push(component as u8);
                }
                Ok(params)
            }
        }
    }

    /// Parses a color spec from a YAML value.
    ///
    /// Supports strings (names, hex, `rgb(...)`, `default`), numbers
    /// (palette indices), and 3-number sequences (RGB triples), so color
    /// specs can be read straight out of configuration files.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::String(s) => Ok(ColorSpec::Named(s.clone())),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ColorSpec::Index(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(ColorSpec::Float(f))
                } else {
                    Err(invalid_value(value, "unrepresentable number"))
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                if seq.len() != 3 {
                    return Err(invalid_value(value, "RGB sequence must have exactly 3 components"));
                }
                let mut components = [0i64; 3];
                for (i, item) in seq.iter().enumerate() {
                    components[i] = item
                        .as_i64()
                        .ok_or_else(|| invalid_value(value, "RGB components must be integers"))?;
                }
                Ok(ColorSpec::Rgb(components[0], components[1], components[2]))
            }
            _ => Err(invalid_value(value, "expected string, number, or 3-number sequence")),
        }
    }
}

fn resolve_name(name: &str, role: Role) -> Result<Vec<u8>> {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();

    if lower == "default" {
        return Ok(vec![role.default_code()]);
    }
    if let Some(basic) = AnsiColor::from_name(&lower) {
        return Ok(vec![basic.code(role)]);
    }

    let Rgb(r, g, b) = parse_color(trimmed)?;
    Ok(vec![role.extended_code(), 2, r, g, b])
}

fn invalid_value(value: &serde_yaml::Value, reason: &str) -> ColorError {
    ColorError::InvalidFormat {
        value: format!("{:?}", value),
        reason: reason.to_string(),
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        ColorSpec::Named(name)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        ColorSpec::Index(index as i64)
    }
}

impl From<i32> for ColorSpec {
    fn from(index: i32) -> Self {
        ColorSpec::Index(index as i64)
    }
}

impl From<i64> for ColorSpec {
    fn from(index: i64) -> Self {
        ColorSpec::Index(index)
    }
}

impl From<f64> for ColorSpec {
    fn from(index: f64) -> Self {
        ColorSpec::Float(index)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r as i64, g as i64, b as i64)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ColorSpec::Rgb(r as i64, g as i64, b as i64)
    }
}

impl From<AnsiColor> for ColorSpec {
    fn from(color: AnsiColor) -> Self {
        ColorSpec::Named(color.name().to_string())
    }
}
