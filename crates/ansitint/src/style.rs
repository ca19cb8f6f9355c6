//! Text style tokens and their SGR codes.
//!
//! Styles are addressed by token name, either singly (`"bold"`) or as a
//! `+`-joined compound (`"bold+underline"`). Token order in a compound is
//! preserved in the emitted code sequence.

use crate::error::{ColorError, Result};

/// A single text style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
}

impl TextStyle {
    /// All recognized styles, in SGR code order.
    pub const ALL: [TextStyle; 8] = [
        TextStyle::Bold,
        TextStyle::Dim,
        TextStyle::Italic,
        TextStyle::Underline,
        TextStyle::Blink,
        TextStyle::Reverse,
        TextStyle::Hidden,
        TextStyle::Strikethrough,
    ];

    /// The SGR parameter for this style.
    pub fn code(self) -> u8 {
        match self {
            TextStyle::Bold => 1,
            TextStyle::Dim => 2,
            TextStyle::Italic => 3,
            TextStyle::Underline => 4,
            TextStyle::Blink => 5,
            TextStyle::Reverse => 7,
            TextStyle::Hidden => 8,
            TextStyle::Strikethrough => 9,
        }
    }

    /// The canonical token name.
    pub fn name(self) -> &'static str {
        match self {
            TextStyle::Bold => "bold",
            TextStyle::Dim => "dim",
            TextStyle::Italic => "italic",
            TextStyle::Underline => "underline",
            TextStyle::Blink => "blink",
            TextStyle::Reverse => "reverse",
            TextStyle::Hidden => "hidden",
            TextStyle::Strikethrough => "strikethrough",
        }
    }

    /// Parses a single style token.
    ///
    /// Accepts the canonical names plus the common aliases `faint` (dim),
    /// `invert`/`negative` (reverse), `concealed` (hidden), and `crossed`
    /// (strikethrough). Unknown tokens fail with
    /// [`ColorError::UnknownStyle`].
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim().to_lowercase().as_str() {
            "bold" => Ok(TextStyle::Bold),
            "dim" | "faint" => Ok(TextStyle::Dim),
            "italic" => Ok(TextStyle::Italic),
            "underline" => Ok(TextStyle::Underline),
            "blink" => Ok(TextStyle::Blink),
            "reverse" | "invert" | "negative" => Ok(TextStyle::Reverse),
            "hidden" | "concealed" => Ok(TextStyle::Hidden),
            "strikethrough" | "crossed" => Ok(TextStyle::Strikethrough),
            _ => Err(ColorError::UnknownStyle(token.to_string())),
        }
    }
}

/// One or more style tokens, in the order given.
///
/// Token validation is deferred to [`resolve`](StyleSpec::resolve), so a
/// `StyleSpec` can be built from any string; a bad token surfaces as
/// [`ColorError::UnknownStyle`] when it is used.
///
/// # Example
///
/// ```rust
/// use ansitint::StyleSpec;
///
/// let spec = StyleSpec::new("bold+underline");
/// assert_eq!(spec.resolve().unwrap(), vec![1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpec {
    spec: String,
}

impl StyleSpec {
    /// Creates a style spec from a single token or a `+`-joined compound.
    pub fn new(spec: impl Into<String>) -> Self {
        StyleSpec { spec: spec.into() }
    }

    /// Resolves the compound to SGR codes, preserving token order.
    pub fn resolve(&self) -> Result<Vec<u8>> {
        self.spec
            .split('+')
            .map(|token| TextStyle::parse(token).map(TextStyle::code))
            .collect()
    }
}

impl From<&str> for StyleSpec {
    fn from(spec: &str) -> Self {
        StyleSpec::new(spec)
    }
}

impl From<String> for StyleSpec {
    fn from(spec: String) -> Self {
        StyleSpec::new(spec)
    }
}

impl From<TextStyle> for StyleSpec {
    fn from(style: TextStyle) -> Self {
        StyleSpec::new(style.name())
    }
}
