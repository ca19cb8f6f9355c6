//! Escape-sequence assembly and stripping.
//!
//! [`colorize`] is the single entry point: it resolves the foreground,
//! background, and style specifications independently, joins the resulting
//! SGR parameters with `;` (in fg, bg, style order), and wraps the text as
//! `ESC[<params>m<text>ESC[0m`. With no specifications at all the text is
//! returned unchanged, with no escape wrapping.
//!
//! [`strip_colors`] is the inverse: it removes every SGR sequence
//! (`ESC[` + digits/semicolons + `m`) and leaves everything else intact,
//! so `strip_colors(colorize(text, ..)?) == text` for any text that does
//! not itself contain escape sequences.
//!
//! [`Painter`] captures a partially applied set of arguments for reuse.
//!
//! # Example
//!
//! ```rust
//! use ansitint::{colorize, strip_colors};
//!
//! let styled = colorize(
//!     "some text",
//!     Some("red".into()),
//!     Some("yellow".into()),
//!     Some("underline".into()),
//! ).unwrap();
//! assert_eq!(styled, "\x1b[31;43;4msome text\x1b[0m");
//! assert_eq!(strip_colors(&styled), "some text");
//! ```

use crate::color::{ColorSpec, Role};
use crate::error::Result;
use crate::style::StyleSpec;

const ESC: char = '\u{1b}';

/// Renders `text` wrapped in the escape sequence for the given
/// foreground, background, and style specifications.
///
/// Any resolver failure aborts the whole call; there is no partial
/// output. If no specification is given the text is returned unchanged.
pub fn colorize(
    text: &str,
    fg: Option<ColorSpec>,
    bg: Option<ColorSpec>,
    style: Option<StyleSpec>,
) -> Result<String> {
    let mut params: Vec<u8> = Vec::new();
    if let Some(fg) = fg {
        params.extend(fg.resolve(Role::Foreground)?);
    }
    if let Some(bg) = bg {
        params.extend(bg.resolve(Role::Background)?);
    }
    if let Some(style) = style {
        params.extend(style.resolve()?);
    }

    if params.is_empty() {
        return Ok(text.to_string());
    }
    Ok(wrap(text, &params))
}

/// Wraps `text` in an SGR sequence with the given parameters and a
/// trailing reset.
pub(crate) fn wrap(text: &str, params: &[u8]) -> String {
    let joined = params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";");
    format!("\x1b[{}m{}\x1b[0m", joined, text)
}

/// Removes every SGR escape sequence from `text`.
///
/// Only sequences of the form `ESC[` + digits/semicolons + `m` are
/// removed; all other characters, including non-SGR escape sequences,
/// pass through in their original order.
pub fn strip_colors(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(ESC) {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match sgr_sequence_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                output.push(ESC);
                rest = &tail[ESC.len_utf8()..];
            }
        }
    }
    output.push_str(rest);
    output
}

/// Byte length of the SGR sequence at the start of `s`, if one is there.
fn sgr_sequence_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix("\u{1b}[")?;
    let params = body
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b';')
        .count();
    match body.as_bytes().get(params) {
        Some(b'm') => Some(2 + params + 1),
        _ => None,
    }
}

/// Display width of `text` once escape sequences are removed.
///
/// Uses Unicode width rules, so CJK and other wide characters count as
/// two columns.
///
/// # Example
///
/// ```rust
/// use ansitint::{colorize, visible_width};
///
/// let styled = colorize("héllo", Some("red".into()), None, None).unwrap();
/// assert_eq!(visible_width(&styled), 5);
/// ```
pub fn visible_width(text: &str) -> usize {
    use unicode_width::UnicodeWidthStr;

    strip_colors(text).width()
}

/// A partially applied set of coloring arguments.
///
/// Builder methods *replace* the captured value for their field, so a
/// pre-bound painter can be specialized further before painting; painting
/// is equivalent to calling [`colorize`] with the captured arguments.
///
/// # Example
///
/// ```rust
/// use ansitint::Painter;
///
/// let important = Painter::new().fg("red").style("bold+underline");
/// assert_eq!(
///     important.paint("very important").unwrap(),
///     "\x1b[31;1;4mvery important\x1b[0m"
/// );
///
/// // Specialize a base painter without touching the original.
/// let boldul = Painter::new().style("bold+underline");
/// assert_eq!(
///     boldul.clone().fg("red").paint("very important").unwrap(),
///     important.paint("very important").unwrap()
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Painter {
    fg: Option<ColorSpec>,
    bg: Option<ColorSpec>,
    style: Option<StyleSpec>,
}

impl Painter {
    /// Creates a painter with nothing bound; painting with it returns the
    /// text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the foreground color.
    pub fn fg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets (or replaces) the background color.
    pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Sets (or replaces) the style compound. A later call replaces the
    /// whole compound; compounds are never merged.
    pub fn style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Renders `text` with the captured arguments.
    pub fn paint(&self, text: &str) -> Result<String> {
        colorize(text, self.fg.clone(), self.bg.clone(), self.style.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    // =========================================================================
    // colorize tests
    // =========================================================================

    #[test]
    fn test_no_arguments_is_identity() {
        assert_eq!(colorize("RED", None, None, None).unwrap(), "RED");
        assert_eq!(colorize("", None, None, None).unwrap(), "");
    }

    #[test]
    fn test_foreground_only() {
        assert_eq!(
            colorize("RED", Some("red".into()), None, None).unwrap(),
            "\x1b[31mRED\x1b[0m"
        );
    }

    #[test]
    fn test_style_only() {
        assert_eq!(
            colorize("BOLD", None, None, Some("bold".into())).unwrap(),
            "\x1b[1mBOLD\x1b[0m"
        );
    }

    #[test]
    fn test_fragment_order_is_fg_bg_style() {
        assert_eq!(
            colorize(
                "some text",
                Some("red".into()),
                Some("yellow".into()),
                Some("underline".into())
            )
            .unwrap(),
            "\x1b[31;43;4msome text\x1b[0m"
        );
    }

    #[test]
    fn test_multi_part_fragments_keep_inner_semicolons() {
        assert_eq!(
            colorize("PINK/GRAY", Some("pink".into()), Some("gray".into()), None).unwrap(),
            "\x1b[38;2;255;192;203;48;2;128;128;128mPINK/GRAY\x1b[0m"
        );
    }

    #[test]
    fn test_error_aborts_whole_call() {
        let result = colorize(
            "text",
            Some("red".into()),
            Some("bozo".into()),
            Some("bold".into()),
        );
        assert_eq!(result.unwrap_err(), ColorError::UnknownColor("bozo".to_string()));
    }

    // =========================================================================
    // strip tests
    // =========================================================================

    #[test]
    fn test_strip_plain_text_unchanged() {
        assert_eq!(strip_colors("hello world"), "hello world");
        assert_eq!(strip_colors(""), "");
    }

    #[test]
    fn test_strip_single_sequence() {
        assert_eq!(strip_colors("\x1b[31mRED\x1b[0m"), "RED");
    }

    #[test]
    fn test_strip_multi_part_sequences() {
        assert_eq!(
            strip_colors("\x1b[38;2;255;192;203;48;2;128;128;128mPINK\x1b[0m"),
            "PINK"
        );
    }

    #[test]
    fn test_strip_adjacent_sequences() {
        assert_eq!(strip_colors("\x1b[31ma\x1b[0m\x1b[32mb\x1b[0m"), "ab");
    }

    #[test]
    fn test_strip_empty_parameter_form() {
        assert_eq!(strip_colors("a\x1b[mb"), "ab");
    }

    #[test]
    fn test_strip_leaves_non_sgr_escapes() {
        // Cursor-up is CSI ... A, not an SGR sequence.
        assert_eq!(strip_colors("a\x1b[2Ab"), "a\x1b[2Ab");
        // A bare escape passes through.
        assert_eq!(strip_colors("a\x1bb"), "a\x1bb");
        // Truncated sequence at end of input.
        assert_eq!(strip_colors("a\x1b[31"), "a\x1b[31");
    }

    #[test]
    fn test_strip_multibyte_text() {
        let styled = colorize("héllo wörld", Some("red".into()), None, None).unwrap();
        assert_eq!(strip_colors(&styled), "héllo wörld");
    }

    // =========================================================================
    // visible_width tests
    // =========================================================================

    #[test]
    fn test_visible_width_ignores_escapes() {
        let styled = colorize("hello", Some("red".into()), Some("blue".into()), None).unwrap();
        assert_eq!(visible_width(&styled), 5);
    }

    #[test]
    fn test_visible_width_wide_characters() {
        let styled = colorize("日本", Some("red".into()), None, None).unwrap();
        assert_eq!(visible_width(&styled), 4);
    }

    // =========================================================================
    // Painter tests
    // =========================================================================

    #[test]
    fn test_painter_matches_direct_call() {
        let important = Painter::new().fg("red").style("bold+underline");
        assert_eq!(
            important.paint("very important").unwrap(),
            colorize(
                "very important",
                Some("red".into()),
                None,
                Some("bold+underline".into())
            )
            .unwrap()
        );
    }

    #[test]
    fn test_painter_empty_is_identity() {
        assert_eq!(Painter::new().paint("text").unwrap(), "text");
    }

    #[test]
    fn test_painter_field_override_replaces() {
        let painter = Painter::new().fg("red").fg("blue");
        assert_eq!(painter.paint("x").unwrap(), "\x1b[34mx\x1b[0m");

        // Style override replaces the whole compound.
        let painter = Painter::new().style("bold+underline").style("dim");
        assert_eq!(painter.paint("x").unwrap(), "\x1b[2mx\x1b[0m");
    }

    #[test]
    fn test_painter_specialization_leaves_base_intact() {
        let boldul = Painter::new().style("bold+underline");
        let red = boldul.clone().fg("red");
        assert_eq!(red.paint("t").unwrap(), "\x1b[31;1;4mt\x1b[0m");
        assert_eq!(boldul.paint("t").unwrap(), "\x1b[1;4mt\x1b[0m");
    }

    #[test]
    fn test_painter_reports_bound_errors_at_paint_time() {
        let painter = Painter::new().fg("bozo");
        assert!(matches!(
            painter.paint("t"),
            Err(ColorError::UnknownColor(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Text without escape characters, so the strip inverse holds.
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"éñ日]{0,40}"
    }

    fn any_fg() -> impl Strategy<Value = Option<ColorSpec>> {
        prop_oneof![
            Just(None),
            Just(Some(ColorSpec::Named("red".to_string()))),
            Just(Some(ColorSpec::Named("bright_cyan".to_string()))),
            Just(Some(ColorSpec::Named("peachpuff".to_string()))),
            Just(Some(ColorSpec::Named("default".to_string()))),
            (0i64..=255).prop_map(|n| Some(ColorSpec::Index(n))),
            (0u8..=255u8, 0u8..=255u8, 0u8..=255u8)
                .prop_map(|(r, g, b)| Some(ColorSpec::Rgb(r as i64, g as i64, b as i64))),
        ]
    }

    fn any_style() -> impl Strategy<Value = Option<StyleSpec>> {
        prop_oneof![
            Just(None),
            Just(Some(StyleSpec::new("bold"))),
            Just(Some(StyleSpec::new("bold+underline"))),
            Just(Some(StyleSpec::new("dim+blink+reverse"))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn strip_inverts_colorize(
            text in plain_text(),
            fg in any_fg(),
            bg in any_fg(),
            style in any_style()
        ) {
            let styled = colorize(&text, fg, bg, style).unwrap();
            prop_assert_eq!(strip_colors(&styled), text);
        }

        #[test]
        fn strip_never_panics(text in ".*") {
            let _ = strip_colors(&text);
        }

        #[test]
        fn colorized_output_wraps_text(text in plain_text(), fg in any_fg()) {
            let styled = colorize(&text, fg.clone(), None, None).unwrap();
            prop_assert!(styled.contains(&text));
            if fg.is_some() {
                prop_assert!(styled.starts_with('\u{1b}'), "styled output should start with ESC");
                prop_assert!(styled.ends_with("\u{1b}[0m"), "styled output should end with reset");
            }
        }
    }
}
