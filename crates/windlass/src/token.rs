//! Tokenizing and classifying class tokens.
//!
//! A class string is a whitespace-joined list of tokens, each shaped
//! `[prefix-]color[-tint]` — but hyphens also occur *inside* configured
//! color names, so classification cannot split on a fixed arity. The
//! classifier resolves the ambiguity by searching decompositions:
//!
//! 1. If the trailing segment parses as a scale tint, consume it.
//! 2. If the whole remainder is a known color, it is a bare color token.
//! 3. Otherwise the first segment is tentatively a prefix and the rest
//!    (however many hyphens it contains) must be a known color.
//!
//! Anything that fits none of these is not a color token at all:
//! `"woof"`, `"woof-500"`, `"bg-monster"` and `"bg-blue-404"` all
//! classify as [`None`].

use crate::scale::{Tint, parse_tint};
use crate::vocab::Vocabulary;

/// Split a class string into its tokens.
///
/// Splits on any run of whitespace and discards empty segments, so the
/// result is stable under re-joining: `tokenize(&join(&tokenize(s)))`
/// equals `tokenize(s)`.
#[must_use]
pub fn tokenize(classes: &str) -> Vec<&str> {
    classes.split_whitespace().collect()
}

/// Join tokens back into a class string with single spaces.
#[must_use]
pub fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// The decomposition of a color-bearing class token.
///
/// A bare color token (`"blue"`) has neither prefix nor tint; a fully
/// qualified one (`"text-red-400"`) has both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorParts<'a> {
    /// The CSS-property role segment (`"bg"`, `"text"`, `"ring"`), if any.
    pub prefix: Option<&'a str>,
    /// The color name, possibly multi-hyphen.
    pub color: &'a str,
    /// The trailing scale tint, if any.
    pub tint: Option<Tint>,
}

/// Classify `token` against the vocabulary.
///
/// Returns `None` for anything that is not a recognized color token,
/// including structurally plausible impostors like `"woof-500"` (unknown
/// color) and `"bg-blue-404"` (off-scale tint, so the `404` is treated as
/// part of the color name — which then fails the vocabulary test).
///
/// The whole stem is tried as a color before any prefix split, so a
/// configured multi-hyphen color wins over a shorter prefixed reading.
#[must_use]
pub fn explode<'a>(vocab: &Vocabulary, token: &'a str) -> Option<ColorParts<'a>> {
    // 1. Peel a trailing tint if there is one.
    let (stem, tint) = match token.rsplit_once('-') {
        Some((stem, last)) => match parse_tint(last) {
            Some(t) => (stem, Some(t)),
            None => (token, None),
        },
        None => (token, None),
    };

    // 2. Whole stem as a bare color.
    if vocab.contains(stem) {
        return Some(ColorParts { prefix: None, color: stem, tint });
    }

    // 3. First segment as prefix, remainder as color.
    let (prefix, rest) = stem.split_once('-')?;
    if vocab.contains(rest) {
        return Some(ColorParts { prefix: Some(prefix), color: rest, tint });
    }
    None
}

/// Returns `true` if [`explode`] recognizes `token` as a color token.
#[must_use]
pub fn is_color_token(vocab: &Vocabulary, token: &str) -> bool {
    explode(vocab, token).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
