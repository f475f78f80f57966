//! Resolving the effective token for a semantic role.
//!
//! Component code asks questions like "which background color did the
//! caller request, if any, and what should I fall back to?". All five
//! resolvers share the same ground rules:
//!
//! - first match wins, in the order the class string lists its tokens;
//! - absence is never an error — the answer is `None` or the supplied
//!   default, never a panic;
//! - a prefixed match must actually carry a recognized `color[-tint]`
//!   remainder, so `"bg-monster"` and `"bg-blue-404"` do not count as a
//!   background color any more than `"bg-less"` would.

use crate::scale::Tint;
use crate::token::{ColorParts, explode};
use crate::vocab::Vocabulary;

/// Strip `prefix` plus the joining hyphen from `token`.
fn strip_role<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token.strip_prefix(prefix)?.strip_prefix('-')
}

/// Classify `token` as `prefix-color[-tint]` for the given role prefix.
fn role_color<'a>(vocab: &Vocabulary, token: &'a str, prefix: &str) -> Option<ColorParts<'a>> {
    let rest = strip_role(token, prefix)?;
    explode(vocab, rest).filter(|parts| parts.prefix.is_none())
}

/// Find `target` in the class string, by exact token or `target-` prefix.
///
/// An exact occurrence anywhere in the list beats a prefixed occurrence
/// earlier in it. No vocabulary check is applied — this is the resolver
/// for non-color roles like `"rounded"` or `"shadow"`.
#[must_use]
pub fn find<'a>(classes: &'a str, target: &str) -> Option<&'a str> {
    let mut prefixed = None;
    for token in classes.split_whitespace() {
        if token == target {
            return Some(token);
        }
        if prefixed.is_none() && strip_role(token, target).is_some() {
            prefixed = Some(token);
        }
    }
    prefixed
}

/// First token that is a member of `candidates`.
///
/// Used for closed bare-token sets such as size names (`"sm"`, `"lg"`).
#[must_use]
pub fn find_any<'a>(classes: &'a str, candidates: &[&str]) -> Option<&'a str> {
    classes.split_whitespace().find(|token| candidates.contains(token))
}

/// First token carrying a valid color for the given role prefix.
///
/// The remainder after `prefix-` must classify as a bare `color[-tint]`,
/// so malformed tints and unknown colors fall through:
/// `get(v, "thing bg-blue-404 else", "bg")` is `None`.
#[must_use]
pub fn get<'a>(vocab: &Vocabulary, classes: &'a str, prefix: &str) -> Option<&'a str> {
    classes
        .split_whitespace()
        .find(|token| role_color(vocab, token, prefix).is_some())
}

/// Like [`get`], but always produces a fully tinted token.
///
/// - no match: synthesize `"{prefix}-{default_color}-{default_tint}"`;
/// - a match without a tint: append `-{default_tint}`;
/// - a match with a tint: returned verbatim.
#[must_use]
pub fn get_or(
    vocab: &Vocabulary,
    classes: &str,
    prefix: &str,
    default_color: &str,
    default_tint: Tint,
) -> String {
    for token in classes.split_whitespace() {
        if let Some(parts) = role_color(vocab, token, prefix) {
            return if parts.tint.is_some() {
                token.to_string()
            } else {
                format!("{token}-{default_tint}")
            };
        }
    }
    format!("{prefix}-{default_color}-{default_tint}")
}

/// Discover the ambient color intent of a class string.
///
/// Scans for a bare known color first (paired with `default_tint`), then
/// for a bare `color-tint` token, then falls back to the supplied pair.
/// Unlike [`get`], no role prefix is involved — this finds color intent
/// that is not tied to any CSS property.
#[must_use]
pub fn main_color<'a>(
    vocab: &Vocabulary,
    classes: &'a str,
    default_color: &'a str,
    default_tint: Tint,
) -> (&'a str, Tint) {
    for token in classes.split_whitespace() {
        if vocab.contains(token) {
            return (token, default_tint);
        }
    }
    for token in classes.split_whitespace() {
        if let Some(ColorParts { prefix: None, color, tint: Some(tint) }) = explode(vocab, token) {
            return (color, tint);
        }
    }
    (default_color, default_tint)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
