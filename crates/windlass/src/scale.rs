//! Tint arithmetic — stepping and inverting along the fixed shade scale.
//!
//! Utility-class frameworks grade every color into eleven tints, from the
//! near-white 50 up to the near-black 950. This module owns that scale and
//! the three operations defined over it:
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`darker`] / [`lighter`] | move N steps along the scale, clamped at both ends |
//! | [`invert`] | contrasting tint for text-on-background legibility |
//! | [`darker_class`] / [`lighter_class`] / [`invert_class`] | same, applied to the trailing tint of a whole class token |
//!
//! The scale never wraps: stepping past the darkest tint pins at 950,
//! stepping past the lightest pins at 50. A tint value that is not on the
//! scale passes through every operation unchanged, as does a class token
//! whose trailing segment is not a valid tint — malformed shade content is
//! a no-op, never an error.

use std::borrow::Cow;

/// A shade level on the tint scale.
pub type Tint = u16;

/// The eleven tint levels, ordered lightest to darkest.
///
/// Exactly these values, in this order, define what "one step" means for
/// [`darker`] and [`lighter`] and which values [`invert`] maps.
pub const TINT_SCALE: [Tint; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Returns `true` if `value` is one of the eleven scale tints.
#[must_use]
pub fn is_tint(value: Tint) -> bool {
    TINT_SCALE.contains(&value)
}

/// Parse a token segment as a tint.
///
/// The segment must parse as an integer *and* be a member of
/// [`TINT_SCALE`] — `"404"` is numeric but is not a tint.
#[must_use]
pub fn parse_tint(segment: &str) -> Option<Tint> {
    segment.parse().ok().filter(|t| is_tint(*t))
}

/// Index of `tint` on the scale, or `None` for off-scale values.
fn scale_index(tint: Tint) -> Option<usize> {
    TINT_SCALE.iter().position(|t| *t == tint)
}

/// Move `steps` toward the dark end of the scale, clamping at 950.
///
/// Off-scale tints pass through unchanged.
#[must_use]
pub fn darker(tint: Tint, steps: usize) -> Tint {
    match scale_index(tint) {
        Some(idx) => TINT_SCALE[(idx + steps).min(TINT_SCALE.len() - 1)],
        None => tint,
    }
}

/// Move `steps` toward the light end of the scale, clamping at 50.
///
/// Off-scale tints pass through unchanged.
#[must_use]
pub fn lighter(tint: Tint, steps: usize) -> Tint {
    match scale_index(tint) {
        Some(idx) => TINT_SCALE[idx.saturating_sub(steps)],
        None => tint,
    }
}

/// Contrasting tint for readable text on a background of `tint`.
///
/// This is a curated lookup, not a scale reversal: light backgrounds get a
/// mid-dark text tint (600–700), dark backgrounds get a near-white one
/// (50–200). Off-scale values pass through unchanged.
#[must_use]
pub const fn invert(tint: Tint) -> Tint {
    match tint {
        50 | 100 => 700,
        200 | 300 => 600,
        400 | 500 => 50,
        600 | 700 => 100,
        800 | 900 | 950 => 200,
        other => other,
    }
}

/// Apply a tint operation to the trailing tint segment of a class token.
///
/// Everything before the final `-` is preserved byte-for-byte, so prefixes
/// and multi-hyphen color names survive intact. Tokens that do not end in
/// a valid tint are returned borrowed, untouched.
fn map_class_tint(token: &str, op: impl Fn(Tint) -> Tint) -> Cow<'_, str> {
    let Some((stem, last)) = token.rsplit_once('-') else {
        return Cow::Borrowed(token);
    };
    let Some(tint) = parse_tint(last) else {
        return Cow::Borrowed(token);
    };
    let shifted = op(tint);
    if shifted == tint {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("{stem}-{shifted}"))
    }
}

/// [`darker`] applied to the trailing tint of `token`.
///
/// `darker_class("bg-blue-500", 2)` is `"bg-blue-700"`; a token without a
/// valid trailing tint is a no-op.
#[must_use]
pub fn darker_class(token: &str, steps: usize) -> Cow<'_, str> {
    map_class_tint(token, |t| darker(t, steps))
}

/// [`lighter`] applied to the trailing tint of `token`.
#[must_use]
pub fn lighter_class(token: &str, steps: usize) -> Cow<'_, str> {
    map_class_tint(token, |t| lighter(t, steps))
}

/// [`invert`] applied to the trailing tint of `token`.
#[must_use]
pub fn invert_class(token: &str) -> Cow<'_, str> {
    map_class_tint(token, invert)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
