//! Removing tokens from a class string.
//!
//! Components strip caller-supplied classes before substituting their own
//! — drop the explicit `bg-*` override, drop every bare color hint, then
//! append the resolved replacements. All three cleaners are pure filters:
//! survivors keep their original order, and the result is re-joined with
//! single spaces.

use crate::vocab::Vocabulary;
use std::collections::HashMap;

/// Remove exact-match tokens, multiset style.
///
/// Each entry in `remove` cancels at most one occurrence in `classes`, so
/// `clean("a a b", "a")` keeps one `"a"`.
#[must_use]
pub fn clean(classes: &str, remove: &str) -> String {
    let mut budget: HashMap<&str, usize> = HashMap::new();
    for token in remove.split_whitespace() {
        *budget.entry(token).or_insert(0) += 1;
    }

    let mut kept = Vec::new();
    for token in classes.split_whitespace() {
        match budget.get_mut(token) {
            Some(n) if *n > 0 => *n -= 1,
            _ => kept.push(token),
        }
    }
    kept.join(" ")
}

/// Drop every token starting with any `prefix-` from `prefixes`.
///
/// A bare token equal to a prefix is kept: `clean_prefix("bg x", "bg")`
/// keeps `"bg"`, because only the hyphenated role form is targeted.
#[must_use]
pub fn clean_prefix(classes: &str, prefixes: &str) -> String {
    let prefixes: Vec<&str> = prefixes.split_whitespace().collect();
    let kept: Vec<&str> = classes
        .split_whitespace()
        .filter(|token| {
            !prefixes
                .iter()
                .any(|p| token.strip_prefix(p).is_some_and(|rest| rest.starts_with('-')))
        })
        .collect();
    kept.join(" ")
}

/// Drop every token that starts with a known color name.
///
/// Matching is starts-with, not exact classification, so `"blue-500"`,
/// bare `"blue"` and even `"blueish"` all go. Idempotent by construction.
#[must_use]
pub fn clean_colors(vocab: &Vocabulary, classes: &str) -> String {
    let kept: Vec<&str> = classes
        .split_whitespace()
        .filter(|token| !vocab.starts_with_color(token))
        .collect();
    kept.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── clean ───────────────────────────────────────────────────────

    #[test]
    fn clean_removes_exact_tokens() {
        assert_eq!(clean("thing needle something", "needle"), "thing something");
    }

    #[test]
    fn clean_is_multiset_difference() {
        assert_eq!(clean("a a b a", "a a"), "b a");
        assert_eq!(clean("a b", "a a a"), "b");
    }

    #[test]
    fn clean_removes_several_targets() {
        assert_eq!(clean("x y z", "z x"), "y");
    }

    #[test]
    fn clean_without_matches_is_identity_modulo_whitespace() {
        assert_eq!(clean("  a   b ", "c"), "a b");
        assert_eq!(clean("a b", ""), "a b");
    }

    // ── clean_prefix ────────────────────────────────────────────────

    #[test]
    fn clean_prefix_drops_role_tokens() {
        assert_eq!(clean_prefix("thing bg-blue-500 something", "bg"), "thing something");
    }

    #[test]
    fn clean_prefix_handles_several_prefixes() {
        assert_eq!(clean_prefix("bg-red-500 text-blue-600 shadow", "bg text"), "shadow");
    }

    #[test]
    fn clean_prefix_requires_the_hyphen() {
        assert_eq!(clean_prefix("bg bgx bg-red", "bg"), "bg bgx");
    }

    // ── clean_colors ────────────────────────────────────────────────

    #[test]
    fn clean_colors_drops_bare_and_tinted() {
        let vocab = Vocabulary::builtin();
        assert_eq!(clean_colors(&vocab, "shadow blue red-500 rounded"), "shadow rounded");
    }

    #[test]
    fn clean_colors_keeps_prefixed_tokens() {
        let vocab = Vocabulary::builtin();
        assert_eq!(clean_colors(&vocab, "bg-blue-500 blue"), "bg-blue-500");
    }

    #[test]
    fn clean_colors_is_eager_on_starts_with() {
        let vocab = Vocabulary::builtin();
        assert_eq!(clean_colors(&vocab, "blueish thing"), "thing");
    }

    #[test]
    fn clean_colors_is_idempotent() {
        let vocab = Vocabulary::builtin();
        let once = clean_colors(&vocab, "shadow blue red-500 blueish rounded");
        let twice = clean_colors(&vocab, &once);
        assert_eq!(once, twice);
    }
}
