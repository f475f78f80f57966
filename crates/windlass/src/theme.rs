//! Theme aliases — semantic names standing in for concrete colors.
//!
//! A host configures `"primary" → "purple"` once, components write
//! `"bg-primary-500"`, and the themer rewrites it to `"bg-purple-500"`
//! before any classification runs.
//!
//! Substitution is token-boundary aware: an alias only matches a whole
//! run of hyphen-delimited segments, so the alias `"red"` rewrites
//! `"bg-red-500"` but never touches `"bored"` or `"borderedge"`. Aliases
//! apply in insertion order, and each later alias sees the output of the
//! earlier ones — `"primary" → "brand"` followed by `"brand" → "purple"`
//! chains.

use indexmap::IndexMap;

/// Replace every whole-segment occurrence of `alias` inside one token.
fn replace_in_token(token: &str, alias: &str, color: &str) -> String {
    let segments: Vec<&str> = token.split('-').collect();
    let pattern: Vec<&str> = alias.split('-').collect();

    let mut out: Vec<&str> = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        if segments[i..].starts_with(pattern.as_slice()) {
            out.push(color);
            i += pattern.len();
        } else {
            out.push(segments[i]);
            i += 1;
        }
    }
    out.join("-")
}

/// Rewrite every alias in `classes` to its configured color name.
///
/// Aliases apply in the map's insertion order; whitespace is normalized
/// to single spaces. With an empty alias table this is just a re-join of
/// the tokenized input.
#[must_use]
pub fn apply_aliases(aliases: &IndexMap<String, String>, classes: &str) -> String {
    let tokens: Vec<String> = classes
        .split_whitespace()
        .map(|token| {
            let mut token = token.to_string();
            for (alias, color) in aliases {
                token = replace_in_token(&token, alias, color);
            }
            token
        })
        .collect();
    tokens.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn aliases(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(a, c)| ((*a).to_string(), (*c).to_string())).collect()
    }

    #[test]
    fn rewrites_alias_inside_token() {
        let map = aliases(&[("primary", "purple")]);
        assert_eq!(apply_aliases(&map, "bg-primary-500 shadow"), "bg-purple-500 shadow");
    }

    #[test]
    fn rewrites_bare_alias_token() {
        let map = aliases(&[("primary", "purple")]);
        assert_eq!(apply_aliases(&map, "primary rounded"), "purple rounded");
    }

    #[test]
    fn respects_segment_boundaries() {
        let map = aliases(&[("red", "rose")]);
        assert_eq!(apply_aliases(&map, "bored borderedge bg-red-500"), "bored borderedge bg-rose-500");
    }

    #[test]
    fn multi_hyphen_alias_matches_as_a_run() {
        let map = aliases(&[("brand-dark", "slate")]);
        assert_eq!(apply_aliases(&map, "bg-brand-dark-800"), "bg-slate-800");
    }

    #[test]
    fn multi_hyphen_replacement_color() {
        let map = aliases(&[("primary", "ocean-blue")]);
        assert_eq!(apply_aliases(&map, "text-primary-400"), "text-ocean-blue-400");
    }

    #[test]
    fn aliases_chain_in_insertion_order() {
        let map = aliases(&[("primary", "brand"), ("brand", "purple")]);
        assert_eq!(apply_aliases(&map, "bg-primary-500"), "bg-purple-500");
    }

    #[test]
    fn reversed_insertion_order_does_not_chain() {
        let map = aliases(&[("brand", "purple"), ("primary", "brand")]);
        assert_eq!(apply_aliases(&map, "bg-primary-500"), "bg-brand-500");
    }

    #[test]
    fn empty_table_normalizes_whitespace_only() {
        let map = aliases(&[]);
        assert_eq!(apply_aliases(&map, "  bg-blue-500   shadow "), "bg-blue-500 shadow");
    }

    #[test]
    fn replaces_every_occurrence_in_a_token() {
        let map = aliases(&[("primary", "purple")]);
        assert_eq!(apply_aliases(&map, "primary-primary"), "purple-purple");
    }
}
