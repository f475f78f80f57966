//! Color vocabulary — the set of names a token may legally carry.
//!
//! The builtin list is the standard utility-framework palette (the 22
//! graded color families). Hosts extend it at configuration time with
//! their own names, which may contain hyphens (`"ocean-blue"`,
//! `"brand-dark"`) — that possibility is what makes token classification
//! a search rather than a fixed-arity split (see [`crate::token`]).

use std::collections::HashSet;

/// The builtin graded color families.
pub const BUILTIN_COLORS: [&str; 22] = [
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// The set of known color names: builtins plus configured extensions.
///
/// Built once at startup and never mutated afterwards; every classifier
/// and resolver call borrows it read-only, so it is freely shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    names: HashSet<String>,
}

impl Vocabulary {
    /// The builtin palette with no extensions.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_extensions(std::iter::empty::<String>())
    }

    /// The builtin palette extended with additional color names.
    #[must_use]
    pub fn with_extensions<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> =
            BUILTIN_COLORS.iter().map(ToString::to_string).collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    /// Returns `true` if `name` is a known color, builtin or configured.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `true` if `token` begins with any known color name.
    ///
    /// This is the deliberately loose membership test the color cleaner
    /// uses: `"blueish"` starts with `"blue"` and therefore matches. Exact
    /// classification goes through [`crate::token::explode`] instead.
    #[must_use]
    pub fn starts_with_color(&self, token: &str) -> bool {
        self.names.iter().any(|name| token.starts_with(name.as_str()))
    }

    /// Iterate over every known color name, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of known color names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the vocabulary is empty (never the case once
    /// builtins are loaded).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palette_is_known() {
        let vocab = Vocabulary::builtin();
        for name in BUILTIN_COLORS {
            assert!(vocab.contains(name), "builtin '{name}' missing");
        }
        assert_eq!(vocab.len(), BUILTIN_COLORS.len());
    }

    #[test]
    fn unknown_names_are_rejected() {
        let vocab = Vocabulary::builtin();
        assert!(!vocab.contains("monster"));
        assert!(!vocab.contains("bg"));
        assert!(!vocab.contains(""));
    }

    #[test]
    fn extensions_are_known() {
        let vocab = Vocabulary::with_extensions(["ocean-blue", "brand"]);
        assert!(vocab.contains("ocean-blue"));
        assert!(vocab.contains("brand"));
        assert!(vocab.contains("blue"), "extension must not displace builtins");
    }

    #[test]
    fn starts_with_is_loose() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.starts_with_color("blue"));
        assert!(vocab.starts_with_color("blueish"));
        assert!(vocab.starts_with_color("red-500"));
        assert!(!vocab.starts_with_color("bg-blue"));
        assert!(!vocab.starts_with_color("woof"));
    }

    #[test]
    fn duplicate_extensions_collapse() {
        let vocab = Vocabulary::with_extensions(["blue", "blue", "brand"]);
        assert_eq!(vocab.len(), BUILTIN_COLORS.len() + 1);
    }
}
