//! The bound engine — vocabulary and aliases wrapped into one value.
//!
//! Everything vocabulary- or alias-dependent hangs off [`Styler`] so the
//! configuration is an explicit argument rather than hidden global state:
//! build one at startup, share it everywhere (it is `Send + Sync` and
//! never mutated), and call the same operations the free functions offer.
//! Pure string and tint operations ([`crate::clean::clean`],
//! [`crate::scale::darker`], …) stay free functions — they need no
//! configuration.

use indexmap::IndexMap;

use crate::clean::clean_colors;
use crate::config::{Config, ConfigError};
use crate::resolve::{find, find_any, get, get_or, main_color};
use crate::scale::Tint;
use crate::theme::apply_aliases;
use crate::token::{ColorParts, explode, is_color_token};
use crate::vocab::Vocabulary;

/// An immutable class-string engine bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Styler {
    vocab: Vocabulary,
    aliases: IndexMap<String, String>,
}

impl Styler {
    /// Bind a configuration, validating it.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyColorName`] for a blank extension color;
    /// - [`ConfigError::EmptyAliasName`] for a blank alias name;
    /// - [`ConfigError::UnknownAliasTarget`] when an alias points at a
    ///   color that is neither builtin nor configured.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if config.colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::EmptyColorName);
        }
        let vocab = Vocabulary::with_extensions(config.colors);

        for (alias, target) in &config.aliases {
            if alias.trim().is_empty() {
                return Err(ConfigError::EmptyAliasName);
            }
            if !vocab.contains(target) {
                return Err(ConfigError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }

        Ok(Self { vocab, aliases: config.aliases })
    }

    /// The bound vocabulary.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    // ── Classification ──────────────────────────────────────────────

    /// Classify a token; see [`crate::token::explode`].
    #[must_use]
    pub fn explode<'a>(&self, token: &'a str) -> Option<ColorParts<'a>> {
        explode(&self.vocab, token)
    }

    /// Returns `true` if `token` is a recognized color token.
    #[must_use]
    pub fn is_color_token(&self, token: &str) -> bool {
        is_color_token(&self.vocab, token)
    }

    /// Returns `true` if `classes` contains `token` exactly.
    #[must_use]
    pub fn has(&self, classes: &str, token: &str) -> bool {
        classes.split_whitespace().any(|t| t == token)
    }

    // ── Resolution ──────────────────────────────────────────────────

    /// Exact-or-prefixed lookup; see [`crate::resolve::find`].
    #[must_use]
    pub fn find<'a>(&self, classes: &'a str, target: &str) -> Option<&'a str> {
        find(classes, target)
    }

    /// First member of a candidate set; see [`crate::resolve::find_any`].
    #[must_use]
    pub fn find_any<'a>(&self, classes: &'a str, candidates: &[&str]) -> Option<&'a str> {
        find_any(classes, candidates)
    }

    /// Valid color token for a role prefix; see [`crate::resolve::get`].
    #[must_use]
    pub fn get<'a>(&self, classes: &'a str, prefix: &str) -> Option<&'a str> {
        get(&self.vocab, classes, prefix)
    }

    /// Role token with defaults; see [`crate::resolve::get_or`].
    #[must_use]
    pub fn get_or(
        &self,
        classes: &str,
        prefix: &str,
        default_color: &str,
        default_tint: Tint,
    ) -> String {
        get_or(&self.vocab, classes, prefix, default_color, default_tint)
    }

    /// Ambient color intent; see [`crate::resolve::main_color`].
    #[must_use]
    pub fn main_color<'a>(
        &self,
        classes: &'a str,
        default_color: &'a str,
        default_tint: Tint,
    ) -> (&'a str, Tint) {
        main_color(&self.vocab, classes, default_color, default_tint)
    }

    // ── Rewriting ───────────────────────────────────────────────────

    /// Substitute theme aliases; see [`crate::theme::apply_aliases`].
    #[must_use]
    pub fn theme(&self, classes: &str) -> String {
        apply_aliases(&self.aliases, classes)
    }

    /// Drop color-bearing tokens; see [`crate::clean::clean_colors`].
    #[must_use]
    pub fn clean_colors(&self, classes: &str) -> String {
        clean_colors(&self.vocab, classes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
