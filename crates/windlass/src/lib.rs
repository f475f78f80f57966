//! # windlass — utility-class string engine
//!
//! Interprets and rewrites CSS utility-class strings that follow the
//! `prefix-color-tint` naming convention. Component authors encode
//! styling intent in one space-delimited string; at render time the
//! engine extracts, overrides, recolors, and strips tokens from it.
//!
//! # Pipeline
//!
//! ```text
//! raw class string
//!     │
//!     ▼
//! theme.rs:   alias substitution ("primary" → "purple")
//!     │
//!     ▼
//! token.rs:   tokenize + classify ([prefix-]color[-tint])
//!     │
//!     ▼
//! resolve.rs: effective token per semantic role, with defaults
//! scale.rs:   tint stepping and contrast inversion
//!     │
//!     ▼
//! clean.rs:   strip overridden/ambient tokens
//!     │
//!     ▼
//! output string, consumed by the component layer
//! ```
//!
//! Every operation is a pure function of its input and the configuration
//! bound at startup. Nothing is cached, nothing is mutated, and malformed
//! class content is never an error — unknown colors and off-scale tints
//! degrade to "use the caller's default" or "return the input unchanged".
//! The only fallible surface is configuration validation.
//!
//! # Example
//!
//! ```
//! use windlass::{Config, Styler, darker_class};
//!
//! let styler = Styler::new(Config::from_json(
//!     r#"{ "aliases": { "primary": "purple" } }"#,
//! ).unwrap()).unwrap();
//!
//! let classes = styler.theme("rounded bg-primary-200 text-gray");
//! assert_eq!(styler.get(&classes, "bg"), Some("bg-purple-200"));
//! assert_eq!(styler.get_or(&classes, "text", "slate", 700), "text-gray-700");
//! assert_eq!(darker_class("bg-purple-200", 2), "bg-purple-400");
//! ```

pub mod clean;
pub mod config;
pub mod resolve;
pub mod scale;
pub mod styler;
pub mod theme;
pub mod token;
pub mod vocab;

pub use clean::{clean, clean_colors, clean_prefix};
pub use config::{Config, ConfigError};
pub use resolve::{find, find_any, get, get_or, main_color};
pub use scale::{
    TINT_SCALE, Tint, darker, darker_class, invert, invert_class, is_tint, lighter, lighter_class,
    parse_tint,
};
pub use styler::Styler;
pub use theme::apply_aliases;
pub use token::{ColorParts, explode, is_color_token, join, tokenize};
pub use vocab::{BUILTIN_COLORS, Vocabulary};
