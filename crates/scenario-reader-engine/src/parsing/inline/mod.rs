//! # Inline Highlighting
//!
//! Splits a paragraph into typed spans: plain text, emphasized game notation
//! (sanity checks, dice rolls, attribute rolls) and two kinds of callout.
//!
//! ## Modules
//!
//! - **`types`**: `InlineKind` tag and the borrowed `InlineSpan`
//! - **`kinds`**: delimiters and notation patterns, owned by the construct they describe
//! - **`parser`**: `Highlighter` and the `highlight()` entry point
//!
//! ## Precedence
//!
//! Callouts come first and are raw zones: `【1D4/1D8】` is a single bracket
//! callout, never a callout with an emphasized roll inside. Within the
//! notation alternatives the leftmost alternative wins at a given position,
//! so `1D4/1D8` is one dice range rather than two single-die rolls.
//!
//! ## Round Trip
//!
//! Concatenating the text of every span reproduces the input exactly.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{Highlighter, concat, highlight};
pub use types::{InlineKind, InlineSpan};
