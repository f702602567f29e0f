//! # Inline Kinds
//!
//! Each construct owns its syntax: delimiters live with the callout types,
//! notation patterns with `Notation`. The parser composes these; it never
//! hardcodes `【` or `1D`.

pub mod callout;
pub mod notation;

pub use callout::{AngleCallout, BracketCallout};
pub use notation::Notation;
