//! # Stat Block Parsing
//!
//! Turns a loosely formatted, multi-line character or creature record into a
//! structured [`StatBlock`] for display.
//!
//! ## Modules
//!
//! - **`types`**: `StatBlock`, `Stat`, `Weapon`
//! - **`markers`**: line markers and vocabulary (`武器：`, `技能：`, `装甲：`, ...)
//! - **`rules`**: the ordered rule table driving extraction
//! - **`parser`**: `StatBlockParser` and the `parse_stat_block()` entry point
//!
//! ## Failure Semantics
//!
//! Parsing never fails. A sparse or malformed record yields a `StatBlock`
//! with empty fields; callers treat empty as "not present".

pub mod markers;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::{StatBlockParser, parse_stat_block};
pub use rules::{Cardinality, RULES, Rule, RuleKind};
pub use types::{Stat, StatBlock, Weapon};
