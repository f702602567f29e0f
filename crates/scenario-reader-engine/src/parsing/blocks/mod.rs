//! # Text Block Classification
//!
//! Plain-text content blocks carry their own markers: a `####` heading, a
//! `---` rule, or a bare number marking a numbered section break. Anything
//! else is a paragraph and is highlighted inline.

pub mod classify;

pub use classify::{TextBlock, classify};
