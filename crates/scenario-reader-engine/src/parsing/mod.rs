pub mod attributes;
pub mod blocks;
pub mod error;
pub mod inline;
pub mod span;
pub mod statblock;

use attributes::AttributeSet;
use error::PatternError;
use inline::{Highlighter, InlineSpan};
use statblock::{StatBlock, StatBlockParser};

/// The two content transformations, compiled for one attribute allowlist.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct ContentParser {
    highlighter: Highlighter,
    stat_blocks: StatBlockParser,
}

impl ContentParser {
    pub fn new(attributes: &AttributeSet) -> Result<Self, PatternError> {
        Ok(Self {
            highlighter: Highlighter::new(attributes)?,
            stat_blocks: StatBlockParser::new(attributes)?,
        })
    }

    pub fn highlight<'a>(&self, text: &'a str) -> Vec<InlineSpan<'a>> {
        self.highlighter.highlight(text)
    }

    pub fn parse_stat_block(&self, blob: &str) -> StatBlock {
        self.stat_blocks.parse(blob)
    }
}
