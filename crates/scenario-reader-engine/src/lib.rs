pub mod io;
pub mod models;
pub mod parsing;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{LoadError, load_scenario};
pub use models::{Chapter, ContentBlock, Scenario, TocGroup};
pub use parsing::{
    ContentParser,
    attributes::AttributeSet,
    error::PatternError,
    inline::{InlineKind, InlineSpan, highlight},
    statblock::{Stat, StatBlock, Weapon, parse_stat_block},
};
pub use snapshot::{ChapterSnapshot, ViewBlock};
