pub mod chapter;
pub mod scenario;

pub use chapter::{Chapter, ContentBlock};
pub use scenario::{Scenario, TocGroup};
