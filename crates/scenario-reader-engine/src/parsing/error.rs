/// Failure to compile the highlighter or stat block patterns.
///
/// Only reachable when an extended attribute allowlist pushes a pattern past
/// the regex size limits; the standard allowlist always compiles.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Failed to compile {what} pattern: {source}")]
    Compile {
        what: &'static str,
        source: regex::Error,
    },
}
