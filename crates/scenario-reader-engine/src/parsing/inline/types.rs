use serde::Serialize;

use crate::parsing::span::Span;

/// The class of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    /// Text outside any recognized construct.
    Plain,
    /// Game-rule notation: `SAN值`, `1D4/1D8`, `1D6`, `IDEA`, `D100`, `MP1D6`, `POW50`.
    Emphasis,
    /// An angle-bracket run such as `<侦查>`.
    AngleCallout,
    /// A CJK lenticular-bracket run such as `【线索A】`.
    BracketCallout,
}

impl InlineKind {
    pub fn is_callout(self) -> bool {
        matches!(self, InlineKind::AngleCallout | InlineKind::BracketCallout)
    }
}

/// A highlighted run of text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineSpan<'a> {
    pub kind: InlineKind,
    /// The literal text, delimiters included for callouts.
    pub text: &'a str,
    /// Position of `text` within the input.
    #[serde(skip)]
    pub span: Span,
}
