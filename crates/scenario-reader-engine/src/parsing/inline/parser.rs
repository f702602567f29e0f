use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{attributes::AttributeSet, error::PatternError, span::Span};

use super::{
    kinds::{AngleCallout, BracketCallout, Notation},
    types::{InlineKind, InlineSpan},
};

const ANGLE: &str = "angle";
const BRACKET: &str = "bracket";
const EMPHASIS: &str = "emphasis";

/// Compiled inline highlighter.
///
/// One combined, case-insensitive alternation with a named group per class.
/// The class of a span is decided by the group that matched, so callout
/// content is never looked at again.
#[derive(Debug, Clone)]
pub struct Highlighter {
    re: Regex,
}

impl Highlighter {
    /// Builds a highlighter whose attribute-roll emphasis covers `attributes`.
    pub fn new(attributes: &AttributeSet) -> Result<Self, PatternError> {
        let pattern = format!(
            "(?i)(?P<{ANGLE}>{})|(?P<{BRACKET}>{})|(?P<{EMPHASIS}>{})",
            AngleCallout::pattern(),
            BracketCallout::pattern(),
            Notation::pattern(attributes),
        );
        let re = Regex::new(&pattern).map_err(|source| PatternError::Compile {
            what: "inline highlight",
            source,
        })?;
        log::debug!(
            "compiled inline highlighter for {} attributes",
            attributes.len()
        );
        Ok(Self { re })
    }

    /// Splits `text` into spans covering it exactly, in order.
    ///
    /// Empty input yields no spans; no span is ever empty. Unclosed `<` or
    /// `【` stays in the surrounding plain text.
    pub fn highlight<'a>(&self, text: &'a str) -> Vec<InlineSpan<'a>> {
        let mut out = vec![];
        let mut text_start = 0;

        for caps in self.re.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if m.is_empty() {
                continue;
            }
            flush_plain(&mut out, text, text_start, m.start());

            let kind = if caps.name(ANGLE).is_some() {
                InlineKind::AngleCallout
            } else if caps.name(BRACKET).is_some() {
                InlineKind::BracketCallout
            } else {
                InlineKind::Emphasis
            };
            out.push(InlineSpan {
                kind,
                text: m.as_str(),
                span: Span {
                    start: m.start(),
                    end: m.end(),
                },
            });
            text_start = m.end();
        }

        flush_plain(&mut out, text, text_start, text.len());
        out
    }
}

fn flush_plain<'a>(
    out: &mut Vec<InlineSpan<'a>>,
    text: &'a str,
    start: usize,
    end: usize,
) {
    if end > start {
        out.push(InlineSpan {
            kind: InlineKind::Plain,
            text: &text[start..end],
            span: Span { start, end },
        });
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&AttributeSet::standard()).expect("standard highlight pattern compiles")
    }
}

/// Highlights `text` with the standard attribute allowlist.
pub fn highlight(text: &str) -> Vec<InlineSpan<'_>> {
    static DEFAULT: OnceLock<Highlighter> = OnceLock::new();
    DEFAULT.get_or_init(Highlighter::default).highlight(text)
}

/// Reassembles the source text from its spans.
pub fn concat(spans: &[InlineSpan<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use InlineKind::{AngleCallout, BracketCallout, Emphasis, Plain};

    fn pairs(text: &str) -> Vec<(InlineKind, &str)> {
        highlight(text).into_iter().map(|s| (s.kind, s.text)).collect()
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(pairs("调查员走进了房间"), vec![(Plain, "调查员走进了房间")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(highlight("").is_empty());
    }

    #[test]
    fn sanity_roll_and_clue() {
        assert_eq!(
            pairs("他的SAN值降低了1D4点，同时获得【线索A】。"),
            vec![
                (Plain, "他的"),
                (Emphasis, "SAN值"),
                (Plain, "降低了"),
                (Emphasis, "1D4"),
                (Plain, "点，同时获得"),
                (BracketCallout, "【线索A】"),
                (Plain, "。"),
            ]
        );
    }

    #[rstest]
    #[case("SAN值", "SAN值")]
    #[case("SAN 值", "SAN 值")]
    #[case("san值", "san值")]
    #[case("1D4/1D8", "1D4/1D8")]
    #[case("0/1D3", "0/1D3")]
    #[case("1D10", "1D10")]
    #[case("IDEA", "IDEA")]
    #[case("idea", "idea")]
    #[case("D100", "D100")]
    #[case("MP1D6", "MP1D6")]
    #[case("POW50", "POW50")]
    #[case("EDU12", "EDU12")]
    fn notation_is_emphasized(#[case] input: &str, #[case] token: &str) {
        let text = format!("掷{input}。");
        let spans = highlight(&text);
        assert_eq!(spans.len(), 3, "{spans:?}");
        assert_eq!(spans[1].kind, Emphasis);
        assert_eq!(spans[1].text, token);
    }

    #[test]
    fn dice_range_wins_over_single_die() {
        assert_eq!(pairs("1D6/1D10"), vec![(Emphasis, "1D6/1D10")]);
    }

    #[test]
    fn angle_callout_is_distinct_from_bracket_callout() {
        assert_eq!(
            pairs("进行<侦查>检定，得到【日记】"),
            vec![
                (Plain, "进行"),
                (AngleCallout, "<侦查>"),
                (Plain, "检定，得到"),
                (BracketCallout, "【日记】"),
            ]
        );
    }

    #[test]
    fn callouts_are_raw_zones() {
        assert_eq!(pairs("【1D4/1D8】"), vec![(BracketCallout, "【1D4/1D8】")]);
        assert_eq!(pairs("<POW50 IDEA>"), vec![(AngleCallout, "<POW50 IDEA>")]);
    }

    #[test]
    fn unclosed_delimiters_stay_plain() {
        assert_eq!(pairs("a < b 【c"), vec![(Plain, "a < b 【c")]);
    }

    #[test]
    fn angle_callout_does_not_cross_lines() {
        assert_eq!(pairs("<a\nb>"), vec![(Plain, "<a\nb>")]);
    }

    #[test]
    fn adjacent_tokens_produce_no_empty_spans() {
        let spans = highlight("SAN值1D4【A】<B>");
        assert!(spans.iter().all(|s| !s.text.is_empty()));
        assert_eq!(
            spans.iter().map(|s| s.kind).collect::<Vec<_>>(),
            vec![Emphasis, Emphasis, BracketCallout, AngleCallout]
        );
    }

    #[test]
    fn spans_cover_input() {
        let text = "过一个IDEA检定，失败则失去MP1D6。";
        let spans = highlight(text);
        assert_eq!(concat(&spans), text);
        let mut pos = 0;
        for s in &spans {
            assert_eq!(s.span.start, pos);
            assert_eq!(&text[s.span.start..s.span.end], s.text);
            pos = s.span.end;
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn extra_attribute_is_emphasized() {
        let attributes = AttributeSet::standard().with_extra(["LUCK"]);
        let hl = Highlighter::new(&attributes).unwrap();
        let spans = hl.highlight("进行LUCK60检定");
        assert_eq!(spans[1].kind, Emphasis);
        assert_eq!(spans[1].text, "LUCK60");

        // Not known to the standard highlighter.
        assert_eq!(pairs("进行LUCK60检定"), vec![(Plain, "进行LUCK60检定")]);
    }
}
