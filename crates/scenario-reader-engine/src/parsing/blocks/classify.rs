/// Heading marker prefix.
pub const HEADING: &str = "####";
/// Horizontal rule, the whole block.
pub const RULE: &str = "---";

/// Classification of one plain-text content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBlock<'a> {
    /// Heading text with the marker stripped and trimmed.
    Heading(&'a str),
    Rule,
    /// A bare number, e.g. `3`, separating numbered scenes.
    SectionBreak(&'a str),
    Paragraph(&'a str),
}

/// Classifies a plain-text block by its markers.
pub fn classify(text: &str) -> TextBlock<'_> {
    if let Some(rest) = text.strip_prefix(HEADING) {
        return TextBlock::Heading(rest.trim());
    }
    if text == RULE {
        return TextBlock::Rule;
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return TextBlock::SectionBreak(text);
    }
    TextBlock::Paragraph(text)
}
