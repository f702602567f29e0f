//! Chapter snapshots: the view model a presenter renders.
//!
//! A snapshot pairs each authored content block with its processed form:
//! paragraphs and list items as highlighted spans, stat blocks as parsed
//! records. Snapshots borrow from the chapter and are derived on request.

use crate::models::{Chapter, ContentBlock};
use crate::parsing::{
    ContentParser,
    blocks::{TextBlock, classify},
    inline::InlineSpan,
    statblock::StatBlock,
};

/// A processed content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBlock<'a> {
    Heading(&'a str),
    Rule,
    SectionBreak(&'a str),
    Paragraph(Vec<InlineSpan<'a>>),
    StatBlock(StatBlock),
    List(Vec<Vec<InlineSpan<'a>>>),
    /// Collapsed by default; the title is shown unhighlighted.
    Collapsible {
        title: &'a str,
        paragraphs: Vec<Vec<InlineSpan<'a>>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSnapshot<'a> {
    pub chapter: &'a Chapter,
    pub blocks: Vec<ViewBlock<'a>>,
}

impl ContentParser {
    /// Processes every content block of `chapter`, in order.
    pub fn snapshot<'a>(&self, chapter: &'a Chapter) -> ChapterSnapshot<'a> {
        let blocks = chapter
            .content
            .iter()
            .map(|block| self.view_block(block))
            .collect();
        ChapterSnapshot { chapter, blocks }
    }

    fn view_block<'a>(&self, block: &'a ContentBlock) -> ViewBlock<'a> {
        match block {
            ContentBlock::Text(text) => match classify(text) {
                TextBlock::Heading(heading) => ViewBlock::Heading(heading),
                TextBlock::Rule => ViewBlock::Rule,
                TextBlock::SectionBreak(number) => ViewBlock::SectionBreak(number),
                TextBlock::Paragraph(text) => ViewBlock::Paragraph(self.highlight(text)),
            },
            ContentBlock::StatBlock { data } => ViewBlock::StatBlock(self.parse_stat_block(data)),
            ContentBlock::List { items } => {
                ViewBlock::List(items.iter().map(|item| self.highlight(item)).collect())
            }
            ContentBlock::Collapsible { title, content } => ViewBlock::Collapsible {
                title,
                paragraphs: content.iter().map(|p| self.highlight(p)).collect(),
            },
        }
    }
}
