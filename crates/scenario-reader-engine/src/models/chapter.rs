use serde::Deserialize;

/// One authored content block of a chapter.
///
/// In scenario files a block is either a bare string or a table tagged by
/// `type`:
///
/// ```toml
/// content = [
///   "#### 第一幕",
///   "他的SAN值降低了1D4点。",
///   { type = "statblock", data = "店主\nSTR 50 CON 60" },
///   { type = "list", items = ["车站", "旧书店"] },
///   { type = "collapsible", title = "补充说明", content = ["……"] },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBlock")]
pub enum ContentBlock {
    /// Paragraph, `####` heading, `---` rule or bare-number section break.
    Text(String),
    /// Opaque multi-line stat block record.
    StatBlock { data: String },
    List { items: Vec<String> },
    Collapsible {
        title: String,
        content: Vec<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlock {
    Text(String),
    Tagged(TaggedBlock),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedBlock {
    Statblock {
        data: String,
    },
    List {
        items: Vec<String>,
    },
    Collapsible {
        title: String,
        #[serde(default)]
        content: Vec<String>,
    },
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        match raw {
            RawBlock::Text(text) => ContentBlock::Text(text),
            RawBlock::Tagged(TaggedBlock::Statblock { data }) => ContentBlock::StatBlock { data },
            RawBlock::Tagged(TaggedBlock::List { items }) => ContentBlock::List { items },
            RawBlock::Tagged(TaggedBlock::Collapsible { title, content }) => {
                ContentBlock::Collapsible { title, content }
            }
        }
    }
}

/// A chapter of the scenario, shown one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Sidebar group, e.g. `前言` or `故事开始`.
    pub category: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}
