use std::path::PathBuf;

use serde::Deserialize;

use super::chapter::Chapter;

/// A complete scenario text: front matter plus ordered chapters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub subtitle: Option<String>,
    /// Author and translator credit line.
    pub author: Option<String>,
    /// Recommended player count, e.g. `2~4 名玩家`.
    pub players: Option<String>,
    /// Expected play time, e.g. `3~4 小时`.
    pub duration: Option<String>,
    /// Sidebar category order. Categories not listed follow in order of
    /// first appearance.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Chapter files appended after the inline chapters, relative to the
    /// scenario file. Resolved by [`crate::io::load_scenario`].
    #[serde(default)]
    pub include: Vec<PathBuf>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Chapters sharing a category, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocGroup<'a> {
    pub category: &'a str,
    pub chapters: Vec<&'a Chapter>,
}

impl Scenario {
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// The chapter with `id`, or the first chapter for an unknown id.
    /// `None` only when there are no chapters at all.
    pub fn chapter_or_first(&self, id: &str) -> Option<&Chapter> {
        self.chapter(id).or_else(|| self.chapters.first())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }

    /// Previous and next chapters in reading order.
    pub fn neighbours(&self, id: &str) -> (Option<&Chapter>, Option<&Chapter>) {
        let Some(idx) = self.position(id) else {
            return (None, None);
        };
        let prev = idx.checked_sub(1).and_then(|i| self.chapters.get(i));
        (prev, self.chapters.get(idx + 1))
    }

    /// Chapters grouped by category for the sidebar. Empty groups are omitted.
    pub fn table_of_contents(&self) -> Vec<TocGroup<'_>> {
        let mut order: Vec<&str> = self.categories.iter().map(String::as_str).collect();
        for chapter in &self.chapters {
            if !order.contains(&chapter.category.as_str()) {
                order.push(&chapter.category);
            }
        }

        order
            .into_iter()
            .map(|category| TocGroup {
                category,
                chapters: self
                    .chapters
                    .iter()
                    .filter(|c| c.category == category)
                    .collect(),
            })
            .filter(|g| !g.chapters.is_empty())
            .collect()
    }
}
