use ratatui::widgets::ListState;
use scenario_reader_engine::{Chapter, ContentParser, Scenario};

/// Lines scrolled before the scroll-to-top hint is shown.
pub const SCROLL_TOP_THRESHOLD: u16 = 20;
/// Lines moved by one page of scrolling.
pub const PAGE: u16 = 10;

/// One row of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow<'a> {
    Category(&'a str),
    Chapter { index: usize, title: &'a str },
}

impl SidebarRow<'_> {
    pub fn chapter_index(&self) -> Option<usize> {
        match self {
            SidebarRow::Category(_) => None,
            SidebarRow::Chapter { index, .. } => Some(*index),
        }
    }
}

pub struct App {
    pub scenario: Scenario,
    pub parser: ContentParser,
    /// Chapter indices in sidebar order.
    toc_order: Vec<usize>,
    /// Index of the active chapter in `scenario.chapters`.
    active: usize,
    pub scroll: u16,
    /// Whether stat blocks and collapsible sections are open.
    pub expanded: bool,
}

impl App {
    /// `scenario` must have at least one chapter, which loading guarantees.
    pub fn new(scenario: Scenario, parser: ContentParser) -> Self {
        let toc_order = scenario
            .table_of_contents()
            .iter()
            .flat_map(|group| group.chapters.iter())
            .filter_map(|chapter| scenario.position(&chapter.id))
            .collect();

        Self {
            scenario,
            parser,
            toc_order,
            active: 0,
            scroll: 0,
            expanded: false,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_chapter(&self) -> &Chapter {
        &self.scenario.chapters[self.active]
    }

    /// Switches chapter, returning to its start with everything collapsed.
    pub fn select_chapter(&mut self, index: usize) {
        if index == self.active || index >= self.scenario.chapters.len() {
            return;
        }
        self.active = index;
        self.scroll = 0;
        self.expanded = false;
    }

    /// Next chapter in sidebar order, wrapping around.
    pub fn next_in_sidebar(&mut self) {
        if self.toc_order.is_empty() {
            return;
        }
        let i = match self.toc_order.iter().position(|&c| c == self.active) {
            Some(i) => (i + 1) % self.toc_order.len(),
            None => 0,
        };
        self.select_chapter(self.toc_order[i]);
    }

    /// Previous chapter in sidebar order, wrapping around.
    pub fn previous_in_sidebar(&mut self) {
        if self.toc_order.is_empty() {
            return;
        }
        let i = match self.toc_order.iter().position(|&c| c == self.active) {
            Some(0) | None => self.toc_order.len() - 1,
            Some(i) => i - 1,
        };
        self.select_chapter(self.toc_order[i]);
    }

    /// Next chapter in reading order; stays put on the last chapter.
    pub fn next_chapter(&mut self) {
        let (_, next) = self.scenario.neighbours(&self.active_chapter().id);
        let index = next.and_then(|c| self.scenario.position(&c.id));
        if let Some(index) = index {
            self.select_chapter(index);
        }
    }

    /// Previous chapter in reading order; stays put on the first chapter.
    pub fn previous_chapter(&mut self) {
        let (prev, _) = self.scenario.neighbours(&self.active_chapter().id);
        let index = prev.and_then(|c| self.scenario.position(&c.id));
        if let Some(index) = index {
            self.select_chapter(index);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll > SCROLL_TOP_THRESHOLD
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Sidebar rows: each category header followed by its chapters.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow<'_>> {
        let mut rows = Vec::new();
        for group in self.scenario.table_of_contents() {
            rows.push(SidebarRow::Category(group.category));
            for chapter in group.chapters {
                if let Some(index) = self.scenario.position(&chapter.id) {
                    rows.push(SidebarRow::Chapter {
                        index,
                        title: &chapter.title,
                    });
                }
            }
        }
        rows
    }

    /// List state selecting the active chapter's sidebar row.
    pub fn sidebar_state(&self) -> ListState {
        let selected = self
            .sidebar_rows()
            .iter()
            .position(|row| row.chapter_index() == Some(self.active));
        let mut state = ListState::default();
        state.select(selected);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chapter(id: &str, category: &str) -> Chapter {
        Chapter {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: category.to_string(),
            content: vec![],
        }
    }

    fn row(index: usize, title: &str) -> SidebarRow<'_> {
        SidebarRow::Chapter { index, title }
    }

    fn app() -> App {
        let scenario = Scenario {
            title: "WANNA EAT MORE".to_string(),
            subtitle: None,
            author: None,
            players: None,
            duration: None,
            categories: vec!["前言".to_string(), "故事开始".to_string()],
            include: vec![],
            chapters: vec![
                chapter("intro", "前言"),
                chapter("s1", "故事开始"),
                chapter("appendix", "附录"),
                chapter("s2", "故事开始"),
            ],
        };
        App::new(scenario, ContentParser::default())
    }

    #[test]
    fn sidebar_groups_chapters_under_categories() {
        let app = app();
        assert_eq!(
            app.sidebar_rows(),
            vec![
                SidebarRow::Category("前言"),
                row(0, "INTRO"),
                SidebarRow::Category("故事开始"),
                row(1, "S1"),
                row(3, "S2"),
                SidebarRow::Category("附录"),
                row(2, "APPENDIX"),
            ]
        );
        assert_eq!(app.sidebar_state().selected(), Some(1));
    }

    #[test]
    fn sidebar_navigation_follows_sidebar_order_and_wraps() {
        let mut app = app();
        app.next_in_sidebar();
        app.next_in_sidebar();
        assert_eq!(app.active_chapter().id, "s2");
        app.next_in_sidebar();
        assert_eq!(app.active_chapter().id, "appendix");
        app.next_in_sidebar();
        assert_eq!(app.active_chapter().id, "intro");
        app.previous_in_sidebar();
        assert_eq!(app.active_chapter().id, "appendix");
    }

    #[test]
    fn reading_order_navigation_stops_at_edges() {
        let mut app = app();
        app.previous_chapter();
        assert_eq!(app.active_index(), 0);
        app.next_chapter();
        app.next_chapter();
        app.next_chapter();
        assert_eq!(app.active_chapter().id, "s2");
        app.next_chapter();
        assert_eq!(app.active_chapter().id, "s2");
    }

    #[test]
    fn changing_chapter_scrolls_to_start_and_collapses() {
        let mut app = app();
        app.scroll_down(PAGE * 3);
        app.toggle_expanded();
        assert!(app.show_scroll_top());

        app.next_chapter();

        assert_eq!(app.scroll, 0);
        assert!(!app.expanded);
        assert!(!app.show_scroll_top());
    }

    #[test]
    fn scrolling_saturates_at_top() {
        let mut app = app();
        app.scroll_down(5);
        app.scroll_up(PAGE);
        assert_eq!(app.scroll, 0);
        app.scroll_down(SCROLL_TOP_THRESHOLD + 1);
        assert!(app.show_scroll_top());
        app.scroll_to_top();
        assert_eq!(app.scroll, 0);
    }
}
