use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use scenario_reader_engine::{
    ChapterSnapshot, InlineKind, InlineSpan, Scenario, StatBlock, ViewBlock,
};

const BLOOD: Color = Color::Red;
const DIM: Color = Color::DarkGray;

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

pub fn span_style(kind: InlineKind) -> Style {
    match kind {
        InlineKind::Plain => Style::default(),
        InlineKind::Emphasis => bold(BLOOD),
        InlineKind::AngleCallout => bold(Color::LightRed).add_modifier(Modifier::UNDERLINED),
        InlineKind::BracketCallout => bold(BLOOD),
    }
}

fn inline_line<'a>(prefix: Option<Span<'a>>, spans: &[InlineSpan<'a>]) -> Line<'a> {
    let styled = spans
        .iter()
        .map(|s| Span::styled(s.text, span_style(s.kind)));
    Line::from(prefix.into_iter().chain(styled).collect::<Vec<_>>())
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), bold(DIM))
}

/// Title card shown above the first chapter.
pub fn cover_lines(scenario: &Scenario) -> Vec<Line<'_>> {
    let title = Span::styled(scenario.title.as_str(), bold(BLOOD));
    let mut lines = vec![Line::from(title).centered()];
    if let Some(subtitle) = &scenario.subtitle {
        lines.push(Line::from(subtitle.as_str()).centered());
    }
    if let Some(author) = &scenario.author {
        let author = Span::styled(author.as_str(), fg(DIM));
        lines.push(Line::from(author).centered());
    }
    let facts: Vec<&str> = [&scenario.players, &scenario.duration]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    if !facts.is_empty() {
        lines.push(Line::from(facts.join(" · ")).centered());
    }
    lines.push(Line::from(""));
    lines
}

/// Lines for a whole chapter. `expanded` opens stat blocks and collapsibles.
pub fn chapter_lines<'a>(snapshot: &'a ChapterSnapshot<'a>, expanded: bool) -> Vec<Line<'a>> {
    let chapter = snapshot.chapter;
    let mut lines = vec![
        Line::from(Span::styled(chapter.category.as_str(), fg(BLOOD))),
        Line::from(Span::styled(chapter.title.as_str(), bold(Color::Reset))),
        Line::from(""),
    ];

    for block in &snapshot.blocks {
        match block {
            ViewBlock::Heading(text) => {
                let marker = Span::styled("✦ ", fg(BLOOD));
                lines.push(Line::from(vec![marker, Span::styled(*text, bold(BLOOD))]));
            }
            ViewBlock::Rule => {
                let rule = Span::styled("─".repeat(24), fg(DIM));
                lines.push(Line::from(rule).centered());
            }
            ViewBlock::SectionBreak(number) => {
                let number = Span::styled(format!("— {number} —"), fg(DIM));
                lines.push(Line::from(number).centered());
            }
            ViewBlock::Paragraph(spans) => lines.push(inline_line(None, spans)),
            ViewBlock::List(items) => {
                for item in items {
                    let bullet = Span::styled("◆ ", fg(BLOOD));
                    lines.push(inline_line(Some(bullet), item));
                }
            }
            ViewBlock::Collapsible { title, paragraphs } => {
                let marker = if expanded { "▾ " } else { "▸ " };
                let title = Span::styled(*title, bold(Color::Reset));
                lines.push(Line::from(vec![Span::raw(marker), title]));
                if expanded {
                    for p in paragraphs {
                        lines.push(inline_line(Some(Span::raw("  ")), p));
                    }
                }
            }
            ViewBlock::StatBlock(block) => lines.extend(stat_block_lines(block, expanded)),
        }
        lines.push(Line::from(""));
    }

    lines
}

/// A stat block card. Armor and sanity loss are only shown for mythos entities.
pub fn stat_block_lines(block: &StatBlock, expanded: bool) -> Vec<Line<'static>> {
    let (icon, badge, accent) = if block.is_mythos {
        ("☠ ", "mythos entity", BLOOD)
    } else {
        ("● ", "subject record", Color::Gray)
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(icon, fg(accent)),
        Span::styled(block.title.clone(), bold(accent)),
        Span::styled(format!("  [{badge}]"), fg(DIM)),
    ])];
    if !expanded {
        return lines;
    }

    if !block.core_stats.is_empty() {
        let mut spans = Vec::new();
        for stat in &block.core_stats {
            spans.push(Span::styled(format!("{} ", stat.label), fg(accent)));
            spans.push(Span::styled(format!("{}  ", stat.value), bold(Color::Reset)));
        }
        lines.push(Line::from(spans));
    }

    let mut derived: Vec<String> = block
        .derived_stats
        .iter()
        .map(|s| {
            let icon = if s.is_hit_points() { "♥" } else { "➜" };
            format!("{icon} {} {}", s.label, s.value)
        })
        .collect();
    if let Some(db) = &block.damage_bonus {
        derived.push(format!("⚡ Bonus {db}"));
    }
    if !derived.is_empty() {
        lines.push(Line::from(derived.join("   ")));
    }

    if !block.weapons.is_empty() {
        lines.push(Line::from(label("Combat Capabilities")));
        for weapon in &block.weapons {
            lines.push(Line::from(vec![
                Span::raw("  ⚔ "),
                Span::styled(weapon.name.clone(), bold(Color::Reset)),
                Span::raw("  "),
                Span::styled(weapon.stats.clone(), fg(accent)),
            ]));
        }
    }

    if !block.special_abilities.is_empty() {
        lines.push(Line::from(label("Abilities & Traits")));
        let italic = Style::default().add_modifier(Modifier::ITALIC);
        for ability in &block.special_abilities {
            lines.push(Line::from(Span::styled(format!("  {ability}"), italic)));
        }
    }

    if block.is_mythos {
        if let Some(armor) = &block.armor {
            let armor = Span::raw(armor.clone());
            lines.push(Line::from(vec![label("Passive Protection  "), armor]));
        }
        if let Some(loss) = &block.sanity_loss {
            let loss = Span::styled(loss.clone(), bold(BLOOD));
            lines.push(Line::from(vec![label("Sanity Loss Potential  "), loss]));
        }
    }

    if !block.skills.is_empty() {
        lines.push(Line::from(label("Training & Expertise")));
        lines.push(Line::from(format!("  {}", block.skills.join(" · "))));
    }

    if !block.general_notes.is_empty() {
        lines.push(Line::from(label("Observation Logs")));
        let muted = fg(DIM).add_modifier(Modifier::ITALIC);
        for note in &block.general_notes {
            lines.push(Line::from(Span::styled(format!("  {note}"), muted)));
        }
    }

    lines
}
