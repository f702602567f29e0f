mod app;
mod render;

use anyhow::{Context, Result};
use app::{App, PAGE, SidebarRow};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use scenario_reader_config::Config;
use scenario_reader_engine::{ContentParser, load_scenario};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

fn main() -> Result<()> {
    env_logger::init();

    // Determine scenario path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.len() == 2 => {
            log::warn!("ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <scenario-path>", args[0]);
            process::exit(1);
        }
    };

    let scenario_path;
    let from_config;

    if args.len() == 2 {
        scenario_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match &config {
            Some(config) => {
                scenario_path = config.scenario_path.clone();
                from_config = true;
            }
            None => {
                eprintln!("Error: No scenario path provided and no config file found");
                eprintln!("Usage: {} <scenario-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [scenario-path]", args[0]);
        process::exit(1);
    }

    let scenario = match load_scenario(&scenario_path) {
        Ok(scenario) => scenario,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Scenario '{}'{} could not be loaded: {e}",
                scenario_path.display(),
                source
            );
            process::exit(1);
        }
    };

    if let Some(first_run) = first_run_config(&scenario_path, from_config, config.as_ref()) {
        match first_run.save() {
            Ok(()) => log::info!("remembered scenario path in {}", config_path.display()),
            Err(e) => log::warn!("could not write {}: {e:#}", config_path.display()),
        }
    }

    let attributes = config
        .as_ref()
        .map(Config::attribute_set)
        .unwrap_or_default();
    let parser = ContentParser::new(&attributes).with_context(|| {
        format!(
            "invalid attribute list ({} entries) in {}",
            attributes.len(),
            config_path.display()
        )
    })?;
    log::info!(
        "reading {:?} ({} chapters, {} attributes)",
        scenario.title,
        scenario.chapters.len(),
        attributes.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scenario, parser);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// A config to write on first run: a path given on the command line is
/// remembered when no config file exists yet.
fn first_run_config(
    scenario_path: &Path,
    from_config: bool,
    existing: Option<&Config>,
) -> Option<Config> {
    if from_config || existing.is_some() {
        return None;
    }
    let absolute = std::path::absolute(scenario_path).ok()?;
    Some(Config::new(absolute))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_in_sidebar(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_in_sidebar(),
                KeyCode::Char('n') => app.next_chapter(),
                KeyCode::Char('p') => app.previous_chapter(),
                KeyCode::PageDown | KeyCode::Char('J') => app.scroll_down(PAGE),
                KeyCode::PageUp | KeyCode::Char('K') => app.scroll_up(PAGE),
                KeyCode::Char('g') => app.scroll_to_top(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_expanded(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Chapter list panel
    let rows: Vec<ListItem> = app
        .sidebar_rows()
        .into_iter()
        .map(|row| match row {
            SidebarRow::Category(name) => ListItem::new(Line::from(Span::styled(
                name,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))),
            SidebarRow::Chapter { title, .. } => ListItem::new(Line::from(format!("  {title}"))),
        })
        .collect();

    let chapter_list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.scenario.title.as_str()),
        )
        .highlight_style(Style::default().bg(Color::Red).fg(Color::Black));

    f.render_stateful_widget(chapter_list, chunks[0], &mut app.sidebar_state());

    // Content panel
    let snapshot = app.parser.snapshot(app.active_chapter());
    let mut lines = Vec::new();
    if app.active_index() == 0 {
        lines.extend(render::cover_lines(&app.scenario));
    }
    lines.extend(render::chapter_lines(&snapshot, app.expanded));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let mut help = vec![
        Span::raw("q: Quit | "),
        Span::raw("j/k: Chapter | "),
        Span::raw("n/p: Next/Prev | "),
        Span::raw("PgDn/PgUp: Scroll | "),
        Span::raw("Enter: Expand"),
    ];
    if app.show_scroll_top() {
        help.push(Span::styled(" | g: top", Style::default().fg(Color::Red)));
    }

    f.render_widget(Paragraph::new(Line::from(help)), outer[1]);
}
