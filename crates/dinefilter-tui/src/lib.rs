// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use dinefilter_app::{Category, FilterCommand, FilterScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::io;
use std::time::Duration;

const MARK_COLLAPSED: &str = "▾";
const MARK_EXPANDED: &str = "▴";
const RADIO_SELECTED: &str = "(•)";
const RADIO_UNSELECTED: &str = "( )";

const DEFAULT_STATUS: &str = "↑/↓ move | enter toggle/select | x dismiss chip | q quit";

/// A row of the flattened screen: a category header, or one selectable
/// option of an expanded category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    CategoryHeader { category: usize },
    OptionRow { category: usize, option: usize },
}

/// Flatten the category tree into the rows currently on screen:
/// every header, plus the options of expanded categories, in display
/// order.
pub fn visible_rows(categories: &[Category], screen: &FilterScreen) -> Vec<RowRef> {
    let mut rows = Vec::new();
    for (index, category) in categories.iter().enumerate() {
        rows.push(RowRef::CategoryHeader { category: index });
        if screen.is_expanded(index) {
            for option in 0..category.taxonomies.len() {
                rows.push(RowRef::OptionRow {
                    category: index,
                    option,
                });
            }
        }
    }
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ViewData {
    cursor: usize,
}

pub fn run_app(categories: &[Category], screen: &mut FilterScreen) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, categories, screen, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(categories, screen, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

/// Returns true when the app should quit.
fn handle_key_event(
    categories: &[Category],
    screen: &mut FilterScreen,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => move_cursor(categories, screen, view_data, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(categories, screen, view_data, 1),
        KeyCode::Enter | KeyCode::Char(' ') => activate_cursor_row(categories, screen, view_data),
        KeyCode::Char('x') => {
            screen.dispatch(FilterCommand::DismissChip);
        }
        _ => {}
    }
    false
}

fn move_cursor(
    categories: &[Category],
    screen: &FilterScreen,
    view_data: &mut ViewData,
    delta: isize,
) {
    let rows = visible_rows(categories, screen);
    if rows.is_empty() {
        return;
    }
    let current = view_data.cursor.min(rows.len() - 1) as isize;
    let next = (current + delta).clamp(0, rows.len() as isize - 1);
    view_data.cursor = next as usize;
}

fn activate_cursor_row(
    categories: &[Category],
    screen: &mut FilterScreen,
    view_data: &mut ViewData,
) {
    let rows = visible_rows(categories, screen);
    let Some(row) = rows.get(view_data.cursor).copied() else {
        return;
    };

    match row {
        RowRef::CategoryHeader { category } => {
            screen.dispatch(FilterCommand::ToggleCategory(category));
            clamp_cursor(categories, screen, view_data);
        }
        RowRef::OptionRow { category, option } => {
            let Some(taxonomy) = categories
                .get(category)
                .and_then(|entry| entry.taxonomies.get(option))
            else {
                return;
            };
            let status = format!("selected {}", taxonomy.display_name());
            screen.dispatch(FilterCommand::Select(taxonomy.clone()));
            screen.dispatch(FilterCommand::SetStatus(status));
        }
    }
}

// Collapsing a category can shrink the row list below the cursor.
fn clamp_cursor(categories: &[Category], screen: &FilterScreen, view_data: &mut ViewData) {
    let rows = visible_rows(categories, screen);
    view_data.cursor = view_data.cursor.min(rows.len().saturating_sub(1));
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    categories: &[Category],
    screen: &FilterScreen,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let chip = Paragraph::new(render_chip_text(screen))
        .block(Block::default().title("dinefilter").borders(Borders::ALL));
    frame.render_widget(chip, layout[0]);

    let rows = visible_rows(categories, screen);
    let items = rows
        .iter()
        .map(|row| ListItem::new(render_row_text(categories, screen, *row)))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(Block::default().title("filters").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default();
    if !rows.is_empty() {
        list_state.select(Some(view_data.cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let status = Paragraph::new(status_text(screen))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);
}

/// Chip region text: the selected option's label, or a quiet hint.
fn render_chip_text(screen: &FilterScreen) -> String {
    match screen.selection().current() {
        Some(taxonomy) => format!("[x] {}", taxonomy.display_name()),
        None => "no filter selected".to_owned(),
    }
}

fn render_row_text(categories: &[Category], screen: &FilterScreen, row: RowRef) -> String {
    match row {
        RowRef::CategoryHeader { category } => {
            let Some(entry) = categories.get(category) else {
                return String::new();
            };
            let mark = if screen.is_expanded(category) {
                MARK_EXPANDED
            } else {
                MARK_COLLAPSED
            };
            format!("{mark} {}", entry.name)
        }
        RowRef::OptionRow { category, option } => {
            let Some(taxonomy) = categories
                .get(category)
                .and_then(|entry| entry.taxonomies.get(option))
            else {
                return String::new();
            };
            let mark = if screen.selection().is_selected(taxonomy) {
                RADIO_SELECTED
            } else {
                RADIO_UNSELECTED
            };
            format!("  {mark} {}", taxonomy.display_name())
        }
    }
}

fn status_text(screen: &FilterScreen) -> String {
    screen
        .status_line
        .clone()
        .unwrap_or_else(|| DEFAULT_STATUS.to_owned())
}
