//! TUI rendering with ratatui
//!
//! Single-screen layout: result log on the left, game info on the right,
//! input line and status bar at the bottom.

use super::app::{App, MessageStyle};
use crate::game::LogKind;
use crate::solver::SECRET_SPACE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Result log
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_log(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 GUESS NUMBER - 1A2B")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_log(f: &mut Frame, app: &App, area: Rect) {
    // Newest entries first so the latest result is always visible
    let items: Vec<ListItem> = app
        .game
        .log()
        .iter()
        .rev()
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Warning => Style::default().fg(Color::Yellow),
                LogKind::Correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                LogKind::Wrong => Style::default().fg(Color::White),
            };
            ListItem::new(entry.text.clone()).style(style)
        })
        .collect();

    let log = List::new(items).block(Block::default().title(" Results ").borders(Borders::ALL));

    f.render_widget(log, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Possibilities gauge
            Constraint::Length(5), // Game info
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_game_info(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (SECRET_SPACE as f64).log2();
    let remaining = app.candidates_remaining().max(1);
    let bits_gained = total_bits - (remaining as f64).log2();
    let progress_pct = ((bits_gained / total_bits * 100.0).min(100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} of {SECRET_SPACE} possible"
        ));

    f.render_widget(gauge, area);
}

fn render_game_info(f: &mut Frame, app: &App, area: Rect) {
    let hint_line = if app.show_hint {
        match app.hint() {
            Some(guess) => Line::from(format!("Hint:  💡 try {guess}")),
            None => Line::from("Hint:  no guess fits the scores so far"),
        }
    } else {
        Line::from("Hint:  hidden (Tab to show)")
    };

    let content = vec![
        Line::from(format!("Round: {}", app.game.round())),
        Line::from(format!("Tried: {} guesses", app.history.len())),
        hint_line,
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.input_buffer.is_empty() {
        Color::Yellow
    } else if app.input_is_valid() {
        Color::Green
    } else {
        Color::Red
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Your Answer (4 distinct digits 1-9) | Enter to send ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round = Paragraph::new(format!("Round: {}", app.game.round())).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let possibilities = Paragraph::new(format!("Possibilities: {}", app.candidates_remaining()))
        .alignment(Alignment::Center);
    f.render_widget(possibilities, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Send | Ctrl-R: Restart | Tab: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
