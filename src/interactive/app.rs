//! TUI application state and logic

use crate::core::{Guess, Score};
use crate::game::{Game, Outcome};
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub solver: Solver,
    pub history: Vec<(Guess, Score)>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_hint: bool,
    pub should_quit: bool,
    solved: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(mut rng: StdRng) -> Self {
        let game = Game::new(&mut rng);

        Self {
            game,
            solver: Solver::new(),
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I picked 4 distinct digits from 1-9.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess and press Enter. A = right spot, B = wrong spot."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            show_hint: false,
            should_quit: false,
            solved: false,
            rng,
        }
    }

    /// Submit whatever is currently in the input field
    ///
    /// The field keeps its text after a guess; only restart clears it.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.submit(&input) {
            Outcome::Rejected(err) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
            }
            Outcome::Scored(result) => {
                self.history.push((result.guess.clone(), result.score));

                if result.is_correct() {
                    if !self.solved {
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        self.solved = true;
                    }

                    let celebration = match result.round {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2..=3 => "🔥 MAGNIFICENT! Lightning deduction! 🔥",
                        4..=5 => "✨ SPLENDID! Sharp work! ✨",
                        6..=7 => "👏 GREAT JOB! Well reasoned! 👏",
                        8..=10 => "🎉 NICE WORK! Got there! 🎉",
                        _ => "🎊 SOLVED! 🎊",
                    };

                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        "Ctrl-R starts a new game - or keep guessing.",
                        MessageStyle::Info,
                    );
                } else {
                    let remaining = self.candidates_remaining();
                    self.add_message(
                        &format!("{remaining} possibilities remain"),
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    /// Start over: fresh secret, empty log, cleared input field
    pub fn restart(&mut self) {
        if self.game.round() > 0 && !self.solved {
            // Abandoned game still counts as played
            self.stats.total_games += 1;
        }

        self.game.restart(&mut self.rng);
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.show_hint = false;
        self.solved = false;
        self.add_message(
            "New game started! Enter 4 distinct digits 1-9.",
            MessageStyle::Info,
        );
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.solver.count_candidates(&self.history)
    }

    #[must_use]
    pub fn hint(&self) -> Option<Guess> {
        self.solver.suggest(&self.history)
    }

    /// Whether the current field content would be accepted as a guess
    #[must_use]
    pub fn input_is_valid(&self) -> bool {
        Guess::is_valid(&self.input_buffer)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.restart();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.toggle_hint();
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LogKind;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(StdRng::seed_from_u64(11))
    }

    #[test]
    fn submit_records_history_and_keeps_input() {
        let mut app = app();
        app.input_buffer = "1234".to_string();

        app.submit_input();

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.game.round(), 1);
        // Field content survives a scored guess
        assert_eq!(app.input_buffer, "1234");
    }

    #[test]
    fn invalid_input_logs_warning_without_round() {
        let mut app = app();
        app.input_buffer = "12x4".to_string();

        app.submit_input();

        assert!(app.history.is_empty());
        assert_eq!(app.game.round(), 0);
        assert_eq!(app.game.log().len(), 1);
        assert_eq!(app.game.log()[0].kind, LogKind::Warning);
    }

    #[test]
    fn restart_clears_everything() {
        let mut app = app();
        app.input_buffer = "1234".to_string();
        app.submit_input();

        app.restart();

        assert!(app.history.is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.round(), 0);
        assert!(app.game.log().is_empty());
    }

    #[test]
    fn winning_updates_statistics_once() {
        let mut app = app();
        let answer = app.game.secret().to_string();

        app.input_buffer = answer.clone();
        app.submit_input();
        assert_eq!(app.stats.games_won, 1);

        // A second winning guess in the same game is not a second win
        app.input_buffer = answer;
        app.submit_input();
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.game.round(), 2);
    }
}
