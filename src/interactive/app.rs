//! TUI application state and logic

use crate::core::{GameError, RoundStatus, WORD_LENGTH};
use crate::game::Session;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: WordSource> {
    pub session: Session<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word! Type and press Enter."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Type a letter into the draft guess, uppercased and capped at the word length
    pub fn push_letter(&mut self, c: char) {
        if self.session.is_accepting_input()
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < WORD_LENGTH
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        match self.session.submit(&guess) {
            Ok(status) => {
                self.input_buffer.clear();
                let style = match status {
                    RoundStatus::Active => return,
                    RoundStatus::Won => MessageStyle::Success,
                    RoundStatus::Lost => MessageStyle::Error,
                };
                self.add_session_message(style);
                self.add_message(
                    "Press Enter for the next round or Esc to quit.",
                    MessageStyle::Info,
                );
            }
            Err(GameError::RoundAlreadyOver) => {
                self.input_buffer.clear();
                self.add_session_message(MessageStyle::Error);
            }
            Err(_) => self.add_session_message(MessageStyle::Error),
        }
    }

    pub fn next_round(&mut self) {
        if self.session.next_round() {
            self.input_buffer.clear();
            self.messages.clear();
            self.add_message("New round started!", MessageStyle::Info);
        } else {
            self.add_session_message(MessageStyle::Error);
        }
    }

    fn add_session_message(&mut self, style: MessageStyle) {
        if let Some(text) = self.session.message() {
            let text = text.to_string();
            self.add_message(&text, style);
        }
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.session.is_accepting_input() => match key.code {
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            // Round over: input is disabled until the next round
            KeyCode::Enter | KeyCode::Char('n' | 'N') => self.next_round(),
            KeyCode::Char('q' | 'Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
