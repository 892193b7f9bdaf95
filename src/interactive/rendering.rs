//! TUI rendering with ratatui
//!
//! Tile board, input box, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, RoundState, RoundStatus, Tile, WORD_LENGTH};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app.session.round(), main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app.session.round(), chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn tile_style(tile: Tile) -> Style {
    let bg = match tile {
        Tile::Correct => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, round: &RoundState, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (guess, classification) in round.rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &tile) in guess.text().chars().zip(classification.tiles()) {
            spans.push(Span::styled(format!(" {letter} "), tile_style(tile)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for _ in round.attempts_used()..MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| {
                [
                    Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.session.round().status() {
        RoundStatus::Active => (
            " Your Guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        RoundStatus::Won => (" 🎉 Solved! | Enter for next round ", "", Color::Green),
        RoundStatus::Lost => (" Out of guesses | Enter for next round ", "", Color::Red),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, round: &RoundState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let status_text = match round.status() {
        RoundStatus::Active => "Status: Playing",
        RoundStatus::Won => "Status: Won",
        RoundStatus::Lost => "Status: Lost",
    };
    f.render_widget(
        Paragraph::new(status_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempts_text = format!("Attempts: {}/{MAX_ATTEMPTS}", round.attempts_used());
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if round.is_accepting_input() {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    } else {
        "Esc/q: Quit | Enter/n: Next Round"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;
    use crate::wordlists::scripted::Scripted;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_shows_guessed_letters_and_attempts() {
        let session = Session::new(Scripted::new(&["crane"])).unwrap();
        let mut app = App::new(session);
        app.session.submit("rebus").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(" R   E   B   U   S "));
        assert!(text.contains("Attempts: 1/6"));
        assert!(text.contains("Status: Playing"));
    }
}
