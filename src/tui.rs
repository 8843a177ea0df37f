//! Terminal UI for playing the puzzle.
//!
//! Built on Ratatui. The interface has two states: typing a guess and the
//! game-over screen. The board, usable letters, and share grid are all
//! rendered from the game state after every event, never cached.

use crate::game::{Completion, Feedback, Game, MAX_GUESSES, WORD_LENGTH};
use crate::share::share_grid;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WARNING_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

fn feedback_colors(feedback: Feedback) -> (Color, Color) {
    match feedback {
        Feedback::Exact => (Color::Green, Color::Black),
        Feedback::PositionDifferent => (Color::Yellow, Color::Black),
        Feedback::Noop => (Color::Gray, Color::White),
    }
}

#[derive(Debug)]
enum TuiState {
    EnteringGuess,
    /// Puzzle solved or out of guesses - result and share grid on screen
    GameOver,
}

enum TuiAction {
    Quit,
    NewPuzzle,
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    game: &'a Game<'a>,
    current_input: &'a str,
    state: &'a TuiState,
    error_message: &'a str,
    status: &'a str,
}

/// Full-screen interface for one terminal session.
///
/// Owns the terminal in raw mode; the alternate screen is restored on drop.
pub struct TuiApp<'a> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    words: &'a [String],
    game: Game<'a>,
    current_input: String,
    state: TuiState,
    error_message: String,
    status: String,
}

impl<'a> TuiApp<'a> {
    pub fn new(words: &'a [String], initial_seed: String) -> Result<Self, io::Error> {
        let game = Game::new(initial_seed, words).map_err(io::Error::other)?;

        info_log!("TuiApp::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            words,
            game,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            error_message: String::new(),
            status: "Enter your first 5-letter guess".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn run(&mut self) -> Result<(), io::Error> {
        loop {
            self.draw()?;
            match self.handle_input()? {
                Some(TuiAction::Quit) => return Ok(()),
                Some(TuiAction::NewPuzzle) => self.start_new_puzzle()?,
                None => {}
            }
        }
    }

    fn start_new_puzzle(&mut self) -> Result<(), io::Error> {
        self.game = Game::with_random_seed(self.words).map_err(io::Error::other)?;
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.status = "New puzzle - enter your first guess".to_string();
        info_log!("start_new_puzzle() - seed is now '{}'", self.game.seed());
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            game: &self.game,
            current_input: &self.current_input,
            state: &self.state,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn handle_input(&mut self) -> Result<Option<TuiAction>, io::Error> {
        // Poll with a timeout so the loop never blocks indefinitely
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        match event {
            Event::Mouse(_)
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Resize(_, _) => {
                debug_log!("handle_input() - Ignoring non-key event: {:?}", event);
                Ok(None)
            }
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to
                // avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }

                // Filter out garbage characters that come from terminal
                // escape sequences (alt-tab and friends)
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring escape-sequence character: {:?}", c);
                    return Ok(None);
                }

                match self.state {
                    TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
                    TuiState::GameOver => Ok(Self::handle_game_over_input(key)),
                }
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<TuiAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH => {
                if Self::has_modifier_keys(&key) {
                    debug_log!(
                        "handle_guess_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                } else {
                    self.current_input.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                self.submit_current_input();
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {WORD_LENGTH} letters!");
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, quitting");
                return Some(TuiAction::Quit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<TuiAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(TuiAction::NewPuzzle),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(TuiAction::Quit),
            _ => None,
        }
    }

    fn submit_current_input(&mut self) {
        let word = self.current_input.clone();
        match self.game.submit(&word) {
            Ok(_) => {
                self.current_input.clear();
                info_log!("submit_current_input() - Accepted guess '{}'", word);
                match self.game.completion() {
                    Completion::InProgress => {
                        let left = MAX_GUESSES - self.game.guesses().len();
                        self.status = format!("{left} guesses left");
                    }
                    Completion::Solved => {
                        self.state = TuiState::GameOver;
                        self.status =
                            format!("Solved in {}/{MAX_GUESSES}!", self.game.guesses().len());
                    }
                    Completion::Exhausted => {
                        self.state = TuiState::GameOver;
                        self.status = format!("Out of guesses - the word was '{}'", self.game.target());
                    }
                }
            }
            Err(e) => {
                // Rejected submission: keep the typed word so it can be fixed
                self.error_message = e.to_string();
                debug_log!("submit_current_input() - Rejected '{}': {}", word, e);
            }
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(16), // Game board
                Constraint::Min(8),     // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD GAME")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, guess) in ctx.game.guesses().iter().enumerate() {
            let mut spans = vec![Span::raw("  ")];
            for (ch, fb) in guess.letters.iter().zip(&guess.feedback) {
                let (bg_color, fg_color) = feedback_colors(*fb);
                spans.push(Span::styled(
                    format!(" {ch} "),
                    Style::default().fg(fg_color).bg(bg_color),
                ));
                spans.push(Span::raw(" "));
            }
            Self::render_row(f, inner, row_index, spans);
        }

        // The in-progress row, while there is still a turn to play
        if matches!(ctx.state, TuiState::EnteringGuess) && ctx.game.guesses().len() < MAX_GUESSES {
            let mut spans = vec![Span::raw("  ")];
            for i in 0..WORD_LENGTH {
                let letter = ctx.current_input.chars().nth(i).unwrap_or(' ');
                spans.push(Span::styled(
                    format!(" {letter} "),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ));
                spans.push(Span::raw(" "));
            }
            Self::render_row(f, inner, ctx.game.guesses().len(), spans);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_row(f: &mut Frame, area: Rect, row_index: usize, spans: Vec<Span>) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Seed: ", HEADER_STYLE),
            Span::raw(ctx.game.seed().to_string()),
            Span::raw("  (share it to share the puzzle)"),
        ]));
        lines.push(Line::from(""));

        match ctx.state {
            TuiState::EnteringGuess => {
                let usable: Vec<String> =
                    ctx.game.usable_chars().iter().map(char::to_string).collect();
                lines.push(Line::from(vec![Span::styled(
                    "Usable letters:",
                    WARNING_STYLE,
                )]));
                lines.push(Line::from(format!("  {}", usable.join(" "))));
            }
            TuiState::GameOver => {
                let headline = match ctx.game.completion() {
                    Completion::Solved => Line::from(vec![Span::styled(
                        format!("✓ Solved in {}/{MAX_GUESSES}", ctx.game.guesses().len()),
                        SUCCESS_STYLE,
                    )]),
                    Completion::Exhausted => Line::from(vec![Span::styled(
                        format!("The word was '{}'", ctx.game.target()),
                        WARNING_STYLE,
                    )]),
                    Completion::InProgress => Line::from(""),
                };
                lines.push(headline);
                lines.push(Line::from(""));
                lines.push(Line::from("Copy your result:"));
                for row in share_grid(ctx.game.guesses()).lines() {
                    lines.push(Line::from(row.to_string()));
                }
            }
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            TuiState::GameOver => "N: New puzzle | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl Drop for TuiApp<'_> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Run a full TUI session over `words`, starting from `initial_seed`.
pub fn run_tui(words: &[String], initial_seed: String) -> Result<(), io::Error> {
    let mut app = TuiApp::new(words, initial_seed)?;
    app.run()
}
