//! TUI application state and logic

use crate::board::{ClueBoard, ClueStatus, SubmitOutcome};
use crate::core::ClueId;
use crate::reveal::{Layout, LayoutTable};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub board: ClueBoard,
    pub layout: Layout,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Moving between clues
    Browse,
    /// Typing a guess for the active clue
    Editing,
    /// All clues solved, waiting for restart or quit
    WinCelebration,
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

/// Counters for this run of the program (not persisted)
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub wrong_attempts: usize,
}

impl App {
    #[must_use]
    pub fn new(board: ClueBoard) -> Self {
        let layout = Layout::new(board.clues(), &LayoutTable::builtin());

        Self {
            board,
            layout,
            input_mode: InputMode::Browse,
            messages: vec![
                Message {
                    text: "Bem-vindo! Escolha uma dica com ↑/↓ e tecle Enter para responder.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Resolva todas as dicas para completar a cruzadinha.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Move the selection to the next or previous clue
    ///
    /// Landing on a solved clue while typing drops back to browsing, since a
    /// solved clue cannot be edited.
    pub fn move_selection(&mut self, forward: bool) {
        if forward {
            self.board.select_next();
        } else {
            self.board.select_previous();
        }

        if self.input_mode == InputMode::Editing
            && let Some(id) = self.board.active()
            && self.board.status(id) == ClueStatus::Solved
        {
            self.input_mode = InputMode::Browse;
        }
    }

    /// Enter editing mode for the active clue (selecting the first clue if
    /// none is active)
    pub fn start_editing(&mut self) {
        let id = self.active_or_first();

        if self.board.status(id) == ClueStatus::Solved {
            self.add_message(
                &format!("A dica {id} já foi resolvida."),
                MessageStyle::Info,
            );
            return;
        }

        self.input_mode = InputMode::Editing;
    }

    pub fn type_char(&mut self, c: char) {
        let id = self.active_or_first();
        let mut text = self.board.guess(id).to_string();
        text.push(c);
        self.board.edit_guess(id, text);
    }

    pub fn backspace(&mut self) {
        let id = self.active_or_first();
        let mut text = self.board.guess(id).to_string();
        text.pop();
        self.board.edit_guess(id, text);
    }

    /// Submit the active clue's guess and react to the outcome
    pub fn submit(&mut self) {
        let Some(id) = self.board.active() else {
            self.add_message("Escolha uma dica primeiro.", MessageStyle::Error);
            return;
        };

        match self.board.submit_guess(id) {
            SubmitOutcome::Solved { newly } => {
                if newly {
                    let answer = self
                        .board
                        .clues()
                        .get(id)
                        .map(crate::core::Clue::display_answer)
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Acertou! {answer} revelada."),
                        MessageStyle::Success,
                    );
                }
                self.input_mode = InputMode::Browse;

                if self.board.check_win() {
                    self.stats.games_won += 1;
                    self.input_mode = InputMode::WinCelebration;
                    self.add_message("🎉 Você ganhou! 🎉", MessageStyle::Success);
                    self.add_message("Tecle 'r' para reiniciar ou 'q' para sair.", MessageStyle::Info);
                }
            }
            SubmitOutcome::Rejected(error) => {
                self.stats.wrong_attempts += 1;
                self.add_message(error.message(), MessageStyle::Error);
            }
            SubmitOutcome::AlreadySolved => {
                self.input_mode = InputMode::Browse;
                self.add_message(
                    &format!("A dica {id} já foi resolvida."),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::UnknownClue => {}
        }
    }

    pub fn restart(&mut self) {
        self.board.restart();
        self.messages.clear();
        self.input_mode = InputMode::Browse;
        self.add_message("Novo jogo iniciado!", MessageStyle::Info);
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

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r' | 'n') | KeyCode::Enter => self.restart(),
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.restart(),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.move_selection(true),
                KeyCode::Enter | KeyCode::Char('i') => self.start_editing(),
                _ => {}
            },
            InputMode::Editing => match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Browse,
                KeyCode::Up => self.move_selection(false),
                KeyCode::Down | KeyCode::Tab => self.move_selection(true),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Char(c) => self.type_char(c),
                _ => {}
            },
        }
    }

    fn active_or_first(&mut self) -> ClueId {
        if let Some(id) = self.board.active() {
            return id;
        }
        self.board.select_next();
        self.board.active().unwrap_or(ClueId::new(0))
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
        tracing::error!(%err, "tui loop failed");
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
            app.handle_key(key);
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
    use crate::board::{BoardConfig, GuessError};
    use crate::content::builtin;

    fn app() -> App {
        App::new(ClueBoard::new(builtin().unwrap(), BoardConfig::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn answer_active(app: &mut App) {
        let id = app.board.active().unwrap();
        let answer = app.board.clues().get(id).unwrap().answer().to_string();
        press(app, KeyCode::Enter);
        type_text(app, &answer);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn enter_starts_editing_first_clue() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.board.active(), Some(ClueId::new(0)));
    }

    #[test]
    fn typing_edits_active_guess() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "parix");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.board.guess(ClueId::new(0)), "pari");
    }

    #[test]
    fn wrong_guess_shows_error_and_counts() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "london");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.error(ClueId::new(0)), Some(GuessError::WrongGuess));
        assert_eq!(app.stats.wrong_attempts, 1);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        // Editing again clears the error
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.board.error(ClueId::new(0)), None);
    }

    #[test]
    fn correct_guess_returns_to_browse() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        answer_active(&mut app);

        assert!(app.board.state().is_solved(ClueId::new(0)));
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.messages.last().unwrap().text, "Acertou! PARIS revelada.");
    }

    #[test]
    fn solved_clue_cannot_be_edited() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        answer_active(&mut app);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn moving_onto_solved_clue_stops_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        answer_active(&mut app);
        let paris = ClueId::new(0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.board.active(), Some(paris));
        assert_eq!(app.input_mode, InputMode::Browse);

        // Keys no longer reach the solved clue's guess
        type_text(&mut app, "x");
        assert_eq!(app.board.guess(paris), "paris");
        assert!(app.board.state().is_solved(paris));
    }

    #[test]
    fn winning_enters_celebration_and_restart_resets() {
        let mut app = app();
        for _ in 0..app.board.clues().len() {
            press(&mut app, KeyCode::Down);
            answer_active(&mut app);
        }

        assert!(app.board.check_win());
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);

        // Typing is ignored while celebrating
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::WinCelebration);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.board.solved_count(), 0);
        assert_eq!(app.board.active(), None);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn escape_leaves_editing_and_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "q");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Browse);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
