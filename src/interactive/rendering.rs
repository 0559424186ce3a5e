//! TUI rendering with ratatui
//!
//! Clue lists, the reveal grid, and the win popup.

use super::app::{App, InputMode, MessageStyle};
use crate::board::ClueStatus;
use crate::core::{Clue, ClueId, Direction};
use crate::reveal::RevealPanel;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as Axis, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Letter color of revealed answers
const REVEAL_COLOR: Color = Color::Rgb(0xCF, 0xB9, 0xE5);

/// Placeholder for cells of answers not yet revealed
const HIDDEN_CELL: char = '·';

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Axis::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Clues
            Constraint::Percentage(45), // Crossword + messages
        ])
        .split(chunks[1]);

    render_clues(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::WinCelebration {
        render_win_popup(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("CRUZADINHA")
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

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for direction in Direction::ALL {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("{}:", direction.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        for clue in app.board.clues().by_direction(direction) {
            clue_lines(app, clue, &mut lines);
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Dicas ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn clue_lines<'a>(app: &'a App, clue: &'a Clue, lines: &mut Vec<Line<'a>>) {
    let id = clue.id();
    let active = app.board.active() == Some(id);

    let (marker, style) = match app.board.status(id) {
        ClueStatus::Solved => ("✓", Style::default().fg(Color::Green)),
        _ if active => (
            "▶",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (" ", Style::default()),
    };

    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::styled(format!("{}. {}", id.number(), clue.prompt()), style),
    ]));

    if active && app.board.status(id) != ClueStatus::Solved {
        let cursor = if app.input_mode == InputMode::Editing {
            "_"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::raw("    > "),
            Span::styled(
                format!("{}{cursor}", app.board.guess(id)),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    if let Some(error) = app.board.error(id) {
        lines.push(Line::from(Span::styled(
            format!("    {}", error.message()),
            Style::default().fg(Color::Red),
        )));
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Axis::Vertical)
        .constraints([
            Constraint::Min(6),    // Crossword
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_crossword(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_crossword(f: &mut Frame, app: &App, area: Rect) {
    let panel = RevealPanel::build(&app.board, &app.layout);

    let lines: Vec<Line> = panel
        .to_lines(HIDDEN_CELL)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = if c == HIDDEN_CELL {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                            .fg(REVEAL_COLOR)
                            .add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!("{c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!(
        " Cruzadinha {}/{} ",
        app.board.solved_count(),
        app.board.clues().len()
    );
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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
        List::new(messages).block(Block::default().title(" Mensagens ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let active = app.board.active();
    let content = active.map_or("", |id| app.board.guess(id));

    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 PARABÉNS! 🎉 | 'r' para reiniciar ou 'q' para sair ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Editing => (
            format!(
                " Resposta da dica {} | Enter para conferir, Esc para parar ",
                active.map_or(0, ClueId::number)
            ),
            content,
            Color::Yellow,
        ),
        InputMode::Browse => (
            " Escolha uma dica com ↑/↓, Enter para responder ".to_string(),
            content,
            Color::Cyan,
        ),
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let solved = Paragraph::new(format!(
        "Resolvidas: {}/{}",
        app.board.solved_count(),
        app.board.clues().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(solved, chunks[0]);

    let stats = Paragraph::new(format!(
        "Vitórias: {} | Erros: {}",
        app.stats.games_won, app.stats.wrong_attempts
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "r: Reiniciar | q: Sair",
        InputMode::Editing => "Enter: Conferir | Esc: Voltar | ↑/↓: Outra dica",
        InputMode::Browse => "↑/↓: Escolher | Enter: Responder | r: Reiniciar | q: Sair",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_win_popup(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 7, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Você ganhou!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Reiniciar: tecle 'r'"),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(REVEAL_COLOR)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rect of the given size centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
