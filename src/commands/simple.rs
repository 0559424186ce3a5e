//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::board::{ClueBoard, SubmitOutcome};
use crate::core::ClueId;
use crate::output::{print_board, print_grid};
use crate::reveal::{Layout, LayoutTable, RevealPanel};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line of user input in simple mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    Restart,
    Show,
    State,
    Help,
    /// Select a clue by its 1-based number
    Select(ClueId),
    /// Replace the active clue's guess and submit it
    Guess(String),
}

/// Interpret one line of input
///
/// Numbers within `1..=clue_count` select a clue; known words are commands;
/// anything else (including a blank line) is a guess.
#[must_use]
pub fn parse_command(input: &str, clue_count: usize) -> SimpleCommand {
    let trimmed = input.trim();

    if let Ok(number) = trimmed.parse::<usize>()
        && (1..=clue_count).contains(&number)
    {
        return SimpleCommand::Select(ClueId::new(number - 1));
    }

    match trimmed.to_lowercase().as_str() {
        "sair" | "quit" | "q" | "exit" => SimpleCommand::Quit,
        "reiniciar" | "restart" | "new" => SimpleCommand::Restart,
        "mostrar" | "show" | "grid" => SimpleCommand::Show,
        "estado" | "state" => SimpleCommand::State,
        "ajuda" | "help" | "?" => SimpleCommand::Help,
        _ => SimpleCommand::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// state cannot be serialized.
pub fn run_simple(mut board: ClueBoard) -> Result<()> {
    let layout = Layout::new(board.clues(), &LayoutTable::builtin());

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Cruzadinha - Modo Interativo                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(&board);

    loop {
        let prompt = match board.active() {
            Some(id) => format!("Resposta da dica {id} (ou comando)"),
            None => "Número da dica (ou comando)".to_string(),
        };
        let input = get_user_input(&prompt)?;

        match parse_command(&input, board.clues().len()) {
            SimpleCommand::Quit => {
                println!("\n👋 Obrigado por jogar!\n");
                return Ok(());
            }
            SimpleCommand::Restart => {
                board.restart();
                println!("\n🔄 Novo jogo iniciado!\n");
                print_board(&board);
            }
            SimpleCommand::Show => {
                print_grid(&RevealPanel::build(&board, &layout).to_lines('·'));
            }
            SimpleCommand::State => {
                println!("{}", serde_json::to_string_pretty(board.state())?);
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Select(id) => {
                board.select_clue(id);
                if let Some(clue) = board.clues().get(id) {
                    println!("\n{}. {}", id.number(), clue.prompt().bright_white().bold());
                }
            }
            SimpleCommand::Guess(text) => {
                let Some(id) = board.active() else {
                    println!("{}", "Escolha o número de uma dica primeiro.".yellow());
                    continue;
                };

                board.edit_guess(id, text);
                match board.submit_guess(id) {
                    SubmitOutcome::Solved { newly: true } => {
                        println!("{}", "✓ Acertou!".green().bold());
                        print_grid(&RevealPanel::build(&board, &layout).to_lines('·'));
                    }
                    SubmitOutcome::Solved { newly: false } | SubmitOutcome::AlreadySolved => {
                        println!("A dica {id} já foi resolvida.");
                    }
                    SubmitOutcome::Rejected(error) => {
                        println!("{}", format!("✗ {error}").red());
                    }
                    SubmitOutcome::UnknownClue => {}
                }

                if board.check_win() {
                    print_victory(&board);

                    match get_user_input("Jogar de novo? (sim/não)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "sim" | "s" | "yes" | "y" => {
                            board.restart();
                            println!("\n🔄 Novo jogo iniciado!\n");
                            print_board(&board);
                        }
                        _ => {
                            println!("\n👋 Obrigado por jogar!\n");
                            return Ok(());
                        }
                    }
                } else {
                    print_board(&board);
                }
            }
        }
    }
}

fn print_help() {
    println!("Escolha uma dica pelo número e digite a resposta.");
    println!("Comandos: 'mostrar' exibe a cruzadinha, 'estado' mostra o progresso,");
    println!("          'reiniciar' começa um novo jogo, 'sair' encerra\n");
}

fn print_victory(board: &ClueBoard) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "          🎉 🎊 ✨  V O C Ê   G A N H O U !  ✨ 🎊 🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Todas as {} dicas resolvidas.",
        board.clues().len().to_string().bright_cyan().bold()
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_range_select() {
        assert_eq!(parse_command("1", 5), SimpleCommand::Select(ClueId::new(0)));
        assert_eq!(parse_command(" 5 ", 5), SimpleCommand::Select(ClueId::new(4)));
    }

    #[test]
    fn numbers_out_of_range_are_guesses() {
        assert_eq!(parse_command("0", 5), SimpleCommand::Guess("0".to_string()));
        assert_eq!(parse_command("6", 5), SimpleCommand::Guess("6".to_string()));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_command("QUIT", 5), SimpleCommand::Quit);
        assert_eq!(parse_command("Restart", 5), SimpleCommand::Restart);
        assert_eq!(parse_command("show", 5), SimpleCommand::Show);
        assert_eq!(parse_command("state", 5), SimpleCommand::State);
        assert_eq!(parse_command("?", 5), SimpleCommand::Help);
    }

    #[test]
    fn portuguese_commands() {
        assert_eq!(parse_command("sair", 5), SimpleCommand::Quit);
        assert_eq!(parse_command("Reiniciar", 5), SimpleCommand::Restart);
        assert_eq!(parse_command("mostrar", 5), SimpleCommand::Show);
        assert_eq!(parse_command("estado", 5), SimpleCommand::State);
        assert_eq!(parse_command("ajuda", 5), SimpleCommand::Help);
    }

    #[test]
    fn guesses_keep_raw_text() {
        assert_eq!(
            parse_command("  Paris ", 5),
            SimpleCommand::Guess("  Paris ".to_string())
        );
        assert_eq!(parse_command("", 5), SimpleCommand::Guess(String::new()));
    }
}
