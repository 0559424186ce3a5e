//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_row, status_marker};
use crate::board::{ClueBoard, ClueStatus};
use crate::commands::{ClueListing, SolveResult};
use crate::core::Direction;
use colored::Colorize;

/// Print the clue list with per-clue progress
pub fn print_board(board: &ClueBoard) {
    let solved = board.solved_count();
    let total = board.clues().len();

    println!("{}", "─".repeat(60).cyan());
    for direction in Direction::ALL {
        println!("{}", format!("{direction}:").bold());
        for clue in board.clues().by_direction(direction) {
            let id = clue.id();
            let status = board.status(id);
            let line = format!(
                " {} {}. {}",
                status_marker(status),
                id.number(),
                clue.prompt()
            );
            match status {
                ClueStatus::Solved => println!("{}", line.green()),
                ClueStatus::Active => println!("{}", line.yellow().bold()),
                ClueStatus::Rejected(error) => {
                    println!("{line}");
                    println!("      {}", error.message().red());
                }
                ClueStatus::Unattempted => println!("{line}"),
            }
        }
    }
    println!(
        "\nProgresso: [{}] {solved}/{total}",
        create_progress_bar(solved, total, 20).green()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print a reveal grid
pub fn print_grid(lines: &[String]) {
    println!("\n{}", "CRUZADINHA:".bold());
    for line in lines {
        println!("   {}", spaced_row(line).bright_magenta().bold());
    }
    println!();
}

/// Print the clue listing
pub fn print_clue_listing(listing: &ClueListing) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ({} dicas)", "DICAS".bright_cyan().bold(), listing.total);
    println!("{}", "═".repeat(60).cyan());

    for (direction, lines) in &listing.sections {
        println!("\n{}", format!("{direction}:").bold());
        for line in lines {
            match &line.answer {
                Some(answer) => println!(
                    "  {}. {} {}",
                    line.number,
                    line.prompt,
                    format!("[{answer}]").bright_yellow()
                ),
                None => println!("  {}. {}", line.number, line.prompt),
            }
        }
    }
    println!();
}

/// Print the result of solving every clue
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "SOLUÇÃO".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\n{}. {} {}",
            step.number,
            step.answer.bright_white().bold(),
            format!("({})", step.direction.label().to_lowercase()).bright_black()
        );
        if verbose {
            for line in &step.grid {
                println!("   {}", spaced_row(line));
            }
        }
    }

    print_grid(&result.grid);

    if result.won {
        println!("{}", "✅ Todas as dicas resolvidas!".green().bold());
    } else {
        println!("{}", "❌ Algumas dicas não foram resolvidas".red().bold());
    }
}
