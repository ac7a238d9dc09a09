//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::game::{Board, Cell};

/// Create a progress bar for selfplay runs
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid, mapping sides to the marks the human chose
pub fn render_board(board: &Board, human_mark: char, computer_mark: char) -> String {
    let mut out = String::new();
    for (i, row) in board.cells.iter().enumerate() {
        out.push(' ');
        for (j, cell) in row.iter().enumerate() {
            let glyph = match cell {
                Cell::Empty => '.',
                Cell::Human => human_mark,
                Cell::Computer => computer_mark,
            };
            out.push(glyph);
            if j < 2 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if i < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}
