//! Solve command - run the minimax search on a given position

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    Error,
    cli::{
        commands::parse_side_token,
        output::{print_kv, print_section},
    },
    game::Board,
    ports::NarrationLog,
    search::{Scored, minimax},
};

#[derive(Parser, Debug)]
#[command(about = "Search a position and report the best move")]
pub struct SolveArgs {
    /// Board as 9 row-major characters: H (human), C (computer), . (empty)
    pub board: String,

    /// Side to move (`human` or `computer`)
    #[arg(long, short = 's', default_value = "computer")]
    pub side: String,

    /// Search depth (1-9)
    #[arg(long, short = 'd', default_value_t = 9)]
    pub depth: u8,

    /// Narrate candidates within this many plies of the root
    #[arg(long, default_value_t = 0)]
    pub visualize_depth: u8,

    /// Export the result to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SolveExport {
    board: String,
    side: String,
    depth: u8,
    score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    narration: Vec<String>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    if !(1..=9).contains(&args.depth) {
        return Err(Error::InvalidDepth { depth: args.depth }.into());
    }

    let board = Board::from_string(&args.board)?;
    let side = parse_side_token(&args.side, "--side")?;

    let mut log = NarrationLog::new(args.visualize_depth);
    let result = minimax(&board, args.depth, side, &mut log);

    print_section("Search result");
    println!("{board}");
    print_kv("Side to move", &format!("{side:?}"));
    print_kv("Depth", &args.depth.to_string());
    print_kv("Score", &result.score.to_string());
    match result.best {
        Some(mv) => print_kv("Best move", &mv.to_string()),
        None => print_kv("Best move", "none (terminal position)"),
    }

    if !log.entries().is_empty() {
        print_section("Narration");
        for entry in log.entries() {
            println!("  {entry}");
        }
    }

    if let Some(path) = &args.export {
        export_result(&args, side, &result, log.entries(), path)?;
        println!("\nResult exported to: {}", path.display());
    }

    Ok(())
}

fn export_result(
    args: &SolveArgs,
    side: crate::game::Side,
    result: &Scored,
    narration: &[String],
    path: &PathBuf,
) -> Result<()> {
    let export = SolveExport {
        board: args.board.clone(),
        side: format!("{side:?}"),
        depth: args.depth,
        score: result.score,
        best: result.best.map(|mv| (mv.row(), mv.col())),
        narration: narration.to_vec(),
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_validated() {
        let args = SolveArgs {
            board: ".........".to_string(),
            side: "computer".to_string(),
            depth: 0,
            visualize_depth: 0,
            export: None,
        };
        assert!(execute(args).is_err());
    }

    #[test]
    fn test_bad_board_is_rejected() {
        let args = SolveArgs {
            board: "XY".to_string(),
            side: "computer".to_string(),
            depth: 3,
            visualize_depth: 0,
            export: None,
        };
        assert!(execute(args).is_err());
    }

    #[test]
    fn test_solve_immediate_win() {
        let args = SolveArgs {
            board: "CC.HH....".to_string(),
            side: "computer".to_string(),
            depth: 1,
            visualize_depth: 1,
            export: None,
        };
        assert!(execute(args).is_ok());
    }
}
