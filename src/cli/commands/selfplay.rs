//! Selfplay command - pit two strategies against each other
//!
//! Useful for sanity-checking search strength: minimax at full depth should
//! never lose, whatever it plays against.

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::Serialize;

use crate::{
    Error,
    cli::{
        commands::parse_side_token,
        output::{create_game_progress, print_kv, print_section},
    },
    game::{Board, Move, Outcome, Side},
    ports::NullObserver,
    search::minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Play strategies against each other and tally outcomes")]
pub struct SelfplayArgs {
    /// Strategy for the computer side: `minimax[:depth]` or `random`
    #[arg(long, default_value = "minimax")]
    pub computer: String,

    /// Strategy for the human side: `minimax[:depth]` or `random`
    #[arg(long, default_value = "random")]
    pub human: String,

    /// Who opens each game (`human` or `computer`)
    #[arg(long, short = 'f', default_value = "human")]
    pub first: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// A move-selection strategy for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Minimax { depth: u8 },
    Random,
}

impl Strategy {
    /// Parse `minimax`, `minimax:N`, or `random`
    fn parse(token: &str) -> Result<Self> {
        let lower = token.to_lowercase();
        if lower == "random" {
            return Ok(Strategy::Random);
        }

        let depth = match lower.strip_prefix("minimax") {
            Some("") => 9,
            Some(rest) => match rest.strip_prefix(':') {
                Some(depth_str) => depth_str
                    .parse::<u8>()
                    .map_err(|_| anyhow::anyhow!("Invalid minimax depth in '{token}'"))?,
                None => return Err(unknown_strategy(token)),
            },
            None => return Err(unknown_strategy(token)),
        };

        if !(1..=9).contains(&depth) {
            return Err(Error::InvalidDepth { depth }.into());
        }
        Ok(Strategy::Minimax { depth })
    }

    fn pick(&self, board: &Board, side: Side, rng: &mut StdRng) -> Result<Move> {
        match self {
            Strategy::Minimax { depth } => minimax(board, *depth, side, &mut NullObserver)
                .best
                .ok_or_else(|| Error::NoValidMoves.into()),
            Strategy::Random => {
                let cells = board.empty_cells();
                if cells.is_empty() {
                    return Err(Error::NoValidMoves.into());
                }
                Ok(cells[rng.random_range(0..cells.len())])
            }
        }
    }
}

fn unknown_strategy(token: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown strategy '{token}'. Supported: minimax[:depth], random")
}

#[derive(Serialize)]
struct SelfplaySummary {
    computer: String,
    human: String,
    first: String,
    games: usize,
    computer_wins: usize,
    human_wins: usize,
    draws: usize,
    computer_win_rate: f64,
    human_win_rate: f64,
    draw_rate: f64,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let computer = Strategy::parse(&args.computer)?;
    let human = Strategy::parse(&args.human)?;
    let first = parse_side_token(&args.first, "--first")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(random()),
    };

    let mut computer_wins = 0;
    let mut human_wins = 0;
    let mut draws = 0;

    let pb = create_game_progress(args.games as u64);
    for game_num in 0..args.games {
        match play_one(computer, human, first, &mut rng)? {
            Outcome::ComputerWin => computer_wins += 1,
            Outcome::HumanWin => human_wins += 1,
            Outcome::Draw => draws += 1,
        }
        pb.set_position(game_num as u64 + 1);
        pb.set_message(format!("W:{computer_wins} D:{draws} L:{human_wins}"));
    }
    pb.finish_with_message(format!("W:{computer_wins} D:{draws} L:{human_wins}"));

    let rate = |count: usize| {
        if args.games > 0 {
            count as f64 / args.games as f64
        } else {
            0.0
        }
    };

    print_section("Selfplay results");
    print_kv("Computer strategy", &args.computer);
    print_kv("Human strategy", &args.human);
    print_kv("Games", &args.games.to_string());
    print_kv(
        "Computer wins",
        &format!("{computer_wins} ({:.1}%)", rate(computer_wins) * 100.0),
    );
    print_kv("Draws", &format!("{draws} ({:.1}%)", rate(draws) * 100.0));
    print_kv(
        "Human wins",
        &format!("{human_wins} ({:.1}%)", rate(human_wins) * 100.0),
    );

    if let Some(path) = &args.export {
        let summary = SelfplaySummary {
            computer: args.computer.clone(),
            human: args.human.clone(),
            first: args.first.clone(),
            games: args.games,
            computer_wins,
            human_wins,
            draws,
            computer_win_rate: rate(computer_wins),
            human_win_rate: rate(human_wins),
            draw_rate: rate(draws),
        };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\nSummary exported to: {}", path.display());
    }

    Ok(())
}

/// Play a single game between the two strategies
fn play_one(
    computer: Strategy,
    human: Strategy,
    first: Side,
    rng: &mut StdRng,
) -> Result<Outcome> {
    let mut board = Board::new();
    let mut to_move = first;

    loop {
        if let Some(outcome) = board.outcome() {
            return Ok(outcome);
        }

        let strategy = match to_move {
            Side::Computer => computer,
            Side::Human => human,
        };
        let mv = strategy.pick(&board, to_move, rng)?;
        board = board.place(mv, to_move)?;
        to_move = to_move.opponent();
    }
}
