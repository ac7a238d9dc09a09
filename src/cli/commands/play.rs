//! Play command - interactive game against the minimax computer

use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{commands::parse_side_token, output::render_board},
    game::{Move, Outcome},
    ports::{NarrationLog, SystemClock},
    session::{MoveReply, Phase, Session, SessionConfig},
};

/// Pause between narrated search probes, as in the original shell
const NARRATION_STEP: Duration = Duration::from_millis(500);

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the computer")]
pub struct PlayArgs {
    /// Search depth for the computer's play (1-9)
    #[arg(long, short = 'd', default_value_t = 2)]
    pub depth: u8,

    /// How many plies of the search to narrate in the move log (1-9)
    #[arg(long, default_value_t = 2)]
    pub visualize_depth: u8,

    /// Show the computer's candidate moves after each of its turns
    #[arg(long)]
    pub show_ai_moves: bool,

    /// Mark the human plays (`x` or `o`)
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,

    /// Who makes the first move (`human` or `computer`)
    #[arg(long, short = 'f', default_value = "human")]
    pub first: String,

    /// Delay before the computer moves, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Random seed for the computer's opening move
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run(args, &mut input, &mut output)
}

/// Parse the human's mark choice into (human, computer) glyphs
fn parse_mark(value: &str) -> Result<(char, char)> {
    match value.to_lowercase().as_str() {
        "x" => Ok(('X', 'O')),
        "o" => Ok(('O', 'X')),
        other => Err(anyhow::anyhow!(
            "Invalid mark '{other}'. Expected 'x' or 'o'"
        )),
    }
}

/// Parse a "row col" line into a move; `None` means unusable input
fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Move::new(row, col).ok()
}

fn run(args: PlayArgs, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
    let (human_mark, computer_mark) = parse_mark(&args.mark)?;
    let first = parse_side_token(&args.first, "--first")?;

    let mut config = SessionConfig::new()
        .with_play_depth(args.depth)
        .with_visualize_depth(args.visualize_depth)
        .with_computer_delay(Duration::from_millis(args.delay_ms));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::new(config, first)?;
    let clock = SystemClock;

    // Narration pacing only applies while the log is shown, matching the
    // "Show AI moves" checkbox of the original shell.
    let mut log = if args.show_ai_moves {
        NarrationLog::new(args.visualize_depth)
            .with_pacing(Box::new(SystemClock), NARRATION_STEP)
    } else {
        NarrationLog::new(0)
    };

    writeln!(
        output,
        "You are {human_mark}, the computer is {computer_mark}. Enter moves as 'row col' (0-2)."
    )?;

    loop {
        match session.phase() {
            Phase::HumanTurn => {
                writeln!(output, "\n{}", render_board(session.board(), human_mark, computer_mark))?;
                write!(output, "Your move (row col): ")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    writeln!(output, "\nInput closed, leaving the game.")?;
                    return Ok(());
                }

                match parse_move(&line) {
                    Some(mv) => {
                        if session.human_move(mv) == MoveReply::Rejected {
                            writeln!(output, "Cell {mv} is taken.")?;
                        }
                    }
                    None => writeln!(output, "Enter a row and a column, each 0-2.")?,
                }
            }
            Phase::ComputerTurn => {
                log.clear();
                let mv = session.computer_move(&clock, &mut log)?;
                writeln!(output, "\nComputer plays {mv}")?;
                if args.show_ai_moves {
                    for entry in log.entries() {
                        writeln!(output, "  {entry}")?;
                    }
                }
            }
            Phase::Over(outcome) => {
                writeln!(output, "\n{}", render_board(session.board(), human_mark, computer_mark))?;
                let message = match outcome {
                    Outcome::HumanWin => "You win!",
                    Outcome::ComputerWin => "You lose!",
                    Outcome::Draw => "It's a draw!",
                };
                writeln!(output, "{message}")?;
                return Ok(());
            }
        }
    }
}
