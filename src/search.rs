//! Depth-bounded minimax search
//!
//! Full-width recursion over the empty cells with no pruning; the 3x3 board
//! keeps the tree small enough that the worst case (9 levels from an empty
//! board) stays tractable. The computer maximizes, the human minimizes.

use crate::{
    game::{Board, Move, Side},
    ports::SearchObserver,
};

/// Result of a search: the chosen move (if the position was not terminal)
/// and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub best: Option<Move>,
    pub score: i32,
}

/// Search `board` to `depth` plies with `to_move` to play.
///
/// Terminal positions (a completed winning line, a full board, or an
/// exhausted depth budget) return the static evaluation with no move.
/// Candidates are enumerated in row-major order and only strictly better
/// scores replace the incumbent, so ties keep the earliest candidate.
pub fn minimax(board: &Board, depth: u8, to_move: Side, observer: &mut dyn SearchObserver) -> Scored {
    search(board, depth, to_move, 0, observer)
}

fn search(
    board: &Board,
    depth: u8,
    to_move: Side,
    ply: usize,
    observer: &mut dyn SearchObserver,
) -> Scored {
    let candidates = board.empty_cells();
    if depth == 0 || board.game_over() || candidates.is_empty() {
        return Scored {
            best: None,
            score: board.evaluate(),
        };
    }

    let mut best = None;
    let mut best_score = match to_move {
        Side::Computer => i32::MIN,
        Side::Human => i32::MAX,
    };

    for mv in candidates {
        observer.on_probe(ply, mv);

        let child = board
            .place(mv, to_move)
            .expect("empty-cell enumeration yielded an occupied cell");
        let child_score = search(&child, depth - 1, to_move.opponent(), ply + 1, observer).score;

        observer.on_candidate(ply, mv, child_score);

        let improves = match to_move {
            Side::Computer => child_score > best_score,
            Side::Human => child_score < best_score,
        };
        if improves {
            best_score = child_score;
            best = Some(mv);
        }
    }

    Scored {
        best,
        score: best_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{NarrationLog, NullObserver};

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_position_returns_static_evaluation() {
        let won = board("CCC.H.H..");
        let result = minimax(&won, 9, Side::Human, &mut NullObserver);
        assert_eq!(result.best, None);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_full_board_draw_scores_zero() {
        let drawn = board("HCHHCCCHH");
        let result = minimax(&drawn, 9, Side::Computer, &mut NullObserver);
        assert_eq!(result.best, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_depth_zero_returns_static_evaluation() {
        let mid = board("HC.......");
        let result = minimax(&mid, 0, Side::Computer, &mut NullObserver);
        assert_eq!(result.best, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_computer_takes_immediate_win() {
        // CC. / HH. / ... with the computer to move
        let b = board("CC.HH....");
        let result = minimax(&b, 1, Side::Computer, &mut NullObserver);
        assert_eq!(result.best, Some(mv(0, 2)));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_human_takes_immediate_win() {
        let b = board("HH.CC....");
        let result = minimax(&b, 1, Side::Human, &mut NullObserver);
        assert_eq!(result.best, Some(mv(0, 2)));
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_computer_blocks_human_threat() {
        // HH. / .C. / ... with the computer to move: must block at (0, 2)
        let b = board("HH..C....");
        let result = minimax(&b, 9, Side::Computer, &mut NullObserver);
        assert_eq!(result.best, Some(mv(0, 2)));
    }

    #[test]
    fn test_row_major_tie_break_keeps_earliest() {
        // All openings draw under optimal play, so (0, 0) is kept
        let result = minimax(&Board::new(), 4, Side::Computer, &mut NullObserver);
        assert_eq!(result.best, Some(mv(0, 0)));
    }

    #[test]
    fn test_narration_covers_root_candidates() {
        let b = board("HH..C....");
        let mut log = NarrationLog::new(1);
        minimax(&b, 2, Side::Computer, &mut log);

        // One narrated line per root candidate (6 empty cells)
        assert_eq!(log.entries().len(), 6);
        assert!(log.entries()[0].starts_with("Checking move at (0, 2)"));
    }

    #[test]
    fn test_board_is_unchanged_by_search() {
        let b = board("HC..C..H.");
        let before = b;
        minimax(&b, 9, Side::Human, &mut NullObserver);
        assert_eq!(b, before);
    }
}
