//! End-to-end checks of the turn-taking session controller.

use std::{
    sync::Mutex,
    time::Duration,
};

use oxo::{
    Clock, Move, MoveReply, NarrationLog, NoDelay, NullObserver, Outcome, Phase, Session,
    SessionConfig, Side,
};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Clock that records every requested pause instead of sleeping
#[derive(Default)]
struct RecordingClock {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    fn recorded(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Clock for RecordingClock {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

#[test]
fn computer_waits_the_configured_delay_through_the_clock() {
    let config = SessionConfig::new()
        .with_play_depth(9)
        .with_computer_delay(Duration::from_millis(250))
        .with_seed(5);
    let mut session = Session::new(config, Side::Computer).unwrap();

    let clock = RecordingClock::default();
    session.computer_move(&clock, &mut NullObserver).unwrap();

    assert_eq!(clock.recorded(), vec![Duration::from_millis(250)]);
}

#[test]
fn occupied_target_is_silently_rejected() {
    let config = SessionConfig::new().with_play_depth(9).with_seed(5);
    let mut session = Session::new(config, Side::Computer).unwrap();

    let opening = session.computer_move(&NoDelay, &mut NullObserver).unwrap();
    let before = *session.board();

    assert_eq!(session.human_move(opening), MoveReply::Rejected);
    assert_eq!(*session.board(), before);
    assert_eq!(session.phase(), Phase::HumanTurn);
}

#[test]
fn narration_is_collected_during_the_computers_search() {
    let config = SessionConfig::new()
        .with_play_depth(2)
        .with_visualize_depth(1)
        .with_seed(5);
    let mut session = Session::new(config, Side::Human).unwrap();

    session.human_move(mv(1, 1));

    let mut log = NarrationLog::new(1);
    session.computer_move(&NoDelay, &mut log).unwrap();

    // One narrated line per root candidate (8 empty cells remained)
    assert_eq!(log.entries().len(), 8);
    for entry in log.entries() {
        assert!(entry.starts_with("Checking move at ("));
        assert!(entry.ends_with("at depth 1"));
    }
}

#[test]
fn random_opening_is_not_narrated() {
    let config = SessionConfig::new().with_play_depth(9).with_seed(5);
    let mut session = Session::new(config, Side::Computer).unwrap();

    let mut log = NarrationLog::new(9);
    session.computer_move(&NoDelay, &mut log).unwrap();

    // The opening shortcut bypasses the search entirely
    assert!(log.entries().is_empty());
    assert_eq!(session.board().occupied_count(), 1);
}

#[test]
fn human_win_is_detected_against_a_shallow_computer() {
    // With the human opening, a depth-1 computer is fully deterministic: it
    // never sees a threat coming and always takes the first open cell in
    // row-major order. The main-diagonal walk wins for the human.
    let config = SessionConfig::new().with_play_depth(1);
    let mut session = Session::new(config, Side::Human).unwrap();
    let clock = NoDelay;

    assert_eq!(session.human_move(mv(0, 0)), MoveReply::Applied);
    assert_eq!(
        session.computer_move(&clock, &mut NullObserver).unwrap(),
        mv(0, 1)
    );
    assert_eq!(session.human_move(mv(1, 1)), MoveReply::Applied);
    assert_eq!(
        session.computer_move(&clock, &mut NullObserver).unwrap(),
        mv(0, 2)
    );
    assert_eq!(session.human_move(mv(2, 2)), MoveReply::Applied);

    assert_eq!(session.phase(), Phase::Over(Outcome::HumanWin));
    assert_eq!(session.outcome(), Some(Outcome::HumanWin));
}

#[test]
fn full_depth_computer_never_loses_a_whole_game() {
    for seed in 0..5 {
        let config = SessionConfig::new().with_play_depth(9).with_seed(seed);
        let mut session = Session::new(config, Side::Computer).unwrap();
        let clock = NoDelay;

        while !session.is_over() {
            match session.phase() {
                Phase::HumanTurn => {
                    // Center-first human, then greedy row-major
                    let center = mv(1, 1);
                    if session.human_move(center) == MoveReply::Rejected {
                        let target = session.board().empty_cells()[0];
                        assert_eq!(session.human_move(target), MoveReply::Applied);
                    }
                }
                Phase::ComputerTurn => {
                    session.computer_move(&clock, &mut NullObserver).unwrap();
                }
                Phase::Over(_) => unreachable!(),
            }
        }

        assert_ne!(
            session.outcome(),
            Some(Outcome::HumanWin),
            "computer lost with seed {seed}"
        );
    }
}
