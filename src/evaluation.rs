//! Static scoring of a position for the search cutoff

use crate::grid::{Grid, Player};

/// Score of a window holding four of the computer's pieces
pub const FOUR_SCORE: i32 = 10_000;
/// Score of three computer pieces and one empty cell
pub const THREE_SCORE: i32 = 50;
/// Score of two computer pieces and two empty cells
pub const TWO_SCORE: i32 = 10;
/// Score of three opponent pieces and one empty cell
pub const OPPONENT_THREE_SCORE: i32 = -80;

/// Scores a position from the computer's point of view, higher is better
pub trait Heuristic {
    fn evaluate(&self, grid: &Grid, computer: Player) -> i32;
}

/// Sums a fixed score for every four-cell window on the grid
#[derive(Copy, Clone, Debug, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, grid: &Grid, computer: Player) -> i32 {
        let own_cell = computer.cell();
        let opponent_cell = computer.other().cell();

        grid.windows()
            .map(|window| {
                let mut own = 0;
                let mut opponent = 0;
                let mut empty = 0;
                for &cell in window.iter() {
                    match cell {
                        c if c == own_cell => own += 1,
                        c if c == opponent_cell => opponent += 1,
                        _ => empty += 1,
                    }
                }
                score_window(own, opponent, empty)
            })
            .sum()
    }
}

/// The score of one window given its piece counts
///
/// An opponent four is worth nothing on its own, only an open opponent
/// three is penalised.
pub fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    match (own, opponent, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_SCORE,
        _ => 0,
    }
}

/// Convenience wrapper around [`WindowHeuristic`]
pub fn evaluate_position(grid: &Grid, computer: Player) -> i32 {
    WindowHeuristic.evaluate(grid, computer)
}
