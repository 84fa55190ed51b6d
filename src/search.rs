//! Depth-limited minimax search for the computer player

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    evaluation::{Heuristic, WindowHeuristic},
    grid::{Grid, Player},
};

/// The most candidate columns tried at a maximizing node
pub const MAX_CANDIDATES: usize = 7;

/// Boards wider than this are always searched at `WIDE_BOARD_DEPTH`
pub const WIDE_BOARD_COLUMNS: usize = 8;
pub const WIDE_BOARD_DEPTH: usize = 3;

/// The computer's level of thinking, from 1 (easiest) to 10 (hardest)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Result<Self> {
        if level < Self::MIN || level > Self::MAX {
            return Err(anyhow!(
                "Invalid difficulty {}, must be between {} and {}",
                level,
                Self::MIN,
                Self::MAX
            ));
        }
        Ok(Self(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}

/// Returns the number of plies searched below each of the computer's
/// candidate moves
///
/// Wide boards override the difficulty to keep the search cost bounded.
pub fn search_depth(difficulty: Difficulty, columns: usize) -> usize {
    if columns > WIDE_BOARD_COLUMNS {
        WIDE_BOARD_DEPTH
    } else if difficulty.level() <= 3 {
        2
    } else if difficulty.level() <= 6 {
        4
    } else {
        6
    }
}

/// Returns the columns ordered from the middle outwards, as
/// the middle columns are often better moves
///
/// On equal distance from the centre the left column comes first.
pub fn move_order(columns: usize) -> Vec<usize> {
    let centre = columns / 2;
    let mut order: Vec<usize> = (0..columns).collect();
    // stable sort keeps left-before-right on ties
    order.sort_by_key(|&column| (column as isize - centre as isize).abs());
    order
}

/// A minimax searcher with alpha-beta pruning
///
/// # Notes
/// The maximizing side (the computer) tries at most `MAX_CANDIDATES` columns,
/// centre first, while the minimizing side tries every legal column left to
/// right. Leaves and finished games are both scored by the heuristic, so a
/// won position is not given a special value.
#[derive(Clone, Debug)]
pub struct Searcher<H = WindowHeuristic> {
    computer: Player,
    heuristic: H,
    move_cap: Option<usize>,
    pruning: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher<WindowHeuristic> {
    /// Creates a `Searcher` playing as player two with the window heuristic
    pub fn new() -> Self {
        Self::with_heuristic(WindowHeuristic)
    }
}

impl Default for Searcher<WindowHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> Searcher<H> {
    /// Creates a `Searcher` playing as player two with a custom heuristic
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            computer: Player::COMPUTER,
            heuristic,
            move_cap: Some(MAX_CANDIDATES),
            pruning: true,
            node_count: 0,
        }
    }

    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Limits the columns tried at maximizing nodes, `None` tries them all
    pub fn with_move_cap(mut self, move_cap: Option<usize>) -> Self {
        self.move_cap = move_cap;
        self
    }

    /// Turns alpha-beta cutoffs on or off; scores are identical either way
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Performs game tree search
    ///
    /// Returns the heuristic value of `grid` after `depth` further plies of
    /// best play, from the computer's point of view.
    pub fn minimax(
        &mut self,
        grid: &Grid,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0
            || grid.check_victory(self.computer)
            || grid.check_victory(self.computer.other())
            || grid.is_full()
        {
            return self.heuristic.evaluate(grid, self.computer);
        }

        if maximizing {
            let candidates: Vec<usize> = move_order(grid.columns())
                .into_iter()
                .filter(|&column| grid.column_available(column))
                .take(self.move_cap.unwrap_or(usize::MAX))
                .collect();

            let mut max_score = i32::MIN;
            for column in candidates {
                let mut next = grid.clone();
                next.drop_piece(column, self.computer);

                let score = self.minimax(&next, depth - 1, alpha, beta, false);
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                // the minimizing parent already has a better option than this branch
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = i32::MAX;
            for column in 0..grid.columns() {
                if !grid.column_available(column) {
                    continue;
                }
                let mut next = grid.clone();
                next.drop_piece(column, self.computer.other());

                let score = self.minimax(&next, depth - 1, alpha, beta, true);
                min_score = min_score.min(score);
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }

    /// Scores the computer playing `column`, with the opponent to move next
    fn score_root_move(&mut self, grid: &Grid, column: usize, depth: usize) -> i32 {
        let mut next = grid.clone();
        next.drop_piece(column, self.computer);
        self.minimax(&next, depth, i32::MIN, i32::MAX, false)
    }

    /// Calculates the best column for the computer to play
    ///
    /// Every legal column is tried left to right and the first one with the
    /// highest score wins. The grid must have at least one legal column.
    pub fn best_move(&mut self, grid: &Grid, difficulty: Difficulty) -> Result<usize> {
        let depth = search_depth(difficulty, grid.columns());
        let start_count = self.node_count;

        let mut best: Option<(usize, i32)> = None;
        for column in grid.legal_columns() {
            let score = self.score_root_move(grid, column, depth);
            trace!(column, score, "scored root move");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let (column, score) =
            best.ok_or_else(|| anyhow!("Invalid state, no column available to play"))?;
        debug!(
            column,
            score,
            depth,
            nodes = self.node_count - start_count,
            "best move found"
        );
        Ok(column)
    }
}

impl<H: Heuristic + Clone + Send + Sync> Searcher<H> {
    /// Same as [`best_move`](Searcher::best_move), with each top-level column
    /// searched on the rayon thread pool
    pub fn best_move_parallel(&mut self, grid: &Grid, difficulty: Difficulty) -> Result<usize> {
        let depth = search_depth(difficulty, grid.columns());
        let columns: Vec<usize> = grid.legal_columns().collect();
        let template: &Self = self;

        // (column, score, nodes searched), in column order
        let results: Vec<(usize, i32, usize)> = columns
            .par_iter()
            .map(|&column| {
                let mut searcher = template.clone();
                searcher.node_count = 0;
                let score = searcher.score_root_move(grid, column, depth);
                (column, score, searcher.node_count)
            })
            .collect();

        let mut best: Option<(usize, i32)> = None;
        for &(column, score, nodes) in results.iter() {
            self.node_count += nodes;
            trace!(column, score, "scored root move");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let (column, score) =
            best.ok_or_else(|| anyhow!("Invalid state, no column available to play"))?;
        debug!(column, score, depth, "best move found in parallel");
        Ok(column)
    }
}

/// Picks the computer's (player two's) move with the default heuristic
pub fn get_best_move(grid: &Grid, difficulty: Difficulty) -> Result<usize> {
    Searcher::new().best_move(grid, difficulty)
}
