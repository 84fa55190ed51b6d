//! State of one play-through, owned by the game loop

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::{
    config::{GameConfig, Opponent},
    grid::{GameState, Grid, Player},
    search::Searcher,
};

#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    player: Player,
    turns: usize,
    state: GameState,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.rows, config.columns),
            player: Player::One,
            turns: 0,
            state: GameState::Playing,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        self.player
    }

    /// Number of pieces placed so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.config.opponent, Opponent::Computer(_))
            && self.player == Player::COMPUTER
            && !self.state.is_over()
    }

    /// Plays a one-indexed column for the current player
    pub fn play(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        let columns = self.grid.columns();
        if column_one_indexed < 1 || column_one_indexed > columns {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                columns
            ));
        }
        let column = column_one_indexed - 1;
        if self.grid.drop_piece(column, self.player).is_none() {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.turns += 1;

        self.state = if self.grid.check_victory(self.player) {
            GameState::win_for(self.player)
        } else if self.grid.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };

        // the winner stays current so the game loop can announce them
        if !self.state.is_over() {
            self.player = self.player.other();
        }
        Ok(self.state)
    }

    /// Chooses the computer's column, one-indexed and ready for `play`
    pub fn computer_move(&self) -> Result<usize> {
        let difficulty = match self.config.opponent {
            Opponent::Computer(difficulty) => difficulty,
            Opponent::Human => return Err(anyhow!("Invalid state, no computer player")),
        };
        if !self.is_computer_turn() {
            return Err(anyhow!("Invalid state, it is not the computer's turn"));
        }

        let mut searcher = Searcher::new().with_computer(self.player);
        let column = searcher.best_move_parallel(&self.grid, difficulty)?;
        debug!(
            column,
            nodes = searcher.node_count,
            level = difficulty.level(),
            "computer move chosen"
        );
        Ok(column + 1)
    }
}
