//! A variable-size Connect 4 grid
//!
//! Row 0 is the top of the grid and pieces fall towards row `rows - 1`.

use anyhow::{anyhow, Result};

use crate::WIN_LENGTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Decodes the small-integer encoding used by callers (0, 1 or 2)
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::PlayerOne),
            2 => Ok(Cell::PlayerTwo),
            _ => Err(anyhow!("invalid cell value {}, expected 0, 1 or 2", value)),
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The computer always moves second
    pub const COMPUTER: Player = Player::Two;

    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// 1 for player one, 2 for player two
    pub fn number(&self) -> u8 {
        self.cell().value()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameState::PlayerOneWin,
            Player::Two => GameState::PlayerTwoWin,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

// the four directions a window can run in, as (row step, column step)
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A rectangular grid of cells with gravity
///
/// Cloning is the only way a speculative move is tried, the search never
/// mutates a grid it was given.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Builds a grid from rows of 0/1/2 values, top row first
    pub fn from_values<R: AsRef<[u8]>>(values: &[R]) -> Result<Self> {
        let rows = values.len();
        let columns = values.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows * columns);

        for (row_index, row) in values.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row_index,
                    row.len(),
                    columns
                ));
            }
            for &value in row {
                cells.push(Cell::from_value(value)?);
            }
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Replays a game given as one-indexed hexadecimal column digits,
    /// starting with player one
    pub fn from_moves<S: AsRef<str>>(rows: usize, columns: usize, moves: S) -> Result<Self> {
        let mut grid = Self::new(rows, columns);
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(16).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= columns => {
                    if grid.drop_piece(column - 1, player).is_none() {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Panics if `row` or `column` is out of range
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }

    /// Inverse of `from_values`
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                self.cells[row * self.columns..(row + 1) * self.columns]
                    .iter()
                    .map(Cell::value)
                    .collect()
            })
            .collect()
    }

    /// True iff the top cell of `column` is empty
    pub fn column_available(&self, column: usize) -> bool {
        column < self.columns && self.rows > 0 && self.cells[column].is_empty()
    }

    /// Available columns, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(move |&column| self.column_available(column))
    }

    /// Drops a piece into the lowest empty cell of `column`
    ///
    /// Returns the row written, or `None` without touching the grid when the
    /// column is full or does not exist.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.columns + column].is_empty())?;
        self.cells[row * self.columns + column] = player.cell();
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// True iff `player` has at least four in a row along any axis
    pub fn check_victory(&self, player: Player) -> bool {
        let target = player.cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// Every run of `WIN_LENGTH` cells: horizontal, vertical, then both diagonals
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WIN_LENGTH]> + '_ {
        AXES.iter().flat_map(move |&(row_step, column_step)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.columns).filter_map(move |column| {
                    self.window_at(row, column, row_step, column_step)
                })
            })
        })
    }

    fn window_at(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
    ) -> Option<[Cell; WIN_LENGTH]> {
        let span = (WIN_LENGTH - 1) as isize;
        let last_row = row as isize + row_step * span;
        let last_column = column as isize + column_step * span;
        if last_row < 0
            || last_row >= self.rows as isize
            || last_column < 0
            || last_column >= self.columns as isize
        {
            return None;
        }

        let mut window = [Cell::Empty; WIN_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (column as isize + column_step * i as isize) as usize;
            *cell = self.cells[r * self.columns + c];
        }
        Some(window)
    }
}
