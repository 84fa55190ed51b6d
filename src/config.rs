//! Per-game settings chosen before play starts

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::{search::Difficulty, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS};

pub const ROWS_VAR: &str = "CONNECT4_ROWS";
pub const COLUMNS_VAR: &str = "CONNECT4_COLUMNS";
/// 0 selects a second human player
pub const DIFFICULTY_VAR: &str = "CONNECT4_DIFFICULTY";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Opponent {
    Human,
    Computer(Difficulty),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub opponent: Opponent,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: MIN_ROWS,
            columns: MIN_COLUMNS,
            opponent: Opponent::Computer(Difficulty::default()),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        check_rows(self.rows)?;
        check_columns(self.columns)?;
        Ok(())
    }

    /// Overrides fields from `CONNECT4_*` environment variables
    ///
    /// Values that fail to parse or validate are logged and skipped.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Same as `apply_env_overrides` with an arbitrary variable source
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ROWS_VAR) {
            match parse_checked(&value, check_rows) {
                Ok(rows) => {
                    info!("{}={} overrides rows", ROWS_VAR, rows);
                    self.rows = rows;
                }
                Err(err) => warn!("ignoring {}={}: {}", ROWS_VAR, value, err),
            }
        }

        if let Some(value) = lookup(COLUMNS_VAR) {
            match parse_checked(&value, check_columns) {
                Ok(columns) => {
                    info!("{}={} overrides columns", COLUMNS_VAR, columns);
                    self.columns = columns;
                }
                Err(err) => warn!("ignoring {}={}: {}", COLUMNS_VAR, value, err),
            }
        }

        if let Some(value) = lookup(DIFFICULTY_VAR) {
            match parse_opponent(&value) {
                Ok(opponent) => {
                    info!("{}={} overrides opponent", DIFFICULTY_VAR, value.trim());
                    self.opponent = opponent;
                }
                Err(err) => warn!("ignoring {}={}: {}", DIFFICULTY_VAR, value, err),
            }
        }

        self
    }
}

pub fn check_rows(rows: usize) -> Result<usize> {
    if rows < MIN_ROWS || rows >= MAX_ROWS {
        return Err(anyhow!(
            "Invalid number of rows {}, must be at least {} and less than {}",
            rows,
            MIN_ROWS,
            MAX_ROWS
        ));
    }
    Ok(rows)
}

pub fn check_columns(columns: usize) -> Result<usize> {
    if columns < MIN_COLUMNS || columns >= MAX_COLUMNS {
        return Err(anyhow!(
            "Invalid number of columns {}, must be at least {} and less than {}",
            columns,
            MIN_COLUMNS,
            MAX_COLUMNS
        ));
    }
    Ok(columns)
}

/// Parses a number and runs it through one of the bound checks
pub fn parse_checked(input: &str, check: fn(usize) -> Result<usize>) -> Result<usize> {
    let value = input
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("'{}' is not a number", input.trim()))?;
    check(value)
}

/// "0" is a human opponent, 1-10 is a computer at that difficulty
pub fn parse_opponent(input: &str) -> Result<Opponent> {
    let level = input
        .trim()
        .parse::<u8>()
        .map_err(|_| anyhow!("'{}' is not a number", input.trim()))?;
    match level {
        0 => Ok(Opponent::Human),
        level => Ok(Opponent::Computer(Difficulty::new(level)?)),
    }
}
