use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_bot::grid::{Cell, Grid, Player};

pub fn player_color(player: Player, versus_computer: bool) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two if versus_computer => Color::Cyan,
        Player::Two => Color::Yellow,
    }
}

/// Prints the column numbers then the grid, top row first
pub fn display(grid: &Grid, versus_computer: bool) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (1..=grid.columns()).map(|x| format!("{:x}", x)).collect();
    stdout.queue(PrintStyledContent(style(columns + "\n")))?;

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let color = match grid.cell(row, column) {
                Cell::PlayerOne => player_color(Player::One, versus_computer),
                Cell::PlayerTwo => player_color(Player::Two, versus_computer),
                Cell::Empty => Color::DarkBlue,
            };
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(color),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints "Player N" in that player's colour
pub fn print_player(player: Player, versus_computer: bool) -> Result<()> {
    let mut stdout = stdout();
    let name = if versus_computer && player == Player::COMPUTER {
        String::from("The computer")
    } else {
        format!("Player {}", player.number())
    };
    stdout.queue(PrintStyledContent(
        style(name).with(player_color(player, versus_computer)),
    ))?;
    stdout.flush()?;
    Ok(())
}
