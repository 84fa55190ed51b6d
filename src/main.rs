use anyhow::Result;
use tracing::info;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_bot::{
    config::{self, GameConfig, Opponent},
    grid::GameState,
    session::Session,
    MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS,
};

mod display;
use display::*;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Asks until `parse` accepts the answer, an empty answer keeps `default`
fn prompt<T, F>(stdin: &Stdin, question: &str, default: T, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        print!("{}\nYour input: ", question);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            // stdin closed, nothing more will be typed
            return Ok(default);
        }
        if buffer.trim().is_empty() {
            return Ok(default);
        }
        match parse(&buffer) {
            Ok(value) => return Ok(value),
            Err(err) => println!("\n{}, please retry.\n", err),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let stdin = stdin();
    let defaults = GameConfig::default().apply_env_overrides();

    println!("Welcome to Connect 4\n");

    let rows = prompt(
        &stdin,
        &format!(
            "How many rows? ({} to {}, default {})",
            MIN_ROWS,
            MAX_ROWS - 1,
            defaults.rows
        ),
        defaults.rows,
        |input| config::parse_checked(input, config::check_rows),
    )?;
    let columns = prompt(
        &stdin,
        &format!(
            "How many columns? ({} to {}, default {})",
            MIN_COLUMNS,
            MAX_COLUMNS - 1,
            defaults.columns
        ),
        defaults.columns,
        |input| config::parse_checked(input, config::check_columns),
    )?;
    let default_level = match defaults.opponent {
        Opponent::Human => 0,
        Opponent::Computer(difficulty) => difficulty.level(),
    };
    let opponent = prompt(
        &stdin,
        &format!(
            "Computer level? 0 for a second player, easy 1-3, medium 4-6, hard 7-10 (default {})",
            default_level
        ),
        defaults.opponent,
        config::parse_opponent,
    )?;

    let game_config = GameConfig {
        rows,
        columns,
        opponent,
    };
    info!(?game_config, "starting game");
    let versus_computer = matches!(opponent, Opponent::Computer(_));
    let mut session = Session::new(game_config)?;

    // game loop
    loop {
        display(session.grid(), versus_computer).expect("Failed to draw board!");

        match session.state() {
            GameState::Playing => {
                let next_move =
                    // AI player
                    if session.is_computer_turn() {
                        println!("The computer is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let column = session.computer_move()?;
                        println!("The computer plays column {:x}", column);
                        column

                    // human player
                    } else {
                        print_player(session.current_player(), versus_computer)?;
                        print!(", move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            println!("\nGoodbye!");
                            break;
                        }

                        match usize::from_str_radix(input_str.trim(), 16) {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = session.play(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin | GameState::PlayerTwoWin => {
                print!("Congratulations, ");
                print_player(session.current_player(), versus_computer)?;
                println!("! Won in {} turns!", session.turns());
                break;
            }
            GameState::Draw => {
                println!("It's a tie! The game grid is full.");
                break;
            }
        }
    }
    Ok(())
}
