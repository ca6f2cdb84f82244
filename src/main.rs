use anyhow::{anyhow, Result};
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Write};

use connect_four_ai::search::DEFAULT_DEPTH;
use connect_four_ai::*;

mod display;

// columns arrive 1-indexed from the prompt and the engine printout
fn play_one_indexed(board: &mut Board, column: usize, player: Player) -> Result<usize> {
    if column < 1 || column > WIDTH {
        return Err(anyhow!(
            "Invalid move, column {} out of range. Columns must be between 1 and {}",
            column,
            WIDTH
        ));
    }
    board.play_checked(column - 1, player)
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    loop {
        let mut board = Board::new();
        let mut player = Player::One;

        // game loop
        loop {
            display::draw(&board).expect("Failed to draw board!");

            match board.outcome() {
                GameState::Playing => {
                    let ai_turn = match player {
                        Player::One => ai_players.0,
                        Player::Two => ai_players.1,
                    };

                    let next_move =
                        // AI player
                        if ai_turn {
                            // slow down play if both players are AI
                            if ai_players == (true, true) {
                                std::thread::sleep(std::time::Duration::new(1, 0));
                            }

                            let spinner = ProgressBar::new_spinner();
                            spinner.set_message("AI is thinking...");
                            spinner.enable_steady_tick(100);

                            let mut engine = Minimax::new(DEFAULT_DEPTH);
                            let result = engine.best_move(&board, player);
                            spinner.finish_and_clear();

                            let best_move = result
                                .column
                                .expect("engine found no legal move in an unfinished game");
                            println!("Best move: {}", best_move + 1);
                            best_move + 1

                        // human player
                        } else {
                            print!("Move input > ");
                            stdout().flush().expect("Failed to flush to stdout!");
                            let mut input_str = String::new();
                            stdin.read_line(&mut input_str)?;

                            match input_str.trim().parse::<usize>() {
                                Err(_) => {
                                    println!("Invalid number: {}", input_str);
                                    continue;
                                }
                                Ok(column) => column,
                            }
                        };

                    if let Err(err) = play_one_indexed(&mut board, next_move, player) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                    player = player.opponent();
                }

                // end states
                GameState::Won(Player::One) => {
                    println!("Player 1 wins!");
                    break;
                }
                GameState::Won(Player::Two) => {
                    println!("Player 2 wins!");
                    break;
                }
                GameState::Draw => {
                    println!("Draw!");
                    break;
                }
            }
        }

        // offer a fresh board before quitting
        let mut play_again = false;
        loop {
            let mut buffer = String::new();
            print!("Play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    play_again = true;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
        if !play_again {
            break;
        }
    }
    Ok(())
}
