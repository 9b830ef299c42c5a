//! CLI demo driving the engine from stdin.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use puntors::{GRID_SIZE, Game, GameOptions, Grid, MoveOutcome, PlayerColor};

fn main() {
    println!("Punto CLI demo (enter moves as 'x y', 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        print_board(&game.board());
        let turn = game.turn();
        println!(
            "{:?} to move, holding {} ({} cards left)",
            turn.player,
            turn.card,
            game.cards_remaining(turn.player)
        );

        let Some((x, y)) = prompt_coords("Place at (x y): ") else {
            println!("Goodbye.");
            break;
        };

        match game.place(x, y) {
            Ok(MoveOutcome::TurnChanged {
                next_player,
                next_card,
                ..
            }) => {
                println!("Next: {next_player:?} holding {next_card}");
            }
            Ok(MoveOutcome::Won { winner, .. }) => {
                print_board(&game.board());
                println!("{winner:?} wins!");
                break;
            }
            Ok(MoveOutcome::DeckExhausted { player, .. }) => {
                print_board(&game.board());
                println!("{player:?} is out of cards. Game over.");
                break;
            }
            Err(err) => println!("Move rejected: {err}"),
        }
    }
}

fn print_board(grid: &Grid) {
    print!("   ");
    for y in 0..GRID_SIZE {
        print!("{y:>3}");
    }
    println!();

    for x in 0..GRID_SIZE {
        print!("{x:>3}");
        for y in 0..GRID_SIZE {
            match grid.get(x, y) {
                Ok(Some(token)) => print!(" {}{}", color_letter(token.owner), token.value),
                _ => print!("  ."),
            }
        }
        println!();
    }
}

const fn color_letter(color: PlayerColor) -> char {
    match color {
        PlayerColor::Red => 'R',
        PlayerColor::Green => 'G',
        PlayerColor::Yellow => 'Y',
        PlayerColor::Blue => 'B',
    }
}

fn prompt_coords(prompt: &str) -> Option<(usize, usize)> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return None;
        }
        let line = line.trim();
        if line.is_empty() || line == "q" {
            return None;
        }

        let mut parts = line.split_whitespace();
        if let (Some(x), Some(y)) = (
            parts.next().and_then(|s| s.parse().ok()),
            parts.next().and_then(|s| s.parse().ok()),
        ) {
            return Some((x, y));
        }
        println!("Enter two numbers, e.g. '5 5'.");
    }
}
