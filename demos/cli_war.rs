//! CLI War example: asks for two names, then plays the match out.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use warrs::names::from_fn;
use warrs::{Game, GameOptions, TurnResult};

fn main() {
    println!("War CLI example");

    let game = Game::from_os_rng(GameOptions::default());

    if let Err(err) = game.start(&mut from_fn(|index| {
        let name = prompt_line(&format!("Name for player {}: ", index + 1));
        if name.is_empty() {
            warrs::names::default_name(index)
        } else {
            name
        }
    })) {
        println!("Setup error: {err}");
        return;
    }

    while !game.has_ended() {
        match game.progress_turn() {
            Ok(result) => narrate(&game, &result),
            Err(err) => {
                println!("Turn error: {err}");
                return;
            }
        }
    }

    if let Some(winner) = game.winner() {
        println!(
            "Player {} is the winner with {} victories",
            winner.name, winner.games_won
        );
    }
}

fn narrate(game: &Game, result: &TurnResult) {
    let name = |index: usize| game.player_name(index).unwrap_or_default();

    println!("\nTurn {}", result.turn);
    let mut depth = 0;
    for played in &result.played {
        if played.depth > depth {
            depth = played.depth;
            println!("War started");
        }
        match played.card {
            Some(card) => println!("Player {} played {card}", name(played.player_index)),
            None => println!("Player {} has no cards to play", name(played.player_index)),
        }
    }

    if let Some(winner) = result.winner {
        println!("Player {} wins {} card(s)", name(winner), result.cards_won());
    }
    for &index in &result.eliminated {
        println!("Player {} is out of cards", name(index));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
