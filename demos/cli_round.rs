//! CLI round example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use unors::{
    Card, CardColor, CardValue, DrawError, FirstLegal, Game, GameOptions, GamePhase, PlayerProfile,
    ScriptedMove,
};

const SCRIPTED_SEATS: [&str; 3] = ["East", "North", "West"];
const SCRIPTED_BALANCE: usize = 1000;

fn main() {
    println!("UNO table CLI example (type 'q' to quit)");

    let name = prompt_line("Your name: ");
    let name = if name.is_empty() { "player".to_string() } else { name };
    let mut profile = PlayerProfile::new(&name);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    let human = match game.join(profile.username(), profile.balance()) {
        Ok(id) => id,
        Err(err) => {
            println!("Join error: {err:?}");
            return;
        }
    };
    for seat in SCRIPTED_SEATS {
        if let Err(err) = game.join_scripted(seat, SCRIPTED_BALANCE) {
            println!("Join error: {err:?}");
            return;
        }
    }

    let mut policy = FirstLegal;

    loop {
        if profile.balance() == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!(
            "Bet amount (1-{}, 0 to quit): ",
            profile.balance()
        )) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.start_round(bet) {
            println!("Setup error: {err:?}");
            continue;
        }

        let mut blocked_streak = 0;
        while game.phase() == GamePhase::Playing {
            let Some(current) = game.current_player() else {
                break;
            };

            if current.id() == human {
                print_table(&game, human);
                if !take_human_turn(&mut game, human) {
                    return;
                }
                blocked_streak = 0;
                continue;
            }

            // Thinking delay is pure presentation; the engine is always
            // ready for the next operation.
            thread::sleep(Duration::from_millis(500));
            let seat_name = current.name().to_string();
            match game.run_scripted_turn(&mut policy) {
                Ok(ScriptedMove::Played(card)) => {
                    println!("{seat_name} plays {}.", format_card(&card));
                    blocked_streak = 0;
                }
                Ok(ScriptedMove::Drew(_)) => {
                    println!("{seat_name} draws a card.");
                    blocked_streak = 0;
                }
                Ok(ScriptedMove::Blocked) => {
                    println!("{seat_name} has no move and the pile is empty.");
                    blocked_streak += 1;
                    if blocked_streak >= game.player_count() {
                        println!("Table is stalemated. Abandoning the session.");
                        return;
                    }
                }
                Err(err) => {
                    println!("Scripted turn error: {err:?}");
                    return;
                }
            }
        }

        if game.phase() == GamePhase::RoundEnd {
            match game.settle() {
                Ok(result) => {
                    let winner_name = game
                        .player(result.winner_id)
                        .map_or("unknown", |p| p.name())
                        .to_string();
                    println!("\nRound complete. {winner_name} wins!");
                    for entry in &result.players {
                        let name = game
                            .player(entry.player_id)
                            .map_or("unknown", |p| p.name())
                            .to_string();
                        println!("  {name}: net {} (balance {})", entry.net, entry.balance);
                        if entry.player_id == human {
                            profile.set_balance(entry.balance);
                        }
                    }
                    profile.record_result(result.winner_id == human);
                    println!(
                        "Record: {} played, {} won.\n",
                        profile.games_played(),
                        profile.games_won()
                    );
                }
                Err(err) => println!("Settle error: {err:?}"),
            }

            if let Err(err) = game.end_round() {
                println!("End round error: {err:?}");
                return;
            }
        }
    }
}

/// Runs one human turn. Returns `false` when the player quits.
fn take_human_turn(game: &mut Game, human: u8) -> bool {
    loop {
        let action = prompt_line("Play a card number, or [d]raw: ");
        match action.as_str() {
            "q" | "quit" => return false,
            "d" | "draw" => match game.draw_card(human) {
                Ok(_) => return true,
                Err(DrawError::EmptyDrawPile) => {
                    println!("The draw pile is empty.");
                }
                Err(err) => println!("Draw error: {err:?}"),
            },
            _ => {
                let Ok(index) = action.parse::<usize>() else {
                    println!("Unknown action.");
                    continue;
                };
                let hand: Vec<Card> = game.hand(human).map(<[Card]>::to_vec).unwrap_or_default();
                let Some(card) = hand.get(index) else {
                    println!("No card at {index}.");
                    continue;
                };
                match game.play_card(human, card.id) {
                    Ok(played) => {
                        println!("You play {}.", format_card(&played));
                        return true;
                    }
                    Err(err) => println!("Play error: {err:?}"),
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, human: u8) {
    println!("\nDraw pile: {} cards", game.cards_remaining());
    if let Some(top) = game.top_discard() {
        println!("Discard top: {}", format_card(top));
    }

    for player in &game.players {
        if player.id() == human {
            continue;
        }
        let uno = if player.has_uno() { " UNO!" } else { "" };
        println!(
            "{}: {} cards | balance {}{uno}",
            player.name(),
            player.hand_len(),
            player.balance()
        );
    }

    let top = game.top_discard().copied();
    if let Some(hand) = game.hand(human) {
        let formatted: Vec<String> = hand
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let playable = top.is_some_and(|top| card.can_play_on(&top));
                if playable {
                    format!("[{index}]{}", format_card(card))
                } else {
                    dim(&format!("[{index}]{}", card_text(card)))
                }
            })
            .collect();
        println!("Your hand: {}", formatted.join(" "));
    }
    if game.player(human).is_some_and(unors::Player::has_uno) {
        println!("UNO!");
    }
}

fn color_code(card: &Card) -> &'static str {
    match card.color {
        CardColor::Red => "31",
        CardColor::Yellow => "33",
        CardColor::Green => "32",
        CardColor::Blue => "34",
        CardColor::Wild => "35",
    }
}

fn card_text(card: &Card) -> String {
    let label = match card.color {
        CardColor::Red => "R",
        CardColor::Yellow => "Y",
        CardColor::Green => "G",
        CardColor::Blue => "B",
        CardColor::Wild => "W",
    };

    let value = match card.value {
        CardValue::Number(n) => n.to_string(),
        CardValue::Skip => "Skip".to_string(),
        CardValue::Reverse => "Rev".to_string(),
        CardValue::DrawTwo => "+2".to_string(),
        CardValue::Wild => String::new(),
        CardValue::WildDrawFour => "+4".to_string(),
    };

    format!("{label}{value}")
}

fn format_card(card: &Card) -> String {
    colorize(&card_text(card), color_code(card))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn dim(text: &str) -> String {
    colorize(text, "90")
}
