//! CLI hot-seat Farkle example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use farkle::{ActionKind, Match, MatchEvent, MatchOptions, Player, Status, WINNING_SCORE};

fn main() {
    tracing_subscriber::fmt::init();

    println!("Farkle CLI example (first to {WINNING_SCORE} wins)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Match::new(MatchOptions::default(), seed);

    while game.player_count() < 2 {
        let seat = game.player_count() + 1;
        let Some(name) = prompt_line(&format!("Name of player {seat}: ")) else {
            return;
        };
        match game.join(&name) {
            Ok((_, joined)) => {
                for event in &joined.events {
                    println!("{}", format_event(&game, event));
                }
            }
            Err(err) => println!("{}", colorize(&err.to_string(), "31")),
        }
    }

    let mut status = game.status();
    loop {
        print_status(&status);
        if status.is_game_over() {
            break;
        }

        let Some(active) = status.active.clone() else {
            break;
        };
        println!("{}", format_actions(&status));
        let Some(input) = prompt_line(&format!("{}> ", active.name)) else {
            break;
        };
        let (command, rest) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input.as_str(), ""));
        let command = command.to_lowercase();

        let result = match command.as_str() {
            "r" | "roll" => game.roll().map_err(|err| err.to_string()),
            "s" | "select" => game.select(rest).map_err(|err| err.to_string()),
            "b" | "bank" => game.bank().map_err(|err| err.to_string()),
            "q" | "quit" => game.quit(active.id).map_err(|err| err.to_string()),
            "" => continue,
            _ => {
                println!("Unknown command '{command}'.");
                continue;
            }
        };

        match result {
            Ok(next) => {
                for event in &next.events {
                    println!("{}", format_event(&game, event));
                }
                status = game.status();
            }
            Err(err) => println!("{}", colorize(&err, "31")),
        }
    }

    match status.winner {
        Some(winner) => println!("{} wins with {} points!", winner.name, winner.score),
        None => println!("No winner."),
    }
}

/// Reads one trimmed line; `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_status(status: &Status) {
    println!();
    for player in status.active.iter().chain(status.opponent.iter()) {
        println!("{}", format_player(player, status));
    }
    if status.is_game_over() {
        return;
    }

    println!("Plate: {}", format_dice(&status.live_dice));
    if !status.kept_dice.is_empty() {
        println!("Kept:  {}", format_dice(&status.kept_dice));
    }
    println!("Turn score: {} | {:?}", status.turn_score, status.phase);
    for hint in &status.hints {
        println!("  {} -> {}", hint.combo, hint.points);
    }
}

fn format_player(player: &Player, status: &Status) -> String {
    let is_active = status
        .active
        .as_ref()
        .is_some_and(|active| active.id == player.id);
    let marker = if is_active && !status.is_game_over() { "*" } else { " " };
    format!("{marker} {}: {}", player.name, player.score)
}

fn format_dice(faces: &[u8]) -> String {
    if faces.is_empty() {
        return colorize("-", "90");
    }
    faces
        .iter()
        .map(|face| format!("[{face}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_actions(status: &Status) -> String {
    let parts = [
        format_action("roll", "r", status.allows(ActionKind::Roll)),
        format_action("select <dice>", "s", status.allows(ActionKind::Select)),
        format_action("bank", "b", status.allows(ActionKind::Bank)),
        format_action("quit", "q", status.allows(ActionKind::Quit)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn format_event(game: &Match, event: &MatchEvent) -> String {
    let name = |id| game.player(id).map_or_else(|| format!("player {id}"), |p| p.name);
    match event {
        MatchEvent::Rolled { player, dice } => {
            format!("{} rolls {}", name(*player), format_dice(dice))
        }
        MatchEvent::Bust { player, lost } => colorize(
            &format!("Farkle! {} loses {lost} points.", name(*player)),
            "31",
        ),
        MatchEvent::HotDice { points, combo } => {
            let label = combo.map_or("hot dice", |combo| combo.label());
            colorize(&format!("{label}! +{points}"), "33")
        }
        MatchEvent::HotDiceRerolled => "Rolling six fresh dice.".to_string(),
        MatchEvent::DiceKept { dice, points, hot_dice } => {
            let suffix = if *hot_dice { " (hot dice)" } else { "" };
            format!("Kept {} for {points}{suffix}", format_dice(dice))
        }
        MatchEvent::Banked { player, points, total } => colorize(
            &format!("{} banks {points} (total {total}).", name(*player)),
            "32",
        ),
        MatchEvent::TurnPassed { to } => format!("{}'s turn.", name(*to)),
        MatchEvent::Won { player, score } => colorize(
            &format!("{} reaches {score}!", name(*player)),
            "1;32",
        ),
        MatchEvent::PlayerQuit { player } => format!("Player {player} left the match."),
        MatchEvent::PlayerJoined { name, .. } => format!("{name} joined."),
        MatchEvent::MatchStarted { first } => format!("{} rolls first.", name(*first)),
        MatchEvent::Reset => "Match reset.".to_string(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
