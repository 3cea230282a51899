use std::io::{self, BufRead};
use std::thread;

use bevy::prelude::*;
use dirt_clicker::{ProducerKind, SkinId, UpgradeKind};

use super::resources::{InputLines, PlayerAction};

pub fn spawn_stdin_reader(mut commands: Commands) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let spawned = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if sender.send(line).is_err() {
                    break;
                }
            }
        });
    if let Err(err) = spawned {
        error!("failed to start stdin reader, input disabled: {err}");
    }
    commands.insert_resource(InputLines(receiver));
}

pub fn emit_player_actions(input: Res<InputLines>, mut actions: EventWriter<PlayerAction>) {
    for line in input.0.try_iter() {
        if line.trim().is_empty() {
            continue;
        }
        actions.send(parse_player_line(&line));
    }
}

/// Maps a typed line to a gameplay verb. Anything that is not a gameplay verb goes to the
/// debug console unchanged.
pub fn parse_player_line(line: &str) -> PlayerAction {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().unwrap_or_default().to_ascii_lowercase();
    let argument = tokens.next();

    match verb.as_str() {
        "click" | "c" => match argument.map(str::parse::<u64>) {
            None => PlayerAction::Click(1),
            Some(Ok(clicks)) if clicks > 0 => PlayerAction::Click(clicks),
            Some(_) => PlayerAction::Invalid("Usage: click [COUNT > 0]".to_string()),
        },
        "buy" => argument
            .and_then(ProducerKind::from_name)
            .map(PlayerAction::BuyProducer)
            .unwrap_or_else(|| PlayerAction::Invalid("Usage: buy iron|diamond".to_string())),
        "upgrade" => argument
            .and_then(UpgradeKind::from_name)
            .map(PlayerAction::BuyUpgrade)
            .unwrap_or_else(|| {
                PlayerAction::Invalid("Usage: upgrade effectiveness|fortune|haste".to_string())
            }),
        "skin" => argument
            .and_then(SkinId::from_name)
            .map(PlayerAction::SelectSkin)
            .unwrap_or_else(|| PlayerAction::Invalid("Usage: skin diamond|olddiamond".to_string())),
        "status" | "s" => PlayerAction::Status,
        "pause" => PlayerAction::TogglePause,
        "save" => PlayerAction::Save,
        "quit" | "exit" => PlayerAction::Quit,
        _ => PlayerAction::Console(line.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_player_line;
    use crate::app::resources::PlayerAction;
    use dirt_clicker::{ProducerKind, UpgradeKind};

    #[test]
    fn gameplay_verbs() {
        assert_eq!(parse_player_line("click"), PlayerAction::Click(1));
        assert_eq!(parse_player_line("C 25"), PlayerAction::Click(25));
        assert_eq!(
            parse_player_line("buy diamond"),
            PlayerAction::BuyProducer(ProducerKind::DiamondPickaxe)
        );
        assert_eq!(
            parse_player_line("upgrade Haste"),
            PlayerAction::BuyUpgrade(UpgradeKind::Haste)
        );
        assert!(matches!(parse_player_line("click 0"), PlayerAction::Invalid(_)));
        assert!(matches!(parse_player_line("buy gold"), PlayerAction::Invalid(_)));
    }

    #[test]
    fn other_lines_go_to_console() {
        assert_eq!(
            parse_player_line(" setdiamonds 10 "),
            PlayerAction::Console("setdiamonds 10".to_string())
        );
    }
}
