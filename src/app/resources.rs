use std::path::PathBuf;

use bevy::prelude::*;
use crossbeam_channel::Receiver;
use dirt_clicker::{Console, FileStorage, GameStore, ProducerKind, SkinId, UpgradeKind};

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub frame_hz: f64,
    pub tick_seconds: f32,
    pub autosave_seconds: f32,
    pub status_seconds: f32,
    pub save_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_hz: 30.0,
            tick_seconds: 1.0,
            autosave_seconds: 10.0,
            status_seconds: 15.0,
            save_dir: PathBuf::from("saves"),
        }
    }
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub store: GameStore,
    pub console: Console,
    pub storage: FileStorage,
    pub tick_timer: Timer,
    pub autosave_timer: Timer,
    pub status_timer: Timer,
    pub last_save_error: Option<String>,
}

/// Lines typed on stdin, fed by a background reader thread.
#[derive(Resource, Debug)]
pub struct InputLines(pub Receiver<String>);

#[derive(Event, Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Click(u64),
    BuyProducer(ProducerKind),
    BuyUpgrade(UpgradeKind),
    SelectSkin(SkinId),
    Status,
    TogglePause,
    Save,
    Quit,
    Console(String),
    Invalid(String),
}
