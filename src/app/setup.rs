use bevy::prelude::*;
use dirt_clicker::{Console, FileStorage, GameStore, load_or_initial};

use super::resources::{RuntimeConfig, SessionState};
use super::state::AppPhase;

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let storage = FileStorage::new(&config.save_dir);
    let state = load_or_initial(&storage);
    info!(
        save_dir = %storage.dir().display(),
        diamonds = state.diamonds(),
        total_clicks = state.total_clicks(),
        "session loaded"
    );

    commands.insert_resource(SessionState {
        store: GameStore::from_state(state),
        console: Console::new(),
        storage,
        tick_timer: Timer::from_seconds(config.tick_seconds.max(0.01), TimerMode::Repeating),
        autosave_timer: Timer::from_seconds(config.autosave_seconds.max(1.0), TimerMode::Repeating),
        status_timer: Timer::from_seconds(config.status_seconds.max(1.0), TimerMode::Repeating),
        last_save_error: None,
    });

    next_phase.set(AppPhase::InGame);
}
