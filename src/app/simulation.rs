use bevy::prelude::*;
use dirt_clicker::{ConsoleCommand, discard_saved_game, persist};

use super::resources::{PlayerAction, SessionState};
use super::state::SimRunState;
use super::view;

pub fn apply_player_actions(
    mut actions: EventReader<PlayerAction>,
    mut session: ResMut<SessionState>,
    run_state: Res<State<SimRunState>>,
    mut next_run_state: ResMut<NextState<SimRunState>>,
    mut exit: EventWriter<AppExit>,
) {
    for action in actions.read() {
        match action {
            PlayerAction::Click(clicks) => {
                let emeralds_before = session.store.snapshot().emeralds();
                session.store.record_manual_clicks(*clicks);
                if session.store.snapshot().emeralds() > emeralds_before {
                    println!("You found an emerald!");
                }
            }
            PlayerAction::BuyProducer(kind) => {
                if !session.store.purchase_producer(*kind) {
                    println!("Not enough diamonds for a {} pickaxe", kind.canonical_name());
                }
            }
            PlayerAction::BuyUpgrade(kind) => {
                if !session.store.purchase_upgrade(*kind) {
                    println!("Cannot buy {} right now", kind.canonical_name());
                }
            }
            PlayerAction::SelectSkin(skin) => {
                if session.store.select_skin(*skin) {
                    println!("Skin set to {}", skin.display_name());
                }
            }
            PlayerAction::Status => view::print_status(&session.store.snapshot(), *run_state.get()),
            PlayerAction::TogglePause => next_run_state.set(run_state.get().toggled()),
            PlayerAction::Save => save_session(&mut session),
            PlayerAction::Quit => {
                save_session(&mut session);
                exit.send(AppExit::Success);
            }
            PlayerAction::Console(line) => {
                let session = &mut *session;
                let printed = session.console.history().len();
                session.console.submit(line, &session.store);
                let history = session.console.history();
                view::print_console_lines(history.get(printed..).unwrap_or_default());
                if ConsoleCommand::parse(line) == Ok(ConsoleCommand::ResetGame) {
                    if let Err(err) = discard_saved_game(&mut session.storage) {
                        warn!("could not discard saved game: {err:#}");
                    }
                }
            }
            PlayerAction::Invalid(message) => println!("{message}"),
        }
    }
}

/// The passive-income driver: one production step per elapsed tick interval.
pub fn tick_production(time: Res<Time>, mut session: ResMut<SessionState>) {
    let steps = session
        .tick_timer
        .tick(time.delta())
        .times_finished_this_tick();

    for _ in 0..steps {
        session.store.tick();
    }
}

pub fn autosave_session(time: Res<Time>, mut session: ResMut<SessionState>) {
    if session.autosave_timer.tick(time.delta()).just_finished() {
        save_session(&mut session);
    }
}

pub fn log_run_state(run_state: Res<State<SimRunState>>, session: Res<SessionState>) {
    let line = run_state.get().describe(session.store.snapshot().production_rate());
    info!("{line}");
}

fn save_session(session: &mut SessionState) {
    let snapshot = session.store.snapshot();
    match persist(&mut session.storage, &snapshot) {
        Ok(()) => session.last_save_error = None,
        Err(err) => {
            warn!("save failed: {err:#}");
            session.last_save_error = Some(format!("{err:#}"));
        }
    }
}
