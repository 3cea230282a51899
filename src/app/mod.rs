mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

pub use resources::RuntimeConfig;
use resources::PlayerAction;
use state::{AppPhase, SimRunState};

pub struct ClickerAppPlugin;

impl Plugin for ClickerAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_state::<SimRunState>()
            .init_resource::<RuntimeConfig>()
            .add_event::<PlayerAction>()
            .add_systems(Startup, input::spawn_stdin_reader)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::print_welcome)
            .add_systems(OnEnter(SimRunState::Running), simulation::log_run_state)
            .add_systems(OnEnter(SimRunState::Paused), simulation::log_run_state)
            .add_systems(
                Update,
                (
                    input::emit_player_actions,
                    simulation::apply_player_actions,
                    simulation::tick_production.run_if(in_state(SimRunState::Running)),
                    simulation::autosave_session,
                    view::report_status,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            );
    }
}
