use bevy::prelude::*;
use dirt_clicker::{GameState, ProducerKind, UpgradeKind, format_number};

use super::resources::SessionState;
use super::state::SimRunState;

pub fn print_welcome(session: Res<SessionState>, run_state: Res<State<SimRunState>>) {
    println!("Dirt Clicker. Verbs: click [n], buy iron|diamond, upgrade effectiveness|fortune|haste,");
    println!("skin <id>, status, pause, save, quit. Anything else goes to the debug console.");
    print_console_lines(session.console.history());
    print_status(&session.store.snapshot(), *run_state.get());
}

pub fn report_status(
    time: Res<Time>,
    run_state: Res<State<SimRunState>>,
    mut session: ResMut<SessionState>,
) {
    if session.status_timer.tick(time.delta()).just_finished() {
        print_status(&session.store.snapshot(), *run_state.get());
        if let Some(err) = session.last_save_error.as_deref() {
            println!("Save: {err}");
        }
    }
}

pub fn print_status(state: &GameState, run_state: SimRunState) {
    println!(
        "Diamonds: {}  Emeralds: {}  Rate: {}/s  Clicks: {} (next emerald in {})",
        format_number(state.diamonds(), 1),
        format_number(state.emeralds(), 1),
        format_number(state.production_rate(), 1),
        state.total_clicks(),
        state.clicks_to_next_milestone(),
    );

    for kind in ProducerKind::ALL {
        println!(
            "  {} pickaxes: {}  next: {}",
            kind.canonical_name(),
            state.producer_count(kind),
            format_number(state.producer_price(kind), 0),
        );
    }

    for kind in UpgradeKind::ALL {
        let cost = state
            .upgrade_cost(kind)
            .map(|cost| format!("{} emeralds", format_number(cost, 0)))
            .unwrap_or_else(|| "MAXED".to_string());
        println!(
            "  {} level {}  next: {}",
            kind.canonical_name(),
            state.upgrade_level(kind),
            cost,
        );
    }

    println!(
        "  multiplier x{}  emeralds per milestone {:.1}  skin {}",
        state.effectiveness_multiplier(),
        state.milestone_bonus(),
        state.skin.display_name(),
    );
    println!("  {}", run_state.describe(state.production_rate()));
}

pub fn print_console_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
