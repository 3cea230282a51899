use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

mod app;

fn main() {
    let config = app::RuntimeConfig::default();
    let frame = Duration::from_secs_f64(1.0 / config.frame_hz.max(1.0));

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)))
        .add_plugins((LogPlugin::default(), StatesPlugin))
        .insert_resource(config)
        .add_plugins(app::ClickerAppPlugin)
        .run();
}
