use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum AppPhase {
    #[default]
    Boot,
    InGame,
}

/// Whether the passive-income timer advances. Clicks and purchases work either way.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum SimRunState {
    #[default]
    Running,
    Paused,
}

impl SimRunState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }

    /// Status line shown in the HUD and logged on every transition.
    pub fn describe(self, production_rate: f64) -> String {
        match self {
            Self::Running if production_rate > 0.0 => "Passive income: running".to_string(),
            Self::Running => "Passive income: idle (no pickaxes yet)".to_string(),
            Self::Paused => "Passive income: paused (type `pause` to resume)".to_string(),
        }
    }
}
