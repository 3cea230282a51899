use anyhow::{Result, bail};

use crate::core::formulas::{
    self, DIAMOND_PICKAXE_BASE_PRICE, EFFECTIVENESS_MAX_LEVEL, FORTUNE_MAX_LEVEL,
    HASTE_MAX_LEVEL, IRON_PICKAXE_BASE_PRICE,
};
use crate::core::{GameState, ResourceStore};

use super::{MIN_COMPATIBLE_VERSION, SAVE_VERSION, SaveData, SaveState};

pub fn save_data_from_state(state: &GameState) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        state: SaveState {
            diamonds: state.resources.diamonds,
            emeralds: state.resources.emeralds,
            total_clicks: state.resources.total_clicks,
            clicks_per_milestone: state.clicks_per_milestone,
            iron_pickaxes: state.iron_pickaxes,
            iron_pickaxe_price: state.iron_pickaxe_price,
            diamond_pickaxes: state.diamond_pickaxes,
            diamond_pickaxe_price: state.diamond_pickaxe_price,
            effectiveness_level: state.effectiveness_level,
            fortune_level: state.fortune_level,
            haste_level: state.haste_level,
            skin: state.skin,
        },
    }
}

/// Overwrites `state` with the saved progression. Values a hand-edited or stale blob could
/// hold outside the invariants are pulled back into range.
pub fn apply_save_data(state: &mut GameState, save: &SaveData) -> Result<()> {
    if !save.is_compatible() {
        bail!(
            "save version {} is outside the supported range {MIN_COMPATIBLE_VERSION}..={SAVE_VERSION}",
            save.version
        );
    }

    let saved = &save.state;
    let haste_level = saved.haste_level.min(HASTE_MAX_LEVEL);
    *state = GameState {
        resources: ResourceStore {
            diamonds: non_negative(saved.diamonds),
            emeralds: non_negative(saved.emeralds),
            total_clicks: saved.total_clicks,
        },
        clicks_per_milestone: if saved.clicks_per_milestone == 0 {
            formulas::clicks_per_milestone(haste_level)
        } else {
            saved.clicks_per_milestone
        },
        iron_pickaxes: saved.iron_pickaxes,
        iron_pickaxe_price: positive_or(saved.iron_pickaxe_price, IRON_PICKAXE_BASE_PRICE),
        diamond_pickaxes: saved.diamond_pickaxes,
        diamond_pickaxe_price: positive_or(
            saved.diamond_pickaxe_price,
            DIAMOND_PICKAXE_BASE_PRICE,
        ),
        effectiveness_level: saved.effectiveness_level.min(EFFECTIVENESS_MAX_LEVEL),
        fortune_level: saved.fortune_level.min(FORTUNE_MAX_LEVEL),
        haste_level,
        skin: saved.skin,
    };
    Ok(())
}

pub fn state_from_save_data(save: &SaveData) -> Result<GameState> {
    let mut state = GameState::new();
    apply_save_data(&mut state, save)?;
    Ok(state)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
