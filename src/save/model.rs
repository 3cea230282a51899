use serde::{Deserialize, Serialize};

use crate::core::formulas::{
    BASE_CLICKS_PER_MILESTONE, DIAMOND_PICKAXE_BASE_PRICE, IRON_PICKAXE_BASE_PRICE,
};
use crate::model::SkinId;

/// Current save layout. Bump when fields are added.
pub const SAVE_VERSION: u32 = 1;
/// Oldest layout that can still be read. Bump only when a field changes meaning or goes away.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Persisted progression fields. Derived values (multiplier, production rate) are left out
/// and recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveState {
    pub diamonds: f64,
    pub emeralds: f64,
    pub total_clicks: u64,
    pub clicks_per_milestone: u32,
    pub iron_pickaxes: u32,
    pub iron_pickaxe_price: f64,
    pub diamond_pickaxes: u32,
    pub diamond_pickaxe_price: f64,
    pub effectiveness_level: u32,
    pub fortune_level: u32,
    pub haste_level: u32,
    pub skin: SkinId,
}

impl Default for SaveState {
    fn default() -> Self {
        Self {
            diamonds: 0.0,
            emeralds: 0.0,
            total_clicks: 0,
            clicks_per_milestone: BASE_CLICKS_PER_MILESTONE,
            iron_pickaxes: 0,
            iron_pickaxe_price: IRON_PICKAXE_BASE_PRICE,
            diamond_pickaxes: 0,
            diamond_pickaxe_price: DIAMOND_PICKAXE_BASE_PRICE,
            effectiveness_level: 0,
            fortune_level: 0,
            haste_level: 0,
            skin: SkinId::default(),
        }
    }
}

/// Blob stored under the storage key. A missing `version` reads as 0 and is rejected as
/// a pre-versioning save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub state: SaveState,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            state: SaveState::default(),
        }
    }
}

impl SaveData {
    pub fn is_compatible(&self) -> bool {
        (MIN_COMPATIBLE_VERSION..=SAVE_VERSION).contains(&self.version)
    }
}
