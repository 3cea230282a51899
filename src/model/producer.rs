use serde::{Deserialize, Serialize};

use crate::core::formulas::{DIAMOND_PICKAXE_YIELD, IRON_PICKAXE_YIELD};

/// Automation units that feed passive diamond income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProducerKind {
    IronPickaxe,
    DiamondPickaxe,
}

impl ProducerKind {
    pub const ALL: [ProducerKind; 2] = [Self::IronPickaxe, Self::DiamondPickaxe];

    /// Diamonds per second contributed by one owned unit, before the effectiveness multiplier.
    pub fn base_yield(self) -> f64 {
        match self {
            Self::IronPickaxe => IRON_PICKAXE_YIELD,
            Self::DiamondPickaxe => DIAMOND_PICKAXE_YIELD,
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::IronPickaxe => "iron",
            Self::DiamondPickaxe => "diamond",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "iron" | "ironpickaxe" | "a" => Some(Self::IronPickaxe),
            "diamond" | "diamondpickaxe" | "b" => Some(Self::DiamondPickaxe),
            _ => None,
        }
    }
}

/// Leveled upgrades bought with emeralds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    Effectiveness,
    Fortune,
    Haste,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [Self::Effectiveness, Self::Fortune, Self::Haste];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Effectiveness => "effectiveness",
            Self::Fortune => "fortune",
            Self::Haste => "haste",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "effectiveness" | "efficiency" => Some(Self::Effectiveness),
            "fortune" => Some(Self::Fortune),
            "haste" => Some(Self::Haste),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProducerKind, UpgradeKind};

    #[test]
    fn names_round_trip() {
        for kind in ProducerKind::ALL {
            assert_eq!(ProducerKind::from_name(kind.canonical_name()), Some(kind));
        }
        for kind in UpgradeKind::ALL {
            assert_eq!(UpgradeKind::from_name(kind.canonical_name()), Some(kind));
        }
        assert_eq!(ProducerKind::from_name("  IRON "), Some(ProducerKind::IronPickaxe));
        assert_eq!(ProducerKind::from_name("gold"), None);
    }
}
