use serde::{Deserialize, Serialize};

/// Cosmetic block skin. Has no effect on progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkinId {
    #[default]
    #[serde(rename = "diamond.webp")]
    DiamondOre,
    #[serde(rename = "olddiamond.webp")]
    OldDiamondOre,
}

impl SkinId {
    pub const ALL: [SkinId; 2] = [Self::DiamondOre, Self::OldDiamondOre];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::DiamondOre => "diamond.webp",
            Self::OldDiamondOre => "olddiamond.webp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::DiamondOre => "Diamond Ore",
            Self::OldDiamondOre => "OG Diamond Ore",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|skin| {
            skin.canonical_name() == name || skin.canonical_name().trim_end_matches(".webp") == name
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SkinId;

    #[test]
    fn accepts_ids_with_or_without_extension() {
        assert_eq!(SkinId::from_name("olddiamond.webp"), Some(SkinId::OldDiamondOre));
        assert_eq!(SkinId::from_name("OldDiamond"), Some(SkinId::OldDiamondOre));
        assert_eq!(SkinId::from_name("empty1"), None);
    }

    #[test]
    fn serializes_as_asset_id() {
        let json = serde_json::to_string(&SkinId::OldDiamondOre).expect("skin should serialize");
        assert_eq!(json, "\"olddiamond.webp\"");
    }
}
