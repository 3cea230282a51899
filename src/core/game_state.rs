use tracing::debug;

use crate::model::{ProducerKind, SkinId, UpgradeKind};

use super::formulas::{
    self, BASE_CLICKS_PER_MILESTONE, DIAMOND_PICKAXE_BASE_PRICE, IRON_PICKAXE_BASE_PRICE,
    MIN_CLICKS_PER_MILESTONE,
};
use super::resource_store::ResourceStore;

/// One complete progression snapshot.
///
/// The effectiveness multiplier and production rate are not stored: they are derived from
/// levels and counts on every read, so no mutation can leave them stale. Every operation is
/// total and returns whether it changed anything; a rejected operation leaves the snapshot
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub resources: ResourceStore,
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

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The fresh-game literal every reset returns to.
    pub fn new() -> Self {
        Self {
            resources: ResourceStore::default(),
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

    pub fn diamonds(&self) -> f64 {
        self.resources.diamonds
    }

    pub fn emeralds(&self) -> f64 {
        self.resources.emeralds
    }

    pub fn total_clicks(&self) -> u64 {
        self.resources.total_clicks
    }

    pub fn effectiveness_multiplier(&self) -> f64 {
        formulas::effectiveness_multiplier(self.effectiveness_level)
    }

    pub fn production_rate(&self) -> f64 {
        formulas::production_rate(
            self.iron_pickaxes,
            self.diamond_pickaxes,
            self.effectiveness_multiplier(),
        )
    }

    pub fn milestone_bonus(&self) -> f64 {
        formulas::fortune_bonus(self.fortune_level)
    }

    pub fn clicks_to_next_milestone(&self) -> u64 {
        let per = u64::from(self.clicks_per_milestone.max(1));
        per - self.resources.total_clicks % per
    }

    pub fn producer_count(&self, kind: ProducerKind) -> u32 {
        match kind {
            ProducerKind::IronPickaxe => self.iron_pickaxes,
            ProducerKind::DiamondPickaxe => self.diamond_pickaxes,
        }
    }

    pub fn producer_price(&self, kind: ProducerKind) -> f64 {
        match kind {
            ProducerKind::IronPickaxe => self.iron_pickaxe_price,
            ProducerKind::DiamondPickaxe => self.diamond_pickaxe_price,
        }
    }

    pub fn upgrade_level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Effectiveness => self.effectiveness_level,
            UpgradeKind::Fortune => self.fortune_level,
            UpgradeKind::Haste => self.haste_level,
        }
    }

    /// Emerald price of the next level, `None` when the upgrade is maxed.
    pub fn upgrade_cost(&self, kind: UpgradeKind) -> Option<f64> {
        let level = self.upgrade_level(kind);
        match kind {
            UpgradeKind::Effectiveness => formulas::effectiveness_cost(level),
            UpgradeKind::Fortune => formulas::fortune_cost(level),
            UpgradeKind::Haste if self.clicks_per_milestone <= MIN_CLICKS_PER_MILESTONE => None,
            UpgradeKind::Haste => formulas::haste_cost(level),
        }
    }

    pub fn can_purchase_producer(&self, kind: ProducerKind) -> bool {
        self.resources.can_afford_diamonds(self.producer_price(kind))
    }

    pub fn can_purchase_upgrade(&self, kind: UpgradeKind) -> bool {
        self.upgrade_cost(kind)
            .is_some_and(|cost| self.resources.can_afford_emeralds(cost))
    }

    /// A manual click: one diamond scaled by the effectiveness multiplier, plus the
    /// click counter and milestone check.
    pub fn record_manual_click(&mut self) -> bool {
        self.record_manual_clicks(1)
    }

    /// A batch of manual clicks applied as one step. Crossing several milestone
    /// boundaries at once still credits a single bonus.
    pub fn record_manual_clicks(&mut self, clicks: u64) -> bool {
        if clicks == 0 {
            return false;
        }
        let earned = clicks as f64 * self.effectiveness_multiplier();
        let before = self.resources.count_clicks(clicks);
        let after = self.resources.total_clicks;
        self.resources.add_diamonds(earned);

        if formulas::crosses_milestone(before, after, self.clicks_per_milestone) {
            let bonus = self.milestone_bonus();
            self.resources.add_emeralds(bonus);
            debug!(total_clicks = after, bonus, "emerald milestone reached");
        }
        true
    }

    /// Raw diamond credit with no multiplier and no click bookkeeping.
    pub fn add_resource(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount <= 0.0 {
            return false;
        }
        self.resources.add_diamonds(amount);
        true
    }

    /// Single entry point shared by clicks and passive income: exactly `1.0` counts as a
    /// manual click, any other amount is credited verbatim.
    pub fn increase_primary_resource(&mut self, amount: f64) -> bool {
        if amount == 1.0 {
            self.record_manual_click()
        } else {
            self.add_resource(amount)
        }
    }

    /// One passive-income step: credits the current production rate.
    pub fn tick(&mut self) -> bool {
        self.add_resource(self.production_rate())
    }

    pub fn set_primary_resource(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            return false;
        }
        self.resources.diamonds = amount;
        true
    }

    pub fn set_secondary_resource(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            return false;
        }
        self.resources.emeralds = amount;
        true
    }

    pub fn set_clicks_per_milestone(&mut self, clicks: u32) -> bool {
        if clicks == 0 {
            return false;
        }
        self.clicks_per_milestone = clicks;
        true
    }

    pub fn purchase_producer(&mut self, kind: ProducerKind) -> bool {
        let price = self.producer_price(kind);
        if !self.resources.try_spend_diamonds(price) {
            return false;
        }
        let next_price = formulas::next_producer_price(price);
        match kind {
            ProducerKind::IronPickaxe => {
                self.iron_pickaxes += 1;
                self.iron_pickaxe_price = next_price;
            }
            ProducerKind::DiamondPickaxe => {
                self.diamond_pickaxes += 1;
                self.diamond_pickaxe_price = next_price;
            }
        }
        debug!(
            producer = kind.canonical_name(),
            count = self.producer_count(kind),
            rate = self.production_rate(),
            "producer purchased"
        );
        true
    }

    pub fn purchase_upgrade(&mut self, kind: UpgradeKind) -> bool {
        let Some(cost) = self.upgrade_cost(kind) else {
            return false;
        };
        if !self.resources.try_spend_emeralds(cost) {
            return false;
        }
        match kind {
            UpgradeKind::Effectiveness => self.effectiveness_level += 1,
            UpgradeKind::Fortune => self.fortune_level += 1,
            UpgradeKind::Haste => {
                self.haste_level += 1;
                self.clicks_per_milestone = formulas::clicks_per_milestone(self.haste_level);
            }
        }
        debug!(
            upgrade = kind.canonical_name(),
            level = self.upgrade_level(kind),
            cost,
            "upgrade purchased"
        );
        true
    }

    pub fn purchase_effectiveness_upgrade(&mut self) -> bool {
        self.purchase_upgrade(UpgradeKind::Effectiveness)
    }

    pub fn purchase_fortune_upgrade(&mut self) -> bool {
        self.purchase_upgrade(UpgradeKind::Fortune)
    }

    pub fn purchase_haste_upgrade(&mut self) -> bool {
        self.purchase_upgrade(UpgradeKind::Haste)
    }

    pub fn select_skin(&mut self, skin: SkinId) -> bool {
        if self.skin == skin {
            return false;
        }
        self.skin = skin;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
