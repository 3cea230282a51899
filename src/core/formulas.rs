//! Balance constants and the pure price/production curves.
//!
//! Every function here maps a level or count to a value and touches no state, so the
//! snapshot code can recompute derived fields from scratch after each mutation.

pub const IRON_PICKAXE_YIELD: f64 = 0.2;
pub const DIAMOND_PICKAXE_YIELD: f64 = 1.5;

pub const IRON_PICKAXE_BASE_PRICE: f64 = 100.0;
pub const DIAMOND_PICKAXE_BASE_PRICE: f64 = 1000.0;
/// Price growth per purchase as an exact ratio, 115%.
const PRODUCER_PRICE_GROWTH_PERCENT: f64 = 115.0;

pub const EFFECTIVENESS_MAX_MULTIPLIER: f64 = 8.0;
/// Levels 0 through 4 can be bought; the multiplier itself stops at x8 from level 3.
pub const EFFECTIVENESS_MAX_LEVEL: u32 = 5;
pub const FORTUNE_MAX_LEVEL: u32 = 6;
pub const HASTE_MAX_LEVEL: u32 = 10;

pub const BASE_CLICKS_PER_MILESTONE: u32 = 1500;
pub const MIN_CLICKS_PER_MILESTONE: u32 = 500;
const HASTE_CLICK_REDUCTION: u32 = 100;

/// `floor(current * 1.15)`. Multiplying by the whole percentage first keeps integer prices
/// exact; `100.0 * 1.15` alone lands on 114.999...
pub fn next_producer_price(current: f64) -> f64 {
    (current * PRODUCER_PRICE_GROWTH_PERCENT / 100.0).floor()
}

pub fn effectiveness_multiplier(level: u32) -> f64 {
    2f64.powi(level.min(31) as i32).min(EFFECTIVENESS_MAX_MULTIPLIER)
}

/// Emerald cost of the next effectiveness level, `None` at the level cap.
pub fn effectiveness_cost(level: u32) -> Option<f64> {
    (level < EFFECTIVENESS_MAX_LEVEL).then(|| effectiveness_cost_uncapped(level))
}

/// `round(2 * 2.5^level)` without the cap check.
pub fn effectiveness_cost_uncapped(level: u32) -> f64 {
    (2.0 * 2.5f64.powi(level as i32)).round()
}

pub fn fortune_cost(level: u32) -> Option<f64> {
    (level < FORTUNE_MAX_LEVEL).then(|| (3.0 * 2.25f64.powi(level as i32)).round())
}

/// Emeralds credited per milestone crossing.
pub fn fortune_bonus(level: u32) -> f64 {
    1.0 + 0.5 * f64::from(level)
}

/// Three flat steps, then each level costs one more than the previous increment:
/// 3, 6, 9, 13, 18, 24, 31, 39, 48, 58.
pub fn haste_cost(level: u32) -> Option<f64> {
    if level >= HASTE_MAX_LEVEL {
        return None;
    }
    let cost = if level < 3 {
        3 * (level + 1)
    } else {
        9 + (level - 2) * (level + 5) / 2
    };
    Some(f64::from(cost))
}

pub fn clicks_per_milestone(haste_level: u32) -> u32 {
    BASE_CLICKS_PER_MILESTONE
        .saturating_sub(haste_level.saturating_mul(HASTE_CLICK_REDUCTION))
        .max(MIN_CLICKS_PER_MILESTONE)
}

pub fn production_rate(iron_count: u32, diamond_count: u32, multiplier: f64) -> f64 {
    (f64::from(iron_count) * IRON_PICKAXE_YIELD + f64::from(diamond_count) * DIAMOND_PICKAXE_YIELD)
        * multiplier
}

/// Edge-triggered milestone check: true when `after` lands in a later bucket than `before`.
/// A jump across several buckets still reports a single crossing.
pub fn crosses_milestone(before: u64, after: u64, clicks_per_milestone: u32) -> bool {
    let per = u64::from(clicks_per_milestone.max(1));
    after / per > before / per
}
