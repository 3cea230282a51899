use dirt_clicker::{GameState, GameStore, ProducerKind, UpgradeKind, formulas};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn expected_rate(state: &GameState) -> f64 {
    (f64::from(state.iron_pickaxes) * 0.2 + f64::from(state.diamond_pickaxes) * 1.5)
        * state.effectiveness_multiplier()
}

#[test]
fn milestone_credit_follows_click_boundaries() {
    let store = GameStore::new();

    for _ in 0..1500 {
        store.record_manual_click();
    }
    assert_close(store.snapshot().emeralds(), 1.0);

    for _ in 1500..2999 {
        store.record_manual_click();
    }
    assert_close(store.snapshot().emeralds(), 1.0);

    store.record_manual_click();
    let state = store.snapshot();
    assert_eq!(state.total_clicks(), 3000);
    assert_close(state.emeralds(), 2.0);
    assert_close(state.diamonds(), 3000.0);
}

#[test]
fn sentinel_entry_point_matches_explicit_click() {
    let via_sentinel = GameStore::new();
    let via_click = GameStore::new();

    for _ in 0..1500 {
        via_sentinel.increase_primary_resource(1.0);
        via_click.record_manual_click();
    }

    assert_eq!(*via_sentinel.snapshot(), *via_click.snapshot());
}

#[test]
fn large_single_step_credits_only_one_milestone() {
    // Known boundary case: jumping over several milestones at once pays a single bonus.
    let mut state = GameState::new();
    state.record_manual_clicks(4500);

    assert_eq!(state.total_clicks(), 4500);
    assert_close(state.emeralds(), 1.0);
}

#[test]
fn passive_income_never_counts_as_clicks() {
    let mut state = GameState::new();
    state.clicks_per_milestone = 1;
    state.iron_pickaxes = 5;

    for _ in 0..10 {
        state.tick();
    }

    assert_eq!(state.total_clicks(), 0);
    assert_close(state.emeralds(), 0.0);
    assert_close(state.diamonds(), 10.0);
}

#[test]
fn pickaxe_prices_follow_floored_growth() {
    let store = GameStore::new();
    store.set_primary_resource(1e9);

    let mut iron_prices = Vec::new();
    let mut diamond_prices = Vec::new();
    for _ in 0..5 {
        store.purchase_producer(ProducerKind::IronPickaxe);
        store.purchase_producer(ProducerKind::DiamondPickaxe);
        let state = store.snapshot();
        iron_prices.push(state.iron_pickaxe_price);
        diamond_prices.push(state.diamond_pickaxe_price);
    }

    assert_eq!(iron_prices, vec![115.0, 132.0, 151.0, 173.0, 198.0]);
    assert_eq!(diamond_prices, vec![1150.0, 1322.0, 1520.0, 1748.0, 2010.0]);
}

#[test]
fn first_iron_pickaxe_from_fresh_game() {
    let store = GameStore::new();
    store.set_primary_resource(100.0);

    assert!(store.purchase_producer(ProducerKind::IronPickaxe));

    let state = store.snapshot();
    assert_close(state.diamonds(), 0.0);
    assert_eq!(state.iron_pickaxes, 1);
    assert_close(state.iron_pickaxe_price, 115.0);
    assert_close(state.production_rate(), 0.2);
}

#[test]
fn effectiveness_levels_and_costs() {
    let store = GameStore::new();
    store.set_secondary_resource(1_000.0);

    let mut paid = Vec::new();
    let mut multipliers = vec![store.snapshot().effectiveness_multiplier()];
    while let Some(cost) = store.snapshot().upgrade_cost(UpgradeKind::Effectiveness) {
        assert!(store.purchase_effectiveness_upgrade());
        paid.push(cost);
        multipliers.push(store.snapshot().effectiveness_multiplier());
    }

    assert_eq!(paid, vec![2.0, 5.0, 13.0, 31.0, 78.0]);
    assert_eq!(multipliers, vec![1.0, 2.0, 4.0, 8.0, 8.0, 8.0]);
    assert_eq!(store.snapshot().effectiveness_level, 5);
    assert_eq!(store.snapshot().emeralds(), 1_000.0 - 129.0);

    let capped = store.snapshot();
    assert!(!store.purchase_effectiveness_upgrade());
    assert_eq!(*store.snapshot(), *capped);
}

#[test]
fn haste_cost_sequence_and_cap() {
    let store = GameStore::new();
    store.set_secondary_resource(10_000.0);

    let mut paid = Vec::new();
    for _ in 0..10 {
        let cost = store
            .snapshot()
            .upgrade_cost(UpgradeKind::Haste)
            .expect("haste below cap has a price");
        assert!(store.purchase_haste_upgrade());
        paid.push(cost);
    }

    assert_eq!(
        paid,
        vec![3.0, 6.0, 9.0, 13.0, 18.0, 24.0, 31.0, 39.0, 48.0, 58.0]
    );
    let state = store.snapshot();
    assert_eq!(state.haste_level, 10);
    assert_eq!(state.clicks_per_milestone, 500);
    assert!(!store.purchase_haste_upgrade());
    assert_eq!(store.snapshot().emeralds(), 10_000.0 - 249.0);
}

#[test]
fn zero_clicks_per_milestone_is_rejected() {
    let store = GameStore::new();
    assert!(!store.set_clicks_per_milestone(0));
    assert_eq!(*store.snapshot(), GameState::new());
}

#[test]
fn repeated_resets_yield_initial_literal() {
    let store = GameStore::new();
    store.set_primary_resource(1e6);
    store.set_secondary_resource(500.0);
    store.purchase_producer(ProducerKind::DiamondPickaxe);
    store.purchase_fortune_upgrade();
    store.record_manual_clicks(2000);

    for _ in 0..3 {
        store.reset();
        assert_eq!(*store.snapshot(), GameState::new());
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let run = || {
        let mut state = GameState::new();
        state.set_primary_resource(5_000.0);
        state.set_secondary_resource(30.0);
        for step in 0..200u32 {
            match step % 7 {
                0 => {
                    state.purchase_producer(ProducerKind::IronPickaxe);
                }
                3 => {
                    state.purchase_producer(ProducerKind::DiamondPickaxe);
                }
                5 => {
                    state.purchase_upgrade(UpgradeKind::ALL[(step as usize / 7) % 3]);
                }
                _ => {
                    state.record_manual_clicks(u64::from(step));
                }
            }
            state.tick();
        }
        state
    };

    assert_eq!(run(), run());
}

#[derive(Debug, Clone)]
enum Op {
    Click(u64),
    Tick,
    BuyProducer(ProducerKind),
    BuyUpgrade(UpgradeKind),
    SetDiamonds(f64),
    SetEmeralds(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let producer = prop_oneof![
        Just(ProducerKind::IronPickaxe),
        Just(ProducerKind::DiamondPickaxe)
    ];
    let upgrade = prop_oneof![
        Just(UpgradeKind::Effectiveness),
        Just(UpgradeKind::Fortune),
        Just(UpgradeKind::Haste)
    ];
    prop_oneof![
        (1u64..3000).prop_map(Op::Click),
        Just(Op::Tick),
        producer.prop_map(Op::BuyProducer),
        upgrade.prop_map(Op::BuyUpgrade),
        (0.0f64..1e7).prop_map(Op::SetDiamonds),
        (0.0f64..500.0).prop_map(Op::SetEmeralds),
    ]
}

fn apply(state: &mut GameState, op: &Op) {
    match *op {
        Op::Click(clicks) => {
            state.record_manual_clicks(clicks);
        }
        Op::Tick => {
            state.tick();
        }
        Op::BuyProducer(kind) => {
            state.purchase_producer(kind);
        }
        Op::BuyUpgrade(kind) => {
            state.purchase_upgrade(kind);
        }
        Op::SetDiamonds(amount) => {
            state.set_primary_resource(amount);
        }
        Op::SetEmeralds(amount) => {
            state.set_secondary_resource(amount);
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut state = GameState::new();
        for op in &ops {
            apply(&mut state, op);

            prop_assert!((state.production_rate() - expected_rate(&state)).abs() <= EPSILON);
            prop_assert!(state.diamonds() >= 0.0);
            prop_assert!(state.emeralds() >= 0.0);
            prop_assert!(state.effectiveness_level <= formulas::EFFECTIVENESS_MAX_LEVEL);
            prop_assert!(state.fortune_level <= formulas::FORTUNE_MAX_LEVEL);
            prop_assert!(state.haste_level <= formulas::HASTE_MAX_LEVEL);
            prop_assert!(state.clicks_per_milestone >= formulas::MIN_CLICKS_PER_MILESTONE);
        }
    }

    #[test]
    fn unaffordable_producer_purchase_changes_nothing(
        diamonds in 0.0f64..100.0,
        kind in prop_oneof![Just(ProducerKind::IronPickaxe), Just(ProducerKind::DiamondPickaxe)],
    ) {
        let mut state = GameState::new();
        state.set_primary_resource(diamonds);
        prop_assume!(diamonds < state.producer_price(kind));
        let before = state.clone();

        prop_assert!(!state.purchase_producer(kind));
        prop_assert_eq!(state, before);
    }

    #[test]
    fn unaffordable_upgrade_purchase_changes_nothing(emeralds in 0.0f64..2.0) {
        let mut state = GameState::new();
        state.set_secondary_resource(emeralds);
        let before = state.clone();

        for kind in UpgradeKind::ALL {
            prop_assert!(!state.purchase_upgrade(kind));
        }
        prop_assert_eq!(state, before);
    }
}
