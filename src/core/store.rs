use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::model::{ProducerKind, SkinId, UpgradeKind};

use super::game_state::GameState;

/// Owner of the canonical snapshot.
///
/// Readers get a cheap `Arc` to an immutable snapshot. Writers clone the current snapshot,
/// mutate the copy and publish it while holding the lock, so concurrent callers can never
/// lose each other's updates. Rejected operations publish nothing.
#[derive(Debug, Default)]
pub struct GameStore {
    current: Mutex<Arc<GameState>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            current: Mutex::new(Arc::new(state)),
        }
    }

    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.lock())
    }

    /// Runs `op` against a copy of the current snapshot and publishes the copy only when
    /// `op` reports a change.
    pub fn update(&self, op: impl FnOnce(&mut GameState) -> bool) -> bool {
        let mut current = self.lock();
        let mut next = GameState::clone(&current);
        if !op(&mut next) {
            return false;
        }
        *current = Arc::new(next);
        true
    }

    /// Publishes `state` wholesale, e.g. after loading a save.
    pub fn replace(&self, state: GameState) {
        *self.lock() = Arc::new(state);
    }

    pub fn record_manual_click(&self) -> bool {
        self.update(GameState::record_manual_click)
    }

    pub fn record_manual_clicks(&self, clicks: u64) -> bool {
        self.update(|state| state.record_manual_clicks(clicks))
    }

    pub fn add_resource(&self, amount: f64) -> bool {
        self.update(|state| state.add_resource(amount))
    }

    pub fn increase_primary_resource(&self, amount: f64) -> bool {
        self.update(|state| state.increase_primary_resource(amount))
    }

    pub fn tick(&self) -> bool {
        self.update(GameState::tick)
    }

    pub fn set_primary_resource(&self, amount: f64) -> bool {
        self.update(|state| state.set_primary_resource(amount))
    }

    pub fn set_secondary_resource(&self, amount: f64) -> bool {
        self.update(|state| state.set_secondary_resource(amount))
    }

    pub fn set_clicks_per_milestone(&self, clicks: u32) -> bool {
        self.update(|state| state.set_clicks_per_milestone(clicks))
    }

    pub fn purchase_producer(&self, kind: ProducerKind) -> bool {
        self.update(|state| state.purchase_producer(kind))
    }

    pub fn purchase_upgrade(&self, kind: UpgradeKind) -> bool {
        self.update(|state| state.purchase_upgrade(kind))
    }

    pub fn purchase_effectiveness_upgrade(&self) -> bool {
        self.purchase_upgrade(UpgradeKind::Effectiveness)
    }

    pub fn purchase_fortune_upgrade(&self) -> bool {
        self.purchase_upgrade(UpgradeKind::Fortune)
    }

    pub fn purchase_haste_upgrade(&self) -> bool {
        self.purchase_upgrade(UpgradeKind::Haste)
    }

    pub fn select_skin(&self, skin: SkinId) -> bool {
        self.update(|state| state.select_skin(skin))
    }

    pub fn reset(&self) {
        self.replace(GameState::new());
        debug!("game progress reset");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Arc<GameState>> {
        // Snapshots are only ever swapped whole, so a poisoned lock still guards a valid one.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::GameStore;
    use crate::core::GameState;
    use crate::model::ProducerKind;

    #[test]
    fn rejected_operation_keeps_same_snapshot() {
        let store = GameStore::new();
        let before = store.snapshot();

        assert!(!store.purchase_producer(ProducerKind::IronPickaxe));

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn old_snapshots_stay_immutable() {
        let store = GameStore::new();
        let before = store.snapshot();

        store.record_manual_click();

        assert_eq!(before.total_clicks(), 0);
        assert_eq!(store.snapshot().total_clicks(), 1);
    }

    #[test]
    fn independent_stores_do_not_share_state() {
        let a = GameStore::new();
        let b = GameStore::new();
        a.set_primary_resource(500.0);

        assert_eq!(b.snapshot().diamonds(), 0.0);
        assert_eq!(a.snapshot().diamonds(), 500.0);
    }

    #[test]
    fn concurrent_clicks_are_not_lost() {
        let store = Arc::new(GameStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.record_manual_click();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("click thread should finish");
        }

        let state = store.snapshot();
        assert_eq!(state.total_clicks(), 2000);
        assert_eq!(state.diamonds(), 2000.0);
        assert_eq!(state.emeralds(), 1.0);
    }

    #[test]
    fn reset_publishes_initial_state() {
        let store = GameStore::new();
        store.record_manual_clicks(3000);
        store.reset();
        assert_eq!(*store.snapshot(), GameState::new());
    }
}
