#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore {
    pub diamonds: f64,
    pub emeralds: f64,
    pub total_clicks: u64,
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self {
            diamonds: 0.0,
            emeralds: 0.0,
            total_clicks: 0,
        }
    }
}

impl ResourceStore {
    pub fn add_diamonds(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.diamonds += amount;
    }

    pub fn add_emeralds(&mut self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.emeralds += amount;
    }

    pub fn can_afford_diamonds(&self, price: f64) -> bool {
        self.diamonds >= price
    }

    pub fn can_afford_emeralds(&self, price: f64) -> bool {
        self.emeralds >= price
    }

    /// Debits `price` only when the full amount is available.
    pub fn try_spend_diamonds(&mut self, price: f64) -> bool {
        if price < 0.0 || !self.can_afford_diamonds(price) {
            return false;
        }
        self.diamonds -= price;
        true
    }

    pub fn try_spend_emeralds(&mut self, price: f64) -> bool {
        if price < 0.0 || !self.can_afford_emeralds(price) {
            return false;
        }
        self.emeralds -= price;
        true
    }

    /// Bumps the lifetime click counter and returns the value before the bump.
    pub fn count_clicks(&mut self, clicks: u64) -> u64 {
        let before = self.total_clicks;
        self.total_clicks = before.saturating_add(clicks);
        before
    }
}
