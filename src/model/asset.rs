use serde::{Deserialize, Serialize};

/// Tradable asset definition as loaded from config. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    pub start_price: f64,
    /// Per-tick change coefficient, proportional to the current price.
    pub volatility: f64,
}

impl Asset {
    /// Lowest price the simulator will ever emit for this asset.
    pub fn price_floor(&self) -> f64 {
        self.start_price * 0.1
    }
}
