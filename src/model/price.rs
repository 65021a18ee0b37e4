use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix seconds.
    pub timestamp: i64,
    /// Rounded to cents.
    pub price: f64,
}

/// One simulated second per point, ordered by tick index.
pub type PriceSeries = Vec<PricePoint>;

/// Simulated history for one asset, as sent to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetData {
    pub symbol: String,
    pub name: String,
    pub prices: PriceSeries,
}

/// Payload returned when a round starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundData {
    pub assets: Vec<AssetData>,
    pub start_balance: f64,
    pub duration: u64,
}
