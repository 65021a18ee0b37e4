//! Random-walk price generator for a single round.
//!
//! Each tick draws a standard normal move scaled by the asset's volatility and
//! the current price. With a small per-tick probability the move is amplified
//! by a shock factor; the shock keeps the sign of the sampled move. Prices are
//! floored at 10% of the starting price.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::GameError;
use crate::game::round_to;
use crate::model::asset::Asset;
use crate::model::price::{PricePoint, PriceSeries};

pub const SHOCK_PROBABILITY: f64 = 0.05;
/// Shock factor is `1.0 + U[-0.2, 0.2)`, then tripled.
pub const SHOCK_SPREAD: f64 = 0.2;
pub const SHOCK_AMPLIFIER: f64 = 3.0;

/// Owns the generator it draws from. Build one per round (or per request) so
/// concurrent handlers never share RNG state.
#[derive(Debug, Clone)]
pub struct PriceSimulator<R = StdRng> {
    rng: R,
}

impl PriceSimulator<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible series.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PriceSimulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Simulate `duration` one-second ticks starting at the current wall clock.
    pub fn generate_price_history(
        &mut self,
        asset: &Asset,
        duration: u64,
    ) -> Result<PriceSeries, GameError> {
        let base_timestamp = chrono::Utc::now().timestamp();
        self.generate_price_history_at(asset, duration, base_timestamp)
    }

    /// Same as [`generate_price_history`](Self::generate_price_history) with a
    /// pinned first timestamp.
    pub fn generate_price_history_at(
        &mut self,
        asset: &Asset,
        duration: u64,
        base_timestamp: i64,
    ) -> Result<PriceSeries, GameError> {
        validate_inputs(asset, duration)?;

        let floor = asset.price_floor();
        let mut current_price = asset.start_price;
        let mut points = Vec::with_capacity(duration as usize);

        for i in 0..duration {
            let z: f64 = self.rng.sample(StandardNormal);
            let mut change = z * asset.volatility * current_price;

            if self.rng.random::<f64>() < SHOCK_PROBABILITY {
                let u: f64 = self.rng.random();
                let event_multiplier = 1.0 + (u * 2.0 * SHOCK_SPREAD - SHOCK_SPREAD);
                change *= event_multiplier * SHOCK_AMPLIFIER;
            }

            current_price += change;
            if current_price < floor {
                current_price = floor;
            }

            points.push(PricePoint {
                timestamp: base_timestamp + i as i64,
                price: round_to(current_price, 2),
            });
        }

        Ok(points)
    }
}

fn validate_inputs(asset: &Asset, duration: u64) -> Result<(), GameError> {
    if duration == 0 {
        return Err(GameError::InvalidDuration(duration));
    }
    if !(asset.start_price > 0.0) || !asset.start_price.is_finite() {
        return Err(GameError::InvalidStartPrice {
            symbol: asset.symbol.clone(),
            price: asset.start_price,
        });
    }
    if !(asset.volatility >= 0.0) || !asset.volatility.is_finite() {
        return Err(GameError::InvalidVolatility {
            symbol: asset.symbol.clone(),
            volatility: asset.volatility,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc(volatility: f64) -> Asset {
        Asset {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            start_price: 45_000.0,
            volatility,
        }
    }

    #[test]
    fn zero_volatility_is_flat_at_start_price() {
        let mut sim = PriceSimulator::seeded(1);
        let series = sim.generate_price_history_at(&btc(0.0), 50, 0).unwrap();
        assert!(series.iter().all(|p| p.price == 45_000.0));
    }

    #[test]
    fn rejects_zero_duration() {
        let mut sim = PriceSimulator::seeded(1);
        assert_eq!(
            sim.generate_price_history(&btc(0.01), 0),
            Err(GameError::InvalidDuration(0))
        );
    }

    #[test]
    fn rejects_non_positive_start_price() {
        let mut sim = PriceSimulator::seeded(1);
        let mut asset = btc(0.01);
        asset.start_price = 0.0;
        assert!(matches!(
            sim.generate_price_history(&asset, 10),
            Err(GameError::InvalidStartPrice { .. })
        ));
    }

    #[test]
    fn rejects_negative_or_nan_volatility() {
        let mut sim = PriceSimulator::seeded(1);
        for v in [-0.01, f64::NAN] {
            assert!(matches!(
                sim.generate_price_history(&btc(v), 10),
                Err(GameError::InvalidVolatility { .. })
            ));
        }
    }

    #[test]
    fn prices_carry_at_most_two_decimals() {
        let mut sim = PriceSimulator::seeded(9);
        let mut asset = btc(0.02);
        asset.start_price = 1.2345;
        for p in sim.generate_price_history_at(&asset, 200, 0).unwrap() {
            assert!((p.price * 100.0 - (p.price * 100.0).round()).abs() < 1e-6);
        }
    }
}
