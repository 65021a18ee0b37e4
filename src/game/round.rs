use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::PriceSimulator;
use crate::model::price::{AssetData, RoundData};

/// Simulate every configured asset for one round, in config order.
pub fn build_round<R: Rng>(
    game: &GameConfig,
    simulator: &mut PriceSimulator<R>,
) -> Result<RoundData, GameError> {
    let base_timestamp = chrono::Utc::now().timestamp();
    build_round_at(game, simulator, base_timestamp)
}

/// All assets in the round share the same first timestamp.
pub fn build_round_at<R: Rng>(
    game: &GameConfig,
    simulator: &mut PriceSimulator<R>,
    base_timestamp: i64,
) -> Result<RoundData, GameError> {
    if !(game.start_balance > 0.0) {
        return Err(GameError::InvalidStartBalance(game.start_balance));
    }

    let assets = game
        .assets
        .iter()
        .map(|asset| {
            let prices =
                simulator.generate_price_history_at(asset, game.round_duration, base_timestamp)?;
            Ok(AssetData {
                symbol: asset.symbol.clone(),
                name: asset.name.clone(),
                prices,
            })
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    Ok(RoundData {
        assets,
        start_balance: game.start_balance,
        duration: game.round_duration,
    })
}
