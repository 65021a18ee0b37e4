use crate::error::GameError;
use crate::game::round_to;

/// Each trade is worth this many points, up to [`TRADE_BONUS_CAP`].
pub const TRADE_BONUS_PER_TRADE: f64 = 2.0;
pub const TRADE_BONUS_CAP: f64 = 50.0;

/// Score = profit percent × 100 plus a capped activity bonus, rounded to one
/// decimal. Pure; a negative final balance simply yields a negative score.
pub fn calculate_score(
    final_balance: f64,
    start_balance: f64,
    trades: u32,
) -> Result<f64, GameError> {
    if !(start_balance > 0.0) {
        return Err(GameError::InvalidStartBalance(start_balance));
    }

    let profit = final_balance - start_balance;
    let profit_percent = (profit / start_balance) * 100.0;
    let base_score = profit_percent * 100.0;
    let trade_bonus = (f64::from(trades) * TRADE_BONUS_PER_TRADE).min(TRADE_BONUS_CAP);

    Ok(round_to(base_score + trade_bonus, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_yields_negative_score() {
        assert_eq!(calculate_score(9_000.0, 10_000.0, 0).unwrap(), -1000.0);
    }

    #[test]
    fn negative_final_balance_is_allowed() {
        assert_eq!(calculate_score(-1_000.0, 10_000.0, 5).unwrap(), -10990.0);
    }

    #[test]
    fn rejects_zero_and_negative_start_balance() {
        assert_eq!(
            calculate_score(100.0, 0.0, 1),
            Err(GameError::InvalidStartBalance(0.0))
        );
        assert!(calculate_score(100.0, -5.0, 1).is_err());
        assert!(calculate_score(100.0, f64::NAN, 1).is_err());
    }

    #[test]
    fn fractional_profit_rounds_to_one_decimal() {
        // 0.12345% profit -> 12.345 base -> 12.3
        assert_eq!(calculate_score(10_012.345, 10_000.0, 0).unwrap(), 12.3);
    }
}
