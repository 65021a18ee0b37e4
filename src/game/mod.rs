pub mod price_simulator;
pub mod round;
pub mod score;

pub use price_simulator::PriceSimulator;
pub use round::{build_round, build_round_at};
pub use score::calculate_score;

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(12.25, 1), 12.3);
        assert_eq!(round_to(-12.25, 1), -12.3);
        assert_eq!(round_to(3.14159, 2), 3.14);
    }
}
