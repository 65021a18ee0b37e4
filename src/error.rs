use thiserror::Error;

/// Precondition violations raised by the price simulator and score calculator.
///
/// These are configuration bugs rather than runtime failures; the server
/// validates its config at startup so none of them should surface per request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("invalid round duration: {0} (must be > 0)")]
    InvalidDuration(u64),

    #[error("invalid start balance: {0} (must be > 0)")]
    InvalidStartBalance(f64),

    #[error("invalid start price for {symbol}: {price} (must be > 0)")]
    InvalidStartPrice { symbol: String, price: f64 },

    #[error("invalid volatility for {symbol}: {volatility} (must be >= 0)")]
    InvalidVolatility { symbol: String, volatility: f64 },
}
