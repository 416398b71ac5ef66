use thiserror::Error;

/// Errors raised by the coin change solvers.
///
/// An unreachable amount is not an error; solvers report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinChangeError {
    /// A denomination was zero or negative.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The DP table for `amount` would exceed `limit` entries.
    #[error("amount {amount} exceeds the table limit of {limit}")]
    AmountTooLarge { amount: String, limit: usize },
}

impl CoinChangeError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        CoinChangeError::InvalidInput(msg.into())
    }

    pub fn amount_too_large<A: std::fmt::Display>(amount: A, limit: usize) -> Self {
        CoinChangeError::AmountTooLarge {
            amount: amount.to_string(),
            limit,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoinChangeError>;
