use std::fmt::Display;

use log::{debug, log_enabled, trace, Level};
use num_bigint::BigUint;
use num_traits::{One, PrimInt, Zero};

use super::coin_change::{normalize, CoinChangeSolver};
use crate::error::Result;

impl CoinChangeSolver {
    /// Counts the distinct combinations of coins that sum exactly to `amount`.
    ///
    /// Coins come in unlimited supply and order does not matter, so `1 + 2` and
    /// `2 + 1` are one combination. The count is exact: it grows exponentially
    /// with `amount` and is returned as a `BigUint`.
    ///
    /// There is exactly one way to pay zero (no coins) and no way to pay a
    /// negative amount.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    ///
    /// # Complexity
    /// * Time: O(amount * denominations) big-integer additions
    /// * Space: O(amount)
    pub fn count_ways<T>(&self, denominations: &[T], amount: T) -> Result<BigUint>
    where
        T: PrimInt + Display,
    {
        let coins = normalize(denominations)?;
        if amount < T::zero() {
            return Ok(BigUint::zero());
        }
        let target = match self.target(amount)? {
            Some(target) => target,
            None => return Ok(BigUint::one()),
        };
        debug!(
            "counting change ways: {} denominations, target {}",
            coins.len(),
            target
        );

        let mut ways = vec![BigUint::zero(); target + 1];
        ways[0] = BigUint::one();

        // Coins outer, amounts inner: each combination is counted once, in
        // ascending coin order.
        for coin in &coins {
            let step = match coin.to_usize() {
                Some(step) if step <= target => step,
                _ => break,
            };
            for sum in step..=target {
                let (lower, upper) = ways.split_at_mut(sum);
                upper[0] += &lower[sum - step];
            }

            if self.config().trace_table && log_enabled!(Level::Trace) {
                trace!("ways after coin {}: [{}]", coin, render(&ways));
            }
        }

        Ok(ways.swap_remove(target))
    }
}

/// Counts the combinations of `coins` summing to `amount` with the default solver.
///
/// # Examples
///
/// ```
/// use coinchange::count_change_ways;
/// use num_bigint::BigUint;
///
/// // 4 = 1+1+1+1 = 1+1+2 = 2+2 = 1+3
/// assert_eq!(count_change_ways(&[1, 2, 3], 4).unwrap(), BigUint::from(4u32));
/// assert_eq!(count_change_ways(&[12], 10).unwrap(), BigUint::from(0u32));
/// ```
pub fn count_change_ways<T>(coins: &[T], amount: T) -> Result<BigUint>
where
    T: PrimInt + Display,
{
    CoinChangeSolver::default().count_ways(coins, amount)
}

fn render(ways: &[BigUint]) -> String {
    ways.iter()
        .map(|count| count.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
