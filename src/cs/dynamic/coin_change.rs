use std::fmt::Display;

use log::{debug, log_enabled, trace, Level};
use num_traits::PrimInt;

use crate::error::{CoinChangeError, Result};

/// Configuration for [`CoinChangeSolver`].
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest amount a DP table may cover.
    ///
    /// Each covered amount costs 16 bytes in `solve` and 32 bytes in
    /// `table` and `make_change`, so the default of `1 << 24` caps a single
    /// call at 256 MiB and 512 MiB respectively. `count_ways` keeps one
    /// `BigUint` per amount and costs more.
    pub max_amount: usize,
    /// Emit the table after every denomination pass at `trace` level, for
    /// both minimum-coin and way-count runs.
    pub trace_table: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_amount: 1 << 24,
            trace_table: false,
        }
    }
}

/// Solver for the unbounded coin change problem.
///
/// Every denomination is available in unlimited supply. The solver keeps no
/// state between calls; each call owns its DP table.
#[derive(Debug, Clone, Default)]
pub struct CoinChangeSolver {
    config: SolverConfig,
}

impl CoinChangeSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes the minimum number of coins whose values sum exactly to `amount`.
    ///
    /// Returns `Ok(None)` when no combination reaches `amount`. Amounts of zero
    /// or below need no coins and return `Ok(Some(0))`.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if any denomination is zero or negative.
    /// * `AmountTooLarge` if `amount` exceeds [`SolverConfig::max_amount`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::CoinChangeSolver;
    ///
    /// let solver = CoinChangeSolver::default();
    /// assert_eq!(solver.solve(&[1, 2, 3], 5).unwrap(), Some(2)); // 2 + 3
    /// assert_eq!(solver.solve(&[2, 4], 3).unwrap(), None);
    /// ```
    ///
    /// # Complexity
    /// * Time: O(amount * denominations)
    /// * Space: O(amount)
    pub fn solve<T>(&self, denominations: &[T], amount: T) -> Result<Option<usize>>
    where
        T: PrimInt + Display,
    {
        let coins = normalize(denominations)?;
        let target = match self.target(amount)? {
            Some(target) => target,
            None => return Ok(Some(0)),
        };
        if coins.is_empty() {
            return Ok(None);
        }

        Ok(self.min_counts(&coins, target, None)[target])
    }

    /// Builds the full table of minimum coin counts for every amount up to `amount`.
    ///
    /// For `amount <= 0` the table only covers amount zero.
    ///
    /// ```
    /// use coinchange::CoinChangeSolver;
    ///
    /// let table = CoinChangeSolver::default().table(&[3u32, 5], 8).unwrap();
    /// assert_eq!(table.min_coins(4), None);
    /// assert_eq!(table.min_coins(8), Some(2));
    /// assert_eq!(table.coins_for(8), Some(vec![5, 3]));
    /// ```
    pub fn table<T>(&self, denominations: &[T], amount: T) -> Result<ChangeTable<T>>
    where
        T: PrimInt + Display,
    {
        let coins = normalize(denominations)?;
        let target = self.target(amount)?.unwrap_or(0);
        Ok(self.fill(coins, target))
    }

    /// Returns one optimal combination of coins for `amount`, largest first.
    ///
    /// The combination has exactly as many coins as [`solve`](Self::solve)
    /// reports. Amounts of zero or below yield an empty combination.
    pub fn make_change<T>(&self, denominations: &[T], amount: T) -> Result<Option<Vec<T>>>
    where
        T: PrimInt + Display,
    {
        let table = self.table(denominations, amount)?;
        Ok(table.coins_for(table.target()))
    }

    /// Converts `amount` into a table index.
    ///
    /// `None` means there is nothing to pay.
    pub(crate) fn target<T>(&self, amount: T) -> Result<Option<usize>>
    where
        T: PrimInt + Display,
    {
        if amount <= T::zero() {
            return Ok(None);
        }
        match amount.to_usize() {
            Some(target) if target <= self.config.max_amount && target < usize::MAX => {
                Ok(Some(target))
            }
            _ => Err(CoinChangeError::amount_too_large(
                amount,
                self.config.max_amount,
            )),
        }
    }

    /// Runs the DP and keeps the last coin of every optimal entry.
    fn fill<T>(&self, coins: Vec<T>, target: usize) -> ChangeTable<T>
    where
        T: PrimInt + Display,
    {
        let mut last: Vec<Option<usize>> = vec![None; target + 1];
        let best = self.min_counts(&coins, target, Some(&mut last));
        ChangeTable { coins, best, last }
    }

    /// Minimum coin count for every amount in `0..=target`.
    ///
    /// `last`, when given, receives the index of the coin that last improved
    /// each entry.
    fn min_counts<T>(
        &self,
        coins: &[T],
        target: usize,
        mut last: Option<&mut Vec<Option<usize>>>,
    ) -> Vec<Option<usize>>
    where
        T: PrimInt + Display,
    {
        debug!(
            "coin change: {} denominations, target {}",
            coins.len(),
            target
        );

        let mut best: Vec<Option<usize>> = vec![None; target + 1];
        best[0] = Some(0);

        for (idx, coin) in coins.iter().enumerate() {
            // Denominations are ascending, so the rest are too large as well.
            let step = match coin.to_usize() {
                Some(step) if step <= target => step,
                _ => break,
            };

            // Increasing scan lets the same coin be reused within one amount.
            for sum in step..=target {
                if let Some(prev) = best[sum - step] {
                    let candidate = prev + 1;
                    if best[sum].map_or(true, |current| candidate < current) {
                        best[sum] = Some(candidate);
                        if let Some(last) = last.as_deref_mut() {
                            last[sum] = Some(idx);
                        }
                    }
                }
            }

            if self.config.trace_table && log_enabled!(Level::Trace) {
                trace!("after coin {}: [{}]", coin, render(&best));
            }
        }

        best
    }
}

/// Minimum coin counts for every amount in `0..=target()`.
#[derive(Debug, Clone)]
pub struct ChangeTable<T> {
    coins: Vec<T>,
    best: Vec<Option<usize>>,
    // Index into `coins` of the last coin of one optimal combination.
    last: Vec<Option<usize>>,
}

impl<T> ChangeTable<T>
where
    T: PrimInt + Display,
{
    /// Largest amount covered by the table.
    pub fn target(&self) -> usize {
        self.best.len() - 1
    }

    /// Normalized denominations: ascending, without duplicates.
    pub fn denominations(&self) -> &[T] {
        &self.coins
    }

    /// Minimum number of coins for `amount`, or `None` if unreachable or not covered.
    pub fn min_coins(&self, amount: usize) -> Option<usize> {
        self.best.get(amount).copied().flatten()
    }

    /// Reconstructs one optimal combination for `amount`, largest coin first.
    pub fn coins_for(&self, amount: usize) -> Option<Vec<T>> {
        let count = self.min_coins(amount)?;
        let mut coins = Vec::with_capacity(count);
        let mut remaining = amount;
        while remaining > 0 {
            let coin = self.coins[self.last[remaining]?];
            coins.push(coin);
            remaining -= coin.to_usize()?;
        }
        coins.sort_unstable_by(|a, b| b.cmp(a));
        Some(coins)
    }

    /// Iterates `(amount, minimum coins)` pairs in increasing amount order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.best.iter().copied().enumerate()
    }
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// Each coin can be used any number of times. Returns `Ok(None)` if it's
/// impossible to form `amount` using the given `coins`.
///
/// # Examples
///
/// ```
/// use coinchange::min_coins_for_change;
///
/// // 63 = 25 + 25 + 10 + 1 + 1 + 1
/// assert_eq!(min_coins_for_change(&[1, 5, 10, 25], 63).unwrap(), Some(6));
///
/// // Sums of 4s and 6s are always even
/// assert_eq!(min_coins_for_change(&[4, 6], 9).unwrap(), None);
///
/// // A zero coin is rejected
/// assert!(min_coins_for_change(&[0, 1], 3).is_err());
/// ```
pub fn min_coins_for_change<T>(coins: &[T], amount: T) -> Result<Option<usize>>
where
    T: PrimInt + Display,
{
    CoinChangeSolver::default().solve(coins, amount)
}

/// Returns one minimal combination of `coins` summing to `amount`, largest first.
///
/// ```
/// use coinchange::make_change;
///
/// assert_eq!(make_change(&[1, 5, 7], 11).unwrap(), Some(vec![5, 5, 1]));
/// assert_eq!(make_change(&[5], 11).unwrap(), None);
/// ```
pub fn make_change<T>(coins: &[T], amount: T) -> Result<Option<Vec<T>>>
where
    T: PrimInt + Display,
{
    CoinChangeSolver::default().make_change(coins, amount)
}

/// Validates denominations and returns them sorted ascending without duplicates.
pub(crate) fn normalize<T>(denominations: &[T]) -> Result<Vec<T>>
where
    T: PrimInt + Display,
{
    if let Some(bad) = denominations.iter().find(|&&d| d <= T::zero()) {
        return Err(CoinChangeError::invalid_input(format!(
            "denomination {} is not positive",
            bad
        )));
    }
    let mut coins = denominations.to_vec();
    coins.sort_unstable();
    coins.dedup();
    Ok(coins)
}

fn render(best: &[Option<usize>]) -> String {
    best.iter()
        .map(|entry| match entry {
            Some(count) => count.to_string(),
            None => "-".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
