pub mod change_ways;
pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use change_ways::count_change_ways;
pub use coin_change::{
    make_change, min_coins_for_change, ChangeTable, CoinChangeSolver, SolverConfig,
};
