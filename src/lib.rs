pub mod cs;
pub mod error;

#[cfg(test)]
pub(crate) mod test_log;

pub use cs::dynamic;
pub use cs::dynamic::*;
pub use error::{CoinChangeError, Result};
