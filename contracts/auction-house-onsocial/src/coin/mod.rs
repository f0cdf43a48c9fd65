mod deposit;
pub(crate) mod external;
mod ledger;
pub mod types;
mod views;
mod withdraw;

pub use types::*;
