mod collections;
mod ledger;
pub mod types;
mod views;

pub use types::*;
