mod lifecycle;
mod settle;
pub mod types;
mod views;

pub use types::*;
