mod lifecycle;
pub mod types;
mod views;

pub use types::*;
