pub mod capability;
mod vault;
mod views;

pub use capability::*;
