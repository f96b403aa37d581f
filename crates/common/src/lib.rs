//! Common errors, traits and helper functions shared by the blockgen crates.

pub mod error;
pub mod numbers;
pub mod traits;
pub mod util;
