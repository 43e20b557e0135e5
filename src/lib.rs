#![allow(async_fn_in_trait)]

pub mod apis;
pub mod minter;
pub use minter::{MintOutcome, MintRequest, PositionMinter};

pub mod planner;
pub mod providers;
#[cfg(test)]
pub mod test_utils;
pub mod types;
