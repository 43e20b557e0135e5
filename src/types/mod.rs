mod common;
pub use common::*;

mod config;
pub use config::*;

mod constants;
pub use constants::*;

mod contract_bindings;
pub use contract_bindings::*;

pub mod errors;
pub use errors::{MinterError, PlanError};

mod fees;
pub use fees::*;
