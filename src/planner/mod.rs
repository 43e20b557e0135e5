//! Position planning
//!
//! Turns a fresh [`PoolSnapshot`] and the caller's desired amounts into a
//! [`MintPlan`]. The range policy is fixed: one tick spacing on each side of
//! the usable tick nearest to the current price, no minimum amounts, and a
//! deadline [`MINT_DEADLINE_SECS`] seconds out.
//!
//! Zero minimums mean the position manager accepts whatever ratio the pool
//! takes at execution time, so the mint is exposed to price movement and
//! sandwiching between planning and inclusion.

mod ticks;
pub use ticks::*;

use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::{Address, I256, U256};

use crate::types::{MintPlan, PlanError, PoolSnapshot, TickRange};

/// Validity window of a planned mint.
pub const MINT_DEADLINE_SECS: u64 = 60 * 20;

pub struct PositionPlanner;

impl PositionPlanner {
    pub fn plan_position(
        pool: &PoolSnapshot,
        amount0_desired: I256,
        amount1_desired: I256,
        recipient: Address
    ) -> Result<MintPlan, PlanError> {
        Self::plan_position_at(pool, amount0_desired, amount1_desired, recipient, unix_now())
    }

    /// Same as [`Self::plan_position`] with the current unix time supplied.
    pub fn plan_position_at(
        pool: &PoolSnapshot,
        amount0_desired: I256,
        amount1_desired: I256,
        recipient: Address,
        now: u64
    ) -> Result<MintPlan, PlanError> {
        let TickRange { tick_lower, tick_upper } =
            Self::tick_range(pool.current_tick, pool.tick_spacing)?;

        Ok(MintPlan {
            token0: pool.pool_key.token0,
            token1: pool.pool_key.token1,
            fee: pool.pool_key.fee,
            tick_lower,
            tick_upper,
            amount0_desired: Self::desired_amount(amount0_desired)?,
            amount1_desired: Self::desired_amount(amount1_desired)?,
            amount0_min: U256::ZERO,
            amount1_min: U256::ZERO,
            recipient,
            deadline: now + MINT_DEADLINE_SECS
        })
    }

    pub fn tick_range(current_tick: i32, tick_spacing: i32) -> Result<TickRange, PlanError> {
        if !(1..=MAX_TICK).contains(&tick_spacing) {
            return Err(PlanError::InvalidTickSpacing(tick_spacing));
        }
        if !(MIN_TICK..=MAX_TICK).contains(&current_tick) {
            return Err(PlanError::InvalidTick(current_tick));
        }

        let nearest = nearest_usable_tick(current_tick, tick_spacing);
        Ok(TickRange { tick_lower: nearest - tick_spacing, tick_upper: nearest + tick_spacing })
    }

    /// Checks a desired amount and converts it to the unsigned value `mint`
    /// takes. Zero is allowed.
    pub fn desired_amount(amount: I256) -> Result<U256, PlanError> {
        if amount.is_negative() {
            return Err(PlanError::InvalidAmount(amount));
        }
        Ok(amount.into_raw())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
