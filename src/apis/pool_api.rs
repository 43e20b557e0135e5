use alloy_primitives::Address;
use tracing::debug;

use crate::{
    providers::EthProvider,
    types::{FeeAmount, IUniswapV3Pool, PoolKey, PoolSnapshot}
};

pub trait PoolApi: EthProvider {
    /// Reads `liquidity()` and `slot0()` from the pool `factory` deployed for
    /// `pool_key`.
    async fn pool_snapshot(&self, factory: Address, pool_key: PoolKey) -> eyre::Result<PoolSnapshot> {
        let pool_address = pool_key.pool_address(factory);

        let (liquidity, slot0) = tokio::try_join!(
            self.view_call(pool_address, IUniswapV3Pool::liquidityCall {}),
            self.view_call(pool_address, IUniswapV3Pool::slot0Call {})
        )?;

        let tick_spacing = match FeeAmount::try_from(pool_key.fee) {
            Ok(tier) => tier.tick_spacing(),
            Err(_) => self
                .view_call(pool_address, IUniswapV3Pool::tickSpacingCall {})
                .await?
                .as_i32()
        };

        let snapshot = PoolSnapshot {
            pool_key,
            pool_address,
            tick_spacing,
            current_tick: slot0.tick.as_i32(),
            sqrt_price_x96: slot0.sqrtPriceX96,
            liquidity
        };
        debug!(?pool_address, tick = snapshot.current_tick, liquidity, "read pool state");

        Ok(snapshot)
    }
}

impl<P: EthProvider> PoolApi for P {}
