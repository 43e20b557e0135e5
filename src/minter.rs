use alloy_primitives::{I256, TxHash, utils::format_units};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    apis::{ApprovalApi, MintApi, PoolApi},
    planner::PositionPlanner,
    providers::{EthProvider, EthRpcProvider},
    types::{
        ConfirmedTx, GasConfig, MintPlan, MinterConfig, MinterError, PlanError, PoolKey,
        PoolSnapshot, Token, UniswapV3Constants
    }
};

/// A position to mint. Tokens may be given in either order; amounts follow
/// their token. Tokens come already resolved through
/// [`crate::apis::TokenApi::resolve_token`], callers need their decimals to
/// scale the amounts anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    pub token_a:  Token,
    pub token_b:  Token,
    pub fee:      u32,
    pub amount_a: I256,
    pub amount_b: I256
}

impl MintRequest {
    /// Rejects negative amounts. Needs no chain access.
    pub fn validate(&self) -> Result<(), PlanError> {
        PositionPlanner::desired_amount(self.amount_a)?;
        PositionPlanner::desired_amount(self.amount_b)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOutcome {
    pub token0:    Token,
    pub token1:    Token,
    pub pool:      PoolSnapshot,
    pub plan:      MintPlan,
    pub approvals: Vec<ConfirmedTx>,
    /// `None` for a dry run.
    pub tx_hash:   Option<TxHash>
}

#[derive(Debug, Clone)]
pub struct PositionMinter<E: EthProvider = EthRpcProvider> {
    eth_provider: E,
    constants:    UniswapV3Constants,
    gas:          GasConfig
}

impl PositionMinter {
    /// Connects to the configured node and picks the deployment addresses for
    /// the chain it reports, applying any overrides from `config`.
    pub async fn connect(config: &MinterConfig) -> eyre::Result<Self> {
        let eth_provider = EthRpcProvider::connect(config).await?;
        Self::new_with_provider(eth_provider, config).await
    }
}

impl<E: EthProvider> PositionMinter<E> {
    pub async fn new_with_provider(eth_provider: E, config: &MinterConfig) -> eyre::Result<Self> {
        let chain_id = eth_provider.chain_id().await?;

        let constants = match (
            UniswapV3Constants::by_chain(chain_id),
            config.factory(),
            config.position_manager()
        ) {
            (_, Some(factory), Some(position_manager)) => {
                UniswapV3Constants::custom(chain_id, factory, position_manager)
            }
            (Some(known), factory, position_manager) => {
                let known = factory.map_or(known, |f| known.with_factory(f));
                position_manager.map_or(known, |p| known.with_position_manager(p))
            }
            (None, ..) => return Err(MinterError::UnsupportedChain(chain_id).into())
        };

        Ok(Self { eth_provider, constants, gas: config.gas() })
    }

    pub fn eth_provider(&self) -> &E {
        &self.eth_provider
    }

    pub fn constants(&self) -> UniswapV3Constants {
        self.constants
    }

    /// Reads the pool and plans the position without sending anything.
    pub async fn plan_only(&self, request: &MintRequest) -> eyre::Result<MintOutcome> {
        let (token0, token1, pool, plan) = self.prepare(request).await?;
        Ok(MintOutcome { token0, token1, pool, plan, approvals: Vec::new(), tx_hash: None })
    }

    /// Plans the position, approves both tokens for the position manager and
    /// mints. Any failure aborts the workflow; approvals already mined stay
    /// in effect.
    pub async fn mint_new_position(&self, request: &MintRequest) -> eyre::Result<MintOutcome> {
        let (token0, token1, pool, plan) = self.prepare(request).await?;
        let position_manager = self.constants.position_manager_address();

        let mut approvals = Vec::new();
        for (token, amount) in [(&token0, plan.amount0_desired), (&token1, plan.amount1_desired)] {
            if let Some(confirmed) = self
                .eth_provider
                .ensure_approval(token.address, amount, position_manager, &self.gas)
                .await?
            {
                approvals.push(confirmed);
            }
        }

        let tx_hash = self
            .eth_provider
            .submit_mint(position_manager, &plan, &self.gas)
            .await?;
        info!(?tx_hash, "transaction hash");

        Ok(MintOutcome { token0, token1, pool, plan, approvals, tx_hash: Some(tx_hash) })
    }

    async fn prepare(
        &self,
        request: &MintRequest
    ) -> eyre::Result<(Token, Token, PoolSnapshot, MintPlan)> {
        request.validate().map_err(MinterError::from)?;

        let MintRequest { token_a, token_b, .. } = request.clone();
        info!(
            token_a = %token_a.symbol,
            token_b = %token_b.symbol,
            fee = request.fee,
            amount_a = %readable(request.amount_a, token_a.decimals),
            amount_b = %readable(request.amount_b, token_b.decimals),
            "minting position"
        );

        let pool_key = PoolKey::new(token_a.address, token_b.address, request.fee);
        let ((token0, amount0), (token1, amount1)) = if pool_key.token0 == token_a.address {
            ((token_a, request.amount_a), (token_b, request.amount_b))
        } else {
            ((token_b, request.amount_b), (token_a, request.amount_a))
        };

        let pool = self
            .eth_provider
            .pool_snapshot(self.constants.factory_address(), pool_key)
            .await?;

        let plan = PositionPlanner::plan_position(
            &pool,
            amount0,
            amount1,
            self.eth_provider.signer_address()
        )
        .map_err(MinterError::from)?;
        info!(params = %serde_json::to_string(&plan)?, "minting position with params");

        Ok((token0, token1, pool, plan))
    }
}

fn readable(amount: I256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
