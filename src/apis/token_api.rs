use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::{
    providers::EthProvider,
    types::{IERC20, Token}
};

pub trait TokenApi: EthProvider {
    async fn resolve_token(&self, address: Address) -> eyre::Result<Token> {
        let (symbol, decimals) = tokio::try_join!(
            self.view_call(address, IERC20::symbolCall {}),
            self.view_call(address, IERC20::decimalsCall {})
        )?;
        debug!(?address, %symbol, decimals, "resolved token");

        Ok(Token { address, symbol, decimals })
    }

    async fn balance_of(&self, token: Address, owner: Address) -> eyre::Result<U256> {
        self.view_call(token, IERC20::balanceOfCall { owner }).await
    }
}

impl<P: EthProvider> TokenApi for P {}
