use alloy_primitives::{
    Address, I256,
    utils::{format_units, parse_units}
};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use v3_position_minter::{
    MintRequest, PositionMinter,
    apis::TokenApi,
    providers::EthProvider,
    types::{
        DAI, DEFAULT_MAX_FEE_PER_GAS, DEFAULT_MAX_PRIORITY_FEE_PER_GAS, DEFAULT_MINT_GAS_LIMIT,
        GasConfig, MinterConfig, Token, USDC
    }
};

#[derive(Parser, Debug)]
#[command(name = "mint-position")]
#[command(about = "Mint a Uniswap V3 liquidity position around the current pool price")]
struct Args {
    /// Ethereum node url (http, ws or ipc)
    #[arg(long, env = "ETH_RPC_URL")]
    rpc_url: String,

    /// Key of the account that pays for and receives the position
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    #[arg(long, default_value_t = DAI)]
    token_a: Address,

    #[arg(long, default_value_t = USDC)]
    token_b: Address,

    /// Pool fee tier in hundredths of a bip
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(..=0xff_ffff))]
    fee: u32,

    /// Amount of `token_a` in whole token units
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    amount_a: String,

    /// Amount of `token_b` in whole token units
    #[arg(long, default_value = "100", allow_hyphen_values = true)]
    amount_b: String,

    #[arg(long, default_value_t = DEFAULT_MINT_GAS_LIMIT)]
    gas_limit: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_FEE_PER_GAS)]
    max_fee_per_gas: u128,

    #[arg(long, default_value_t = DEFAULT_MAX_PRIORITY_FEE_PER_GAS)]
    max_priority_fee_per_gas: u128,

    /// Factory address, required on chains without a known deployment
    #[arg(long, env = "UNISWAP_V3_FACTORY")]
    factory: Option<Address>,

    /// Position manager address, required on chains without a known deployment
    #[arg(long, env = "UNISWAP_V3_POSITION_MANAGER")]
    position_manager: Option<Address>,

    /// Plan the position without sending any transaction
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool
}

impl Args {
    fn config(&self) -> MinterConfig {
        let mut config = MinterConfig::new(&self.rpc_url, &self.private_key).with_gas(GasConfig {
            gas_limit:                self.gas_limit,
            max_fee_per_gas:          self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas
        });
        if let Some(factory) = self.factory {
            config = config.with_factory(factory);
        }
        if let Some(position_manager) = self.position_manager {
            config = config.with_position_manager(position_manager);
        }
        config
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }))
        )
        .init();

    let minter = PositionMinter::connect(&args.config()).await?;
    let provider = minter.eth_provider();
    info!(chain_id = minter.constants().chain_id(), signer = ?provider.signer_address(), "connected");

    let (token_a, token_b) = tokio::try_join!(
        provider.resolve_token(args.token_a),
        provider.resolve_token(args.token_b)
    )?;

    let request = MintRequest {
        amount_a: parse_amount(&args.amount_a, token_a.decimals)?,
        amount_b: parse_amount(&args.amount_b, token_b.decimals)?,
        token_a,
        token_b,
        fee: args.fee
    };

    if args.dry_run {
        warn!("dry run, no transaction will be sent");
        let outcome = minter.plan_only(&request).await?;
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
        return Ok(());
    }

    log_balances(&minter, "before", &request.token_a, &request.token_b).await?;
    let outcome = minter.mint_new_position(&request).await?;
    log_balances(&minter, "after", &outcome.token0, &outcome.token1).await?;

    if let Some(tx_hash) = outcome.tx_hash {
        println!("{tx_hash}");
    }

    Ok(())
}

fn parse_amount(amount: &str, decimals: u8) -> eyre::Result<I256> {
    Ok(parse_units(amount, decimals)?.get_signed())
}

async fn log_balances(
    minter: &PositionMinter,
    label: &str,
    token_a: &Token,
    token_b: &Token
) -> eyre::Result<()> {
    let provider = minter.eth_provider();
    let owner = provider.signer_address();

    let (balance_a, balance_b) = tokio::try_join!(
        provider.balance_of(token_a.address, owner),
        provider.balance_of(token_b.address, owner)
    )?;

    info!(
        "{label} balance: {} {} / {} {}",
        format_units(balance_a, token_a.decimals)?,
        token_a.symbol,
        format_units(balance_b, token_b.decimals)?,
        token_b.symbol
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            "mint-position",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            "0x01"
        ])
        .unwrap();

        assert_eq!(args.token_a, DAI);
        assert_eq!(args.token_b, USDC);
        assert_eq!(args.fee, 500);
        assert!(!args.dry_run);

        let config = args.config();
        assert_eq!(config.gas(), GasConfig::default());
        assert!(config.factory().is_none());
    }

    #[test]
    fn test_fee_must_fit_uint24() {
        let base = ["mint-position", "--rpc-url", "http://localhost:8545", "--private-key", "0x01"];

        let args = Args::try_parse_from(base.into_iter().chain(["--fee", "16777215"])).unwrap();
        assert_eq!(args.fee, 0xff_ffff);
        assert!(Args::try_parse_from(base.into_iter().chain(["--fee", "16777216"])).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("100", 6).unwrap(),
            I256::try_from(100_000_000u64).unwrap()
        );
        assert_eq!(
            parse_amount("1.5", 18).unwrap(),
            I256::try_from(1_500_000_000_000_000_000u64).unwrap()
        );
        assert!(parse_amount("-1", 6).unwrap().is_negative());
        assert!(parse_amount("abc", 6).is_err());
    }
}
