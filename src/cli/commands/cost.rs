use crate::cli::{display::PoolDisplay, CostArgs};
use crate::core::{Config, SwapResult};
use colored::*;
use log::info;

pub async fn execute(args: CostArgs, config: &Config) -> SwapResult<()> {
    println!("{}", "🚀 SOR Swap Cost".bold().cyan());

    let manager = super::connect(config).await?;

    info!(
        "Estimating swap cost for {} (decimals: {}, gas price: {})",
        args.token,
        args.decimals,
        manager.gas_price()
    );

    let cost = manager
        .estimate_output_token_cost(&args.token, args.decimals, args.manual_cost.as_deref())
        .await?;

    PoolDisplay::display_cost(&args.token, &cost, args.decimals);
    Ok(())
}
