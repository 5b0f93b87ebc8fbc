use crate::cli::{display::PoolDisplay, PoolsArgs};
use crate::core::{Config, SwapResult};
use colored::*;

pub async fn execute(args: PoolsArgs, config: &Config) -> SwapResult<()> {
    println!("{}", "🚀 SOR Pool Refresh".bold().cyan());

    let manager = super::connect(config).await?;
    let pools = manager.selected_pools();

    PoolDisplay::display_fetch_status(manager.fetch_status(), pools.len());
    if !manager.has_pool_data() || pools.is_empty() {
        return Ok(());
    }

    PoolDisplay::display_pool_list(&pools, args.detailed);

    if !args.detailed {
        println!(
            "{}",
            "💡 Tip: Use --detailed flag for more pool information".dimmed()
        );
    }

    Ok(())
}
