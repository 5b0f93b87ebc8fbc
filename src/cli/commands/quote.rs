use crate::cli::{display::PoolDisplay, QuoteArgs};
use crate::core::{Config, SwapResult};
use crate::utils::parse_units;
use colored::*;
use console::style;
use log::info;

pub async fn execute(args: QuoteArgs, config: &Config) -> SwapResult<()> {
    println!("{}", "🚀 SOR Best Swap Quote".bold().cyan());

    // Check if trying to quote same token
    if args.token_in == args.token_out {
        println!("{}", "❌ Cannot swap token to itself".red().bold());
        return Ok(());
    }

    let amount = parse_units(&args.amount, args.amount_decimals())?;

    let manager = super::connect(config).await?;
    if !manager.has_pool_data() {
        PoolDisplay::display_fetch_status(manager.fetch_status(), 0);
        return Ok(());
    }

    info!(
        "Getting best swap for {} -> {} ({}, amount: {})",
        args.token_in,
        args.token_out,
        args.swap_type(),
        amount
    );

    let pb = PoolDisplay::create_progress_bar("Finding best route...");
    let quote = manager
        .get_best_swap(
            &args.token_in,
            &args.token_out,
            args.in_decimals,
            args.out_decimals,
            args.swap_type(),
            &amount,
        )
        .await;
    pb.finish_and_clear();

    PoolDisplay::display_quote(&quote?, args.swap_type());

    println!("{}", style("💡 Tip: Use --exact-out to quote a fixed output amount").dim());

    Ok(())
}
