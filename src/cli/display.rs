use crate::core::{Address, FetchStatus, PoolInfo, PoolSnapshot, QuoteResult, SwapType};
use crate::utils::format_units;
use colored::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use num_bigint::BigUint;
use std::collections::BTreeMap;

/// Display helper for router output
pub struct PoolDisplay;

impl PoolDisplay {
    /// Display the outcome of the last pool refresh
    pub fn display_fetch_status(status: FetchStatus, pool_count: usize) {
        match (status.finished_fetch, status.success) {
            (true, true) => println!(
                "{} Pool data ready: {} pools",
                "✅".bold(),
                pool_count.to_string().green().bold()
            ),
            (true, false) => println!(
                "{}",
                "❌ Error fetching pools - no liquidity sources".red().bold()
            ),
            (false, _) => println!("{}", "⏳ Pools not fetched yet".yellow()),
        }
    }

    /// Display pool list grouped by pool type
    pub fn display_pool_list(pools: &PoolSnapshot, detailed: bool) {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for pool in pools.iter() {
            *counts.entry(pool.pool_type.as_str()).or_insert(0) += 1;
        }

        println!("\n{}", style("📊 Pool Summary").bold().underlined());
        for (pool_type, count) in &counts {
            println!("   • {}: {}", colorize_pool_type(pool_type), count);
        }

        println!("\n{}", style("🏊 Available Pools").bold().underlined());
        for (i, pool) in pools.iter().enumerate() {
            println!(
                "{}. {} Pool {}",
                i + 1,
                colorize_pool_type(&pool.pool_type).bold(),
                style(&pool.id).dim()
            );

            if detailed {
                Self::display_pool_detailed(pool);
            }
        }
    }

    /// Display detailed information about a single pool
    pub fn display_pool_detailed(pool: &PoolInfo) {
        println!("   Address: {}", style(pool.address.to_string()).dim());
        println!("   Swap Fee: {}", pool.swap_fee);
        if let Some(liquidity) = &pool.total_liquidity {
            println!("   Liquidity: ${}", liquidity);
        }
        let tokens: Vec<&str> = pool.tokens_list.iter().map(Address::as_str).collect();
        println!("   Tokens: {}", tokens.join(", "));
        println!();
    }

    /// Display the gas cost of a swap in token units
    pub fn display_cost(token: &Address, cost: &BigUint, decimals: u8) {
        println!(
            "{} Swap cost in {}: {} ({} raw)",
            style("►").cyan(),
            style(token.to_string()).dim(),
            format_units(cost, decimals).green().bold(),
            cost
        );
    }

    /// Display a best-swap quote
    pub fn display_quote(quote: &QuoteResult, swap_type: SwapType) {
        if !quote.has_swaps {
            println!("{}", "❌ No route found for this token pair".red().bold());
            return;
        }

        let (label, token) = match swap_type {
            SwapType::SwapExactIn => ("You receive", &quote.token_out),
            SwapType::SwapExactOut => ("You pay", &quote.token_in),
        };

        println!("\n{}", "🏆 Best Route Found".bold().green());
        println!(
            "  {}: {} {}",
            label,
            format_units(&quote.return_amount, quote.return_decimals).bold(),
            style(token.to_string()).dim()
        );
        println!(
            "  With fees: {}",
            format_units(
                &quote.result.return_amount_considering_fees,
                quote.return_decimals
            )
        );
        match quote.market_price() {
            Some(price) => println!("  Market Price: {}", price.normalize()),
            None => println!("  Market Price: {}", quote.market_sp_normalised),
        }
        println!("  Hops: {}", quote.result.swaps.len());
        for swap in &quote.result.swaps {
            println!(
                "    {} {} → {} via {}",
                style("•").cyan(),
                swap.asset_in_index,
                swap.asset_out_index,
                style(&swap.pool_id).dim()
            );
        }
        println!();
    }

    /// Create a progress bar for operations
    pub fn create_progress_bar(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(spinner.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}

fn colorize_pool_type(pool_type: &str) -> ColoredString {
    match pool_type {
        "Weighted" => pool_type.blue(),
        "Stable" | "MetaStable" | "ComposableStable" => pool_type.green(),
        "LiquidityBootstrapping" => pool_type.yellow(),
        _ => pool_type.white(),
    }
}
