use crate::core::{Address, SwapType};
use crate::utils::parse_token_identifier;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod display;

#[derive(Parser)]
#[command(name = "sor-manager")]
#[command(about = "Pool refresh and swap quotes through a smart order router", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Refresh pool data and list the pools the router knows about
    Pools(PoolsArgs),

    /// Estimate the gas cost of a swap in units of a token
    Cost(CostArgs),

    /// Get the best swap route for a token pair
    Quote(QuoteArgs),
}

#[derive(Parser)]
pub struct PoolsArgs {
    /// Show detailed pool information
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Parser)]
pub struct CostArgs {
    /// Token address or symbol (TLOS, WTLOS, USDT)
    #[arg(value_parser = parse_token)]
    pub token: Address,

    /// Token decimals
    #[arg(default_value = "18")]
    pub decimals: u8,

    /// Native asset price in this token, pushed to the router before the query
    #[arg(long)]
    pub manual_cost: Option<String>,
}

#[derive(Parser)]
pub struct QuoteArgs {
    /// Input token address or symbol
    #[arg(value_parser = parse_token)]
    pub token_in: Address,

    /// Output token address or symbol
    #[arg(value_parser = parse_token)]
    pub token_out: Address,

    /// Amount in token units (input token unless --exact-out)
    pub amount: String,

    /// Input token decimals
    #[arg(long, default_value = "18")]
    pub in_decimals: u8,

    /// Output token decimals
    #[arg(long, default_value = "18")]
    pub out_decimals: u8,

    /// Treat the amount as the exact output wanted
    #[arg(long)]
    pub exact_out: bool,
}

impl QuoteArgs {
    pub fn swap_type(&self) -> SwapType {
        if self.exact_out {
            SwapType::SwapExactOut
        } else {
            SwapType::SwapExactIn
        }
    }

    /// Decimals of the token the amount argument is given in.
    pub fn amount_decimals(&self) -> u8 {
        match self.swap_type() {
            SwapType::SwapExactIn => self.in_decimals,
            SwapType::SwapExactOut => self.out_decimals,
        }
    }
}

fn parse_token(s: &str) -> Result<Address, String> {
    parse_token_identifier(s).ok_or_else(|| format!("Invalid token: {}", s))
}
