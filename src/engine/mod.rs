pub mod http_engine;

use crate::core::{Address, PoolSnapshot, SwapInfo, SwapOptions, SwapResult, SwapType};
use num_bigint::BigUint;
use std::sync::Arc;

pub use http_engine::HttpRoutingEngine;

/// Price table the engine consults when converting gas into token amounts.
///
/// Writes are global: a price set by one caller is seen by every later cost
/// query, and concurrent writers for the same token race with
/// last-write-wins semantics.
#[async_trait::async_trait]
pub trait SwapCostCalculator: Send + Sync {
    async fn set_native_asset_price_in_token(
        &self,
        token_address: &Address,
        price: &str,
    ) -> SwapResult<()>;
}

/// Smart order router consumed by the orchestrator.
///
/// The engine owns pool data. Path search and price-impact handling are
/// entirely its concern.
#[async_trait::async_trait]
pub trait RoutingEngine: Send + Sync {
    /// Refreshes pool data. `Ok(false)` is a soft failure, `Err` a hard one.
    async fn fetch_pools(&self) -> SwapResult<bool>;

    /// Pools currently held, after the last fetch attempt.
    fn get_pools(&self) -> Arc<PoolSnapshot>;

    async fn get_cost_of_swap_in_token(
        &self,
        token_address: &Address,
        decimals: u8,
        gas_price: &BigUint,
        swap_gas: &BigUint,
    ) -> SwapResult<BigUint>;

    fn swap_cost_calculator(&self) -> &dyn SwapCostCalculator;

    async fn get_swaps(
        &self,
        token_in: &str,
        token_out: &str,
        swap_type: SwapType,
        amount: &BigUint,
        options: &SwapOptions,
    ) -> SwapResult<SwapInfo>;
}
