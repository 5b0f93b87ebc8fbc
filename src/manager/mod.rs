pub mod fetch_state;


use crate::core::{
    constants::*, error::SwapResult, Address, ChainAddresses, Config, FetchStatus, PoolSnapshot,
    QuoteResult, SwapError, SwapInfo, SwapOptions, SwapType,
};
use crate::engine::RoutingEngine;
use crate::policy::PoolFilterRules;
use crate::reporting::{ErrorReport, ErrorReporter, Severity};
use chrono::Utc;
use log::{debug, info, warn};
use num_bigint::BigUint;
use std::sync::{Arc, RwLock};
use std::time::Instant;

pub use fetch_state::{FetchStateTracker, RefreshGuard};

/// Coordinates pool refreshes and swap quotes against a routing engine.
///
/// All operations take `&self`; share the orchestrator through an `Arc`.
/// Only `refresh_pools` is serialized, and only by dropping overlapping
/// calls. Cost and quote requests run fully concurrently.
pub struct QuoteOrchestrator {
    engine: Arc<dyn RoutingEngine>,
    reporter: Arc<dyn ErrorReporter>,
    gas_price: BigUint,
    max_pools: usize,
    swap_gas: BigUint,
    chain: ChainAddresses,
    filter_rules: PoolFilterRules,
    fetch_state: FetchStateTracker,
    selected_pools: RwLock<Arc<PoolSnapshot>>,
}

impl QuoteOrchestrator {
    pub fn new(
        engine: Arc<dyn RoutingEngine>,
        reporter: Arc<dyn ErrorReporter>,
        gas_price: BigUint,
        max_pools: usize,
    ) -> SwapResult<Self> {
        if max_pools == 0 {
            return Err(SwapError::ConfigError(
                "Max pools must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            engine,
            reporter,
            gas_price,
            max_pools,
            swap_gas: BigUint::from(DEFAULT_SWAP_COST),
            chain: ChainAddresses::default(),
            filter_rules: PoolFilterRules::telos_defaults(),
            fetch_state: FetchStateTracker::new(),
            selected_pools: RwLock::new(PoolSnapshot::empty()),
        })
    }

    pub fn from_config(
        engine: Arc<dyn RoutingEngine>,
        reporter: Arc<dyn ErrorReporter>,
        config: &Config,
    ) -> SwapResult<Self> {
        config.validate()?;

        Ok(Self::new(engine, reporter, config.gas_price()?, config.max_pools)?
            .with_swap_gas(config.swap_gas())
            .with_chain(config.chain()?))
    }

    pub fn with_swap_gas(mut self, swap_gas: BigUint) -> Self {
        self.swap_gas = swap_gas;
        self
    }

    pub fn with_chain(mut self, chain: ChainAddresses) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_filter_rules(mut self, rules: PoolFilterRules) -> Self {
        self.filter_rules = rules;
        self
    }

    pub fn gas_price(&self) -> &BigUint {
        &self.gas_price
    }

    pub fn max_pools(&self) -> usize {
        self.max_pools
    }

    pub fn swap_gas(&self) -> &BigUint {
        &self.swap_gas
    }

    pub fn chain(&self) -> &ChainAddresses {
        &self.chain
    }

    pub fn filter_rules(&self) -> &PoolFilterRules {
        &self.filter_rules
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch_state.status()
    }

    pub fn is_refreshing(&self) -> bool {
        self.fetch_state.is_pending()
    }

    /// Pools the engine held after the most recent refresh attempt.
    pub fn selected_pools(&self) -> Arc<PoolSnapshot> {
        match self.selected_pools.read() {
            Ok(pools) => pools.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Refreshes the engine's pool data.
    ///
    /// Returns immediately when a refresh is already running. Failures never
    /// surface here: they are recorded in the fetch status and sent to the
    /// reporter at fatal level.
    pub async fn refresh_pools(&self) {
        let Some(_guard) = self.fetch_state.mark_started() else {
            debug!("[SorManager] fetchPools already in progress, skipping");
            return;
        };

        let started = Instant::now();
        match self.engine.fetch_pools().await {
            Ok(success) => {
                self.fetch_state.mark_completed(success);
                if !success {
                    self.reporter.capture(ErrorReport::new(
                        "SOR Fetch pools failed",
                        Severity::Fatal,
                    ));
                }
            }
            Err(e) => {
                warn!("[SorManager] fetchPools issue: {}", e);
                self.fetch_state.mark_completed(false);
                self.reporter.capture(
                    ErrorReport::new(e.to_string(), Severity::Fatal)
                        .with_prefix(FETCH_POOLS_MSG_PREFIX),
                );
            }
        }

        info!(
            "[SorManager] fetchPools result: {} ({:?})",
            self.fetch_state.status().success,
            started.elapsed()
        );

        let pools = self.engine.get_pools();
        match self.selected_pools.write() {
            Ok(mut selected) => *selected = pools,
            Err(poisoned) => *poisoned.into_inner() = pools,
        }
    }

    /// Cost of a swap's gas expressed in `token_address`'s smallest unit.
    ///
    /// A `manual_cost` is written to the engine's shared price table before
    /// the query and stays in effect for every later caller.
    pub async fn estimate_output_token_cost(
        &self,
        token_address: &Address,
        token_decimals: u8,
        manual_cost: Option<&str>,
    ) -> SwapResult<BigUint> {
        let token = if *token_address == self.chain.native_asset {
            &self.chain.wrapped_native_asset
        } else {
            token_address
        };

        if let Some(price) = manual_cost.filter(|price| !price.is_empty()) {
            self.engine
                .swap_cost_calculator()
                .set_native_asset_price_in_token(token, price)
                .await?;
        }

        let cost = self
            .engine
            .get_cost_of_swap_in_token(token, token_decimals, &self.gas_price, &self.swap_gas)
            .await?;

        info!("[SorManager] Cost for token {}: {}", token, cost);
        Ok(cost)
    }

    /// Asks the engine for the best route and normalizes its answer.
    ///
    /// Engine errors are returned to the caller untouched.
    pub async fn get_best_swap(
        &self,
        token_in: &Address,
        token_out: &Address,
        token_in_decimals: u8,
        token_out_decimals: u8,
        swap_type: SwapType,
        amount_scaled: &BigUint,
    ) -> SwapResult<QuoteResult> {
        let sor_token_in = self.engine_native(token_in);
        let sor_token_out = self.engine_native(token_out);
        let options = self.swap_options(sor_token_in, sor_token_out);

        debug!(
            "[SorManager] getSwaps {} -> {} ({}, amount {}, filter {}, gas price {}, swap gas {})",
            sor_token_in,
            sor_token_out,
            swap_type,
            amount_scaled,
            options.pool_type_filter,
            options.gas_price,
            options.swap_gas
        );

        let info = self
            .engine
            .get_swaps(
                &sor_token_in.to_lowercase(),
                &sor_token_out.to_lowercase(),
                swap_type,
                amount_scaled,
                &options,
            )
            .await?;

        info!("[SorManager] {}: return amount", info.return_amount);
        info!(
            "[SorManager] {}: return amount with fees",
            info.return_amount_considering_fees
        );

        Ok(normalize_swap_info(
            token_in,
            token_out,
            token_in_decimals,
            token_out_decimals,
            swap_type,
            info,
        ))
    }

    /// True once a refresh has completed successfully.
    pub fn has_pool_data(&self) -> bool {
        let status = self.fetch_state.status();
        if !status.finished_fetch {
            debug!("[SorManager] Not finished fetching pools.");
            return false;
        }
        if !status.success {
            debug!("[SorManager] Error fetching pools - no liquidity sources.");
            return false;
        }
        true
    }

    /// Maps the UI's native sentinel to the engine's zero-address marker.
    fn engine_native<'a>(&'a self, token: &'a Address) -> &'a Address {
        if *token == self.chain.native_asset {
            &self.chain.zero
        } else {
            token
        }
    }

    fn swap_options(&self, token_in: &Address, token_out: &Address) -> SwapOptions {
        SwapOptions {
            max_pools: self.max_pools,
            gas_price: self.gas_price.clone(),
            swap_gas: self.swap_gas.clone(),
            pool_type_filter: self.filter_rules.resolve(token_in, token_out),
            timestamp: u64::try_from(Utc::now().timestamp()).unwrap_or_default(),
            force_refresh: true,
        }
    }
}

/// Reshapes a raw routing result into the caller-facing quote.
pub fn normalize_swap_info(
    token_in: &Address,
    token_out: &Address,
    token_in_decimals: u8,
    token_out_decimals: u8,
    swap_type: SwapType,
    info: SwapInfo,
) -> QuoteResult {
    // The return amount is denominated in whichever side was not fixed.
    let return_decimals = match swap_type {
        SwapType::SwapExactIn => token_out_decimals,
        SwapType::SwapExactOut => token_in_decimals,
    };

    QuoteResult {
        token_in: token_in.clone(),
        token_out: token_out.clone(),
        return_decimals,
        has_swaps: !info.swaps.is_empty(),
        return_amount: info.return_amount.clone(),
        market_sp_normalised: info.market_sp.clone(),
        result: info,
    }
}
