use crate::core::{
    error::SwapResult, Address, Config, PoolInfo, PoolSnapshot, SwapError, SwapInfo,
    SwapOptions, SwapType,
};
use crate::engine::{RoutingEngine, SwapCostCalculator};
use log::{debug, info, warn};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct FetchPoolsResponse {
    success: bool,
    #[serde(default)]
    pools: Vec<PoolInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CostRequest<'a> {
    token_address: &'a str,
    decimals: u8,
    gas_price: String,
    swap_gas: String,
}

#[derive(Debug, Deserialize)]
struct CostResponse {
    #[serde(with = "crate::utils::serde_biguint")]
    cost: BigUint,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PriceRequest<'a> {
    token_address: &'a str,
    price: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwapsRequest<'a> {
    token_in: &'a str,
    token_out: &'a str,
    swap_type: SwapType,
    amount: String,
    options: &'a SwapOptions,
}

/// Routing engine hosted behind a JSON/HTTP service.
///
/// The pool snapshot is mirrored locally after each successful fetch so
/// `get_pools` stays synchronous.
pub struct HttpRoutingEngine {
    api_url: String,
    client: reqwest::Client,
    pools: RwLock<Arc<PoolSnapshot>>,
}

impl HttpRoutingEngine {
    pub fn new(api_url: &str, timeout_secs: u64) -> SwapResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self::with_client(api_url, client))
    }

    pub fn from_config(config: &Config) -> SwapResult<Self> {
        Self::new(&config.sor_api_url, config.timeout_secs)
    }

    pub fn with_client(api_url: &str, client: reqwest::Client) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
            pools: RwLock::new(PoolSnapshot::empty()),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn check(response: reqwest::Response) -> SwapResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SwapError::EngineRejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> SwapResult<reqwest::Response> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check(response).await
    }

    fn replace_pools(&self, snapshot: PoolSnapshot) {
        let snapshot = Arc::new(snapshot);
        match self.pools.write() {
            Ok(mut pools) => *pools = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}

#[async_trait::async_trait]
impl SwapCostCalculator for HttpRoutingEngine {
    async fn set_native_asset_price_in_token(
        &self,
        token_address: &Address,
        price: &str,
    ) -> SwapResult<()> {
        debug!("Setting native asset price for {} to {}", token_address, price);

        let request = PriceRequest {
            token_address: token_address.as_str(),
            price,
        };
        self.post("price", &request).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RoutingEngine for HttpRoutingEngine {
    async fn fetch_pools(&self) -> SwapResult<bool> {
        let response = self.client.get(self.url("pools")).send().await?;
        let response = Self::check(response).await?;
        let body: FetchPoolsResponse = response.json().await?;

        if body.success {
            info!("Fetched {} pools from {}", body.pools.len(), self.api_url);
            self.replace_pools(PoolSnapshot::new(body.pools));
        } else {
            warn!("Routing service at {} reported an unsuccessful pool fetch", self.api_url);
        }

        Ok(body.success)
    }

    fn get_pools(&self) -> Arc<PoolSnapshot> {
        match self.pools.read() {
            Ok(pools) => pools.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn get_cost_of_swap_in_token(
        &self,
        token_address: &Address,
        decimals: u8,
        gas_price: &BigUint,
        swap_gas: &BigUint,
    ) -> SwapResult<BigUint> {
        let request = CostRequest {
            token_address: token_address.as_str(),
            decimals,
            gas_price: gas_price.to_string(),
            swap_gas: swap_gas.to_string(),
        };
        let body: CostResponse = self.post("cost", &request).await?.json().await?;
        Ok(body.cost)
    }

    fn swap_cost_calculator(&self) -> &dyn SwapCostCalculator {
        self
    }

    async fn get_swaps(
        &self,
        token_in: &str,
        token_out: &str,
        swap_type: SwapType,
        amount: &BigUint,
        options: &SwapOptions,
    ) -> SwapResult<SwapInfo> {
        let request = SwapsRequest {
            token_in,
            token_out,
            swap_type,
            amount: amount.to_string(),
            options,
        };
        let info: SwapInfo = self.post("swaps", &request).await?.json().await?;
        Ok(info)
    }
}
