use crate::core::{constants::*, error::SwapResult, Address, ChainAddresses, SwapError};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sor_api_url: String,
    pub timeout_secs: u64,
    pub gas_price_wei: String,
    pub max_pools: usize,
    pub swap_cost: u64,
    pub native_asset_address: String,
    pub wrapped_native_asset_address: String,
}

impl Config {
    pub fn from_env() -> SwapResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            sor_api_url: env::var("SOR_API_URL").unwrap_or(defaults.sor_api_url),
            timeout_secs: env::var("TIMEOUT_SECS")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_HTTP_TIMEOUT),
            gas_price_wei: env::var("GAS_PRICE").unwrap_or(defaults.gas_price_wei),
            max_pools: env::var("MAX_POOLS")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_MAX_POOLS),
            swap_cost: env::var("SWAP_COST")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_SWAP_COST),
            native_asset_address: env::var("NATIVE_ASSET_ADDRESS")
                .unwrap_or(defaults.native_asset_address),
            wrapped_native_asset_address: env::var("WRAPPED_NATIVE_ASSET_ADDRESS")
                .unwrap_or(defaults.wrapped_native_asset_address),
        })
    }

    pub fn validate(&self) -> SwapResult<()> {
        if self.max_pools == 0 {
            return Err(SwapError::ConfigError(
                "Max pools must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(SwapError::ConfigError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.sor_api_url.is_empty() {
            return Err(SwapError::ConfigError(
                "SOR API URL must not be empty".to_string(),
            ));
        }

        self.gas_price()?;
        self.chain()?;

        Ok(())
    }

    /// Gas price in wei.
    pub fn gas_price(&self) -> SwapResult<BigUint> {
        self.gas_price_wei.parse::<BigUint>().map_err(|e| {
            SwapError::ConfigError(format!("Invalid gas price {}: {}", self.gas_price_wei, e))
        })
    }

    pub fn swap_gas(&self) -> BigUint {
        BigUint::from(self.swap_cost)
    }

    pub fn chain(&self) -> SwapResult<ChainAddresses> {
        let parse = |name: &str, value: &str| {
            value
                .parse::<Address>()
                .map_err(|_| SwapError::ConfigError(format!("Invalid {}: {}", name, value)))
        };

        Ok(ChainAddresses {
            native_asset: parse("native asset address", &self.native_asset_address)?,
            wrapped_native_asset: parse(
                "wrapped native asset address",
                &self.wrapped_native_asset_address,
            )?,
            zero: ZERO.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sor_api_url: DEFAULT_SOR_API_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT,
            gas_price_wei: DEFAULT_GAS_PRICE_WEI.to_string(),
            max_pools: DEFAULT_MAX_POOLS,
            swap_cost: DEFAULT_SWAP_COST,
            native_asset_address: NATIVE_ASSET_ADDRESS.to_string(),
            wrapped_native_asset_address: WRAPPED_NATIVE_ASSET_ADDRESS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.swap_gas(), BigUint::from(100_000u64));
        assert_eq!(config.chain().unwrap(), ChainAddresses::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            max_pools: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SwapError::ConfigError(_))));

        let config = Config {
            gas_price_wei: "-1".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            native_asset_address: "0xeth".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
