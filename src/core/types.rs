use crate::core::{constants::*, SwapError};
use num_bigint::BigUint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// EVM account address in its `0x`-prefixed hex form.
///
/// The casing supplied by the caller is preserved and comparisons are exact,
/// so a checksummed address and its lower-cased form are different values.
/// Use [`Address::to_lowercase`] for the form the routing engine expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Wraps a literal known to be well formed.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl FromStr for Address {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| SwapError::InvalidAddress(s.to_string()))?;

        if digits.len() != 40 {
            return Err(SwapError::InvalidAddress(s.to_string()));
        }
        hex::decode(digits).map_err(|_| SwapError::InvalidAddress(s.to_string()))?;

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Address {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Addresses with a special meaning on the target chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAddresses {
    /// Placeholder used by the UI for the native currency.
    pub native_asset: Address,
    /// ERC20 wrapper of the native currency; used for cost lookups.
    pub wrapped_native_asset: Address,
    /// The routing engine's own marker for the native currency.
    pub zero: Address,
}

impl Default for ChainAddresses {
    fn default() -> Self {
        Self {
            native_asset: NATIVE_ASSET.clone(),
            wrapped_native_asset: WRAPPED_NATIVE_ASSET.clone(),
            zero: ZERO.clone(),
        }
    }
}

/// Outcome of the most recent pool refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchStatus {
    pub finished_fetch: bool,
    /// Only meaningful once `finished_fetch` is set.
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    SwapExactIn,
    SwapExactOut,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapType::SwapExactIn => write!(f, "ExactIn"),
            SwapType::SwapExactOut => write!(f, "ExactOut"),
        }
    }
}

/// Pool families the routing engine can restrict a search to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolFilter {
    #[default]
    All,
    Weighted,
    Stable,
    MetaStable,
    LiquidityBootstrapping,
    Investment,
    Element,
    AaveLinear,
    StablePhantom,
    ERC4626Linear,
    Gyro2,
    Gyro3,
    GyroE,
}

impl fmt::Display for PoolFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Options handed to the routing engine for a single quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOptions {
    pub max_pools: usize,
    #[serde(with = "crate::utils::serde_biguint")]
    pub gas_price: BigUint,
    #[serde(with = "crate::utils::serde_biguint")]
    pub swap_gas: BigUint,
    pub pool_type_filter: PoolFilter,
    pub timestamp: u64,
    pub force_refresh: bool,
}

/// One hop of a route as returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapLeg {
    pub pool_id: String,
    pub asset_in_index: usize,
    pub asset_out_index: usize,
    pub amount: String,
    #[serde(default)]
    pub user_data: String,
}

/// Raw routing result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    #[serde(default)]
    pub token_addresses: Vec<String>,
    pub swaps: Vec<SwapLeg>,
    #[serde(with = "crate::utils::serde_biguint")]
    pub swap_amount: BigUint,
    #[serde(with = "crate::utils::serde_biguint")]
    pub return_amount: BigUint,
    #[serde(with = "crate::utils::serde_biguint")]
    pub return_amount_considering_fees: BigUint,
    pub token_in: String,
    pub token_out: String,
    pub market_sp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub id: String,
    pub address: Address,
    pub pool_type: String,
    pub swap_fee: String,
    #[serde(default)]
    pub tokens_list: Vec<Address>,
    #[serde(default)]
    pub total_liquidity: Option<String>,
}

/// The engine's view of all known pools at one point in time.
///
/// Snapshots are never edited; a refresh produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pools: Vec<PoolInfo>,
}

impl PoolSnapshot {
    pub fn new(pools: Vec<PoolInfo>) -> Self {
        Self { pools }
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pools(&self) -> &[PoolInfo] {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PoolInfo> {
        self.pools.iter()
    }
}

/// Normalized best-swap answer handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    pub token_in: Address,
    pub token_out: Address,
    /// Decimals of the token `return_amount` is denominated in.
    pub return_decimals: u8,
    pub has_swaps: bool,
    #[serde(with = "crate::utils::serde_biguint")]
    pub return_amount: BigUint,
    pub market_sp_normalised: String,
    pub result: SwapInfo,
}

impl QuoteResult {
    /// Spot price as a decimal, if the engine reported a parseable one.
    pub fn market_price(&self) -> Option<Decimal> {
        Decimal::from_str(&self.market_sp_normalised)
            .or_else(|_| Decimal::from_scientific(&self.market_sp_normalised))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_address_parsing() {
        assert!(USDT_ADDRESS.parse::<Address>().is_ok());
        assert!(ZERO_ADDRESS.parse::<Address>().is_ok());

        assert!("975Ed13fa16857E83e7C493C7741D556eaaD4A3f".parse::<Address>().is_err());
        assert!("0x975Ed13fa16857E83e7C493C7741D556eaaD4A3".parse::<Address>().is_err());
        assert!("0xZZ5Ed13fa16857E83e7C493C7741D556eaaD4A3f".parse::<Address>().is_err());
    }

    #[test]
    fn test_address_keeps_casing() {
        let address: Address = USDT_ADDRESS.parse().unwrap();
        assert_eq!(address.as_str(), USDT_ADDRESS);
        assert_eq!(address.to_lowercase(), "0x975ed13fa16857e83e7c493c7741d556eaad4a3f");

        let lower: Address = address.to_lowercase().parse().unwrap();
        assert_ne!(address, lower);
    }

    #[test]
    fn test_address_deserialize_rejects_garbage() {
        let ok: Result<Address, _> = serde_json::from_str(&format!("\"{}\"", ZERO_ADDRESS));
        assert!(ok.is_ok());

        let bad: Result<Address, _> = serde_json::from_str("\"0x1234\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_fetch_status_default() {
        let status = FetchStatus::default();
        assert!(!status.finished_fetch);
        assert!(!status.success);
    }

    #[test]
    fn test_market_price() {
        let info = SwapInfo {
            token_addresses: vec![],
            swaps: vec![],
            swap_amount: BigUint::from(0u32),
            return_amount: BigUint::from(0u32),
            return_amount_considering_fees: BigUint::from(0u32),
            token_in: String::new(),
            token_out: String::new(),
            market_sp: "0.25".to_string(),
        };
        let mut quote = QuoteResult {
            token_in: ZERO.clone(),
            token_out: USDT.clone(),
            return_decimals: 6,
            has_swaps: false,
            return_amount: BigUint::from(0u32),
            market_sp_normalised: "0.25".to_string(),
            result: info,
        };
        assert_eq!(quote.market_price(), Some(dec("0.25")));

        quote.market_sp_normalised = "2.5e-3".to_string();
        assert_eq!(quote.market_price(), Some(dec("0.0025")));

        quote.market_sp_normalised = "NaN".to_string();
        assert_eq!(quote.market_price(), None);
    }
}
