use crate::core::types::Address;

// Chain address conventions
pub const NATIVE_ASSET_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
pub const WRAPPED_NATIVE_ASSET_ADDRESS: &str = "0xD102cE6A4dB07D247fcc28F366A623Df0938CA9E";
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Common token addresses
pub const WTLOS_ADDRESS: &str = WRAPPED_NATIVE_ASSET_ADDRESS;
pub const USDT_ADDRESS: &str = "0x975Ed13fa16857E83e7C493C7741D556eaaD4A3f";

lazy_static::lazy_static! {
    pub static ref NATIVE_ASSET: Address = Address::new_unchecked(NATIVE_ASSET_ADDRESS);
    pub static ref WRAPPED_NATIVE_ASSET: Address = Address::new_unchecked(WRAPPED_NATIVE_ASSET_ADDRESS);
    pub static ref ZERO: Address = Address::new_unchecked(ZERO_ADDRESS);
    pub static ref WTLOS: Address = Address::new_unchecked(WTLOS_ADDRESS);
    pub static ref USDT: Address = Address::new_unchecked(USDT_ADDRESS);
}

// Gas units charged per swap when pricing routes
pub const DEFAULT_SWAP_COST: u64 = 100_000;

// Router configuration
pub const DEFAULT_MAX_POOLS: usize = 4;
pub const DEFAULT_GAS_PRICE_WEI: u64 = 500_000_000_000; // 500 gwei
pub const DEFAULT_SOR_API_URL: &str = "http://localhost:8080";

// HTTP Configuration
pub const DEFAULT_HTTP_TIMEOUT: u64 = 30;

// Error reporting
pub const FETCH_POOLS_MSG_PREFIX: &str = "SORFetchPools";
