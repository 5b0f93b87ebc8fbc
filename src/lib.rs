pub mod cli;
pub mod core;
pub mod engine;
pub mod manager;
pub mod policy;
pub mod reporting;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    Address, Config, FetchStatus, PoolFilter, PoolSnapshot, QuoteResult, SwapError, SwapOptions,
    SwapResult, SwapType,
};
pub use engine::{HttpRoutingEngine, RoutingEngine, SwapCostCalculator};
pub use manager::{FetchStateTracker, QuoteOrchestrator};
pub use policy::{PoolFilterRule, PoolFilterRules};
pub use reporting::{ErrorReport, ErrorReporter, LogReporter, MemoryReporter, Severity};
