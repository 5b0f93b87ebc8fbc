pub mod cost;
pub mod pools;
pub mod quote;

use crate::cli::display::PoolDisplay;
use crate::core::{Config, SwapResult};
use crate::engine::HttpRoutingEngine;
use crate::manager::QuoteOrchestrator;
use crate::reporting::LogReporter;
use std::sync::Arc;

/// Build an orchestrator from the environment and refresh its pools.
pub async fn connect(config: &Config) -> SwapResult<QuoteOrchestrator> {
    config.validate()?;

    let engine = Arc::new(HttpRoutingEngine::from_config(config)?);
    let manager = QuoteOrchestrator::from_config(engine, Arc::new(LogReporter), config)?;

    let pb = PoolDisplay::create_progress_bar("Fetching pools...");
    manager.refresh_pools().await;
    pb.finish_and_clear();

    Ok(manager)
}
