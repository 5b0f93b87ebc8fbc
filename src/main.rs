use clap::Parser;
use sor_manager::cli::{commands, Cli, Commands};
use sor_manager::core::{Config, SwapError};

#[tokio::main]
async fn main() -> Result<(), SwapError> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Pools(args) => commands::pools::execute(args, &config).await?,
        Commands::Cost(args) => commands::cost::execute(args, &config).await?,
        Commands::Quote(args) => commands::quote::execute(args, &config).await?,
    }

    Ok(())
}
