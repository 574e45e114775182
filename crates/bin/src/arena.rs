//! Arena - headless game field simulation

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Blob Arena v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (path may be overridden by the first argument)
    let path = std::env::args().nth(1).unwrap_or_else(|| "arena.toml".to_string());
    let config = field::Config::load(&path)?;
    info!("Loaded configuration from {}", path);
    info!("  Border: {}x{}", config.field.border.width, config.field.border.height);
    info!("  Safety distance: {}", config.field.placement.safety_distance);
    info!("  Bots: {}", config.sim.bots);

    let game_field = Arc::new(field::GameField::new(config.field)?);
    let report = field::sim::run(game_field, config.sim).await?;

    info!(
        "Spawned {} food, {} bushes, {} cells; {} saturated spawns",
        report.food_spawned, report.bushes_spawned, report.cells_spawned, report.saturations
    );

    Ok(())
}
