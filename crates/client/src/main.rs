//! Critter world binary.
//!
//! ```bash
//! # Menagerie plan, one frame per second, forever
//! cargo run -p critter-client
//!
//! # Fast replayable run from a map file
//! CRITTERS_MAP=maps/box.ron CRITTERS_SEED=7 CRITTERS_TICK_MS=100 CRITTERS_TURNS=200 \
//!     cargo run -p critter-client
//! ```
use std::io;

use anyhow::Result;
use critter_client::{ClientConfig, Simulation, build_world, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting critters");
    tracing::info!("Tick: {:?}", config.tick);
    tracing::info!("Turn limit: {:?}", config.max_turns);

    let world = build_world(&config)?;
    let mut simulation = Simulation::new(world, io::stdout(), &config);
    let summary = simulation.run(config.tick).await?;

    tracing::info!(
        turns = summary.turns,
        moves = summary.moves,
        rejected = summary.rejected,
        reason = ?summary.reason,
        "simulation finished"
    );
    Ok(())
}
