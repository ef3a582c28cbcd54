//! Terminal driver for critter worlds.
//!
//! The binary reads [`ClientConfig`] from the environment, builds a world,
//! and hands it to a [`Simulation`] that draws and advances it on a fixed
//! cadence. Everything here sits outside the engine: the world itself never
//! knows about clocks or terminals.
pub mod config;
pub mod driver;
pub mod logging;

pub use config::ClientConfig;
pub use driver::{RunSummary, Simulation, StopReason, build_world};
