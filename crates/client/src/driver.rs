//! Fixed-cadence driver: draw the world, resolve a turn, wait, repeat.
use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use critter_content::{MapLoader, MapSpec, plan};
use critter_core::{PcgRng, RandomSource, TurnReport, World};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::ClientConfig;

/// Why [`Simulation::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    TurnLimit,
    Interrupted,
}

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub turns: u64,
    pub moves: u64,
    pub rejected: u64,
    pub reason: StopReason,
}

/// Builds the world described by `config`: a RON map file if one is set,
/// otherwise the configured built-in plan.
pub fn build_world(config: &ClientConfig) -> Result<World<PcgRng>> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let spec = match &config.map_path {
        Some(path) => MapLoader::load(path)?,
        None => MapSpec::from_plan(plan(config.plan)),
    };

    let world = spec.build_world(PcgRng::new(seed))?;
    info!(
        seed,
        plan = %config.plan,
        map = ?config.map_path,
        width = world.width(),
        height = world.height(),
        critters = world.actable_count(),
        "world ready"
    );
    Ok(world)
}

/// Owns the world and the output it is drawn to.
pub struct Simulation<R = PcgRng, W = io::Stdout> {
    world: World<R>,
    out: W,
    clear_screen: bool,
    max_turns: Option<u64>,
}

impl<R: RandomSource, W: Write> Simulation<R, W> {
    pub fn new(world: World<R>, out: W, config: &ClientConfig) -> Self {
        Self {
            world,
            out,
            clear_screen: config.clear_screen,
            max_turns: config.max_turns,
        }
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn into_parts(self) -> (World<R>, W) {
        (self.world, self.out)
    }

    /// Draws the current grid.
    pub fn frame(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "{}", self.world)?;
        self.out.flush()
    }

    /// Resolves one turn.
    pub fn step(&mut self) -> TurnReport {
        self.world.turn()
    }

    /// One tick of the driver: draw first, then advance.
    pub fn tick(&mut self) -> Result<TurnReport> {
        self.frame().context("Failed to draw frame")?;
        Ok(self.step())
    }

    fn limit_reached(&self) -> bool {
        self.max_turns
            .is_some_and(|limit| self.world.turns() >= limit)
    }

    /// Ticks every `period` until the turn limit is reached or Ctrl-C is
    /// pressed. A turn in progress always completes first.
    pub async fn run(&mut self, period: Duration) -> Result<RunSummary> {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut moves = 0;
        let mut rejected = 0;
        let reason = loop {
            if self.limit_reached() {
                break StopReason::TurnLimit;
            }

            tokio::select! {
                _ = &mut ctrl_c => {
                    info!(turns = self.world.turns(), "interrupted");
                    break StopReason::Interrupted;
                }
                _ = interval.tick() => {
                    let report = self.tick()?;
                    moves += report.moved as u64;
                    rejected += report.rejected as u64;
                    debug!(turn = report.turn, moved = report.moved, "tick");
                }
            }
        };

        // Show where things ended up.
        self.frame().context("Failed to draw final frame")?;

        Ok(RunSummary {
            turns: self.world.turns(),
            moves,
            rejected,
            reason,
        })
    }
}
