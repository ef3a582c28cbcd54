//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use critter_content::PlanId;

/// Runtime settings for the tick driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Delay between two frames.
    pub tick: Duration,
    /// Stop after this many turns; run until interrupted when `None`.
    pub max_turns: Option<u64>,
    /// Seed for the world's random source; drawn from entropy when `None`.
    pub seed: Option<u64>,
    /// RON map file to load instead of a built-in plan.
    pub map_path: Option<PathBuf>,
    /// Built-in plan used when no map file is given.
    pub plan: PlanId,
    /// Clear the terminal before drawing each frame.
    pub clear_screen: bool,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Session identifier used to name the log directory.
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub const DEFAULT_TICK_MS: u64 = 1000;
    pub const MIN_TICK_MS: u64 = 10;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CRITTERS_TICK_MS` - Frame period in milliseconds (default: 1000, min: 10)
    /// - `CRITTERS_TURNS` - Number of turns before exiting (default: unlimited)
    /// - `CRITTERS_SEED` - Random seed (default: random)
    /// - `CRITTERS_MAP` - Path to a RON map file
    /// - `CRITTERS_PLAN` - Built-in plan name: valley, menagerie, corridor (default: menagerie)
    /// - `CRITTERS_CLEAR` - Clear the screen between frames (default: true)
    /// - `CRITTERS_LOG_DIR` - Log directory override
    /// - `CRITTERS_SESSION` - Session id for log files
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(&lookup, "CRITTERS_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(Self::MIN_TICK_MS));
        }
        config.max_turns = parse(&lookup, "CRITTERS_TURNS");
        config.seed = parse(&lookup, "CRITTERS_SEED");
        config.map_path = lookup("CRITTERS_MAP").map(PathBuf::from);
        if let Some(plan) = parse::<PlanId>(&lookup, "CRITTERS_PLAN") {
            config.plan = plan;
        }
        if let Some(clear) = parse::<bool>(&lookup, "CRITTERS_CLEAR") {
            config.clear_screen = clear;
        }
        config.log_dir = lookup("CRITTERS_LOG_DIR").map(PathBuf::from);
        config.session_id = lookup("CRITTERS_SESSION");

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(Self::DEFAULT_TICK_MS),
            max_turns: None,
            seed: None,
            map_path: None,
            plan: PlanId::default(),
            clear_screen: true,
            log_dir: None,
            session_id: None,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
