//! Static world content and loaders.
//!
//! This crate houses the built-in plans a world can start from and, behind
//! the `loaders` feature, a loader for RON map files. Content is only used
//! to construct a [`critter_core::World`]; the engine never depends on it.

pub mod plans;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use plans::{PlanId, plan};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, MapLoader, MapSpec};
