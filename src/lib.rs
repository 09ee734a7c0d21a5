pub mod api;
pub mod archetype;
pub mod chemistry;
pub mod config;
pub mod consts;
pub mod error;
pub mod loader;
pub mod model;
pub mod percentile;
pub mod rates;
pub mod scoring;
pub mod scouting;
pub mod similarity;
pub mod trend;
mod util;
// cmd and reports are binary modules (declared in main.rs).

pub use error::{StatsError, StatsResult};
