//! Conway's Game of Life on a sparse grid anchored at the top-left corner.
//!
//! [`GridState`] holds the live cells, [`GenerationEngine`] computes each
//! generation's delta, and [`Simulation`] ties them to a fixed-interval
//! [`Scheduler`].

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod scheduler;
pub mod simulation;

pub use cell::Cell;
pub use config::Config;
pub use engine::{GenerationEngine, StepResult};
pub use error::{Error, Result};
pub use grid::{GridState, LiveSet};
pub use patterns::{Pattern, PATTERNS};
pub use scheduler::Scheduler;
pub use simulation::Simulation;
