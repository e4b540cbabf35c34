//! Simulation driver and program loading.
//!
//! Provides the top-level [`Simulator`] that sequences the engine stages,
//! and the loader that copies a flat program image into memory.

/// Program image loading.
pub mod loader;
/// The top-level instruction driver.
pub mod simulator;

pub use simulator::{Simulator, State};
