//! This module contains the orchestration layer for running a complete force simulation.
//!
//! It includes the `SimulationEngine` implementation and `EngineOptions` for configuring a run,
//! tying together unit conversion, triangle solving, the Coulomb kernel, and the sign policy
//! into a single synchronous, stateless operation.

mod implementation;
mod options;

pub use implementation::SimulationEngine;
pub use options::EngineOptions;
