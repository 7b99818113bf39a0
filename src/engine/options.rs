//! This module defines configuration options for the simulation engine.
//!
//! It provides the `EngineOptions` struct, which lets callers override the coupling constant
//! for a run and control the decimal precision of the display copy of the solved angles.

/// Configuration parameters for a simulation run.
///
/// Options cover per-run knobs that are independent of the loaded
/// [`Parameters`](crate::params::Parameters) set; everything not overridden here falls back to
/// the parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// An override for the Coulomb coupling constant, in N·m²/C².
    ///
    /// When `None`, the engine uses the `coulomb_constant` of its parameter set. Supplying a
    /// value here allows, for example, running with the CODATA 8.9875e9 instead of the
    /// textbook 9.0e9 without editing the parameter file.
    pub coulomb_constant: Option<f64>,
    /// Decimal places for the rounded display copy of the solved angles.
    ///
    /// Only the display copy in the result is rounded; the force decomposition always uses the
    /// full-precision angles.
    pub angle_decimals: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            coulomb_constant: None,
            angle_decimals: 2,
        }
    }
}
