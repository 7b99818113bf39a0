//! Electrostatic force computation for three point charges at the vertices of a triangle.
//!
//! Given three side lengths and three signed charges, the library solves the triangle's
//! interior angles from the law of cosines, converts the charges to coulombs, computes the two
//! pairwise Coulomb forces acting on q3, applies the attraction/repulsion sign convention per
//! pair, and superposes the corrected components into a resultant force with a direction in
//! `[0°, 360°)`. A viewport layout step produces the scaled, centered vertex positions and
//! force-arrow endpoints a renderer needs; presentation itself is left to the caller.
//!
//! ```
//! use triq::{Charge, Sign, SimulationEngine, TriangleSides, UnitTag, get_default_parameters};
//!
//! let engine = SimulationEngine::new(get_default_parameters());
//!
//! let charges = [
//!     Charge::new(2.0, UnitTag::Micro, Sign::Positive),
//!     Charge::new(3.0, UnitTag::Micro, Sign::Negative),
//!     Charge::new(1.0, UnitTag::Micro, Sign::Positive),
//! ];
//! let result = engine
//!     .run(&charges, TriangleSides::new(3.0, 4.0, 5.0))
//!     .unwrap();
//!
//! assert!(result.resultant.magnitude > 0.0);
//! assert!((0.0..360.0).contains(&result.resultant_angle_deg));
//! ```

pub mod engine;
pub mod error;
pub mod forces;
pub mod geometry;
pub mod params;
pub mod types;

pub use engine::{EngineOptions, SimulationEngine};
pub use error::TriqError;
pub use geometry::layout::SceneLayout;
pub use geometry::triangle::{TriangleAngles, TriangleSides};
pub use params::{Parameters, ViewportParams};
pub use types::{Charge, ChargeView, ForceVector, Sign, SimulationResult, UnitTag};

use std::sync::OnceLock;

static DEFAULT_PARAMETERS: OnceLock<Parameters> = OnceLock::new();

/// Returns the compiled-in default parameter set.
///
/// The defaults use the textbook Coulomb constant 9.0e9 N·m²/C², a unit table covering the
/// whole [`UnitTag`] enumeration, and a 600×400 viewport. The set is parsed once on first use
/// and cached for the lifetime of the process.
pub fn get_default_parameters() -> &'static Parameters {
    DEFAULT_PARAMETERS.get_or_init(|| {
        const DEFAULT_PARAMS_TOML: &str = include_str!("../resources/triq.data.toml");
        Parameters::load_from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded default parameters. This is a library bug.")
    })
}
