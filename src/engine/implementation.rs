//! This module implements the `SimulationEngine` for computing the force on q3.
//!
//! The engine orchestrates the full pipeline: it solves the triangle's interior angles,
//! converts the entered charges to coulombs through the parameter unit table, computes the two
//! pairwise Coulomb magnitudes, decomposes them against their respective local angles, applies
//! the per-pair sign policy, and superposes the corrected components into a resultant with a
//! normalized direction. Each call to [`SimulationEngine::run`] is a pure function of its
//! inputs with no shared mutable state, so invocations may run independently in parallel when
//! embedded in a concurrent host.

use super::options::EngineOptions;
use crate::{
    error::TriqError,
    forces::{
        coulomb,
        signs::{self, ChargePair},
    },
    geometry::{layout, layout::SceneLayout, triangle::TriangleSides},
    params::Parameters,
    types::{ChargeView, ForceVector, SimulationResult},
};

/// The main engine for triangle point-charge force simulations.
///
/// This struct holds a reference to the simulation parameters and per-run options, providing
/// methods to compute the force on q3 and to lay out the scene for rendering. It carries no
/// state between runs.
pub struct SimulationEngine<'p> {
    /// Reference to the parameters used in calculations.
    parameters: &'p Parameters,
    /// Configuration options for the run, such as the coupling-constant override.
    options: EngineOptions,
}

impl<'p> SimulationEngine<'p> {
    /// Creates a new `SimulationEngine` with default options.
    ///
    /// # Arguments
    ///
    /// * `parameters` - A reference to the `Parameters` containing the coupling constant, unit
    ///   table, and viewport geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::{SimulationEngine, get_default_parameters};
    ///
    /// let params = get_default_parameters();
    /// let engine = SimulationEngine::new(params);
    /// ```
    pub fn new(parameters: &'p Parameters) -> Self {
        Self {
            parameters,
            options: EngineOptions::default(),
        }
    }

    /// Configures the engine with custom options.
    ///
    /// This method consumes the engine and returns a new instance with the updated options.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::{EngineOptions, SimulationEngine, get_default_parameters};
    ///
    /// let params = get_default_parameters();
    /// let options = EngineOptions {
    ///     coulomb_constant: Some(8.9875e9),
    ///     ..Default::default()
    /// };
    ///
    /// let engine = SimulationEngine::new(params).with_options(options);
    /// ```
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs a complete simulation, returning the force on q3.
    ///
    /// The charges are ordered q1, q2, q3. The q1–q3 force acts over side `a` and is decomposed
    /// against the angle at q1; the q2–q3 force acts over side `c` and is decomposed against
    /// the angle at q2. Both decompositions use the full-precision angles.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::TriangleInvalid`] when the sides cannot form a triangle (fatal for
    /// the run; no partial result is produced) and [`TriqError::InvalidUnit`] when a charge's
    /// unit tag has no factor in the parameter set.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::{Charge, Sign, SimulationEngine, TriangleSides, UnitTag, get_default_parameters};
    ///
    /// let params = get_default_parameters();
    /// let engine = SimulationEngine::new(params);
    ///
    /// // Equilateral triangle, three equal positive 1 µC charges: the pairwise
    /// // forces mirror each other and the resultant points straight up.
    /// let q = Charge::new(1.0, UnitTag::Micro, Sign::Positive);
    /// let result = engine
    ///     .run(&[q, q, q], TriangleSides::new(1.0, 1.0, 1.0))
    ///     .unwrap();
    ///
    /// assert!((result.force_from_q1.magnitude - 9.0e-3).abs() < 1e-12);
    /// assert!((result.resultant_angle_deg - 90.0).abs() < 1e-9);
    /// ```
    pub fn run<C: ChargeView>(
        &self,
        charges: &[C; 3],
        sides: TriangleSides,
    ) -> Result<SimulationResult, TriqError> {
        let angles = sides.solve_angles()?;
        let canonical = self.fetch_canonical_charges(charges)?;
        let k = self
            .options
            .coulomb_constant
            .unwrap_or(self.parameters.coulomb_constant);

        let f13 = coulomb::magnitude(canonical[0], canonical[2], sides.a, k)?;
        let f23 = coulomb::magnitude(canonical[1], canonical[2], sides.c, k)?;

        let at_q1 = angles.at_q1.to_radians();
        let at_q2 = angles.at_q2.to_radians();

        let (sx1, sy1) =
            signs::component_mask(ChargePair::Q1Q3, charges[0].sign(), charges[2].sign());
        let (sx2, sy2) =
            signs::component_mask(ChargePair::Q2Q3, charges[1].sign(), charges[2].sign());

        let force_from_q1 =
            ForceVector::from_components(sx1 * f13 * at_q1.cos(), sy1 * f13 * at_q1.sin());
        let force_from_q2 =
            ForceVector::from_components(sx2 * f23 * at_q2.cos(), sy2 * f23 * at_q2.sin());

        let resultant = ForceVector::from_components(
            force_from_q1.x + force_from_q2.x,
            force_from_q1.y + force_from_q2.y,
        );

        Ok(SimulationResult {
            force_from_q1,
            force_from_q2,
            resultant,
            resultant_angle_deg: direction_degrees(resultant.x, resultant.y),
            angles,
            display_angles: angles.rounded(self.options.angle_decimals),
        })
    }

    /// Lays out the triangle and force arrows for rendering, using the engine's viewport
    /// parameters and the charges' polarities.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::TriangleInvalid`] when the sides cannot form a triangle.
    pub fn layout<C: ChargeView>(
        &self,
        charges: &[C; 3],
        sides: TriangleSides,
    ) -> Result<SceneLayout, TriqError> {
        layout::scene_layout(
            &sides,
            [charges[0].sign(), charges[1].sign(), charges[2].sign()],
            &self.parameters.viewport,
        )
    }

    /// Converts the three entered charges to coulombs through the parameter unit table.
    fn fetch_canonical_charges<C: ChargeView>(
        &self,
        charges: &[C; 3],
    ) -> Result<[f64; 3], TriqError> {
        Ok([
            self.parameters.to_canonical(charges[0].magnitude(), charges[0].unit())?,
            self.parameters.to_canonical(charges[1].magnitude(), charges[1].unit())?,
            self.parameters.to_canonical(charges[2].magnitude(), charges[2].unit())?,
        ])
    }
}

/// Converts a planar vector to a direction in degrees, normalized into `[0, 360)`.
///
/// Uses the two-argument arctangent, so a zero x-component resolves to 90° or 270° by the sign
/// of y instead of dividing by zero. A zero vector has no direction and reports 0.
fn direction_degrees(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let degrees = y.atan2(x).to_degrees();
    let normalized = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };

    // A negative angle smaller than the epsilon at 360 rounds onto the upper
    // boundary; fold it back to keep the [0, 360) contract.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
