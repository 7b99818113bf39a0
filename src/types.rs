//! This module defines the core value types used in the triq library for representing charges
//! and simulation results.
//!
//! It includes the `ChargeView` trait for abstracting charge data access, the `Charge` struct
//! for concrete charge representation, and the `ForceVector` and `SimulationResult` structs for
//! storing the outcomes of a force computation. All of these are plain value objects constructed
//! fresh per engine invocation; nothing persists between runs.

use crate::geometry::triangle::TriangleAngles;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The algebraic sign of a point charge.
///
/// Sign and magnitude are independent fields of a [`Charge`]: users enter an absolute value and
/// pick a polarity separately, so the magnitude never carries an arithmetic sign. The serde
/// names mirror the `+`/`-` selector vocabulary of typical input forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// A positive charge.
    #[serde(rename = "+")]
    Positive,
    /// A negative charge.
    #[serde(rename = "-")]
    Negative,
}

impl Sign {
    /// Returns `true` when the two charges have the same polarity, i.e. the pair interaction is
    /// repulsive. Unlike signs attract.
    #[inline(always)]
    pub fn is_like(self, other: Sign) -> bool {
        self == other
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => write!(f, "+"),
            Sign::Negative => write!(f, "-"),
        }
    }
}

/// A tag identifying the unit a charge magnitude was entered in.
///
/// Each tag maps to a fixed power-of-ten multiplier relative to the coulomb; the mapping itself
/// lives in the `[units]` table of [`Parameters`](crate::params::Parameters) so that the lookup
/// is a total, data-driven table rather than a chain of conditionals. The serde/`FromStr` names
/// are the short selector values used by input forms: `mc`, `uc`, `nc`, `pc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitTag {
    /// Millicoulomb, 1e-3 C.
    #[serde(rename = "mc")]
    Milli,
    /// Microcoulomb, 1e-6 C.
    #[serde(rename = "uc")]
    Micro,
    /// Nanocoulomb, 1e-9 C.
    #[serde(rename = "nc")]
    Nano,
    /// Picocoulomb, 1e-12 C.
    #[serde(rename = "pc")]
    Pico,
}

impl UnitTag {
    /// All unit tags, in decreasing order of magnitude.
    pub const ALL: [UnitTag; 4] = [UnitTag::Milli, UnitTag::Micro, UnitTag::Nano, UnitTag::Pico];

    /// Returns the short tag name (`"mc"`, `"uc"`, `"nc"`, `"pc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            UnitTag::Milli => "mc",
            UnitTag::Micro => "uc",
            UnitTag::Nano => "nc",
            UnitTag::Pico => "pc",
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitTag {
    type Err = crate::error::TriqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mc" => Ok(UnitTag::Milli),
            "uc" => Ok(UnitTag::Micro),
            "nc" => Ok(UnitTag::Nano),
            "pc" => Ok(UnitTag::Pico),
            other => Err(crate::error::TriqError::InvalidUnit(other.to_string())),
        }
    }
}

/// A trait for viewing charge data without owning it.
///
/// This trait provides a common interface for accessing a charge's entered magnitude, unit tag,
/// and polarity, enabling the simulation engine to work with different charge representations.
/// By decoupling the engine from specific data structures, hosts can pass their own input-form
/// models directly without conversion overhead.
pub trait ChargeView {
    /// Returns the user-entered magnitude of the charge, as an absolute value in the unit named
    /// by [`unit`](ChargeView::unit).
    fn magnitude(&self) -> f64;

    /// Returns the unit tag the magnitude was entered in.
    fn unit(&self) -> UnitTag;

    /// Returns the polarity of the charge.
    fn sign(&self) -> Sign;
}

/// A concrete representation of a point charge as entered by a user.
///
/// The magnitude is an absolute value; polarity lives in the separate `sign` field. This struct
/// is a simple owned implementation of the [`ChargeView`] trait and can be embedded in richer
/// host types that carry additional display state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// The entered magnitude, non-negative, in the unit named by `unit`.
    pub magnitude: f64,
    /// The unit the magnitude was entered in.
    pub unit: UnitTag,
    /// The polarity of the charge.
    pub sign: Sign,
}

impl Charge {
    /// Creates a charge from an entered magnitude, unit tag, and polarity. The magnitude is
    /// taken as an absolute value.
    pub fn new(magnitude: f64, unit: UnitTag, sign: Sign) -> Self {
        Self {
            magnitude: magnitude.abs(),
            unit,
            sign,
        }
    }
}

impl ChargeView for Charge {
    #[inline(always)]
    fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline(always)]
    fn unit(&self) -> UnitTag {
        self.unit
    }

    #[inline(always)]
    fn sign(&self) -> Sign {
        self.sign
    }
}

/// A planar force vector in newtons.
///
/// The stored magnitude always equals the Euclidean norm of the components within floating-point
/// tolerance; construct instances through [`ForceVector::from_components`] to keep that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceVector {
    /// The Euclidean norm of the components, in newtons.
    pub magnitude: f64,
    /// The x-component, in newtons.
    pub x: f64,
    /// The y-component, in newtons.
    pub y: f64,
}

impl ForceVector {
    /// Builds a force vector from its planar components, deriving the magnitude.
    pub fn from_components(x: f64, y: f64) -> Self {
        Self {
            magnitude: x.hypot(y),
            x,
            y,
        }
    }

    /// The zero force.
    pub fn zero() -> Self {
        Self::from_components(0.0, 0.0)
    }
}

/// The result of a complete force simulation on q3.
///
/// This struct encapsulates the output of a successful engine run: the two sign-corrected
/// pairwise forces acting on q3, their superposition, the resultant direction, and the solved
/// triangle angles in both full precision and the rounded display copy. It is the sole artifact
/// crossing into presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// The force exerted on q3 by q1, after sign correction.
    pub force_from_q1: ForceVector,
    /// The force exerted on q3 by q2, after sign correction.
    pub force_from_q2: ForceVector,
    /// The vector sum of the two pairwise forces.
    pub resultant: ForceVector,
    /// The direction of the resultant, in degrees, normalized into `[0, 360)`. A zero resultant
    /// reports 0.
    pub resultant_angle_deg: f64,
    /// The solved interior angles at full precision, as used in the force decomposition.
    pub angles: TriangleAngles,
    /// The angles rounded for presentation (see
    /// [`EngineOptions::angle_decimals`](crate::engine::EngineOptions::angle_decimals)).
    pub display_angles: TriangleAngles,
}
