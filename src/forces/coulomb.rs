//! This module computes the scalar Coulomb force magnitude between two point charges.
//!
//! Direction is handled elsewhere: the magnitude here is always non-negative, built from the
//! absolute charge values, and the sign policy applies the attraction/repulsion convention to
//! the decomposed components.

use crate::error::TriqError;

/// Computes the Coulomb force magnitude `k·|q_i|·|q_j| / distance²`, in newtons.
///
/// # Arguments
///
/// * `q_i`, `q_j` - The two charge values in coulombs; their signs are ignored.
/// * `distance` - The separation between the charges, in meters.
/// * `k` - The Coulomb coupling constant, in N·m²/C².
///
/// # Errors
///
/// Returns [`TriqError::DegenerateGeometry`] when `distance` is not strictly positive. The
/// engine's triangle validation makes this unreachable through normal orchestration; the guard
/// protects direct callers.
///
/// # Examples
///
/// ```
/// use triq::forces::coulomb;
///
/// // Two 1 µC charges one meter apart.
/// let f = coulomb::magnitude(1.0e-6, 1.0e-6, 1.0, 9.0e9).unwrap();
/// assert!((f - 9.0e-3).abs() < 1e-15);
/// ```
pub fn magnitude(q_i: f64, q_j: f64, distance: f64, k: f64) -> Result<f64, TriqError> {
    if distance <= 0.0 {
        return Err(TriqError::DegenerateGeometry { distance });
    }

    Ok(k * q_i.abs() * q_j.abs() / (distance * distance))
}
