//! This module contains the force kernels of the simulation.
//!
//! It includes the scalar Coulomb magnitude calculation and the per-pair component-sign policy
//! that turns the attraction/repulsion rule into a sign mask over a force's planar
//! decomposition.

/// The scalar Coulomb force magnitude between two point charges.
pub mod coulomb;

/// Component-sign correction masks for the two force pairs acting on q3.
pub mod signs;
