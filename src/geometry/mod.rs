//! This module contains the planar geometry underlying the simulation.
//!
//! It includes triangle validation and interior-angle solving from side lengths, and the
//! viewport mapping that scales and centers the solved triangle for rendering.

/// Triangle side lengths, interior angles, and the law-of-cosines solve.
pub mod triangle;

/// Mapping of the solved triangle and force arrows into viewport coordinates.
pub mod layout;
