use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `triq` library.
///
/// Every failure mode of the simulation pipeline is deterministic in its
/// inputs: there are no transient errors and nothing is retried. Each variant
/// carries the offending values so that callers can surface an actionable
/// message to the user. The type implements `std::error::Error`, allowing it
/// to be composed with other error types in application code.
#[derive(Error, Debug)]
pub enum TriqError {
    /// The three side lengths fail the strict triangle inequality, so the
    /// triangle does not exist and no force computation may proceed.
    ///
    /// This is the one error an end user is expected to trigger through
    /// normal input; presenters should surface it as an explicit notice and
    /// render nothing.
    #[error(
        "Sides a = {a}, b = {b}, c = {c} cannot form a triangle (strict triangle inequality violated)"
    )]
    TriangleInvalid {
        /// Length of the side between q1 and q3.
        a: f64,
        /// Length of the side between q1 and q2.
        b: f64,
        /// Length of the side between q2 and q3.
        c: f64,
    },

    /// A charge-unit tag could not be resolved, either because the text did
    /// not name a known unit or because a caller-supplied parameter set is
    /// missing the factor for an enumerated tag.
    ///
    /// With the embedded default parameters the mapping is total over the
    /// unit enumeration, so this indicates a caller contract violation.
    #[error("Unrecognized charge unit tag: '{0}'")]
    InvalidUnit(String),

    /// A non-positive separation distance reached the Coulomb force
    /// calculation.
    ///
    /// The triangle inequality check guarantees strictly positive sides, so
    /// this cannot occur through the engine; it guards direct use of the
    /// force kernel with degenerate geometry.
    #[error("Degenerate geometry: separation distance must be positive, got {distance}")]
    DegenerateGeometry {
        /// The offending separation distance in meters.
        distance: f64,
    },

    /// An I/O error that occurred while attempting to read a parameter file.
    ///
    /// The path to the file and the underlying I/O error are provided for
    /// context.
    #[error("I/O error at path '{path}': {source}")]
    Io {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a parameter file, typically
    /// indicating invalid TOML or a structural mismatch with the expected
    /// `Parameters` format.
    #[error("Failed to deserialize TOML parameters: {0}")]
    Deserialization(#[from] toml::de::Error),
}
