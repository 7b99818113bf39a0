//! This module provides simulation parameters and utilities for loading them from TOML files.
//!
//! It defines the `Parameters` struct holding the Coulomb coupling constant, the charge-unit
//! factor table, and the viewport geometry used when laying out the triangle for rendering.
//! The module includes deserialization logic that accepts unit-tag keys in the `[units]` table,
//! rejecting unknown tags at parse time so that the factor lookup is total over the enumerated
//! unit set.

use crate::error::TriqError;
use crate::types::UnitTag;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Viewport geometry for mapping the solved triangle into renderer coordinates.
///
/// The mapping is pure display geometry with no physical meaning: the triangle is scaled by the
/// minimum of the width/height fit ratios times a margin factor, then translated so its centroid
/// sits at the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportParams {
    /// Width of the target drawing surface, in renderer units.
    pub width: f64,
    /// Height of the target drawing surface, in renderer units.
    pub height: f64,
    /// Fraction of each viewport dimension the triangle's bounding box may fill.
    pub fill_fraction: f64,
    /// Extra margin multiplier applied after the fit ratio, leaving room for labels and arrows.
    pub scale_margin: f64,
    /// Length of a force arrow as a fraction of the q3-to-source vertex distance.
    pub arrow_scale: f64,
}

/// A complete parameter set for the simulation engine.
///
/// Parameters combine the physical coupling constant with the unit-conversion table and the
/// viewport used for presentation layout. A compiled-in default set is available through
/// [`get_default_parameters`](crate::get_default_parameters); callers may also load their own
/// from a TOML file or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameters {
    /// The Coulomb coupling constant k, in N·m²/C².
    pub coulomb_constant: f64,
    /// A mapping from charge-unit tag to its multiplier relative to the coulomb.
    ///
    /// The embedded defaults cover the whole `UnitTag` enumeration (`mc` = 1e-3, `uc` = 1e-6,
    /// `nc` = 1e-9, `pc` = 1e-12); a caller-supplied table may be sparse, in which case a lookup
    /// for a missing tag fails with [`TriqError::InvalidUnit`].
    #[serde(deserialize_with = "deserialize_unit_map")]
    pub units: HashMap<UnitTag, f64>,
    /// Viewport geometry for presentation layout.
    pub viewport: ViewportParams,
}

impl Parameters {
    /// Loads simulation parameters from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the TOML file containing the parameter data.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::Io`] if the file cannot be read, or
    /// [`TriqError::Deserialization`] if the TOML content is invalid or contains unrecognized
    /// unit keys.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use triq::Parameters;
    ///
    /// let params = Parameters::load_from_file(Path::new("triq.data.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, TriqError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| TriqError::Io {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses simulation parameters from a TOML string.
    ///
    /// # Arguments
    ///
    /// * `toml_str` - A string slice containing valid TOML parameter data.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::Deserialization`] if the TOML content is invalid or contains
    /// unrecognized unit keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::Parameters;
    ///
    /// let toml_data = r#"
    /// coulomb_constant = 8.99e9
    ///
    /// [units]
    /// uc = 1.0e-6
    /// nc = 1.0e-9
    ///
    /// [viewport]
    /// width = 800.0
    /// height = 600.0
    /// fill_fraction = 0.9
    /// scale_margin = 0.65
    /// arrow_scale = 0.3
    /// "#;
    ///
    /// let params = Parameters::load_from_str(toml_data).unwrap();
    /// assert_eq!(params.units.len(), 2);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, TriqError> {
        toml::from_str(toml_str).map_err(TriqError::from)
    }

    /// Looks up the multiplier that converts a magnitude in the given unit to coulombs.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::InvalidUnit`] when this parameter set carries no factor for the tag.
    pub fn charge_factor(&self, unit: UnitTag) -> Result<f64, TriqError> {
        self.units
            .get(&unit)
            .copied()
            .ok_or_else(|| TriqError::InvalidUnit(unit.to_string()))
    }

    /// Converts a user-entered charge magnitude to coulombs.
    ///
    /// # Arguments
    ///
    /// * `magnitude` - The entered magnitude, taken as an absolute value.
    /// * `unit` - The unit tag the magnitude was entered in.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::InvalidUnit`] when this parameter set carries no factor for the tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::{UnitTag, get_default_parameters};
    ///
    /// let params = get_default_parameters();
    /// assert_eq!(params.to_canonical(5.0, UnitTag::Micro).unwrap(), 5.0e-6);
    /// assert_eq!(params.to_canonical(3.0, UnitTag::Pico).unwrap(), 3.0e-12);
    /// ```
    pub fn to_canonical(&self, magnitude: f64, unit: UnitTag) -> Result<f64, TriqError> {
        Ok(magnitude.abs() * self.charge_factor(unit)?)
    }
}

/// Deserializes the `[units]` table, accepting the short unit-tag names as keys.
///
/// Unknown keys are rejected at parse time so that an invalid parameter file fails loudly
/// instead of producing a table the converter cannot resolve.
fn deserialize_unit_map<'de, D>(deserializer: D) -> Result<HashMap<UnitTag, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UnitMapVisitor;

    impl<'de> Visitor<'de> for UnitMapVisitor {
        type Value = HashMap<UnitTag, f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of unit tags (mc, uc, nc, pc) to conversion factors")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut map = HashMap::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((key, value)) = access.next_entry::<String, f64>()? {
                let tag = UnitTag::from_str(&key).map_err(|_| {
                    de::Error::custom(format!("unrecognized charge unit key: '{}'", key))
                })?;
                map.insert(tag, value);
            }

            Ok(map)
        }
    }

    deserializer.deserialize_map(UnitMapVisitor)
}
