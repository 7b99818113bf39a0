//! This module encodes the attraction/repulsion rule as component-sign masks.
//!
//! Like charges repel (the force on q3 points away from the source, along the original
//! decomposition direction) and unlike charges attract (the force is reversed). Because the two
//! pairs acting on q3 are decomposed against different local angle references (the q1–q3 force
//! against the angle at q1, measured from side b; the q2–q3 force against the angle at q2,
//! measured from the opposite end of the same side), the correction pattern differs per pair
//! and is deliberately not collapsed into a uniform rule.

use crate::types::Sign;

/// Identifies one of the two charge pairs exerting a force on q3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargePair {
    /// The interaction between q1 and q3, computed over side `a`.
    Q1Q3,
    /// The interaction between q2 and q3, computed over side `c`.
    Q2Q3,
}

/// Returns the component-sign mask `(sx, sy)` to apply to a pair's decomposed force.
///
/// For the q1–q3 pair, repulsion keeps both components and attraction negates both. For the
/// q2–q3 pair, repulsion negates only the x-component and attraction negates only the
/// y-component; this asymmetry reflects the pair's mirrored angle reference and must be
/// preserved exactly for the resultant direction to come out right.
///
/// # Examples
///
/// ```
/// use triq::forces::signs::{component_mask, ChargePair};
/// use triq::Sign;
///
/// assert_eq!(
///     component_mask(ChargePair::Q1Q3, Sign::Positive, Sign::Positive),
///     (1.0, 1.0)
/// );
/// assert_eq!(
///     component_mask(ChargePair::Q2Q3, Sign::Negative, Sign::Positive),
///     (1.0, -1.0)
/// );
/// ```
pub fn component_mask(pair: ChargePair, source: Sign, q3: Sign) -> (f64, f64) {
    match (pair, source.is_like(q3)) {
        (ChargePair::Q1Q3, true) => (1.0, 1.0),
        (ChargePair::Q1Q3, false) => (-1.0, -1.0),
        (ChargePair::Q2Q3, true) => (-1.0, 1.0),
        (ChargePair::Q2Q3, false) => (1.0, -1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FX: f64 = 0.3;
    const FY: f64 = 0.4;

    fn apply(pair: ChargePair, source: Sign, q3: Sign) -> (f64, f64) {
        let (sx, sy) = component_mask(pair, source, q3);
        (sx * FX, sy * FY)
    }

    #[test]
    fn test_q1_pair_repulsion_keeps_both_components() {
        assert_eq!(
            apply(ChargePair::Q1Q3, Sign::Positive, Sign::Positive),
            (FX, FY)
        );
        assert_eq!(
            apply(ChargePair::Q1Q3, Sign::Negative, Sign::Negative),
            (FX, FY)
        );
    }

    #[test]
    fn test_q1_pair_attraction_negates_both_components() {
        assert_eq!(
            apply(ChargePair::Q1Q3, Sign::Positive, Sign::Negative),
            (-FX, -FY)
        );
        assert_eq!(
            apply(ChargePair::Q1Q3, Sign::Negative, Sign::Positive),
            (-FX, -FY)
        );
    }

    #[test]
    fn test_q2_pair_repulsion_negates_only_x() {
        assert_eq!(
            apply(ChargePair::Q2Q3, Sign::Positive, Sign::Positive),
            (-FX, FY)
        );
        assert_eq!(
            apply(ChargePair::Q2Q3, Sign::Negative, Sign::Negative),
            (-FX, FY)
        );
    }

    #[test]
    fn test_q2_pair_attraction_negates_only_y() {
        assert_eq!(
            apply(ChargePair::Q2Q3, Sign::Positive, Sign::Negative),
            (FX, -FY)
        );
        assert_eq!(
            apply(ChargePair::Q2Q3, Sign::Negative, Sign::Positive),
            (FX, -FY)
        );
    }

    #[test]
    fn test_masks_never_change_vector_norm() {
        for pair in [ChargePair::Q1Q3, ChargePair::Q2Q3] {
            for source in [Sign::Positive, Sign::Negative] {
                for q3 in [Sign::Positive, Sign::Negative] {
                    let (x, y) = apply(pair, source, q3);
                    assert_eq!(x.hypot(y), FX.hypot(FY));
                }
            }
        }
    }
}
