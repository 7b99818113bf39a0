//! This module maps the solved triangle into viewport coordinates for rendering.
//!
//! The mapping has no physical meaning: the triangle is reconstructed from its side lengths in
//! an abstract plane, scaled so its bounding box fits the viewport's fill fraction (with an
//! extra margin for labels and arrows), and translated so its centroid sits at the viewport
//! center. The force-arrow endpoints anchored at q3 are laid out alongside, pointing away from
//! each source charge for repulsion and toward it for attraction.

use crate::error::TriqError;
use crate::geometry::triangle::TriangleSides;
use crate::params::ViewportParams;
use crate::types::Sign;
use serde::Serialize;

/// Presentation-ready positions for the triangle and the two force arrows on q3.
///
/// All coordinates are in viewport units with the y-axis pointing up; renderers targeting a
/// y-down surface flip the second coordinate. Arrows start at the `q3` vertex and end at the
/// corresponding endpoint field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneLayout {
    /// Viewport position of the q1 vertex.
    pub q1: [f64; 2],
    /// Viewport position of the q2 vertex.
    pub q2: [f64; 2],
    /// Viewport position of the q3 vertex.
    pub q3: [f64; 2],
    /// Endpoint of the arrow for the force q1 exerts on q3.
    pub arrow_from_q1: [f64; 2],
    /// Endpoint of the arrow for the force q2 exerts on q3.
    pub arrow_from_q2: [f64; 2],
}

/// Lays out the triangle and force arrows for a viewport.
///
/// q1 is placed at the origin of the abstract plane, q2 at `(b, 0)`, and q3 at distance `a`
/// from q1 rotated by the solved angle at q1, so the drawn triangle has the exact side lengths
/// the user entered. Arrow direction per pair follows the charge polarities in `signs`
/// (ordered q1, q2, q3): like signs repel, so the arrow extends the displacement from the
/// source through q3; unlike signs attract and the arrow is reversed.
///
/// # Errors
///
/// Returns [`TriqError::TriangleInvalid`] when the sides fail the strict triangle inequality.
pub fn scene_layout(
    sides: &TriangleSides,
    signs: [Sign; 3],
    viewport: &ViewportParams,
) -> Result<SceneLayout, TriqError> {
    let angles = sides.solve_angles()?;
    let at_q1 = angles.at_q1.to_radians();

    let v1: [f64; 2] = [0.0, 0.0];
    let v2 = [sides.b, 0.0];
    let v3 = [sides.a * at_q1.cos(), sides.a * at_q1.sin()];

    let min_x = v1[0].min(v2[0]).min(v3[0]);
    let max_x = v1[0].max(v2[0]).max(v3[0]);
    let min_y = v1[1].min(v2[1]).min(v3[1]);
    let max_y = v1[1].max(v2[1]).max(v3[1]);

    // A valid triangle is never collinear, so both extents are strictly positive.
    let scale_x = viewport.width * viewport.fill_fraction / (max_x - min_x);
    let scale_y = viewport.height * viewport.fill_fraction / (max_y - min_y);
    let scale = scale_x.min(scale_y) * viewport.scale_margin;

    let centroid = [
        (v1[0] + v2[0] + v3[0]) / 3.0,
        (v1[1] + v2[1] + v3[1]) / 3.0,
    ];
    let offset = [
        viewport.width / 2.0 - (centroid[0] - min_x) * scale,
        viewport.height / 2.0 - (centroid[1] - min_y) * scale,
    ];

    let place = |v: [f64; 2]| {
        [
            (v[0] - min_x) * scale + offset[0],
            (v[1] - min_y) * scale + offset[1],
        ]
    };

    let q1 = place(v1);
    let q2 = place(v2);
    let q3 = place(v3);

    let arrow = |source: [f64; 2], like: bool| {
        let dir = if like { 1.0 } else { -1.0 };
        [
            q3[0] + dir * (q3[0] - source[0]) * viewport.arrow_scale,
            q3[1] + dir * (q3[1] - source[1]) * viewport.arrow_scale,
        ]
    };

    Ok(SceneLayout {
        q1,
        q2,
        q3,
        arrow_from_q1: arrow(q1, signs[0].is_like(signs[2])),
        arrow_from_q2: arrow(q2, signs[1].is_like(signs[2])),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> ViewportParams {
        ViewportParams {
            width: 600.0,
            height: 400.0,
            fill_fraction: 0.9,
            scale_margin: 0.65,
            arrow_scale: 0.3,
        }
    }

    fn distance(p: [f64; 2], q: [f64; 2]) -> f64 {
        (p[0] - q[0]).hypot(p[1] - q[1])
    }

    #[test]
    fn test_centroid_lands_at_viewport_center() {
        let sides = TriangleSides::new(3.0, 4.0, 5.0);
        let layout = scene_layout(&sides, [Sign::Positive; 3], &viewport()).unwrap();

        let cx = (layout.q1[0] + layout.q2[0] + layout.q3[0]) / 3.0;
        let cy = (layout.q1[1] + layout.q2[1] + layout.q3[1]) / 3.0;

        assert_relative_eq!(cx, 300.0, epsilon = 1e-9);
        assert_relative_eq!(cy, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_side_ratios_are_preserved() {
        let sides = TriangleSides::new(2.0, 3.0, 4.0);
        let layout = scene_layout(&sides, [Sign::Positive; 3], &viewport()).unwrap();

        let drawn_a = distance(layout.q1, layout.q3);
        let drawn_b = distance(layout.q1, layout.q2);
        let drawn_c = distance(layout.q2, layout.q3);

        assert_relative_eq!(drawn_b / drawn_a, 3.0 / 2.0, epsilon = 1e-9);
        assert_relative_eq!(drawn_c / drawn_a, 4.0 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangle_fits_within_viewport() {
        let vp = viewport();
        let sides = TriangleSides::new(1.0, 8.0, 8.0);
        let layout = scene_layout(&sides, [Sign::Positive; 3], &vp).unwrap();

        for p in [layout.q1, layout.q2, layout.q3] {
            assert!(p[0] >= 0.0 && p[0] <= vp.width, "x out of viewport: {:?}", p);
            assert!(p[1] >= 0.0 && p[1] <= vp.height, "y out of viewport: {:?}", p);
        }
    }

    #[test]
    fn test_arrow_reverses_for_unlike_signs() {
        let sides = TriangleSides::new(1.0, 1.0, 1.0);

        let repulsive =
            scene_layout(&sides, [Sign::Positive; 3], &viewport()).unwrap();
        let attractive = scene_layout(
            &sides,
            [Sign::Positive, Sign::Positive, Sign::Negative],
            &viewport(),
        )
        .unwrap();

        // Same geometry, mirrored arrow endpoints about q3.
        for axis in 0..2 {
            let away = repulsive.arrow_from_q1[axis] - repulsive.q3[axis];
            let toward = attractive.arrow_from_q1[axis] - attractive.q3[axis];
            assert_relative_eq!(away, -toward, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_invalid_sides_produce_no_layout() {
        let sides = TriangleSides::new(1.0, 1.0, 5.0);
        assert!(scene_layout(&sides, [Sign::Positive; 3], &viewport()).is_err());
    }
}
