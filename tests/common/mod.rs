use triq::{Charge, Sign, SimulationEngine, TriangleSides, UnitTag, get_default_parameters};

pub struct ForceCase {
    pub name: &'static str,
    pub charges: [Charge; 3],
    pub sides: TriangleSides,
    pub expected_f13: f64,
    pub expected_f23: f64,
    pub expected_resultant: f64,
    pub expected_angle_deg: f64,
}

pub fn microcoulombs(magnitude: f64, sign: Sign) -> Charge {
    Charge::new(magnitude, UnitTag::Micro, sign)
}

/// Shortest angular distance between two directions in degrees, so that an
/// expected 0° matches a computed 359.999...°.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs() % 360.0;
    delta.min(360.0 - delta)
}

pub fn run_group_test(
    group_name: &str,
    cases: Vec<ForceCase>,
    magnitude_rel_limit: f64,
    angle_limit_deg: f64,
) {
    let engine = SimulationEngine::new(get_default_parameters());

    let mut group_max_rel_error = 0.0_f64;
    let mut group_max_angle_error = 0.0_f64;

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<24} | {:<12} | {:<12} | {:<12}",
        "Case", "Quantity", "Expected", "Calculated"
    );

    for case in cases {
        let result = engine
            .run(&case.charges, case.sides)
            .unwrap_or_else(|e| panic!("engine failed on '{}': {}", case.name, e));

        assert!(
            (0.0..360.0).contains(&result.resultant_angle_deg),
            "'{}': resultant angle {} outside [0, 360)",
            case.name,
            result.resultant_angle_deg
        );

        let magnitudes = [
            ("f13", case.expected_f13, result.force_from_q1.magnitude),
            ("f23", case.expected_f23, result.force_from_q2.magnitude),
            ("resultant", case.expected_resultant, result.resultant.magnitude),
        ];

        for (quantity, expected, calculated) in magnitudes {
            let rel_error = (calculated - expected).abs() / expected;
            println!(
                "{:<24} | {:<12} | {:<12.6e} | {:<12.6e} (rel err: {:.2e})",
                case.name, quantity, expected, calculated, rel_error
            );

            assert!(
                rel_error <= magnitude_rel_limit,
                "'{}': {} off by {:.2e} (limit {:.2e})",
                case.name,
                quantity,
                rel_error,
                magnitude_rel_limit
            );
            if rel_error > group_max_rel_error {
                group_max_rel_error = rel_error;
            }
        }

        let angle_error = angular_difference(result.resultant_angle_deg, case.expected_angle_deg);
        println!(
            "{:<24} | {:<12} | {:<12.4} | {:<12.4} (err: {:.2e} deg)",
            case.name, "angle", case.expected_angle_deg, result.resultant_angle_deg, angle_error
        );

        assert!(
            angle_error <= angle_limit_deg,
            "'{}': resultant angle off by {:.4} deg (limit {:.4})",
            case.name,
            angle_error,
            angle_limit_deg
        );
        if angle_error > group_max_angle_error {
            group_max_angle_error = angle_error;
        }
    }

    println!("{:-<80}", "");
    println!("Group Statistics for '{}':", group_name);
    println!(
        "  Max Magnitude Rel Error: {:.2e} (Limit: {:.2e})",
        group_max_rel_error, magnitude_rel_limit
    );
    println!(
        "  Max Angle Error:         {:.2e} deg (Limit: {:.2e})",
        group_max_angle_error, angle_limit_deg
    );
}
