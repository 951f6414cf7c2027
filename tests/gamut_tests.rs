use approx::assert_relative_eq;
use huedial::gamut::{CORNERS, bracket_edge};
use huedial::jzazbz::Jzazbz;

/// Remap a dial hue in degrees to the solver's internal radian range.
fn internal_radians(hue_degrees: f32) -> f32 {
    let hue = if hue_degrees < 180.0 {
        hue_degrees
    } else {
        hue_degrees - 360.0
    };
    hue.to_radians()
}

#[test]
fn every_degree_is_bracketed() {
    for degree in 0..360 {
        let hue = internal_radians(degree as f32);
        let edge = bracket_edge(hue);

        assert!(
            edge.lower.hue <= hue && hue <= edge.upper.hue,
            "hue {}° ({} rad) escaped its edge [{}, {}]",
            degree,
            hue,
            edge.lower.hue,
            edge.upper.hue
        );
    }
}

#[test]
fn edges_are_adjacent_table_entries() {
    for degree in 0..360 {
        let edge = bracket_edge(internal_radians(degree as f32));

        let lower_index = CORNERS
            .iter()
            .position(|c| c.hue == edge.lower.hue)
            .expect("lower corner not in table");

        assert_eq!(CORNERS[lower_index + 1].hue, edge.upper.hue);
    }
}

#[test]
fn corners_map_to_p3_cube_corners() {
    // cyan, blue, magenta, red, yellow, green in table order
    let expected = [
        [0.0f32, 1.0, 1.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];

    for (corner, rgb) in CORNERS[1..7].iter().zip(expected) {
        let color = corner.lms.into_linear_p3();

        assert_relative_eq!(color.red, rgb[0], epsilon = 2e-3);
        assert_relative_eq!(color.green, rgb[1], epsilon = 2e-3);
        assert_relative_eq!(color.blue, rgb[2], epsilon = 2e-3);
    }
}

#[test]
fn hue_is_monotonic_along_every_edge() {
    // Required for the bisection: as the interpolation parameter grows,
    // the transformed hue must not decrease. Endpoints are skipped to
    // stay clear of the atan2 seam at the wraparound corner itself.
    for pair in CORNERS.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        let mut prev = f32::NEG_INFINITY;

        for step in 1..100 {
            let t = step as f32 / 100.0;
            let hue = Jzazbz::from_lms(lower.lms.lerp(upper.lms, t)).hue();

            assert!(
                hue >= prev - 1e-5,
                "hue decreased along edge [{}, {}] at t={}: {} -> {}",
                lower.hue,
                upper.hue,
                t,
                prev,
                hue
            );
            prev = hue;
        }
    }
}

#[test]
fn interior_edge_hues_stay_inside_their_tags() {
    for pair in CORNERS.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);

        let mid_hue = Jzazbz::from_lms(lower.lms.lerp(upper.lms, 0.5)).hue();

        assert!(
            mid_hue >= lower.hue - 1e-3 && mid_hue <= upper.hue + 1e-3,
            "midpoint hue {} outside edge [{}, {}]",
            mid_hue,
            lower.hue,
            upper.hue
        );
    }
}
