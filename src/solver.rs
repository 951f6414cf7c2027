//! Max-chroma boundary search.
//!
//! For a given hue the most saturated Display P3 color lies on the
//! gamut boundary. The search brackets the hue between two corners of
//! the boundary table, then bisects the straight LMS segment between
//! them until the transformed hue converges on the target. Hue is
//! monotonic along each edge (every edge spans well under a half turn),
//! which is what makes the bisection valid.

use crate::gamut::{Edge, bracket_edge};
use crate::jzazbz::{Jzazbz, LinearP3, Lms};

/// Bisection steps along an edge.
///
/// A fixed count rather than a tolerance: the interpolation parameter
/// is bounded, so 20 steps pin the boundary point to 2^-20 of the
/// segment with deterministic, branch-predictable cost. Fixed protocol
/// constant; changing it changes outputs.
const BISECTION_STEPS: u32 = 20;

/// Most saturated Display P3 color for a hue, linear light.
///
/// `hue_degrees` is interpreted on the Jzazbz az-bz plane and wrapped
/// into [0, 360), so any finite value is accepted.
///
/// # Example
///
/// ```
/// use huedial::solver::find_max_chroma_color;
///
/// let red_side = find_max_chroma_color(0.0);
/// assert!(red_side.red > red_side.green);
/// ```
pub fn find_max_chroma_color(hue_degrees: f32) -> LinearP3 {
    boundary_lms(hue_degrees, BISECTION_STEPS).into_linear_p3()
}

/// Max-chroma boundary color in Jzazbz coordinates.
///
/// Same search as [`find_max_chroma_color`], reported in the perceptual
/// space for callers that feed a Jzazbz-driven readout or shader.
pub fn find_max_chroma_jzazbz(hue_degrees: f32) -> Jzazbz {
    Jzazbz::from_lms(boundary_lms(hue_degrees, BISECTION_STEPS))
}

/// Run the bracketed bisection and return the boundary point in LMS.
fn boundary_lms(hue_degrees: f32, steps: u32) -> Lms {
    let target_radians = normalize_hue(hue_degrees).to_radians();
    let edge = bracket_edge(target_radians);

    bisect_edge(edge, target_radians, steps)
}

/// Wrap an arbitrary hue into the solver's [-180, 180) convention.
#[inline]
fn normalize_hue(hue_degrees: f32) -> f32 {
    let hue = hue_degrees.rem_euclid(360.0);
    if hue < 180.0 { hue } else { hue - 360.0 }
}

/// Bisect along `edge` until the transformed hue converges on the target.
fn bisect_edge(edge: Edge, target_radians: f32, steps: u32) -> Lms {
    let mut lower = edge.lower.lms;
    let mut upper = edge.upper.lms;

    for _ in 0..steps {
        let mid = lower.lerp(upper, 0.5);
        let test_hue = Jzazbz::from_lms(mid).hue();

        if test_hue <= target_radians {
            // Still short of the target hue
            lower = mid;
        } else {
            upper = mid;
        }
    }

    // The last point known to sit on the near side of the target
    lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::CORNERS;
    use approx::assert_relative_eq;

    #[test]
    fn twenty_steps_have_converged() {
        for hue in [0.0f32, 42.8, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 359.0] {
            let at_20 = boundary_lms(hue, 20).into_linear_p3();
            let at_30 = boundary_lms(hue, 30).into_linear_p3();

            assert!(
                (at_20.red - at_30.red).abs() < 1e-4
                    && (at_20.green - at_30.green).abs() < 1e-4
                    && (at_20.blue - at_30.blue).abs() < 1e-4,
                "not converged at hue {}: {:?} vs {:?}",
                hue,
                at_20,
                at_30
            );
        }
    }

    #[test]
    fn corner_hue_returns_corner_color() {
        // Solving exactly at a corner's own hue converges onto the corner
        for corner in &CORNERS[1..7] {
            let expected = corner.lms.into_linear_p3();
            let found = find_max_chroma_color(corner.hue.to_degrees().rem_euclid(360.0));

            assert_relative_eq!(found.red, expected.red, epsilon = 2e-3);
            assert_relative_eq!(found.green, expected.green, epsilon = 2e-3);
            assert_relative_eq!(found.blue, expected.blue, epsilon = 2e-3);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = find_max_chroma_color(123.456);
        let second = find_max_chroma_color(123.456);

        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_hue_is_wrapped() {
        let wrapped = find_max_chroma_color(360.0 + 42.0);
        let direct = find_max_chroma_color(42.0);

        assert_eq!(wrapped, direct);

        let negative = find_max_chroma_color(-318.0);
        assert_eq!(negative, direct);
    }
}
