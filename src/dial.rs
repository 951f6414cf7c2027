//! Hue-dial sweep over the max-chroma boundary.
//!
//! Samples evenly spaced hues around the full circle and pairs each
//! with its boundary color. This is the table a dial widget paints
//! from. Samples are independent of one another, so the sweep runs in
//! parallel.

use float_cmp::approx_eq;
use palette::{LinSrgb, Srgb};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::jzazbz::LinearP3;
use crate::solver::find_max_chroma_color;

/// Tolerance for boundary colors poking out of [0, 1].
///
/// Corner colors sit on the surface of the P3 cube, so components may
/// stray by f32 rounding; anything beyond this means the table and the
/// transforms disagree.
const GAMUT_EPSILON: f32 = 1e-3;

/// One step of the hue dial.
#[derive(Debug, Clone, Serialize)]
pub struct DialSample {
    /// Hue in degrees, [0, 360).
    pub hue: f32,
    /// Boundary color in linear Display P3.
    pub linear: [f32; 3],
    /// Boundary color after the Display P3 transfer encoding, 8-bit.
    pub encoded: [u8; 3],
    /// Hex form of `encoded` (without # prefix).
    pub hex: String,
}

/// Sweep the full dial at `samples` evenly spaced hues.
///
/// # Example
///
/// ```
/// use huedial::dial::sweep;
///
/// let table = sweep(360);
/// assert_eq!(table.len(), 360);
/// assert_eq!(table[0].hue, 0.0);
/// ```
pub fn sweep(samples: usize) -> Vec<DialSample> {
    if samples == 0 {
        return vec![];
    }

    let step = 360.0 / samples as f32;
    debug!(samples, step, "sweeping hue dial");

    (0..samples)
        .into_par_iter()
        .map(|i| sample_at(i as f32 * step))
        .collect()
}

/// Evaluate the dial at a single hue.
pub fn sample_at(hue: f32) -> DialSample {
    let color = find_max_chroma_color(hue);
    let encoded = encode_p3(color);

    DialSample {
        hue,
        linear: [color.red, color.green, color.blue],
        encoded: [encoded.red, encoded.green, encoded.blue],
        hex: to_hex(encoded),
    }
}

/// Check a sweep for boundary colors outside the P3 cube.
///
/// Returns one warning string per offending sample; out-of-range
/// samples are also logged.
pub fn validate(samples: &[DialSample]) -> Vec<String> {
    samples
        .iter()
        .filter_map(|sample| {
            let in_range = sample.linear.iter().all(|&c| {
                approx_eq!(f32, c, c.clamp(0.0, 1.0), epsilon = GAMUT_EPSILON)
            });

            if in_range {
                None
            } else {
                warn!(
                    hue = sample.hue,
                    linear = ?sample.linear,
                    "boundary color out of gamut"
                );
                Some(format!(
                    "hue {:.1}: boundary color [{:.4}, {:.4}, {:.4}] is outside linear P3",
                    sample.hue, sample.linear[0], sample.linear[1], sample.linear[2]
                ))
            }
        })
        .collect()
}

/// Apply the Display P3 transfer encoding and quantize to 8-bit.
///
/// Display P3 reuses the sRGB transfer curve, so palette's sRGB
/// encoding applies per channel. Components are clamped first; boundary
/// colors only exceed [0, 1] by rounding noise.
fn encode_p3(color: LinearP3) -> Srgb<u8> {
    let linear = LinSrgb::new(
        color.red.clamp(0.0, 1.0),
        color.green.clamp(0.0, 1.0),
        color.blue.clamp(0.0, 1.0),
    );
    let encoded: Srgb<f32> = Srgb::from_linear(linear);

    Srgb::new(
        (encoded.red * 255.0).round() as u8,
        (encoded.green * 255.0).round() as u8,
        (encoded.blue * 255.0).round() as u8,
    )
}

/// Hex string (without # prefix) for an encoded color.
fn to_hex(color: Srgb<u8>) -> String {
    format!("{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
